//! RNG module - seedable randomness for piece and power-up draws
//!
//! A simple LCG (Numerical Recipes constants) keeps the engine
//! deterministic: the same seed replays the same game. Piece kinds are
//! drawn uniformly from the seven types; power-up spawn rolls use an
//! integer probability check.

use crate::types::{PieceKind, PowerUpKind};

/// Seedable LCG random source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRng {
    state: u32,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid the all-zero fixed point.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Generate a value in [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Roll a `num`-in-`den` chance
    pub fn chance(&mut self, num: u32, den: u32) -> bool {
        self.next_range(den) < num
    }

    /// Draw a piece kind uniformly from the seven types
    pub fn draw_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }

    /// Draw a power-up kind uniformly from the four types
    pub fn draw_power_up_kind(&mut self) -> PowerUpKind {
        PowerUpKind::ALL[self.next_range(PowerUpKind::ALL.len() as u32) as usize]
    }

    /// Current internal state, usable as a seed to continue the stream
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(1)
    }
}
