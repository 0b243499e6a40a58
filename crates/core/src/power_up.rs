//! Power-up manager - token spawning and one-shot/timed effects
//!
//! Tokens are spawned by line-clearing locks and live forever in the
//! token history; activation flips their `active` flag instead of
//! removing them. At most one effect may be active at a time, guarded by
//! an active-lock countdown on the engine clock. Ghost and slow carry
//! their own countdowns and keep running while the game is paused.

use crate::board::Board;
use crate::rng::GameRng;
use crate::types::{
    PowerUpKind, BOARD_WIDTH, BOMB_ROWS, BOMB_SCORE, FULL_CLEAR_SCORE, GHOST_DURATION_MS,
    POWER_UP_LOCK_MS, POWER_UP_SLOTS, POWER_UP_SPAWN_DEN, POWER_UP_SPAWN_NUM, SLOW_DURATION_MS,
};

/// A spawned power-up token.
///
/// `(x, y)` is the spawn position (top row, random column); consumed
/// tokens stay in the history with `active = false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerUpToken {
    pub kind: PowerUpKind,
    pub x: i8,
    pub y: i8,
    pub active: bool,
}

/// Tracks available tokens and the currently running effect
#[derive(Debug, Clone, Default)]
pub struct PowerUpState {
    tokens: Vec<PowerUpToken>,
    active: Option<PowerUpKind>,
    active_timer_ms: u32,
    ghost_timer_ms: u32,
}

impl PowerUpState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full token history, consumed tokens included
    pub fn tokens(&self) -> &[PowerUpToken] {
        &self.tokens
    }

    /// Kind of the currently running effect, if any
    pub fn active_kind(&self) -> Option<PowerUpKind> {
        self.active
    }

    /// Whether the ghost-visibility flag is raised
    pub fn ghost_visible(&self) -> bool {
        self.ghost_timer_ms > 0
    }

    /// Whether the slow effect currently stretches the gravity interval
    pub fn slow_active(&self) -> bool {
        self.active == Some(PowerUpKind::Slow)
    }

    /// The activation slots shown in the UI: the first four tokens that
    /// are still active, in spawn order.
    pub fn slots(&self) -> [Option<PowerUpKind>; POWER_UP_SLOTS] {
        let mut out = [None; POWER_UP_SLOTS];
        for (slot, token) in self.tokens.iter().filter(|t| t.active).take(POWER_UP_SLOTS).enumerate() {
            out[slot] = Some(token.kind);
        }
        out
    }

    /// Roll the per-clear spawn chance and append a token on success.
    ///
    /// Called once per lock that cleared at least one row. The token gets
    /// a uniformly random kind and column, at the top row.
    pub fn maybe_spawn(&mut self, rng: &mut GameRng) -> Option<PowerUpKind> {
        if !rng.chance(POWER_UP_SPAWN_NUM, POWER_UP_SPAWN_DEN) {
            return None;
        }
        let kind = rng.draw_power_up_kind();
        let x = rng.next_range(BOARD_WIDTH as u32) as i8;
        self.tokens.push(PowerUpToken {
            kind,
            x,
            y: 0,
            active: true,
        });
        Some(kind)
    }

    /// Activate the token in the given UI slot (0-based index into the
    /// still-active tokens).
    ///
    /// No-op (`None`) when another effect is running or the slot is
    /// empty. On success the token is consumed, the effect is applied to
    /// the board exactly once, and the awarded score delta is returned.
    pub fn activate_slot(&mut self, slot: usize, board: &mut Board) -> Option<u32> {
        if self.active.is_some() || slot >= POWER_UP_SLOTS {
            return None;
        }

        let token_index = self
            .tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.active)
            .map(|(i, _)| i)
            .nth(slot)?;

        let kind = self.tokens[token_index].kind;
        self.tokens[token_index].active = false;

        self.active = Some(kind);
        self.active_timer_ms = match kind {
            PowerUpKind::Slow => SLOW_DURATION_MS,
            _ => POWER_UP_LOCK_MS,
        };

        let score = match kind {
            PowerUpKind::Bomb => {
                board.clear_bottom_rows(BOMB_ROWS);
                BOMB_SCORE
            }
            PowerUpKind::Clear => {
                board.clear_all();
                FULL_CLEAR_SCORE
            }
            PowerUpKind::Ghost => {
                self.ghost_timer_ms = GHOST_DURATION_MS;
                0
            }
            PowerUpKind::Slow => 0,
        };

        Some(score)
    }

    /// Advance the effect countdowns by `elapsed_ms` on the engine clock
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.active.is_some() {
            self.active_timer_ms = self.active_timer_ms.saturating_sub(elapsed_ms);
            if self.active_timer_ms == 0 {
                self.active = None;
            }
        }
        self.ghost_timer_ms = self.ghost_timer_ms.saturating_sub(elapsed_ms);
    }

    /// Drop every token and pending countdown (game restart)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(kinds: &[PowerUpKind]) -> PowerUpState {
        let mut state = PowerUpState::new();
        for &kind in kinds {
            state.tokens.push(PowerUpToken {
                kind,
                x: 0,
                y: 0,
                active: true,
            });
        }
        state
    }

    #[test]
    fn test_bomb_clears_bottom_rows_and_scores() {
        let mut state = state_with(&[PowerUpKind::Bomb]);
        let mut board = Board::new();
        for y in 15..20 {
            for x in 0..BOARD_WIDTH as i8 {
                board.set(x, y, Some(crate::types::PieceKind::I));
            }
        }

        assert_eq!(state.activate_slot(0, &mut board), Some(BOMB_SCORE));
        for y in 17..20 {
            for x in 0..BOARD_WIDTH as i8 {
                assert!(board.is_empty(x, y));
            }
        }
        assert!(board.is_occupied(0, 16));
        assert!(!state.tokens()[0].active);
        assert_eq!(state.active_kind(), Some(PowerUpKind::Bomb));
    }

    #[test]
    fn test_full_clear_empties_board() {
        let mut state = state_with(&[PowerUpKind::Clear]);
        let mut board = Board::new();
        board.set(3, 5, Some(crate::types::PieceKind::T));

        assert_eq!(state.activate_slot(0, &mut board), Some(FULL_CLEAR_SCORE));
        assert!(board.is_empty(3, 5));
    }

    #[test]
    fn test_second_activation_is_rejected_while_active() {
        let mut state = state_with(&[PowerUpKind::Ghost, PowerUpKind::Clear]);
        let mut board = Board::new();
        board.set(0, 19, Some(crate::types::PieceKind::Z));

        assert_eq!(state.activate_slot(0, &mut board), Some(0));
        // Clear must be rejected and the board untouched.
        assert_eq!(state.activate_slot(0, &mut board), None);
        assert!(board.is_occupied(0, 19));
        assert!(state.tokens()[1].active);
    }

    #[test]
    fn test_active_lock_expires_after_one_second() {
        let mut state = state_with(&[PowerUpKind::Bomb, PowerUpKind::Clear]);
        let mut board = Board::new();

        state.activate_slot(0, &mut board);
        state.tick(POWER_UP_LOCK_MS - 1);
        assert_eq!(state.active_kind(), Some(PowerUpKind::Bomb));
        state.tick(1);
        assert_eq!(state.active_kind(), None);

        // The next token becomes usable again.
        assert!(state.activate_slot(0, &mut board).is_some());
    }

    #[test]
    fn test_slow_holds_for_fifteen_seconds() {
        let mut state = state_with(&[PowerUpKind::Slow]);
        let mut board = Board::new();

        state.activate_slot(0, &mut board);
        assert!(state.slow_active());
        state.tick(SLOW_DURATION_MS - 1);
        assert!(state.slow_active());
        state.tick(1);
        assert!(!state.slow_active());
    }

    #[test]
    fn test_ghost_flag_outlives_active_lock() {
        let mut state = state_with(&[PowerUpKind::Ghost]);
        let mut board = Board::new();

        state.activate_slot(0, &mut board);
        state.tick(POWER_UP_LOCK_MS);
        assert_eq!(state.active_kind(), None);
        assert!(state.ghost_visible());
        state.tick(GHOST_DURATION_MS);
        assert!(!state.ghost_visible());
    }

    #[test]
    fn test_slots_skip_consumed_tokens() {
        let mut state = state_with(&[
            PowerUpKind::Bomb,
            PowerUpKind::Slow,
            PowerUpKind::Clear,
        ]);
        let mut board = Board::new();

        state.activate_slot(0, &mut board);
        state.tick(POWER_UP_LOCK_MS);

        // Bomb is consumed; slow and clear shift into slots 0 and 1.
        let slots = state.slots();
        assert_eq!(slots[0], Some(PowerUpKind::Slow));
        assert_eq!(slots[1], Some(PowerUpKind::Clear));
        assert_eq!(slots[2], None);
    }

    #[test]
    fn test_empty_slot_is_noop() {
        let mut state = state_with(&[PowerUpKind::Bomb]);
        let mut board = Board::new();
        assert_eq!(state.activate_slot(3, &mut board), None);
        assert_eq!(state.activate_slot(POWER_UP_SLOTS, &mut board), None);
    }

    #[test]
    fn test_spawn_probability_rate() {
        let mut state = PowerUpState::new();
        let mut rng = GameRng::new(2024);
        let mut spawned = 0u32;
        for _ in 0..1000 {
            if state.maybe_spawn(&mut rng).is_some() {
                spawned += 1;
            }
        }
        // 3-in-10 chance; allow generous slack for the LCG.
        assert!((200..400).contains(&spawned), "spawned {spawned} of 1000");
        for token in state.tokens() {
            assert_eq!(token.y, 0);
            assert!((0..BOARD_WIDTH as i8).contains(&token.x));
            assert!(token.active);
        }
    }

    #[test]
    fn test_reset_invalidates_timers() {
        let mut state = state_with(&[PowerUpKind::Ghost]);
        let mut board = Board::new();
        state.activate_slot(0, &mut board);
        assert!(state.ghost_visible());

        state.reset();
        assert!(!state.ghost_visible());
        assert_eq!(state.active_kind(), None);
        assert!(state.tokens().is_empty());
    }
}
