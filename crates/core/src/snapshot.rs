//! Read-only snapshot of the game state for rendering collaborators.
//!
//! The renderer only ever sees this copy; it can never mutate engine
//! state through it.

use crate::piece::ActivePiece;
use crate::shapes::ShapeGrid;
use crate::types::{GameStatus, PieceKind, PowerUpKind, BOARD_HEIGHT, BOARD_WIDTH, POWER_UP_SLOTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: ShapeGrid,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Landing row of the active piece (display preview)
    pub ghost_y: Option<i8>,
    pub next: PieceKind,
    pub status: GameStatus,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub combo: u32,
    pub high_score: u32,
    /// The first four still-active power-up tokens, in spawn order
    pub power_up_slots: [Option<PowerUpKind>; POWER_UP_SLOTS],
    /// Kind of the currently running power-up effect, if any
    pub active_power_up: Option<PowerUpKind>,
    /// Ghost power-up display flag
    pub ghost_visible: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: PieceKind::I,
            status: GameStatus::NotStarted,
            score: 0,
            level: 1,
            lines: 0,
            combo: 0,
            high_score: 0,
            power_up_slots: [None; POWER_UP_SLOTS],
            active_power_up: None,
            ghost_visible: false,
        }
    }
}
