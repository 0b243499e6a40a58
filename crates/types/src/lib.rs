//! Core types shared across the application.
//!
//! Pure data types and tuning constants with no external dependencies,
//! usable from the engine, the input layer and the renderer alike.

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed timestep for the terminal runner (milliseconds)
pub const TICK_MS: u32 = 16;

/// Gravity interval: `max(100, 800 - (level - 1) * 50)`, stretched to
/// 1000ms while the slow power-up is active.
pub const BASE_DROP_MS: u32 = 800;
pub const DROP_STEP_PER_LEVEL_MS: u32 = 50;
pub const DROP_FLOOR_MS: u32 = 100;
pub const SLOW_DROP_MS: u32 = 1000;

/// Line clear base scores indexed by cleared-row count.
/// Clears above four rows use the last tier.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Combo bonus per chain step
pub const COMBO_BONUS: u32 = 50;

/// Per-lock level bonus (`level * 10`, only on clearing locks)
pub const LEVEL_LOCK_BONUS: u32 = 10;

/// One-time bonus on reaching a new level (`new_level * 100`)
pub const LEVEL_UP_BONUS: u32 = 100;

/// Hard drop awards 2 points per cell fallen
pub const HARD_DROP_BONUS_PER_CELL: u32 = 2;

/// Power-up spawn probability per line-clearing lock (3/10)
pub const POWER_UP_SPAWN_NUM: u32 = 3;
pub const POWER_UP_SPAWN_DEN: u32 = 10;

/// Power-up timing (all counted on the engine clock)
pub const GHOST_DURATION_MS: u32 = 10_000;
pub const SLOW_DURATION_MS: u32 = 15_000;
pub const POWER_UP_LOCK_MS: u32 = 1_000;

/// Number of activation slots exposed to the UI (digit keys 1-4)
pub const POWER_UP_SLOTS: usize = 4;

/// Bomb power-up empties this many bottom rows
pub const BOMB_ROWS: u8 = 3;
pub const BOMB_SCORE: u32 = 200;
pub const FULL_CLEAR_SCORE: u32 = 500;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// 1-based index used by the snapshot u8 grid (0 = empty cell)
    pub fn index(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    pub fn from_index(v: u8) -> Option<Self> {
        match v {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Power-up kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    /// Empties the bottom three rows
    Bomb,
    /// Stretches the gravity interval for a while
    Slow,
    /// Empties the entire board
    Clear,
    /// Display-only landing visibility boost
    Ghost,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Bomb,
        PowerUpKind::Slow,
        PowerUpKind::Clear,
        PowerUpKind::Ghost,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PowerUpKind::Bomb => "BOMB",
            PowerUpKind::Slow => "SLOW",
            PowerUpKind::Clear => "CLEAR",
            PowerUpKind::Ghost => "GHOST",
        }
    }
}

/// Game lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Playing,
    Paused,
    GameOver,
}

/// Game actions (input events and lifecycle commands)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Pause,
    Restart,
    /// Activate the Nth visible power-up slot (0-based)
    ActivatePowerUp(u8),
}
