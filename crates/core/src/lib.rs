//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless)
//! - **Fast**: Zero-allocation hot paths for game tick processing
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with line clearing and bulk clears
//! - [`shapes`]: Piece shape matrices and matrix-transpose rotation
//! - [`collision`]: Placement legality checks
//! - [`piece`]: The active falling piece
//! - [`game_state`]: Complete game state including scoring, timing, power-ups
//! - [`power_up`]: Power-up token spawning and timed effects
//! - [`rng`]: Seedable LCG random source for piece and power-up draws
//! - [`scoring`]: Score calculation with combos, levels, and drop bonuses
//!
//! # Game Rules
//!
//! - **Uniform Randomizer**: Each piece is an independent uniform draw
//! - **Simple Rotation**: Clockwise matrix rotation, no wall kicks
//! - **Instant Lock**: A piece that cannot fall locks immediately
//! - **Power-Ups**: Bomb, clear, ghost, and slow tokens spawned by line clears
//! - **Combo Scoring**: Consecutive clearing locks build a combo chain
//!
//! # Example
//!
//! ```
//! use tetris_ultra_core::GameState;
//! use tetris_ultra_types::GameAction;
//!
//! // Create and start a game
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! // Apply game actions
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Check game state
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep system:
//! - **Tick Rate**: 16ms (approximately 60 FPS)
//! - **Gravity**: 800ms at level 1, 50ms faster per level, floored at 100ms
//! - **Slow Power-Up**: Overrides gravity to a flat 1000ms while active
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with elapsed time.

pub mod board;
pub mod collision;
pub mod game_state;
pub mod piece;
pub mod power_up;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use tetris_ultra_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use game_state::GameState;
pub use piece::ActivePiece;
pub use power_up::{PowerUpState, PowerUpToken};
pub use rng::GameRng;
pub use scoring::{drop_interval_ms, lock_score};
pub use shapes::{color, spawn_grid, ShapeGrid};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
