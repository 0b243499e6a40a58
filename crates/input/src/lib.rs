//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Every key press
//! is a discrete action; there is no auto-repeat handling beyond what the
//! terminal itself delivers.

pub mod map;

pub use tetris_ultra_types as types;

pub use map::{handle_key_event, should_quit};
