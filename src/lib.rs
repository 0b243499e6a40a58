//! Tetris Ultra (workspace facade crate).
//!
//! This package keeps the `tetris_ultra::{core,term,input,types}` public
//! API stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use tetris_ultra_core as core;
pub use tetris_ultra_input as input;
pub use tetris_ultra_term as term;
pub use tetris_ultra_types as types;
