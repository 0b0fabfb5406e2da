//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the engine's logical [`Key`](types::Key)s plus
//! the few driver-level commands (restart, quit). Timing and key repeat are left
//! to the terminal; every press produces at most one command.

pub mod map;

pub use term_tetris_types as types;

pub use map::{map_key, Command};
