//! Core game logic - pure, deterministic when seeded, and testable
//!
//! This crate contains the board, pieces, the 7-bag randomizer, scoring and the
//! [`Game`] state machine. It has **no dependencies** on terminals or input
//! devices: a driver feeds [`GameUpdate`](types::GameUpdate)s in and reads the
//! board, the falling piece and the status back out.
//!
//! # Module Structure
//!
//! - [`board`]: 10-wide grid (20 visible + 2 hidden rows), collision and line clearing
//! - [`pieces`]: tetromino rotation table, kicks and the [`Piece`] value type
//! - [`bag`]: 7-bag random piece supply
//! - [`game`]: the state machine (falling, locking, game over)
//! - [`scoring`]: classic line scores, levels and gravity pacing
//! - [`snapshot`]: plain-value view for renderers
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every kind appears once per 7 draws
//! - **Kicks**: a blocked rotation retries one column left, then right (two for I)
//! - **Lock**: a piece that cannot descend on a tick or soft drop locks at once
//! - **Game over**: lock out, top out (checked at lock) and block out (checked at spawn)
//!
//! # Example
//!
//! ```
//! use term_tetris_core::Game;
//! use term_tetris_core::types::{GameStatus, GameUpdate, Key};
//!
//! let mut game = Game::with_seed(12345);
//!
//! game.apply(GameUpdate::KeyPress(Key::MoveRight));
//! game.apply(GameUpdate::KeyPress(Key::RotateCw));
//! game.apply(GameUpdate::Tick);
//! game.apply(GameUpdate::KeyPress(Key::HardDrop));
//!
//! assert_eq!(game.status(), GameStatus::Falling);
//! assert_eq!(game.board().filled_count(), 4);
//! ```

pub mod bag;
pub mod board;
pub mod game;
pub mod pieces;
pub mod scoring;
pub mod snapshot;

pub use term_tetris_types as types;

// Re-export commonly used types for convenience
pub use bag::PieceBag;
pub use board::Board;
pub use game::{Game, LockEvent};
pub use pieces::{get_shape, try_rotate, Piece};
pub use scoring::{level_for_lines, line_clear_score, tick_interval_ms};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
