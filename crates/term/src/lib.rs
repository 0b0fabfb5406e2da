//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay: the engine snapshot is drawn
//! into a framebuffer by [`GameView`], and [`TerminalRenderer`] flushes that
//! framebuffer to the terminal with crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
