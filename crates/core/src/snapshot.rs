//! Snapshot module - plain-value game view for renderers
//!
//! Only the visible rows are copied; hidden buffer rows never reach a renderer.

use crate::pieces::Piece;
use crate::types::{GameStatus, PieceKind, Point, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub anchor: Point,
    pub cells: [Point; 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            anchor: value.anchor,
            cells: value.occupied_cells(),
        }
    }
}

/// Plain-value view of a game for renderers and other consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Visible rows only; 0 = empty, otherwise [`PieceKind::code`].
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Anchor y the active piece would land at on a hard drop.
    pub ghost_y: Option<i32>,
    pub next: PieceKind,
    pub status: GameStatus,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl GameSnapshot {
    /// Piece kind at a visible cell, `None` when empty or out of range
    pub fn cell(&self, x: i32, y: i32) -> Option<PieceKind> {
        if x < 0 || y < 0 {
            return None;
        }
        let row = self.board.get(y as usize)?;
        PieceKind::from_code(*row.get(x as usize)?)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: PieceKind::I,
            status: GameStatus::Falling,
            score: 0,
            level: 0,
            lines: 0,
        }
    }
}
