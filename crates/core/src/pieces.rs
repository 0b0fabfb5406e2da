//! Pieces module - Tetromino shapes, rotation table and kicks
//!
//! Every piece is data: a kind, a rotation and an anchor. Occupied cells are the
//! anchor plus four offsets looked up from a fixed per-kind, per-rotation table.
//! The anchor is the top-center of the spawn bounding box, so every North shape
//! sits in rows 0 and 1 and a spawn at (4, 0) is fully visible.

use crate::board::Board;
use crate::types::{PieceKind, Point, RotateDirection, Rotation, SPAWN_POSITION};

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => i_shape(rotation),
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::T => t_shape(rotation),
        PieceKind::S => s_shape(rotation),
        PieceKind::Z => z_shape(rotation),
        PieceKind::J => j_shape(rotation),
        PieceKind::L => l_shape(rotation),
    }
}

fn i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(-1, 0), (0, 0), (1, 0), (2, 0)],
        Rotation::East => [(1, -1), (1, 0), (1, 1), (1, 2)],
        Rotation::South => [(-1, 1), (0, 1), (1, 1), (2, 1)],
        Rotation::West => [(0, -1), (0, 0), (0, 1), (0, 2)],
    }
}

fn t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (-1, 1), (0, 1), (1, 1)],
        Rotation::East => [(0, 0), (0, 1), (1, 1), (0, 2)],
        Rotation::South => [(-1, 1), (0, 1), (1, 1), (0, 2)],
        Rotation::West => [(0, 0), (-1, 1), (0, 1), (0, 2)],
    }
}

fn s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (-1, 1), (0, 1)],
        Rotation::East => [(0, 0), (0, 1), (1, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (-1, 2), (0, 2)],
        Rotation::West => [(-1, 0), (-1, 1), (0, 1), (0, 2)],
    }
}

fn z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(-1, 0), (0, 0), (0, 1), (1, 1)],
        Rotation::East => [(1, 0), (0, 1), (1, 1), (0, 2)],
        Rotation::South => [(-1, 1), (0, 1), (0, 2), (1, 2)],
        Rotation::West => [(0, 0), (-1, 1), (0, 1), (-1, 2)],
    }
}

fn j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(-1, 0), (-1, 1), (0, 1), (1, 1)],
        Rotation::East => [(0, 0), (1, 0), (0, 1), (0, 2)],
        Rotation::South => [(-1, 1), (0, 1), (1, 1), (1, 2)],
        Rotation::West => [(0, 0), (0, 1), (-1, 2), (0, 2)],
    }
}

fn l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (-1, 1), (0, 1), (1, 1)],
        Rotation::East => [(0, 0), (0, 1), (0, 2), (1, 2)],
        Rotation::South => [(-1, 1), (0, 1), (1, 1), (-1, 2)],
        Rotation::West => [(-1, 0), (0, 0), (0, 1), (0, 2)],
    }
}

/// Positional corrections tried, in order, when a rotation collides.
/// The first entry is always the unshifted rotation.
pub fn kicks(kind: PieceKind) -> &'static [MinoOffset] {
    match kind {
        PieceKind::O => &[(0, 0)],
        PieceKind::I => &[(0, 0), (-1, 0), (1, 0), (-2, 0), (2, 0)],
        _ => &[(0, 0), (-1, 0), (1, 0)],
    }
}

/// A tetromino placed in board space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub anchor: Point,
}

impl Piece {
    pub fn new(kind: PieceKind, rotation: Rotation, anchor: Point) -> Self {
        Self {
            kind,
            rotation,
            anchor,
        }
    }

    /// Piece in its spawn orientation at the spawn anchor
    pub fn spawn(kind: PieceKind) -> Self {
        Self::new(kind, Rotation::North, SPAWN_POSITION)
    }

    /// Mino offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Same anchor, orientation advanced one step. Not validated.
    pub fn rotated(&self, direction: RotateDirection) -> Self {
        Self {
            rotation: self.rotation.rotate(direction),
            ..*self
        }
    }

    /// Anchor shifted by (dx, dy). Not validated.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            anchor: self.anchor.offset(dx, dy),
            ..*self
        }
    }

    /// Absolute board cells covered by the piece
    pub fn occupied_cells(&self) -> [Point; 4] {
        self.shape()
            .map(|(dx, dy)| self.anchor.offset(dx as i32, dy as i32))
    }

    /// True when every occupied cell is free on `board`
    pub fn fits(&self, board: &Board) -> bool {
        self.occupied_cells()
            .iter()
            .all(|&p| !board.is_occupied(p))
    }

    /// True when the piece cannot descend one more row
    pub fn is_grounded(&self, board: &Board) -> bool {
        !self.translated(0, 1).fits(board)
    }

    /// Rows the piece can fall before it would collide
    pub fn drop_distance(&self, board: &Board) -> i32 {
        let mut distance = 0;
        while self.translated(0, distance + 1).fits(board) {
            distance += 1;
        }
        distance
    }
}

/// Try to rotate a piece, applying kicks in priority order.
/// Returns the rotated piece and the kick used, or `None` if every attempt collides.
pub fn try_rotate(
    piece: &Piece,
    direction: RotateDirection,
    is_free: impl Fn(Point) -> bool,
) -> Option<(Piece, MinoOffset)> {
    let rotated = piece.rotated(direction);

    kicks(piece.kind).iter().find_map(|&(dx, dy)| {
        let candidate = rotated.translated(dx as i32, dy as i32);
        candidate
            .occupied_cells()
            .iter()
            .all(|&p| is_free(p))
            .then_some((candidate, (dx, dy)))
    })
}
