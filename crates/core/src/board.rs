//! Board module - manages the game grid
//!
//! The board is a 10-column grid of 20 visible rows plus 2 hidden buffer rows
//! above them. Each cell is empty or filled with the piece kind that locked there.
//! Uses a flat array for cache locality and zero allocation.
//!
//! Coordinates are board space: x ranges 0..9 (left to right), y ranges -2..19
//! (top to bottom) where y = 0 is the topmost visible row.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, Point, BOARD_HEIGHT, BOARD_WIDTH, HIDDEN_ROWS, TOTAL_ROWS};

const WIDTH: usize = BOARD_WIDTH as usize;
const ROWS: usize = TOTAL_ROWS as usize;

/// Total number of stored cells (hidden rows included)
const BOARD_SIZE: usize = WIDTH * ROWS;

/// Row indices returned by [`Board::clear_full_rows`].
pub type ClearedRows = ArrayVec<i32, ROWS>;

/// The game board - flat row-major storage, hidden rows first
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Flat index of a board-space point, `None` outside the stored rows
    #[inline(always)]
    fn index(p: Point) -> Option<usize> {
        let row = p.y + HIDDEN_ROWS as i32;
        if p.x < 0 || p.x >= BOARD_WIDTH as i32 || row < 0 || row >= ROWS as i32 {
            return None;
        }
        Some((row as usize) * WIDTH + (p.x as usize))
    }

    #[inline(always)]
    fn row_range(y: i32) -> Option<std::ops::Range<usize>> {
        let start = Self::index(Point::new(0, y))?;
        Some(start..start + WIDTH)
    }

    /// Width of the board in columns
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Number of visible rows
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at `p`, or `None` if `p` is outside the stored rows
    pub fn get(&self, p: Point) -> Option<Cell> {
        Self::index(p).map(|idx| self.cells[idx])
    }

    /// Collision query: walls, floor, buffer ceiling and filled cells all block.
    pub fn is_occupied(&self, p: Point) -> bool {
        !matches!(self.get(p), Some(None))
    }

    /// Write a filled cell. Returns false (and writes nothing) when `p` is out of bounds.
    pub fn set_cell(&mut self, p: Point, kind: PieceKind) -> bool {
        match Self::index(p) {
            Some(idx) => {
                self.cells[idx] = Some(kind);
                true
            }
            None => false,
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i32) -> bool {
        match Self::row_range(y) {
            Some(range) => self.cells[range].iter().all(|cell| cell.is_some()),
            None => false,
        }
    }

    /// True if no cell in row `y` is filled
    pub fn is_row_empty(&self, y: i32) -> bool {
        match Self::row_range(y) {
            Some(range) => self.cells[range].iter().all(|cell| cell.is_none()),
            None => true,
        }
    }

    /// Visible rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells[HIDDEN_ROWS as usize * WIDTH..].chunks_exact(WIDTH)
    }

    /// Remove every full row and compact the rest downward.
    ///
    /// Non-full rows keep their relative order; vacated rows at the top are
    /// emptied. Returns the cleared row indices in board space, bottom to top.
    /// A board without full rows is left untouched.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_row = ROWS;

        for read_row in (0..ROWS).rev() {
            let start = read_row * WIDTH;
            if self.cells[start..start + WIDTH].iter().all(|c| c.is_some()) {
                cleared.push(read_row as i32 - HIDDEN_ROWS as i32);
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                self.cells
                    .copy_within(start..start + WIDTH, write_row * WIDTH);
            }
        }

        self.cells[..write_row * WIDTH].fill(None);
        cleared
    }

    /// Clear all full rows and return how many were removed
    pub fn clear_lines(&mut self) -> u32 {
        self.clear_full_rows().len() as u32
    }

    /// Number of filled cells, hidden rows included
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Write the visible rows into a u8 grid (0 = empty, otherwise [`PieceKind::code`])
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; BOARD_HEIGHT as usize]) {
        let visible = &self.cells[HIDDEN_ROWS as usize * WIDTH..];
        for (dst, src) in out.iter_mut().zip(visible.chunks_exact(WIDTH)) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = s.map_or(0, |kind| kind.code());
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
