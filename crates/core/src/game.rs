//! Game module - the event-driven game state machine
//!
//! `Game` owns the board, the piece bag and the falling piece. It consumes one
//! [`GameUpdate`] at a time and runs it to completion: moves and rotations are
//! committed or silently rejected, gravity either descends or locks, and a lock
//! clears lines, spawns the next piece and checks the game-over conditions.

use log::{debug, info, trace};

use crate::bag::PieceBag;
use crate::board::Board;
use crate::pieces::{try_rotate, Piece};
use crate::scoring::{level_for_lines, line_clear_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// What happened when a piece locked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    /// Cells written into the board, before line clearing
    pub cells: [Point; 4],
    pub lines_cleared: u32,
    pub score: u32,
    pub game_over: Option<GameOver>,
}

/// Game-over condition implied by the cells of a piece that just locked.
///
/// Entirely above the visible field is a lock out, partly above is a top out.
pub fn lock_condition(cells: &[Point]) -> Option<GameOver> {
    let above = cells.iter().filter(|p| p.y < 0).count();
    if above == 0 {
        None
    } else if above == cells.len() {
        Some(GameOver::LockOut)
    } else {
        Some(GameOver::TopOut)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    bag: PieceBag,
    active: Option<Piece>,
    status: GameStatus,
    score: u32,
    lines: u32,
    level: u32,
    pieces_locked: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    /// Seed used for the bag, kept so restarts replay the same sequence.
    seed: Option<u64>,
}

impl Game {
    /// New game with an entropy-seeded bag
    pub fn new() -> Self {
        Self::build(Board::new(), PieceBag::new(), None)
    }

    /// New deterministic game
    pub fn with_seed(seed: u64) -> Self {
        Self::build(Board::new(), PieceBag::with_seed(seed), Some(seed))
    }

    /// Start from a prepared board. If the first piece cannot spawn the game is
    /// over immediately with [`GameOver::BlockOut`].
    pub fn with_board(board: Board, seed: u64) -> Self {
        Self::build(board, PieceBag::with_seed(seed), Some(seed))
    }

    fn build(board: Board, bag: PieceBag, seed: Option<u64>) -> Self {
        let mut game = Self {
            board,
            bag,
            active: None,
            status: GameStatus::Falling,
            score: 0,
            lines: 0,
            level: 0,
            pieces_locked: 0,
            last_event: None,
            seed,
        };
        if let Err(cond) = game.spawn_piece() {
            game.finish(cond);
        }
        game
    }

    /// Throw the current game away and start over (same seed if seeded)
    pub fn restart(&mut self) {
        info!("restarting after {} pieces, score {}", self.pieces_locked, self.score);
        *self = match self.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        };
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    /// Absolute cells of the falling piece
    pub fn active_cells(&self) -> Option<[Point; 4]> {
        self.active.map(|p| p.occupied_cells())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    pub fn game_over(&self) -> Option<GameOver> {
        self.status.game_over()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Kind of the piece that spawns after the current one locks
    pub fn next_kind(&self) -> PieceKind {
        self.bag.peek()
    }

    /// Where the falling piece would come to rest on a hard drop
    pub fn ghost(&self) -> Option<Piece> {
        let active = self.active?;
        Some(active.translated(0, active.drop_distance(&self.board)))
    }

    pub fn ghost_anchor(&self) -> Option<Point> {
        self.ghost().map(|p| p.anchor)
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply one update. Returns true when observable state changed.
    ///
    /// Rejected moves and rotations return false and change nothing; every update
    /// after game over is a no-op.
    pub fn apply(&mut self, update: GameUpdate) -> bool {
        if self.status.is_game_over() {
            trace!("ignoring {:?} after game over", update);
            return false;
        }

        match update {
            GameUpdate::Tick | GameUpdate::KeyPress(Key::SoftDrop) => self.step_down(),
            GameUpdate::KeyPress(Key::MoveLeft) => self.try_move(-1, 0),
            GameUpdate::KeyPress(Key::MoveRight) => self.try_move(1, 0),
            GameUpdate::KeyPress(Key::RotateCw) => self.try_rotate(RotateDirection::Clockwise),
            GameUpdate::KeyPress(Key::RotateCcw) => {
                self.try_rotate(RotateDirection::CounterClockwise)
            }
            GameUpdate::KeyPress(Key::HardDrop) => self.hard_drop(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_anchor().map(|p| p.y);
        out.next = self.next_kind();
        out.status = self.status;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Try to move the active piece; commits only if the target fits
    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.translated(dx, dy);
        if moved.fits(&self.board) {
            self.active = Some(moved);
            return true;
        }

        trace!("rejected move ({}, {}) for {:?}", dx, dy, active.kind);
        false
    }

    /// Try to rotate the active piece, falling back to kicks
    fn try_rotate(&mut self, direction: RotateDirection) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let board = &self.board;
        match try_rotate(&active, direction, |p| !board.is_occupied(p)) {
            Some((rotated, kick)) => {
                if kick != (0, 0) {
                    trace!("{:?} rotated with kick {:?}", active.kind, kick);
                }
                self.active = Some(rotated);
                true
            }
            None => {
                trace!("rejected {:?} rotation for {:?}", direction, active.kind);
                false
            }
        }
    }

    /// One gravity step: descend, or lock when blocked
    fn step_down(&mut self) -> bool {
        if self.try_move(0, 1) {
            return true;
        }
        self.lock_piece();
        true
    }

    /// Drop to the lowest fitting row and lock, as a single update
    fn hard_drop(&mut self) -> bool {
        let Some(landed) = self.ghost() else {
            return false;
        };
        self.active = Some(landed);
        self.lock_piece();
        true
    }

    /// Commit the active piece, clear lines, then spawn or end the game
    fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.status = GameStatus::Locking;

        let cells = piece.occupied_cells();
        for &p in &cells {
            // Pieces only ever move to fitting positions, so every cell is in bounds.
            assert!(
                self.board.set_cell(p, piece.kind),
                "locked {:?} has cell {:?} outside the board",
                piece.kind,
                p
            );
        }
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let mut game_over = lock_condition(&cells);

        let lines_cleared = self.board.clear_lines();
        let awarded = line_clear_score(lines_cleared, self.level);
        if lines_cleared > 0 {
            self.lines += lines_cleared;
            self.score = self.score.saturating_add(awarded);
            self.level = level_for_lines(self.lines);
            debug!(
                "cleared {} line(s): score {}, lines {}, level {}",
                lines_cleared, self.score, self.lines, self.level
            );
        }
        debug!("locked {:?} at {:?}", piece.kind, piece.anchor);

        if game_over.is_none() {
            if let Err(cond) = self.spawn_piece() {
                game_over = Some(cond);
            }
        }

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            cells,
            lines_cleared,
            score: awarded,
            game_over,
        });

        match game_over {
            Some(cond) => self.finish(cond),
            None => self.status = GameStatus::Falling,
        }
    }

    /// Spawn the next piece from the bag; a collision at spawn is a block out
    fn spawn_piece(&mut self) -> Result<(), GameOver> {
        let piece = Piece::spawn(self.bag.next());
        if !piece.fits(&self.board) {
            return Err(GameOver::BlockOut);
        }
        self.active = Some(piece);
        Ok(())
    }

    fn finish(&mut self, cond: GameOver) {
        info!(
            "game over ({}): score {}, lines {}, pieces {}",
            cond.as_str(),
            self.score,
            self.lines,
            self.pieces_locked
        );
        self.active = None;
        self.status = GameStatus::GameOver(cond);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
