//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the input mapper and the terminal view alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 visible rows (indexed 0-19, y grows downward)
//! - **Hidden rows**: 2 buffer rows above the visible field (y = -2 and -1)
//! - **Spawn anchor**: (4, 0)
//!
//! # Gravity Pacing
//!
//! The engine never sleeps. Drivers send one [`GameUpdate::Tick`] per gravity step
//! and pace them with `BASE_TICK_MS - level * TICK_STEP_MS`, floored at `MIN_TICK_MS`.
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 1000ms |
//! | 1 | 950ms |
//! | 10 | 500ms |
//! | 18+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{GameUpdate, Key, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//!
//! let update = GameUpdate::KeyPress(Key::from_str("hardDrop").unwrap());
//! assert_eq!(update, GameUpdate::KeyPress(Key::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Visible board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Buffer rows above the visible field where pieces may rotate or lock.
pub const HIDDEN_ROWS: u8 = 2;

/// Total number of stored rows (hidden + visible)
pub const TOTAL_ROWS: u8 = BOARD_HEIGHT + HIDDEN_ROWS;

/// Anchor of a freshly spawned piece (top-center of the visible field)
pub const SPAWN_POSITION: Point = Point::new(4, 0);

/// Gravity interval at level 0
pub const BASE_TICK_MS: u32 = 1000;

/// Interval reduction per level
pub const TICK_STEP_MS: u32 = 50;

/// Fastest gravity interval
pub const MIN_TICK_MS: u32 = 100;

/// Line clear scoring (Classic rules), indexed by lines cleared
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Cleared lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Non-zero grid code (1..=7) used by snapshots; 0 means empty.
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=7 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }
}

/// Rotation states (North = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    pub fn rotate(&self, direction: RotateDirection) -> Self {
        match direction {
            RotateDirection::Clockwise => self.rotate_cw(),
            RotateDirection::CounterClockwise => self.rotate_ccw(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

/// Integer coordinate in board space (y grows downward, y = 0 is the top visible row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Logical keys a driver can feed into the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    SoftDrop,
    HardDrop,
}

impl Key {
    /// Parse key from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Key::MoveLeft),
            "moveright" => Some(Key::MoveRight),
            "rotatecw" => Some(Key::RotateCw),
            "rotateccw" => Some(Key::RotateCcw),
            "softdrop" => Some(Key::SoftDrop),
            "harddrop" => Some(Key::HardDrop),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::MoveLeft => "moveLeft",
            Key::MoveRight => "moveRight",
            Key::RotateCw => "rotateCw",
            Key::RotateCcw => "rotateCcw",
            Key::SoftDrop => "softDrop",
            Key::HardDrop => "hardDrop",
        }
    }
}

/// Events consumed by the game, one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameUpdate {
    KeyPress(Key),
    /// One gravity step
    Tick,
}

/// Terminal conditions, all detected at lock or spawn time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOver {
    /// A piece locked entirely above the visible board.
    LockOut,
    /// A newly spawned piece overlaps the stack.
    BlockOut,
    /// A piece locked partly above the visible board.
    TopOut,
}

impl GameOver {
    pub fn description(&self) -> &'static str {
        match self {
            GameOver::LockOut => "The piece locked above the playfield.",
            GameOver::BlockOut => "The spawn area is blocked by the stack.",
            GameOver::TopOut => "The stack has reached the top of the playfield.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameOver::LockOut => "lockOut",
            GameOver::BlockOut => "blockOut",
            GameOver::TopOut => "topOut",
        }
    }
}

/// Game state machine status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// A piece is active and descending.
    Falling,
    /// A piece is being committed and lines cleared; never visible between updates.
    Locking,
    /// Terminal.
    GameOver(GameOver),
}

impl GameStatus {
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameStatus::GameOver(_))
    }

    pub fn game_over(&self) -> Option<GameOver> {
        match self {
            GameStatus::GameOver(cond) => Some(*cond),
            _ => None,
        }
    }
}
