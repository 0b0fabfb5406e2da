//! Pieces tests - rotation table, spawn placement and kicks

use term_tetris::core::pieces::{get_shape, kicks, try_rotate, Piece};
use term_tetris::core::Board;
use term_tetris::types::{
    PieceKind, Point, RotateDirection, Rotation, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_POSITION,
};

const ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

fn sorted(mut cells: [Point; 4]) -> [Point; 4] {
    cells.sort_by_key(|p| (p.y, p.x));
    cells
}

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shapes() {
    assert_eq!(
        get_shape(PieceKind::I, Rotation::North),
        [(-1, 0), (0, 0), (1, 0), (2, 0)]
    );
    assert_eq!(
        get_shape(PieceKind::I, Rotation::East),
        [(1, -1), (1, 0), (1, 1), (1, 2)]
    );
}

#[test]
fn test_o_piece_shapes() {
    // O piece is the same for all rotations
    let north = get_shape(PieceKind::O, Rotation::North);
    for rotation in ROTATIONS {
        assert_eq!(get_shape(PieceKind::O, rotation), north);
    }
}

#[test]
fn test_t_piece_shapes() {
    assert_eq!(
        get_shape(PieceKind::T, Rotation::North),
        [(0, 0), (-1, 1), (0, 1), (1, 1)]
    );
    assert_eq!(
        get_shape(PieceKind::T, Rotation::South),
        [(-1, 1), (0, 1), (1, 1), (0, 2)]
    );
}

#[test]
fn test_spawn_position() {
    assert_eq!(SPAWN_POSITION, Point::new(4, 0));
    let piece = Piece::spawn(PieceKind::L);
    assert_eq!(piece.anchor, SPAWN_POSITION);
    assert_eq!(piece.rotation, Rotation::North);
}

#[test]
fn test_spawned_pieces_are_visible_and_centered() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        assert!(piece.fits(&board), "{:?} should fit at spawn", kind);
        for p in piece.occupied_cells() {
            assert!((0..=1).contains(&p.y), "{:?} spawned at row {}", kind, p.y);
            assert!((3..=6).contains(&p.x), "{:?} spawned at column {}", kind, p.x);
        }
    }
}

#[test]
fn test_i_spawns_flat_in_top_row() {
    let cells = Piece::spawn(PieceKind::I).occupied_cells();
    assert_eq!(
        cells,
        [
            Point::new(3, 0),
            Point::new(4, 0),
            Point::new(5, 0),
            Point::new(6, 0)
        ]
    );
}

// ============== Rotation Tests ==============

#[test]
fn test_four_rotations_return_to_start() {
    for kind in PieceKind::ALL {
        for direction in [RotateDirection::Clockwise, RotateDirection::CounterClockwise] {
            let start = Piece::new(kind, Rotation::North, Point::new(4, 8));
            let mut piece = start;
            for _ in 0..4 {
                piece = piece.rotated(direction);
            }
            assert_eq!(piece, start);
        }
    }
}

#[test]
fn test_cw_then_ccw_is_identity() {
    for kind in PieceKind::ALL {
        for rotation in ROTATIONS {
            let piece = Piece::new(kind, rotation, Point::new(4, 8));
            let back = piece
                .rotated(RotateDirection::Clockwise)
                .rotated(RotateDirection::CounterClockwise);
            assert_eq!(sorted(back.occupied_cells()), sorted(piece.occupied_cells()));
        }
    }
}

#[test]
fn test_rotation_on_empty_board_needs_no_kick() {
    let board = Board::new();
    let piece = Piece::new(PieceKind::T, Rotation::North, Point::new(4, 5));

    let (rotated, kick) =
        try_rotate(&piece, RotateDirection::Clockwise, |p| !board.is_occupied(p))
            .expect("rotation should succeed");
    assert_eq!(kick, (0, 0));
    assert_eq!(rotated.rotation, Rotation::East);
    assert_eq!(rotated.anchor, piece.anchor);
}

#[test]
fn test_ccw_rotation() {
    let piece = Piece::new(PieceKind::T, Rotation::North, Point::new(4, 5));
    let (rotated, _) = try_rotate(&piece, RotateDirection::CounterClockwise, |_| true)
        .expect("rotation should succeed");
    assert_eq!(rotated.rotation, Rotation::West);
}

#[test]
fn test_t_rotation_kicks_right_when_left_blocked() {
    // East at (4,5) covers (4,6); the left kick still covers (4,6).
    let blocked = Point::new(4, 6);
    let piece = Piece::new(PieceKind::T, Rotation::North, Point::new(4, 5));

    let (rotated, kick) = try_rotate(&piece, RotateDirection::Clockwise, |p| p != blocked)
        .expect("right kick should succeed");
    assert_eq!(kick, (1, 0));
    assert_eq!(rotated.anchor, Point::new(5, 5));
    assert_eq!(rotated.rotation, Rotation::East);
}

#[test]
fn test_i_rotation_uses_two_column_kick() {
    let blocked = [Point::new(4, 6), Point::new(5, 6), Point::new(6, 6)];
    let piece = Piece::new(PieceKind::I, Rotation::North, Point::new(4, 5));

    let (rotated, kick) = try_rotate(&piece, RotateDirection::Clockwise, |p| {
        !blocked.contains(&p)
    })
    .expect("two-column kick should succeed");
    assert_eq!(kick, (-2, 0));
    assert_eq!(rotated.anchor, Point::new(2, 5));
}

#[test]
fn test_rotation_failure() {
    let piece = Piece::new(PieceKind::T, Rotation::North, Point::new(4, 5));
    assert!(try_rotate(&piece, RotateDirection::Clockwise, |_| false).is_none());
}

#[test]
fn test_kick_table_consistency() {
    assert_eq!(kicks(PieceKind::O), &[(0i8, 0i8)][..]);
    assert_eq!(kicks(PieceKind::I).len(), 5);
    for kind in PieceKind::ALL {
        let table = kicks(kind);
        assert_eq!(table[0], (0, 0), "{:?} must try the plain rotation first", kind);
        assert!(table.iter().all(|&(_, dy)| dy == 0), "kicks never move vertically");
    }
}

#[test]
fn test_all_shapes_stay_inside_board_at_center() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        for rotation in ROTATIONS {
            let piece = Piece::new(kind, rotation, Point::new(4, 8));
            assert!(piece.fits(&board));
            for p in piece.occupied_cells() {
                assert!(p.x >= 0 && p.x < BOARD_WIDTH as i32);
                assert!(p.y >= 0 && p.y < BOARD_HEIGHT as i32);
            }
        }
    }
}

#[test]
fn test_drop_distance_reaches_floor() {
    let board = Board::new();
    let piece = Piece::spawn(PieceKind::T);
    assert_eq!(piece.drop_distance(&board), 18);
    assert!(piece.translated(0, 18).is_grounded(&board));
    assert!(!piece.is_grounded(&board));
}
