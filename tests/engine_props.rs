//! Property tests for line clearing and the update loop.

use proptest::prelude::*;

use term_tetris::core::{Board, Game, PieceBag};
use term_tetris::types::{GameUpdate, Key, PieceKind, Point, BOARD_WIDTH, HIDDEN_ROWS, TOTAL_ROWS};

const KEYS: [Key; 6] = [
    Key::MoveLeft,
    Key::MoveRight,
    Key::RotateCw,
    Key::RotateCcw,
    Key::SoftDrop,
    Key::HardDrop,
];

/// Build a board from per-row masks; a `true` row flag forces the row full.
fn board_from(cells: &[bool], full_rows: &[bool]) -> Board {
    let mut board = Board::new();
    for row in 0..TOTAL_ROWS as usize {
        let y = row as i32 - HIDDEN_ROWS as i32;
        for x in 0..BOARD_WIDTH as usize {
            if full_rows[row] || cells[row * BOARD_WIDTH as usize + x] {
                board.set_cell(Point::new(x as i32, y), PieceKind::T);
            }
        }
    }
    board
}

fn full_rows(board: &Board) -> usize {
    (-(HIDDEN_ROWS as i32)..(TOTAL_ROWS - HIDDEN_ROWS) as i32)
        .filter(|&y| board.is_row_full(y))
        .count()
}

fn update_strategy() -> impl Strategy<Value = GameUpdate> {
    prop_oneof![
        Just(GameUpdate::Tick),
        (0..KEYS.len()).prop_map(|i| GameUpdate::KeyPress(KEYS[i])),
    ]
}

proptest! {
    #[test]
    fn clearing_removes_exactly_the_full_rows(
        cells in proptest::collection::vec(any::<bool>(), TOTAL_ROWS as usize * BOARD_WIDTH as usize),
        rows in proptest::collection::vec(prop::bool::weighted(0.2), TOTAL_ROWS as usize),
    ) {
        let mut board = board_from(&cells, &rows);
        let expected = full_rows(&board);
        let before = board.filled_count();

        let cleared = board.clear_lines() as usize;

        prop_assert_eq!(cleared, expected);
        prop_assert_eq!(full_rows(&board), 0);
        prop_assert_eq!(board.filled_count(), before - 10 * cleared);
    }

    #[test]
    fn clearing_without_full_rows_changes_nothing(
        cells in proptest::collection::vec(any::<bool>(), TOTAL_ROWS as usize * BOARD_WIDTH as usize),
    ) {
        // Column 0 stays empty so no row is full
        let cells: Vec<bool> = cells
            .iter()
            .enumerate()
            .map(|(i, &filled)| filled && i % BOARD_WIDTH as usize != 0)
            .collect();
        let mut board = board_from(&cells, &[false; TOTAL_ROWS as usize]);
        let before = board.clone();

        prop_assert_eq!(board.clear_lines(), 0);
        prop_assert_eq!(board, before);
    }

    #[test]
    fn every_refill_window_holds_each_kind_twice(seed in any::<u64>(), bags in 2usize..20) {
        let mut bag = PieceBag::with_seed(seed);
        let draws: Vec<PieceKind> = (0..bags * 7).map(|_| bag.next()).collect();

        for window in draws.chunks_exact(14) {
            for kind in PieceKind::ALL {
                prop_assert_eq!(window.iter().filter(|&&k| k == kind).count(), 2);
            }
        }
    }

    #[test]
    fn random_play_keeps_the_falling_piece_legal(
        seed in any::<u64>(),
        updates in proptest::collection::vec(update_strategy(), 1..300),
    ) {
        let mut game = Game::with_seed(seed);
        let mut score = game.score();

        for update in updates {
            let was_over = game.is_game_over();
            let changed = game.apply(update);

            if was_over {
                prop_assert!(!changed);
            }
            prop_assert!(game.score() >= score);
            score = game.score();
            prop_assert_eq!(full_rows(game.board()), 0);

            match game.active() {
                Some(piece) => {
                    prop_assert!(!game.is_game_over());
                    prop_assert!(piece.fits(game.board()));
                }
                None => prop_assert!(game.is_game_over()),
            }
        }
    }
}
