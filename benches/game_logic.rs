use criterion::{black_box, criterion_group, criterion_main, Criterion};
use term_tetris::core::{Board, Game, PieceBag};
use term_tetris::types::{GameUpdate, Key, PieceKind, Point};

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::with_seed(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if game.is_game_over() {
                game.restart();
            }
            game.apply(black_box(GameUpdate::Tick));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set_cell(Point::new(x, y), PieceKind::I);
                }
            }
            black_box(board.clear_lines());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut game = Game::with_seed(12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if game.is_game_over() {
                game.restart();
            }
            game.apply(black_box(GameUpdate::KeyPress(Key::HardDrop)));
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut game = Game::with_seed(12345);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            if !game.apply(GameUpdate::KeyPress(Key::MoveRight)) {
                while game.apply(GameUpdate::KeyPress(Key::MoveLeft)) {}
            }
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut game = Game::with_seed(12345);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            game.apply(black_box(GameUpdate::KeyPress(Key::RotateCw)));
        })
    });
}

fn bench_bag(c: &mut Criterion) {
    let mut bag = PieceBag::with_seed(12345);

    c.bench_function("bag_next", |b| b.iter(|| black_box(bag.next())));
}

fn bench_snapshot(c: &mut Criterion) {
    let game = Game::with_seed(12345);

    c.bench_function("snapshot", |b| b.iter(|| black_box(game.snapshot())));
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_try_move,
    bench_try_rotate,
    bench_bag,
    bench_snapshot
);
criterion_main!(benches);
