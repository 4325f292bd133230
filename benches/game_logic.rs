use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{rotate_clockwise, try_move, Board, GameSnapshot, GameState, PieceFactory};
use blockfall::types::{ColorTag, Command, RunState};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut now = 0u64;

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            now += 16;
            state.tick(black_box(now));
            if state.run_state() == RunState::GameOver {
                state.start();
            }
            state.drain_events().for_each(drop);
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let gray = Some(ColorTag::new(0x80, 0x80, 0x80));

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, gray);
                }
            }
            let rows = board.find_completed_rows();
            black_box(board.compact(&rows));
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut factory = PieceFactory::seeded(12345);

    c.bench_function("spawn_piece", |b| b.iter(|| black_box(factory.spawn())));
}

fn bench_try_move(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = PieceFactory::seeded(12345).spawn();
    let mut dir = 1;

    c.bench_function("try_move", |b| {
        b.iter(|| {
            if !try_move(&board, &mut piece, dir) {
                dir = -dir;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = PieceFactory::seeded(12345).spawn();
    piece.y = 5;

    c.bench_function("rotate_clockwise", |b| {
        b.iter(|| black_box(rotate_clockwise(&board, &mut piece)))
    });
}

fn bench_hard_drop_and_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut snap = GameSnapshot::default();

    c.bench_function("hard_drop_snapshot", |b| {
        b.iter(|| {
            if !state.apply(Command::HardDrop) {
                state.start();
            }
            state.snapshot_into(&mut snap);
            state.drain_events().for_each(drop);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_try_move,
    bench_rotate,
    bench_hard_drop_and_snapshot
);
criterion_main!(benches);
