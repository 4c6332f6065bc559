use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetrion::core::{collides, Advance, Board, GameSnapshot, GameState, Piece};
use tetrion::term::{FrameBuffer, GameView, Viewport};
use tetrion::types::{GameAction, PieceKind};

fn bench_advance(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("advance_16ms", |b| {
        b.iter(|| {
            if !state.is_running() {
                state.restart();
            }
            state.advance(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let full = Board::from_rows(&[
        "..S.......",
        "IIIIIIIIII",
        "IIIIIIIIII",
        "IIIIIIIIII",
        "IIIIIIIIII",
    ]);

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = full.clone();
            black_box(board.clear_lines());
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let board = Board::from_rows(&["..ZZ..LLL.", ".IIII.OO.."]);
    let piece = Piece::spawn(PieceKind::T).shifted(0, 16);

    c.bench_function("collides", |b| {
        b.iter(|| black_box(collides(black_box(&board), black_box(&piece))))
    });
}

fn bench_hard_drop_game(c: &mut Criterion) {
    c.bench_function("hard_drop_until_game_over", |b| {
        b.iter(|| {
            let mut state = GameState::new(black_box(7));
            state.start();
            while state.is_running() {
                state.apply_action(GameAction::HardDrop);
            }
            black_box(state.piece_id())
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let snap = state.snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_line_clear,
    bench_collision,
    bench_hard_drop_game,
    bench_snapshot,
    bench_render
);
criterion_main!(benches);
