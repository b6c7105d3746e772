use connect_four_engine::{Board, Player, SearchEngine, score_position};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn midgame() -> Board {
    let mut board = Board::new();
    for (col, player) in [
        (3, Player::HUMAN),
        (3, Player::AI),
        (2, Player::HUMAN),
        (4, Player::AI),
        (4, Player::HUMAN),
        (2, Player::AI),
    ] {
        board.drop_piece(col, player).unwrap();
    }
    board
}

fn bench_search(c: &mut Criterion) {
    let engine = SearchEngine::default();
    let board = midgame();

    c.bench_function("score_position", |b| {
        b.iter(|| score_position(black_box(&board), Player::AI, engine.weights()))
    });
    c.bench_function("best_move depth 6", |b| {
        b.iter(|| engine.best_move(black_box(&board), 6))
    });
    c.bench_function("best_move_parallel depth 6", |b| {
        b.iter(|| engine.best_move_parallel(black_box(&board), 6))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
