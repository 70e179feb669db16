use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::engine::tictactoe::{
    Board, GameOutcome, Mark, evaluate, get_available_moves, minimax_score, select_best_move,
};
use tictactoe_common::protocol::respond_to_move_request;

fn bench_search_after_center_opening(c: &mut Criterion) {
    // X took the center, so the bot has to search all eight replies.
    let board = Board::empty().with_mark(4, Mark::X);

    c.bench_function("select_best_move_after_center_opening", |b| {
        b.iter(|| select_best_move(black_box(&board)))
    });
}

fn bench_full_tree_from_empty_board(c: &mut Criterion) {
    c.bench_function("minimax_score_empty_board", |b| {
        b.iter(|| minimax_score(black_box(Board::empty()), 0, false))
    });
}

fn bench_self_play_game(c: &mut Criterion) {
    c.bench_function("self_play_game", |b| {
        b.iter(|| {
            let mut board = Board::empty();
            let mut x_to_move = true;

            while evaluate(&board) == GameOutcome::InProgress {
                let Some(index) = (if x_to_move {
                    get_available_moves(&board).first().copied()
                } else {
                    select_best_move(&board)
                }) else {
                    break;
                };

                let mark = if x_to_move { Mark::X } else { Mark::O };
                board = board.with_mark(index, mark);
                x_to_move = !x_to_move;
            }

            board
        })
    });
}

fn bench_request_pipeline(c: &mut Criterion) {
    let body = br#"{"board": ["X","","","","O","","","","X"]}"#;

    c.bench_function("respond_to_move_request", |b| {
        b.iter(|| respond_to_move_request(black_box(body)).body)
    });
}

criterion_group!(
    benches,
    bench_search_after_center_opening,
    bench_full_tree_from_empty_board,
    bench_self_play_game,
    bench_request_pipeline
);
criterion_main!(benches);
