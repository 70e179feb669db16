use super::board::{Board, CELL_COUNT};
use super::types::Mark;
use super::win_detector::{check_winner, is_board_full};

pub const WIN_SCORE: i32 = 10;
const LOWEST_SCORE: i32 = -1000;
const HIGHEST_SCORE: i32 = 1000;

/// Exhaustive minimax over every continuation of `board`, scored from O's
/// point of view.
///
/// An O win scores `WIN_SCORE - depth`, an X win `depth - WIN_SCORE`, a full
/// board without a winner 0. Wins are credited through
/// [`Mark::scoring_player`]. `depth` counts the plies already played below the
/// position the caller started from. Cells are tried in index order. The board
/// is taken by value, each trial works on its own copy.
pub fn minimax_score(board: Board, depth: i32, maximizing_is_o: bool) -> i32 {
    match check_winner(&board).and_then(|mark| mark.scoring_player()) {
        Some(Mark::O) => return WIN_SCORE - depth,
        Some(Mark::X) => return depth - WIN_SCORE,
        _ => {}
    }
    if is_board_full(&board) {
        return 0;
    }

    let (mark, initial) = if maximizing_is_o {
        (Mark::O, LOWEST_SCORE)
    } else {
        (Mark::X, HIGHEST_SCORE)
    };

    let mut best_score = initial;
    for index in 0..CELL_COUNT {
        if !board.is_empty_at(index) {
            continue;
        }

        let score = minimax_score(board.with_mark(index, mark), depth + 1, !maximizing_is_o);

        best_score = if maximizing_is_o {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    best_score
}
