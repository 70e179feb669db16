use super::board::{Board, CENTER, get_available_moves};
use super::minimax::minimax_score;
use super::types::Mark;

/// Picks O's move on `board`, or `None` when no cell is empty.
///
/// An empty center is taken straight away without searching. Otherwise every
/// empty cell is tried in index order and scored with X to reply; the first
/// cell with the strictly highest score wins, so ties go to the lowest index.
pub fn select_best_move(board: &Board) -> Option<usize> {
    if board.is_empty_at(CENTER) {
        return Some(CENTER);
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in get_available_moves(board) {
        let score = minimax_score(board.with_mark(index, Mark::O), 0, false);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}
