use super::board::Board;
use super::types::{GameOutcome, Mark};

pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Mark of the first pattern (rows, then columns, then diagonals) whose three
/// cells hold the same non-empty mark.
pub fn check_winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();

    for [a, b, c] in WIN_PATTERNS {
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            return Some(mark);
        }
    }

    None
}

pub fn is_board_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// The first completed line decides the result, credited through
/// [`Mark::scoring_player`]. A foreign line that credits nobody is not a
/// result, and the board is judged by its fill state instead.
pub fn evaluate(board: &Board) -> GameOutcome {
    match check_winner(board).and_then(|mark| mark.scoring_player()) {
        Some(Mark::X) => GameOutcome::XWins,
        Some(Mark::O) => GameOutcome::OWins,
        _ if is_board_full(board) => GameOutcome::Draw,
        _ => GameOutcome::InProgress,
    }
}
