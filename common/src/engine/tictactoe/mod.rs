mod board;
mod bot_controller;
mod minimax;
mod types;
mod win_detector;

pub use board::{BOARD_SIDE, Board, CELL_COUNT, CENTER, get_available_moves};
pub use bot_controller::select_best_move;
pub use minimax::{WIN_SCORE, minimax_score};
pub use types::{GameOutcome, Mark};
pub use win_detector::{WIN_PATTERNS, check_winner, evaluate, is_board_full};
