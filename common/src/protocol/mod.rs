mod request_decoder;
mod response_encoder;

pub use request_decoder::decode_board;
pub use response_encoder::{NO_MOVE, encode_move};

use crate::engine::tictactoe::{Board, select_best_move};

/// Result of one move request: the decoded board, the chosen cell and the
/// encoded response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReply {
    pub board: Board,
    pub chosen: Option<usize>,
    pub body: String,
}

/// Full request pipeline: decode the body, pick O's move, encode the answer.
pub fn respond_to_move_request(body: &[u8]) -> MoveReply {
    let board = decode_board(body);
    let chosen = select_best_move(&board);

    MoveReply {
        board,
        chosen,
        body: encode_move(chosen),
    }
}
