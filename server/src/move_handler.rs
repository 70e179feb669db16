use axum::{
    body::Bytes,
    http::header,
    response::IntoResponse,
};
use tictactoe_common::protocol::{encode_move, respond_to_move_request};
use tictactoe_common::{debug_log, log};

pub const MOVE_PATH: &str = "/api/move";

/// `POST /api/move`. Always answers 200 with `{"move": N}`; a body that does
/// not carry a board is treated as an empty board.
pub async fn move_handler(body: Bytes) -> impl IntoResponse {
    debug_log!("Move request body: {}", String::from_utf8_lossy(&body));

    let response_body = match tokio::task::spawn_blocking(move || respond_to_move_request(&body)).await {
        Ok(reply) => {
            log!("Board {} -> move {:?}", reply.board, reply.chosen);
            reply.body
        }
        Err(e) => {
            log!("Move search failed: {}", e);
            encode_move(None)
        }
    };

    ([(header::CONTENT_TYPE, "application/json")], response_body)
}
