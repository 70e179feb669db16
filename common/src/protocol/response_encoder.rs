/// Wire value sent when no cell is free.
pub const NO_MOVE: i32 = -1;

fn move_to_wire(chosen: Option<usize>) -> i32 {
    chosen.map_or(NO_MOVE, |index| index as i32)
}

/// Encodes the chosen move as `{"move": N}`.
pub fn encode_move(chosen: Option<usize>) -> String {
    format!("{{\"move\": {}}}", move_to_wire(chosen))
}
