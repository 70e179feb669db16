use crate::engine::tictactoe::{Board, CELL_COUNT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    OutsideArray,
    InArray,
    InQuote,
}

/// Extracts the first bracketed list of quoted strings from a request body.
///
/// The scan is deliberately permissive:
/// - a body without `[` or without a `]` after it decodes to an empty board;
/// - the first `]` closes the list, even inside quotes;
/// - `"` toggles quoting, there are no escapes;
/// - outside quotes only commas matter, everything else is skipped;
/// - up to nine values are kept, missing ones stay empty, extra ones are dropped.
///
/// Unknown labels become foreign marks, see [`Board::from_labels`].
pub fn decode_board(body: &[u8]) -> Board {
    match scan_labels(body) {
        Some(labels) => Board::from_labels(&labels),
        None => Board::empty(),
    }
}

fn scan_labels(body: &[u8]) -> Option<Vec<Vec<u8>>> {
    let mut state = ScanState::OutsideArray;
    let mut labels: Vec<Vec<u8>> = Vec::with_capacity(CELL_COUNT);
    let mut current: Vec<u8> = Vec::new();

    for &byte in body {
        match (state, byte) {
            (ScanState::OutsideArray, b'[') => state = ScanState::InArray,
            (ScanState::OutsideArray, _) => {}
            (ScanState::InArray | ScanState::InQuote, b']') => {
                if labels.len() < CELL_COUNT {
                    labels.push(current);
                }
                return Some(labels);
            }
            (ScanState::InArray, b'"') => state = ScanState::InQuote,
            (ScanState::InArray, b',') => {
                if labels.len() < CELL_COUNT {
                    labels.push(std::mem::take(&mut current));
                }
            }
            (ScanState::InArray, _) => {}
            (ScanState::InQuote, b'"') => state = ScanState::InArray,
            (ScanState::InQuote, _) => current.push(byte),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tictactoe::{GameOutcome, Mark, evaluate, minimax_score};

    #[test]
    fn test_decodes_full_board_in_order() {
        let body = br#"{"board": ["X","O","","","X","","O","",""]}"#;
        let board = decode_board(body);

        assert_eq!(
            board,
            Board::from_labels(&["X", "O", "", "", "X", "", "O", "", ""])
        );
    }

    #[test]
    fn test_whitespace_between_values_is_ignored() {
        let body = b"{ \"board\" : [ \"O\" , \"X\",\n \"\" , \"\",\"\",\"\",\"\",\"\", \"X\" ] }";
        let board = decode_board(body);

        assert_eq!(board.get(0), Some(Mark::O));
        assert_eq!(board.get(1), Some(Mark::X));
        assert_eq!(board.get(8), Some(Mark::X));
        assert_eq!(board.count(Mark::Empty), 6);
    }

    #[test]
    fn test_missing_open_bracket_falls_back_to_empty_board() {
        assert_eq!(decode_board(br#"{"board": "X","O"]}"#), Board::empty());
        assert_eq!(decode_board(b""), Board::empty());
    }

    #[test]
    fn test_missing_close_bracket_falls_back_to_empty_board() {
        assert_eq!(decode_board(br#"{"board": ["X","O","X""#), Board::empty());
    }

    #[test]
    fn test_short_list_leaves_trailing_cells_empty() {
        let board = decode_board(br#"{"board": ["X","O"]}"#);
        assert_eq!(board, Board::from_labels(&["X", "O"]));
        assert_eq!(board.count(Mark::Empty), 7);
    }

    #[test]
    fn test_empty_list_decodes_to_empty_board() {
        assert_eq!(decode_board(br#"{"board": []}"#), Board::empty());
    }

    #[test]
    fn test_extra_values_are_dropped() {
        let body = br#"["X","X","X","X","X","X","X","X","O","O","O"]"#;
        let board = decode_board(body);

        assert_eq!(board.count(Mark::X), 8);
        assert_eq!(board.get(8), Some(Mark::O));
    }

    #[test]
    fn test_first_close_bracket_ends_the_list_even_inside_quotes() {
        let board = decode_board(br#"["X","a]b","O"]"#);
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(1), Some(Mark::Foreign { id: 0, lead: b'a' }));
        assert_eq!(board.get(2), Some(Mark::Empty));
    }

    #[test]
    fn test_commas_inside_quotes_are_kept() {
        let board = decode_board(br#"["X,O","X,O","","","","","","",""]"#);
        assert_eq!(board.get(0), Some(Mark::Foreign { id: 0, lead: b'X' }));
        assert_eq!(board.get(1), Some(Mark::Foreign { id: 0, lead: b'X' }));
        assert_eq!(board.count(Mark::Empty), 7);
    }

    #[test]
    fn test_invalid_utf8_labels_stay_distinct() {
        let body = b"[\"\xff\",\"\xfe\",\"\xff\",\"O\",\"O\",\"O\",\"\",\"\",\"\"]";
        let board = decode_board(body);

        assert_ne!(board.get(0), board.get(1));
        assert_eq!(board.get(0), board.get(2));
        assert_eq!(evaluate(&board), GameOutcome::OWins);
    }

    #[test]
    fn test_x_prefixed_line_decodes_to_an_x_win() {
        let board = decode_board(br#"["Xa","Xa","Xa","","O","","","",""]"#);
        assert_eq!(evaluate(&board), GameOutcome::XWins);
        assert_eq!(minimax_score(board, 0, true), -10);
    }

    #[test]
    fn test_unquoted_values_are_read_as_empty() {
        let board = decode_board(b"[X,O,null]");
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn test_only_the_first_list_is_read() {
        let board = decode_board(br#"{"board": ["O"], "history": ["X","X"]}"#);
        assert_eq!(board.get(0), Some(Mark::O));
        assert_eq!(board.count(Mark::X), 0);
    }
}
