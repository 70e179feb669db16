use std::fmt;

use super::types::Mark;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;
pub const CENTER: usize = 4;

/// A 3x3 board stored in row-major order:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
///
/// Boards are small `Copy` values. Anything that explores hypothetical
/// positions works on its own copy, so a caller never sees a trial mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from cell labels as they appear on the wire.
    ///
    /// `""` is empty, `"X"` and `"O"` are the players, anything else becomes
    /// a [`Mark::Foreign`] interned by first appearance. Labels are raw bytes
    /// and need not be valid UTF-8. Missing labels stay empty and labels past
    /// the ninth are ignored.
    pub fn from_labels<S: AsRef<[u8]>>(labels: &[S]) -> Self {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut foreign: Vec<&[u8]> = Vec::new();

        for (cell, label) in cells.iter_mut().zip(labels) {
            *cell = match label.as_ref() {
                b"" => Mark::Empty,
                b"X" => Mark::X,
                b"O" => Mark::O,
                other => {
                    let id = match foreign.iter().position(|&seen| seen == other) {
                        Some(id) => id,
                        None => {
                            foreign.push(other);
                            foreign.len() - 1
                        }
                    };
                    Mark::Foreign {
                        id: id as u8,
                        lead: other[0],
                    }
                }
            };
        }

        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    /// Returns a copy of the board with `mark` placed at `index`.
    /// Out-of-range indices leave the copy unchanged.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        if let Some(cell) = next.cells.get_mut(index) {
            *cell = mark;
        }
        next
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row_index > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                let symbol = match cell {
                    Mark::Empty => '.',
                    Mark::X => 'X',
                    Mark::O => 'O',
                    Mark::Foreign { .. } => '?',
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}
