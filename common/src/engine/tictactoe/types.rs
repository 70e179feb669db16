/// Contents of a single cell.
///
/// `Foreign` stands for any cell label that is neither empty nor "X"/"O".
/// Each distinct label (compared byte for byte) gets its own `id`, so two
/// foreign cells are equal exactly when they came from the same label.
/// `lead` is the label's first byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
    Foreign { id: u8, lead: u8 },
}

impl Mark {
    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }

    /// Player credited when a line of this mark is completed. A foreign line
    /// counts for the player its labels start with, so `"Xa"` scores as X.
    pub fn scoring_player(&self) -> Option<Mark> {
        match self {
            Mark::X | Mark::Foreign { lead: b'X', .. } => Some(Mark::X),
            Mark::O | Mark::Foreign { lead: b'O', .. } => Some(Mark::O),
            Mark::Empty | Mark::Foreign { .. } => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    XWins,
    OWins,
    Draw,
    InProgress,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        *self != GameOutcome::InProgress
    }
}
