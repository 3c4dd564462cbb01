use serde::{Deserialize, Serialize};

/// A cell coordinate. Signed, so that neighbors of edge cells can point outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    pub fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// The shifted position, or `None` if it isn't representable.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(d_row)?,
            col: self.col.checked_add(d_col)?,
        })
    }
}

impl From<[isize; 2]> for Position {
    fn from(value: [isize; 2]) -> Self {
        Self {
            row: value[0],
            col: value[1],
        }
    }
}

impl From<(isize, isize)> for Position {
    fn from((row, col): (isize, isize)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for [isize; 2] {
    fn from(value: Position) -> Self {
        [value.row, value.col]
    }
}
