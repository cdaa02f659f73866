use super::{BOARD_SIZE, N_SQUARES};

/// Characters dropped from board and dictionary input before indexing
const STRIPPED: [char; 6] = [',', '\'', '-', '_', '|', ' '];

/// Converts a string containing spaces, line breaks, commas etc into a
/// stream of upper case letters.
pub fn normalize_string(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && !STRIPPED.contains(c))
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// A square on the 4x4 grid.
///
/// ```text
///     /-------------\
///     |  0  1  2  3 |
///     |  4  5  6  7 |
///     |  8  9 10 11 |
///     | 12 13 14 15 |
///     \-------------/
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a 1d board index back to row/col. Panics past the last square.
    pub const fn from_index(index: usize) -> Self {
        assert!(index < N_SQUARES, "board index out of range");
        Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    /// Converts the row/col to a 1d index
    pub const fn as_index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Whether the two squares touch, diagonals included
    pub const fn touches(&self, other: &Position) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && !(dr == 0 && dc == 0)
    }
}
