//! Error types for board validation, scoring and dictionary handling.
//!
//! # Error Codes
//!
//! - E001: `InvalidBoard` (Board is not 16 tiles long)
//! - E002: `InvalidLetter` (Tile has no letter score)
//! - E003: `InvalidBonusSquare` (Bonus square index is off the board)
//! - E004: `EmptyDictionary` (Dictionary source yielded no words)
//! - E005: `Io` (Reading or writing a file failed)
//! - E006: `Snapshot` (Trie snapshot could not be encoded or decoded)
//! - E007: `Json` (Bonus square file is not valid JSON)
//!
//! ```
//! use scrambler::errors::ScrambleError;
//! use scrambler::scramble::board::Board;
//!
//! let err = Board::parse("ABC").unwrap_err();
//! assert!(matches!(err, ScrambleError::InvalidBoard { len: 3, .. }));
//! assert_eq!(err.code(), "E001");
//! ```

use std::io;

use crate::scramble::N_SQUARES;

#[derive(Debug, thiserror::Error)]
pub enum ScrambleError {
    #[error("Board must be {expected} characters long (a 4x4 grid), got {len}: \"{board}\"", expected = N_SQUARES)]
    InvalidBoard { board: String, len: usize },

    #[error("No letter score for '{letter}' at position {position}")]
    InvalidLetter { letter: char, position: usize },

    #[error("Bonus square {index} is not on the board")]
    InvalidBonusSquare { index: usize },

    #[error("Dictionary \"{source_name}\" contains no words")]
    EmptyDictionary { source_name: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Trie snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("Invalid bonus square file: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScrambleError {
    /// Stable code for documentation lookup
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidBoard { .. } => "E001",
            Self::InvalidLetter { .. } => "E002",
            Self::InvalidBonusSquare { .. } => "E003",
            Self::EmptyDictionary { .. } => "E004",
            Self::Io(_) => "E005",
            Self::Snapshot(_) => "E006",
            Self::Json(_) => "E007",
        }
    }

    /// Optional hint for the user
    pub const fn help(&self) -> Option<&'static str> {
        match self {
            Self::InvalidBoard { .. } => {
                Some("List the 16 tiles row by row; spaces and commas are ignored")
            }
            Self::InvalidLetter { .. } => Some("Tiles must be the letters A-Z"),
            Self::InvalidBonusSquare { .. } => Some("Squares are numbered 0 to 15, row by row"),
            Self::EmptyDictionary { .. } => Some("The word list should hold one word per line"),
            _ => None,
        }
    }

    /// Message with code and help, for the command line
    pub fn display_detailed(&self) -> String {
        match self.help() {
            Some(help) => format!("[{}] {}\n  help: {}", self.code(), self, help),
            None => format!("[{}] {}", self.code(), self),
        }
    }
}
