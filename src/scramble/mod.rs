// 4x4 grid, 16 squares
pub mod board;
pub mod dictionary;
pub mod engine;
pub mod graph;
pub mod report;
pub mod score;
pub mod util;
pub mod word_search;

pub const BOARD_SIZE: usize = 4;
pub const N_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

pub use self::engine::{scramble, scramble_many, FoundWord, FoundWords};
