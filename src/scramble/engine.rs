use std::collections::HashMap;

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use super::board::{Board, BonusSquares};
use super::dictionary::Trie;
use super::graph::GRAPH;
use super::score::calc_score;
use super::word_search::search;
use crate::errors::ScrambleError;

/// Score and one path for a word found on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundWord {
    pub score: u32,
    pub path: Vec<usize>,
}

/// Found words keyed by their spelling on the board (before any QU collapsing)
pub type FoundWords = HashMap<String, FoundWord>;

/// What to keep when the same word can be walked along several paths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The path found last by the search replaces earlier ones
    #[default]
    LastPath,
    /// The highest scoring path is kept; ties keep the earlier path
    BestScore,
}

/// Options for a scramble run
#[derive(Debug, Clone, Default)]
pub struct ScrambleOptions {
    pub bonus: BonusSquares,
    pub duplicates: DuplicatePolicy,
}

impl ScrambleOptions {
    pub fn with_bonus(bonus: BonusSquares) -> Self {
        Self {
            bonus,
            ..Default::default()
        }
    }
}

/// Finds and scores all words on a board given as text
pub fn scramble(
    board: &str,
    bonus: Option<&BonusSquares>,
    trie: &Trie,
) -> Result<FoundWords, ScrambleError> {
    let board = Board::parse(board)?;
    let options = ScrambleOptions::with_bonus(bonus.cloned().unwrap_or_default());
    scramble_board(&board, &options, trie)
}

/// Finds and scores all words on an already validated board
pub fn scramble_board(
    board: &Board,
    options: &ScrambleOptions,
    trie: &Trie,
) -> Result<FoundWords, ScrambleError> {
    options.bonus.validate()?;
    debug!("Scrambling {}", board.tiles().iter().collect::<String>());
    if trie.is_empty() {
        warn!("Scrambling with an empty dictionary");
    }

    let mut found_words = FoundWords::new();
    for hit in search(&GRAPH, trie, board) {
        let score = calc_score(&hit.word, &hit.path, &options.bonus)?;
        let keep = match (options.duplicates, found_words.get(&hit.word)) {
            (DuplicatePolicy::BestScore, Some(prev)) => score > prev.score,
            _ => true,
        };
        if keep {
            found_words.insert(
                hit.word,
                FoundWord {
                    score,
                    path: hit.path,
                },
            );
        }
    }

    info!("Found {} words", found_words.len());
    Ok(found_words)
}

/// Scrambles many boards in parallel against one shared dictionary. Results
/// come back in the order of `boards`.
pub fn scramble_many<S>(
    boards: &[S],
    options: &ScrambleOptions,
    trie: &Trie,
) -> Vec<Result<FoundWords, ScrambleError>>
where
    S: AsRef<str> + Sync,
{
    boards
        .par_iter()
        .map(|b| Board::parse(b.as_ref()).and_then(|board| scramble_board(&board, options, trie)))
        .collect()
}
