use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::util::normalize_string;
use super::N_SQUARES;
use crate::errors::ScrambleError;

/// The 16 tiles of a game, row by row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [char; N_SQUARES],
}

impl Board {
    /// Normalizes the input and checks that it holds exactly 16 letters A-Z
    pub fn parse(input: &str) -> Result<Self, ScrambleError> {
        let normalized = normalize_string(input);
        let letters = normalized.chars().collect::<Vec<_>>();
        let tiles: [char; N_SQUARES] =
            letters
                .try_into()
                .map_err(|letters: Vec<char>| ScrambleError::InvalidBoard {
                    len: letters.len(),
                    board: normalized.clone(),
                })?;
        Self::from_tiles(tiles)
    }

    /// Builds a board from pre-split tiles, upper casing them
    pub fn from_tiles(tiles: [char; N_SQUARES]) -> Result<Self, ScrambleError> {
        let tiles = tiles.map(|c| c.to_ascii_uppercase());
        if let Some((position, &letter)) = tiles
            .iter()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_uppercase())
        {
            return Err(ScrambleError::InvalidLetter { letter, position });
        }
        Ok(Self { tiles })
    }

    pub fn tiles(&self) -> &[char; N_SQUARES] {
        &self.tiles
    }

    /// Concatenates the letters under each square of the path
    pub fn spell(&self, path: &[usize]) -> String {
        path.iter().map(|&i| self.tiles[i]).collect()
    }

    /// The distinct letters on the board
    pub fn letters(&self) -> String {
        self.tiles.iter().collect::<BTreeSet<_>>().into_iter().collect()
    }
}

impl std::ops::Index<usize> for Board {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tiles[index]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.tiles.chunks(super::BOARD_SIZE) {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareEffect {
    DoubleWord,
    DoubleLetter,
    TripleWord,
    TripleLetter,
}

/// Squares that multiply letter or word scores. A square may carry several
/// effects; they all apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusSquares {
    pub dw: BTreeSet<usize>,
    pub dl: BTreeSet<usize>,
    pub tw: BTreeSet<usize>,
    pub tl: BTreeSet<usize>,
}

impl BonusSquares {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, effect: SquareEffect, index: usize) -> Self {
        self.set_mut(effect).insert(index);
        self
    }

    pub fn set(&self, effect: SquareEffect) -> &BTreeSet<usize> {
        match effect {
            SquareEffect::DoubleWord => &self.dw,
            SquareEffect::DoubleLetter => &self.dl,
            SquareEffect::TripleWord => &self.tw,
            SquareEffect::TripleLetter => &self.tl,
        }
    }

    fn set_mut(&mut self, effect: SquareEffect) -> &mut BTreeSet<usize> {
        match effect {
            SquareEffect::DoubleWord => &mut self.dw,
            SquareEffect::DoubleLetter => &mut self.dl,
            SquareEffect::TripleWord => &mut self.tw,
            SquareEffect::TripleLetter => &mut self.tl,
        }
    }

    pub fn has(&self, effect: SquareEffect, index: usize) -> bool {
        self.set(effect).contains(&index)
    }

    /// Adds every square of `other` to this configuration
    pub fn merge(&mut self, other: &BonusSquares) {
        self.dw.extend(&other.dw);
        self.dl.extend(&other.dl);
        self.tw.extend(&other.tw);
        self.tl.extend(&other.tl);
    }

    /// Rejects squares that are off the board
    pub fn validate(&self) -> Result<(), ScrambleError> {
        match [&self.dw, &self.dl, &self.tw, &self.tl]
            .into_iter()
            .flatten()
            .find(|&&i| i >= N_SQUARES)
        {
            Some(&index) => Err(ScrambleError::InvalidBonusSquare { index }),
            None => Ok(()),
        }
    }

    /// Loads a configuration such as `{"dw": [3], "tl": [0, 9]}`. Missing
    /// fields are empty.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrambleError> {
        let reader = BufReader::new(File::open(path)?);
        let bonus: BonusSquares = serde_json::from_reader(reader)?;
        bonus.validate()?;
        Ok(bonus)
    }
}
