use std::fmt;

use serde::Serialize;

use super::engine::FoundWords;

/// One line of the ranked listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedWord {
    pub word: String,
    pub score: u32,
    pub path: Vec<usize>,
    /// Sum of this score and every score ranked above it
    pub running_total: u32,
}

/// Found words ordered best first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub words: Vec<RankedWord>,
}

impl Report {
    /// Sorts by score, highest first, then alphabetically
    pub fn new(found: &FoundWords) -> Self {
        let mut entries = found.iter().collect::<Vec<_>>();
        entries.sort_by(|a, b| b.1.score.cmp(&a.1.score).then_with(|| a.0.cmp(b.0)));

        let mut total = 0;
        let words = entries
            .into_iter()
            .map(|(word, found)| {
                total += found.score;
                RankedWord {
                    word: word.clone(),
                    score: found.score,
                    path: found.path.clone(),
                    running_total: total,
                }
            })
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Points for playing the best `n` words, or all of them if there are fewer
    pub fn top_sum(&self, n: usize) -> u32 {
        match self.words.get(n.saturating_sub(1)).or(self.words.last()) {
            Some(w) => w.running_total,
            None => 0,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for w in &self.words {
            writeln!(f, "{} {} {}\t\t{:?}", w.running_total, w.score, w.word, w.path)?;
        }
        writeln!(f, "Total words: {}", self.len())?;
        writeln!(f, "Sum (top 20): {}", self.top_sum(20))?;
        write!(f, "Sum (top 50): {}", self.top_sum(50))
    }
}
