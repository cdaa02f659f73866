use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::util::normalize_string;
use crate::errors::ScrambleError;
use crate::utils::serialization;

/// Prefix tree node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieNode {
    next: HashMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// Adds an already-normalized word below this node
    fn add_word(&mut self, word: &str) {
        let mut node = self;
        for c in word.chars() {
            node = node.next.entry(c).or_default();
        }
        node.terminal = true;
    }

    pub fn next_node(&self, c: char) -> Option<&TrieNode> {
        self.next.get(&c)
    }

    /// True if the letters spelled from the root to here form a dictionary entry
    pub fn is_word(&self) -> bool {
        self.terminal
    }

    pub fn is_leaf(&self) -> bool {
        self.next.is_empty()
    }
}

/// Dictionary index. Built once and shared read-only between searches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    /// Builds the trie from a list of words. Each word is normalized first and
    /// words that normalize to nothing are skipped.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_filtered(words, |_| true)
    }

    /// Builds the trie keeping only the words that can be spelled from `letters`,
    /// ignoring how many times each letter appears.
    pub fn build_restricted<I, S>(words: I, letters: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed: HashSet<char> = normalize_string(letters).chars().collect();
        Self::build_filtered(words, |w| w.chars().all(|c| allowed.contains(&c)))
    }

    fn build_filtered<I, S, F>(words: I, keep: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> bool,
    {
        let mut trie = Trie::default();
        for word in words {
            let word = normalize_string(word.as_ref());
            if word.is_empty() || !keep(&word) {
                continue;
            }
            trie.root.add_word(&word);
            trie.word_count += 1;
        }
        info!("Dictionary contains {} words", trie.word_count);
        if trie.word_count == 0 {
            warn!("Dictionary is empty; no board will produce any words");
        }
        trie
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of words inserted, duplicates included
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Walks the trie along `prefix`, returning the node reached
    pub fn find(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.next_node(c))
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.find(word).map_or(false, TrieNode::is_word)
    }
}

/// Reads a word file with one entry per line. Blank lines are dropped.
pub fn read_word_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ScrambleError> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = normalize_string(&line?);
        if word.is_empty() {
            continue;
        }
        words.push(word);
    }
    if words.is_empty() {
        return Err(ScrambleError::EmptyDictionary {
            source_name: path.as_ref().display().to_string(),
        });
    }
    Ok(words)
}

/// A full (unrestricted) trie saved together with the word file it came from
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    source: PathBuf,
    trie: Trie,
}

/// Where a trie comes from and how it is cached
#[derive(Debug, Clone, Copy)]
pub struct DictionarySource<'a> {
    /// Word file, one entry per line
    pub words: &'a Path,
    /// Snapshot of the full trie built from `words`
    pub snapshot: Option<&'a Path>,
    /// Keep only words spelled from these letters. Restricted tries are never
    /// written to or read from the snapshot.
    pub restrict_to: Option<&'a str>,
}

impl DictionarySource<'_> {
    /// Loads the trie, reusing the snapshot when it was built from the same
    /// word file and rewriting it otherwise.
    pub fn load(&self) -> Result<Trie, ScrambleError> {
        if let Some(letters) = self.restrict_to {
            if self.snapshot.is_some() {
                warn!("Ignoring snapshot for a dictionary restricted to the board letters");
            }
            return Ok(Trie::build_restricted(read_word_file(self.words)?, letters));
        }

        let snapshot = match self.snapshot {
            Some(path) => path,
            None => return Ok(Trie::build(read_word_file(self.words)?)),
        };

        if snapshot.exists() {
            let cached: Snapshot = serialization::load_from_disk(snapshot)?;
            if cached.source == self.words {
                info!("Loaded dictionary snapshot {}", snapshot.display());
                return Ok(cached.trie);
            }
            info!(
                "Snapshot {} was built from {}; rebuilding",
                snapshot.display(),
                cached.source.display()
            );
        }

        let cached = Snapshot {
            source: self.words.to_path_buf(),
            trie: Trie::build(read_word_file(self.words)?),
        };
        serialization::save_to_disk(&cached, snapshot)?;
        info!("Wrote dictionary snapshot {}", snapshot.display());
        Ok(cached.trie)
    }
}
