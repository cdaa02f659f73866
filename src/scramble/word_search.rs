use super::board::Board;
use super::dictionary::{Trie, TrieNode};
use super::graph::AdjacencyGraph;
use super::N_SQUARES;

/*
    Depth first search over the board graph. The trie is walked in lockstep with
    the path so a branch is dropped as soon as its letters stop being the prefix
    of some dictionary word.
*/

/// A word spelled by walking the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub word: String,
    pub path: Vec<usize>,
}

struct PathSearch<'a> {
    graph: &'a AdjacencyGraph,
    board: &'a Board,
    /// Squares used by the current path
    visited: [bool; N_SQUARES],
    path: Vec<usize>,
}

impl<'a> PathSearch<'a> {
    fn extend(&mut self, node: &TrieNode, candidates: &[usize], hits: &mut Vec<Hit>) {
        for &square in candidates {
            if self.visited[square] {
                continue;
            }
            let Some(child) = node.next_node(self.board[square]) else {
                continue;
            };

            self.visited[square] = true;
            self.path.push(square);

            if child.is_word() {
                hits.push(Hit {
                    word: self.board.spell(&self.path),
                    path: self.path.clone(),
                });
            }
            if !child.is_leaf() {
                let graph = self.graph;
                self.extend(child, graph.neighbors(square), hits);
            }

            self.path.pop();
            self.visited[square] = false;
        }
    }
}

/// Finds every path on the board that spells a dictionary word. Paths start
/// from each square in index order and branch to neighbours in index order,
/// so the hits come out in a fixed order for a given board.
pub fn search(graph: &AdjacencyGraph, trie: &Trie, board: &Board) -> Vec<Hit> {
    let mut searcher = PathSearch {
        graph,
        board,
        visited: [false; N_SQUARES],
        path: Vec::with_capacity(N_SQUARES),
    };
    let starts = (0..N_SQUARES).collect::<Vec<_>>();
    let mut hits = Vec::new();
    searcher.extend(trie.root(), &starts, &mut hits);
    hits
}
