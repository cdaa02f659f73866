use super::util::Position;
use super::N_SQUARES;

/// Maximum number of neighbours any square can have (interior squares)
const MAX_NEIGHBORS: usize = 8;

/// The board as a graph: each square is a vertex and the edges join squares
/// that touch horizontally, vertically or diagonally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    /// Neighbour indices per square, ascending, padded past `counts[i]`
    edges: [[usize; MAX_NEIGHBORS]; N_SQUARES],
    counts: [usize; N_SQUARES],
}

/// The one graph every search walks
pub static GRAPH: AdjacencyGraph = AdjacencyGraph::build();

impl AdjacencyGraph {
    /// Derives the graph from grid geometry
    pub const fn build() -> Self {
        let mut edges = [[0; MAX_NEIGHBORS]; N_SQUARES];
        let mut counts = [0; N_SQUARES];
        let mut i = 0;
        while i < N_SQUARES {
            let from = Position::from_index(i);
            let mut j = 0;
            while j < N_SQUARES {
                if from.touches(&Position::from_index(j)) {
                    edges[i][counts[i]] = j;
                    counts[i] += 1;
                }
                j += 1;
            }
            i += 1;
        }
        Self { edges, counts }
    }

    /// Squares reachable from `index` in one step. Panics if `index` is off the board.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.edges[index][..self.counts[index]]
    }

    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Checks that the path never revisits a square and only takes single steps
    pub fn is_valid_path(&self, path: &[usize]) -> bool {
        let mut seen = [false; N_SQUARES];
        for &i in path {
            if i >= N_SQUARES || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        path.windows(2).all(|w| self.is_adjacent(w[0], w[1]))
    }
}

/// Shorthand for `GRAPH.neighbors`
pub fn neighbors(index: usize) -> &'static [usize] {
    GRAPH.neighbors(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        let expected: [&[usize]; N_SQUARES] = [
            &[1, 4, 5],
            &[0, 2, 4, 5, 6],
            &[1, 3, 5, 6, 7],
            &[2, 6, 7],
            &[0, 1, 5, 8, 9],
            &[0, 1, 2, 4, 6, 8, 9, 10],
            &[1, 2, 3, 5, 7, 9, 10, 11],
            &[2, 3, 6, 10, 11],
            &[4, 5, 9, 12, 13],
            &[4, 5, 6, 8, 10, 12, 13, 14],
            &[5, 6, 7, 9, 11, 13, 14, 15],
            &[6, 7, 10, 14, 15],
            &[8, 9, 13],
            &[8, 9, 10, 12, 14],
            &[9, 10, 11, 13, 15],
            &[10, 11, 14],
        ];
        for (i, e) in expected.iter().enumerate() {
            assert_eq!(neighbors(i), *e, "neighbours of {}", i);
        }
    }

    #[test]
    fn test_neighbor_counts() {
        // corners, edges, interior
        for i in [0, 3, 12, 15] {
            assert_eq!(neighbors(i).len(), 3);
        }
        for i in [1, 2, 4, 7, 8, 11, 13, 14] {
            assert_eq!(neighbors(i).len(), 5);
        }
        for i in [5, 6, 9, 10] {
            assert_eq!(neighbors(i).len(), 8);
        }
    }

    #[test]
    fn test_symmetric() {
        for a in 0..N_SQUARES {
            for &b in neighbors(a) {
                assert!(GRAPH.is_adjacent(b, a));
            }
        }
    }

    #[test]
    fn test_valid_path() {
        assert!(GRAPH.is_valid_path(&[0, 5, 10, 15]));
        assert!(!GRAPH.is_valid_path(&[0, 2]));
        assert!(!GRAPH.is_valid_path(&[0, 1, 0]));
        assert!(!GRAPH.is_valid_path(&[15, 16]));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range() {
        neighbors(16);
    }
}
