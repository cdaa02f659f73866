//! Finds every word on a 4x4 scramble board and scores it.
//!
//! ```
//! use scrambler::scramble::{dictionary::Trie, scramble};
//!
//! let trie = Trie::build(["ab", "af"]);
//! let found = scramble("ABCD EFGH IJKL MNOP", None, &trie).unwrap();
//! assert_eq!(found["AB"].score, 5);
//! assert_eq!(found["AF"].path, vec![0, 5]);
//! ```
pub mod errors;
pub mod log;
pub mod scramble;
pub mod utils;
