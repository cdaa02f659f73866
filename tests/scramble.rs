//! End to end checks of the scramble engine against a small word list.

use scrambler::errors::ScrambleError;
use scrambler::scramble::board::{Board, BonusSquares, SquareEffect};
use scrambler::scramble::dictionary::Trie;
use scrambler::scramble::engine::{scramble_many, ScrambleOptions};
use scrambler::scramble::graph::GRAPH;
use scrambler::scramble::report::Report;
use scrambler::scramble::score::{calc_score, length_bonus};
use scrambler::scramble::scramble;

const WORDS: &[&str] = &[
    "at", "ate", "eat", "eats", "east", "seat", "seats", "set", "sets", "tea", "teas", "tease",
    "state", "states", "taste", "tastes", "stats", "rats", "star", "stare", "stares", "rate",
    "rates", "tear", "tears", "treat", "treats", "quest", "queen", "quiet", "quit", "suit",
];

const BOARDS: &[&str] = &[
    "SEAT TAES SEAT TAES",
    "STAR ETAS RATE SETS",
    "QUES IXET TEAR SUIT",
    "ABCD EFGH IJKL MNOP",
];

fn trie() -> Trie {
    Trie::build(WORDS)
}

#[test]
fn paths_are_connected_and_spell_the_word() {
    let trie = trie();
    for board_text in BOARDS {
        let board = Board::parse(board_text).unwrap();
        let found = scramble(board_text, None, &trie).unwrap();
        for (word, hit) in &found {
            assert!(GRAPH.is_valid_path(&hit.path), "{} on {}", word, board_text);
            assert_eq!(&board.spell(&hit.path), word);
            assert!(trie.contains(word));
        }
    }
}

#[test]
fn scores_match_their_paths() {
    let trie = trie();
    let bonus = BonusSquares::new()
        .with(SquareEffect::DoubleWord, 5)
        .with(SquareEffect::TripleLetter, 6)
        .with(SquareEffect::DoubleLetter, 6)
        .with(SquareEffect::TripleWord, 15);
    for board_text in BOARDS {
        let found = scramble(board_text, Some(&bonus), &trie).unwrap();
        for (word, hit) in &found {
            assert_eq!(calc_score(word, &hit.path, &bonus).unwrap(), hit.score);
        }
    }
}

#[test]
fn repeated_runs_agree() {
    let trie = trie();
    for board_text in BOARDS {
        let a = scramble(board_text, None, &trie).unwrap();
        let b = scramble(board_text, None, &trie).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn nothing_found_without_matching_words() {
    let trie = Trie::build(["Z", "ZZ"]);
    for board_text in BOARDS {
        assert!(scramble(board_text, None, &trie).unwrap().is_empty());
    }
    let empty = Trie::build(Vec::<String>::new());
    assert!(scramble(BOARDS[0], None, &empty).unwrap().is_empty());
}

#[test]
fn quest_on_a_board() {
    let found = scramble(BOARDS[2], None, &trie()).unwrap();
    // Q U then either E (2 or 6), then S T down the right edge. The walk
    // through square 6 is searched last and wins.
    let quest = &found["QUEST"];
    assert_eq!(quest.path, vec![0, 1, 6, 3, 7]);
    assert_eq!(quest.score, 13);
    assert!(!found.contains_key("QEST"));
}

#[test]
fn length_bonus_never_drops_from_five_to_ten() {
    let bonuses = (5..=10).map(length_bonus).collect::<Vec<_>>();
    assert_eq!(bonuses, vec![3, 6, 10, 15, 20, 28]);
    assert!(bonuses.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn batch_matches_single_runs() {
    let trie = trie();
    let options = ScrambleOptions::default();
    let batch = scramble_many(BOARDS, &options, &trie);
    for (board_text, result) in BOARDS.iter().zip(batch) {
        assert_eq!(result.unwrap(), scramble(board_text, None, &trie).unwrap());
    }
}

#[test]
fn invalid_input_is_rejected() {
    let trie = trie();
    assert!(matches!(
        scramble("SEAT TAES SEAT", None, &trie),
        Err(ScrambleError::InvalidBoard { len: 12, .. })
    ));
    assert!(matches!(
        scramble("SEAT TAES SEAT TAE?", None, &trie),
        Err(ScrambleError::InvalidLetter { letter: '?', position: 15 })
    ));
}

#[test]
fn report_totals() {
    let found = scramble(BOARDS[1], None, &trie()).unwrap();
    let report = Report::new(&found);
    assert_eq!(report.len(), found.len());
    let total: u32 = found.values().map(|f| f.score).sum();
    assert_eq!(report.top_sum(usize::MAX), total);
    assert!(report
        .words
        .windows(2)
        .all(|w| w[0].score >= w[1].score));
}
