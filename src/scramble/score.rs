use super::board::{BonusSquares, SquareEffect};
use crate::errors::ScrambleError;

/// Letter values, A to Z. J, K, V and X are zero until their real values are known.
pub const SCORES: [u32; 26] = [
    1, 4, 4, 2, 1, 4, 3, 3, 1, 0, 0, 2, 4, 2, 1, 4, 10, 1, 1, 1, 2, 0, 4, 0, 3, 10,
];

/// Base value of a single letter, `None` outside A-Z
pub fn letter_score(letter: char) -> Option<u32> {
    if letter.is_ascii_uppercase() {
        Some(SCORES[letter as usize - 'A' as usize])
    } else {
        None
    }
}

/// Bonus added for long words, independent of multipliers
pub fn length_bonus(len: usize) -> u32 {
    match len {
        5 => 3,
        6 => 6,
        7 => 10,
        8 => 15,
        9 => 20,
        10 => 28,
        _ => 0,
    }
}

/// Scores a word laid along `path`.
///
/// The first "QU" is collapsed to "Q" before anything else, so the letters
/// after it line up with the path shifted by one square and the length bonus
/// counts the shortened word.
pub fn calc_score(word: &str, path: &[usize], bonus: &BonusSquares) -> Result<u32, ScrambleError> {
    let word = word.replacen("QU", "Q", 1);

    let mut word_score = 0;
    let mut word_multiplier = 1;
    let mut word_len = 0;

    for (i, (letter, &index)) in word.chars().zip(path).enumerate() {
        let base = letter_score(letter).ok_or(ScrambleError::InvalidLetter {
            letter,
            position: i,
        })?;

        let mut letter_multiplier = 1;
        if bonus.has(SquareEffect::DoubleLetter, index) {
            letter_multiplier *= 2;
        }
        if bonus.has(SquareEffect::TripleLetter, index) {
            letter_multiplier *= 3;
        }
        if bonus.has(SquareEffect::DoubleWord, index) {
            word_multiplier *= 2;
        }
        if bonus.has(SquareEffect::TripleWord, index) {
            word_multiplier *= 3;
        }
        word_score += letter_multiplier * base;
        word_len += 1;
    }

    Ok(word_multiplier * word_score + length_bonus(word_len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(word: &str, bonus: &BonusSquares) -> u32 {
        let path = (0..word.len()).collect::<Vec<_>>();
        calc_score(word, &path, bonus).unwrap()
    }

    #[test]
    fn test_letter_scores() {
        assert_eq!(letter_score('A'), Some(1));
        assert_eq!(letter_score('B'), Some(4));
        assert_eq!(letter_score('J'), Some(0));
        assert_eq!(letter_score('Q'), Some(10));
        assert_eq!(letter_score('Z'), Some(10));
        assert_eq!(letter_score('a'), None);
        assert_eq!(letter_score('1'), None);
    }

    #[test]
    fn test_length_bonus() {
        let expected = [0, 0, 0, 0, 0, 3, 6, 10, 15, 20, 28, 0, 0, 0, 0, 0, 0];
        for (len, &b) in expected.iter().enumerate() {
            assert_eq!(length_bonus(len), b, "length {}", len);
        }
        for len in 5..10 {
            assert!(length_bonus(len + 1) >= length_bonus(len));
        }
    }

    #[test]
    fn test_plain_words() {
        let none = BonusSquares::new();
        assert_eq!(score("AB", &none), 5);
        assert_eq!(score("CAT", &none), 6);
        // 4+1+10+4+1+2 + 6
        assert_eq!(score("MEZCAL", &none), 28);
    }

    #[test]
    fn test_letter_multipliers() {
        // C A T on squares 0 1 2, A tripled
        let bonus = BonusSquares::new().with(SquareEffect::TripleLetter, 1);
        assert_eq!(score("CAT", &bonus), 4 + 3 + 1);

        let bonus = BonusSquares::new()
            .with(SquareEffect::TripleLetter, 0)
            .with(SquareEffect::DoubleLetter, 0);
        assert_eq!(score("CAT", &bonus), 24 + 1 + 1);
    }

    #[test]
    fn test_word_multipliers_compound() {
        let bonus = BonusSquares::new()
            .with(SquareEffect::DoubleWord, 0)
            .with(SquareEffect::TripleWord, 2);
        assert_eq!(score("CAT", &bonus), 6 * 6);

        let bonus = BonusSquares::new()
            .with(SquareEffect::DoubleWord, 0)
            .with(SquareEffect::DoubleWord, 1)
            .with(SquareEffect::DoubleLetter, 1);
        // two double word squares make four
        assert_eq!(score("CAT", &bonus), 4 * (4 + 2 + 1));
    }

    #[test]
    fn test_length_bonus_not_multiplied() {
        let bonus = BonusSquares::new().with(SquareEffect::DoubleWord, 0);
        // S T A R E = 1+1+1+1+1
        assert_eq!(score("STARE", &bonus), 2 * 5 + 3);
    }

    #[test]
    fn test_qu_collapses() {
        let none = BonusSquares::new();
        // QEEN: 10+1+1+2, four letters so no length bonus
        assert_eq!(score("QUEEN", &none), 14);
        // QEST: 10+1+1+1
        assert_eq!(score("QUEST", &none), 13);
        // only the first QU collapses
        assert_eq!(score("QUQU", &none), 10 + 10 + 2);
    }

    #[test]
    fn test_qu_shifts_path_alignment() {
        // Q on square 0, U on 1, E on 2 ... After collapsing, E is scored on
        // square 1 and the last square of the path is never read.
        let bonus = BonusSquares::new()
            .with(SquareEffect::TripleLetter, 1)
            .with(SquareEffect::TripleWord, 4);
        let path = [0, 1, 2, 3, 4];
        assert_eq!(calc_score("QUEEN", &path, &bonus).unwrap(), 10 + 3 + 1 + 2);
    }

    #[test]
    fn test_invalid_letter() {
        let err = calc_score("CA7", &[0, 1, 2], &BonusSquares::new()).unwrap_err();
        assert!(matches!(
            err,
            ScrambleError::InvalidLetter {
                letter: '7',
                position: 2
            }
        ));
    }
}
