use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::word::{WORD_LEN, Word};

/// Per-letter classification. Ordered so that `Right > Close > Wrong`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Wrong,
    Close,
    Right,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterVerdict {
    pub value: char,
    pub result: Verdict,
}

/// The verdicts for one submitted guess, index-aligned with its letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuessRecord([LetterVerdict; WORD_LEN]);

impl GuessRecord {
    pub fn iter(&self) -> impl Iterator<Item = &LetterVerdict> {
        self.0.iter()
    }

    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|lv| lv.result == Verdict::Right)
    }

    pub fn verdicts(&self) -> [Verdict; WORD_LEN] {
        self.0.map(|lv| lv.result)
    }
}

/// Scores `guess` against `answer`.
///
/// Exact matches are resolved first and consume their letter from the
/// answer's pool; the remaining positions are then scanned left to right and
/// only marked `Close` while the pool still holds that letter.
pub fn evaluate(guess: &Word, answer: &Word) -> GuessRecord {
    let guess = guess.letters();
    let answer = answer.letters();

    let mut pool: HashMap<char, usize> = HashMap::new();
    for &c in answer {
        *pool.entry(c).or_insert(0) += 1;
    }

    let mut results = [Verdict::Wrong; WORD_LEN];

    // Green pass
    for (i, (&g, &a)) in guess.iter().zip(answer).enumerate() {
        if g == a {
            results[i] = Verdict::Right;
            if let Some(n) = pool.get_mut(&g) {
                *n -= 1;
            }
        }
    }

    // Yellow pass
    for (i, &g) in guess.iter().enumerate() {
        if results[i] == Verdict::Right {
            continue;
        }
        if let Some(n) = pool.get_mut(&g).filter(|n| **n > 0) {
            *n -= 1;
            results[i] = Verdict::Close;
        }
    }

    GuessRecord(std::array::from_fn(|i| LetterVerdict {
        value: guess[i],
        result: results[i],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Close, Right, Wrong};

    fn score(guess: &str, answer: &str) -> [Verdict; WORD_LEN] {
        let guess = Word::parse(guess).unwrap();
        let answer = Word::parse(answer).unwrap();
        evaluate(&guess, &answer).verdicts()
    }

    #[test]
    fn test_evaluate_exact_match_is_all_right() {
        for word in ["apple", "crane", "eerie", "mamma"] {
            assert_eq!(score(word, word), [Right; WORD_LEN], "{word}");
        }
    }

    #[test]
    fn test_evaluate_disjoint_letters_is_all_wrong() {
        assert_eq!(score("dutch", "apple"), [Wrong; WORD_LEN]);
        assert_eq!(score("xxxxx", "apple"), [Wrong; WORD_LEN]);
    }

    #[test]
    fn test_evaluate_phase_against_apple() {
        assert_eq!(score("phase", "apple"), [Close, Wrong, Close, Wrong, Right]);
    }

    #[test]
    fn test_evaluate_angle_against_apple() {
        assert_eq!(score("angle", "apple"), [Right, Wrong, Wrong, Right, Right]);
    }

    #[test]
    fn test_evaluate_exact_match_consumes_letter_before_close() {
        // The only 'l' in "apple" is matched at index 3, so the leading 'l' gets nothing.
        assert_eq!(score("lolly", "apple"), [Wrong, Wrong, Wrong, Right, Wrong]);
        // Both 'p's are accounted for by exact matches.
        assert_eq!(score("ppppp", "apple"), [Wrong, Right, Right, Wrong, Wrong]);
    }

    #[test]
    fn test_evaluate_duplicates_left_to_right() {
        // One 'e' in the answer: only the leftmost 'e' is close.
        assert_eq!(score("eerie", "ocean"), [Close, Wrong, Wrong, Wrong, Wrong]);
        // ...unless it is already taken by an exact match.
        assert_eq!(score("eerie", "crane"), [Wrong, Wrong, Close, Wrong, Right]);
        assert_eq!(score("geese", "those"), [Wrong, Wrong, Wrong, Right, Right]);
        assert_eq!(score("speed", "abide"), [Wrong, Wrong, Close, Wrong, Close]);
    }

    #[test]
    fn test_evaluate_letter_count_conservation() {
        let pairs = [
            ("lolly", "apple"),
            ("eerie", "crane"),
            ("mamma", "maxim"),
            ("speed", "abide"),
            ("aaaaa", "banal"),
        ];
        for (guess, answer) in pairs {
            let g = Word::parse(guess).unwrap();
            let a = Word::parse(answer).unwrap();
            let record = evaluate(&g, &a);
            for letter in 'a'..='z' {
                let hits = record
                    .iter()
                    .filter(|lv| lv.value == letter && lv.result != Wrong)
                    .count();
                let in_guess = guess.chars().filter(|&c| c == letter).count();
                let in_answer = answer.chars().filter(|&c| c == letter).count();
                assert!(hits <= in_guess.min(in_answer), "{guess}/{answer}: {letter}");
            }
        }
    }

    #[test]
    fn test_guess_record_serializes_as_array() {
        let record = evaluate(&Word::parse("phase").unwrap(), &Word::parse("apple").unwrap());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "value": "p", "result": "CLOSE" },
                { "value": "h", "result": "WRONG" },
                { "value": "a", "result": "CLOSE" },
                { "value": "s", "result": "WRONG" },
                { "value": "e", "result": "RIGHT" },
            ])
        );
    }
}
