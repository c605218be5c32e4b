use std::collections::{BTreeMap, BTreeSet};

use crate::scoring::{GuessRecord, Verdict};

/// Every guessed letter, bucketed by the best verdict it has received.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LetterSummary {
    pub wrong: BTreeSet<char>,
    pub close: BTreeSet<char>,
    pub right: BTreeSet<char>,
}

/// Folds a guess history into three disjoint letter sets.
///
/// Position and guess order do not matter: a letter ends up in the set of
/// its strongest verdict anywhere in the history.
pub fn aggregate(history: &[GuessRecord]) -> LetterSummary {
    let mut best: BTreeMap<char, Verdict> = BTreeMap::new();

    for lv in history.iter().flat_map(GuessRecord::iter) {
        best.entry(lv.value)
            .and_modify(|v| *v = (*v).max(lv.result))
            .or_insert(lv.result);
    }

    let mut summary = LetterSummary::default();
    for (letter, verdict) in best {
        let bucket = match verdict {
            Verdict::Right => &mut summary.right,
            Verdict::Close => &mut summary.close,
            Verdict::Wrong => &mut summary.wrong,
        };
        bucket.insert(letter);
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{scoring::evaluate, word::Word};

    fn history(answer: &str, guesses: &[&str]) -> Vec<GuessRecord> {
        let answer = Word::parse(answer).unwrap();
        guesses
            .iter()
            .map(|g| evaluate(&Word::parse(g).unwrap(), &answer))
            .collect()
    }

    fn set(letters: &str) -> BTreeSet<char> {
        letters.chars().collect()
    }

    #[test]
    fn test_aggregate_empty_history() {
        assert_eq!(aggregate(&[]), LetterSummary::default());
    }

    #[test]
    fn test_aggregate_single_guess() {
        let summary = aggregate(&history("apple", &["phase"]));
        assert_eq!(summary.wrong, set("hs"));
        assert_eq!(summary.close, set("ap"));
        assert_eq!(summary.right, set("e"));
    }

    #[test]
    fn test_aggregate_close_promoted_to_right() {
        let summary = aggregate(&history("apple", &["phase", "angle"]));
        assert_eq!(summary.wrong, set("ghns"));
        assert_eq!(summary.close, set("p"));
        assert_eq!(summary.right, set("ael"));
    }

    #[test]
    fn test_aggregate_best_verdict_wins_within_one_guess() {
        // 'l' is both WRONG (index 0) and RIGHT (index 3) in the same guess.
        let summary = aggregate(&history("apple", &["lolly"]));
        assert!(summary.right.contains(&'l'));
        assert!(!summary.wrong.contains(&'l'));
    }

    #[test]
    fn test_aggregate_right_is_never_demoted() {
        let guesses = ["angle", "phase", "xylyl", "lolly", "dutch"];
        for n in 1..=guesses.len() {
            let summary = aggregate(&history("apple", &guesses[..n]));
            assert!(summary.right.is_superset(&set("ael")));
            assert!(summary.wrong.is_disjoint(&summary.close));
            assert!(summary.wrong.is_disjoint(&summary.right));
            assert!(summary.close.is_disjoint(&summary.right));
        }
    }
}
