use std::fmt;

use thiserror::Error;

pub const WORD_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("expected 5 letters, got {0}")]
    Length(usize),
    #[error("'{0}' is not a letter")]
    NotALetter(char),
}

/// A five-letter lowercase word. Guesses and secret words are both `Word`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word([char; WORD_LEN]);

impl Word {
    /// Accepts exactly five ASCII letters in any case.
    pub fn parse(text: &str) -> Result<Self, WordError> {
        let count = text.chars().count();
        if count != WORD_LEN {
            return Err(WordError::Length(count));
        }

        let mut letters = ['a'; WORD_LEN];
        for (slot, c) in letters.iter_mut().zip(text.chars()) {
            if !c.is_ascii_alphabetic() {
                return Err(WordError::NotALetter(c));
            }
            *slot = c.to_ascii_lowercase();
        }

        Ok(Self(letters))
    }

    /// Builds a word from letters already known to be lowercase ASCII.
    pub(crate) const fn from_lowercase(letters: [char; WORD_LEN]) -> Self {
        Self(letters)
    }

    pub fn letters(&self) -> &[char; WORD_LEN] {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercases() {
        let word = Word::parse("ApPlE").unwrap();
        assert_eq!(word.to_string(), "apple");
        assert_eq!(word.letters(), &['a', 'p', 'p', 'l', 'e']);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(Word::parse("app"), Err(WordError::Length(3)));
        assert_eq!(Word::parse("orange"), Err(WordError::Length(6)));
        assert_eq!(Word::parse(""), Err(WordError::Length(0)));
        // No trimming
        assert_eq!(Word::parse(" apple"), Err(WordError::Length(6)));
    }

    #[test]
    fn test_parse_rejects_non_letters() {
        assert_eq!(Word::parse("app1e"), Err(WordError::NotALetter('1')));
        assert_eq!(Word::parse("@pple"), Err(WordError::NotALetter('@')));
        assert_eq!(Word::parse("caf\u{e9}s"), Err(WordError::NotALetter('\u{e9}')));
    }
}
