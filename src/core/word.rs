//! Hangman word representation
//!
//! A Word is a non-empty run of ASCII letters, normalized to lower case once
//! at construction so every later comparison is a plain byte comparison.

use std::fmt;
use thiserror::Error;

/// A dictionary word of any length
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the input is empty, contains non-ASCII
    /// characters, or contains anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use hangman_entropy::core::Word;
    ///
    /// let word = Word::new("Hangman").unwrap();
    /// assert_eq!(word.text(), "hangman");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("h4ngman").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: text.to_ascii_lowercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lower-case ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("cat").unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.bytes(), b"cat");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("CAT").unwrap().text(), "cat");
        assert_eq!(Word::new("HaNgMaN").unwrap().text(), "hangman");
    }

    #[test]
    fn word_creation_rejects_bad_input() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
        assert_eq!(Word::new("ca t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("c4t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("can't"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("antidisestablishmentarianism").unwrap().len(), 28);
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("dog").unwrap();
        assert_eq!(word.char_at(0), b'd');
        assert_eq!(word.char_at(2), b'g');
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        assert_eq!(Word::new("Dog").unwrap(), Word::new("dOG").unwrap());
        assert_ne!(Word::new("dog").unwrap(), Word::new("dig").unwrap());
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Tiger".parse().unwrap();
        assert_eq!(format!("{word}"), "tiger");
    }
}
