//! A single Hangman guess: one letter or a whole word

use super::Word;
use std::fmt;

/// The move the solver hands back to the game driver
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Guess {
    /// Guess a single lower-case letter
    Letter(u8),
    /// Guess the whole secret word
    Word(Word),
}

impl Guess {
    #[must_use]
    pub const fn is_letter(&self) -> bool {
        matches!(self, Self::Letter(_))
    }

    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(self, Self::Word(_))
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(letter) => write!(f, "{}", char::from(*letter)),
            Self::Word(word) => write!(f, "{word}"),
        }
    }
}
