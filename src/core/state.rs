//! Read-only view of a game in progress
//!
//! The solver never owns or mutates game state. Anything that can report
//! these five facts can be played by the solver.

use super::{LetterSet, RevealedPattern, Word};
use rustc_hash::FxHashSet;
use std::fmt;

/// Outcome of a game so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    KeepGuessing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::KeepGuessing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::KeepGuessing => "KEEP_GUESSING",
            Self::Won => "GAME_WON",
            Self::Lost => "GAME_LOST",
        };
        f.write_str(name)
    }
}

/// What a guessing strategy may observe about a game
pub trait GameView {
    /// Length of the secret word
    fn word_length(&self) -> usize;

    /// Positions revealed so far
    fn pattern(&self) -> &RevealedPattern;

    /// Every letter guessed so far, right or wrong
    fn guessed_letters(&self) -> LetterSet;

    /// Whole-word guesses that were rejected
    fn guessed_words(&self) -> &FxHashSet<Word>;

    fn status(&self) -> GameStatus;
}
