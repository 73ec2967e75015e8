//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types shared by the solver,
//! the game state and the command layer. Nothing here performs I/O.

mod guess;
mod letters;
mod pattern;
mod state;
mod word;

pub use guess::Guess;
pub use letters::{ALPHABET_SIZE, LetterSet};
pub use pattern::{PatternError, RevealedPattern, UNKNOWN_CELL};
pub use state::{GameStatus, GameView};
pub use word::{Word, WordError};
