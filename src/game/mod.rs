//! Hangman game state
//!
//! Holds the secret word and applies guesses. The solver only ever sees a
//! game through [`GameView`].

use crate::core::{GameStatus, GameView, Guess, LetterSet, RevealedPattern, Word};
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// Wrong guesses allowed before the game is lost
pub const DEFAULT_MAX_WRONG_GUESSES: usize = 5;

/// Score recorded for a lost game
pub const LOST_SCORE: usize = 25;

/// Errors from applying a guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,
    #[error("'{0}' has already been guessed")]
    AlreadyGuessed(String),
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
}

/// A single game against a known secret word
#[derive(Debug, Clone)]
pub struct HangmanGame {
    secret: Word,
    max_wrong_guesses: usize,
    pattern: RevealedPattern,
    guessed_letters: LetterSet,
    wrong_letters: LetterSet,
    wrong_words: FxHashSet<Word>,
    solved_by_word: bool,
}

impl HangmanGame {
    #[must_use]
    pub fn new(secret: Word, max_wrong_guesses: usize) -> Self {
        let pattern = RevealedPattern::unknown(secret.len());
        Self {
            secret,
            max_wrong_guesses,
            pattern,
            guessed_letters: LetterSet::new(),
            wrong_letters: LetterSet::new(),
            wrong_words: FxHashSet::default(),
            solved_by_word: false,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn max_wrong_guesses(&self) -> usize {
        self.max_wrong_guesses
    }

    #[must_use]
    pub const fn wrong_letters(&self) -> LetterSet {
        self.wrong_letters
    }

    /// Wrong letters plus wrong words
    #[must_use]
    pub fn wrong_guesses(&self) -> usize {
        self.wrong_letters.len() + self.wrong_words.len()
    }

    /// Wrong guesses left before the game is lost
    #[must_use]
    pub fn wrong_guesses_remaining(&self) -> usize {
        self.max_wrong_guesses.saturating_sub(self.wrong_guesses())
    }

    /// Guess a letter
    ///
    /// Reveals it everywhere in the secret word, or records a miss. Returns
    /// the number of positions revealed.
    ///
    /// # Errors
    /// Returns `GameError` if the game is over, the byte is not a letter, or
    /// the letter was already guessed.
    pub fn guess_letter(&mut self, letter: u8) -> Result<usize, GameError> {
        self.ensure_in_progress()?;

        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter(char::from(letter)));
        }
        let letter = letter.to_ascii_lowercase();

        if !self.guessed_letters.insert(letter) {
            return Err(GameError::AlreadyGuessed(char::from(letter).to_string()));
        }

        let revealed = self.pattern.reveal(letter, &self.secret);
        if revealed == 0 {
            self.wrong_letters.insert(letter);
        }
        Ok(revealed)
    }

    /// Guess the whole word
    ///
    /// Returns `true` if it was the secret word.
    ///
    /// # Errors
    /// Returns `GameError` if the game is over or the word was already tried.
    pub fn guess_word(&mut self, word: &Word) -> Result<bool, GameError> {
        self.ensure_in_progress()?;

        if *word == self.secret {
            self.solved_by_word = true;
            return Ok(true);
        }

        if !self.wrong_words.insert(word.clone()) {
            return Err(GameError::AlreadyGuessed(word.to_string()));
        }
        Ok(false)
    }

    /// Apply whichever kind of guess the solver produced
    ///
    /// # Errors
    /// Same conditions as [`guess_letter`](Self::guess_letter) and
    /// [`guess_word`](Self::guess_word).
    pub fn apply(&mut self, guess: &Guess) -> Result<(), GameError> {
        match guess {
            Guess::Letter(letter) => self.guess_letter(*letter).map(|_| ()),
            Guess::Word(word) => self.guess_word(word).map(|_| ()),
        }
    }

    /// Current score, lower is better
    ///
    /// Every letter guess and every wrong word guess costs one point; a lost
    /// game scores [`LOST_SCORE`].
    #[must_use]
    pub fn current_score(&self) -> usize {
        if self.status() == GameStatus::Lost {
            LOST_SCORE
        } else {
            self.guessed_letters.len() + self.wrong_words.len()
        }
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.status().is_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}

impl GameView for HangmanGame {
    fn word_length(&self) -> usize {
        self.secret.len()
    }

    fn pattern(&self) -> &RevealedPattern {
        &self.pattern
    }

    fn guessed_letters(&self) -> LetterSet {
        self.guessed_letters
    }

    fn guessed_words(&self) -> &FxHashSet<Word> {
        &self.wrong_words
    }

    fn status(&self) -> GameStatus {
        if self.solved_by_word || self.pattern.is_complete() {
            GameStatus::Won
        } else if self.wrong_guesses() > self.max_wrong_guesses {
            GameStatus::Lost
        } else {
            GameStatus::KeepGuessing
        }
    }
}

impl fmt::Display for HangmanGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern = if self.solved_by_word {
            self.secret.to_string()
        } else {
            self.pattern.to_string()
        };
        write!(
            f,
            "{}; score={}; status={}",
            pattern.to_uppercase(),
            self.current_score(),
            self.status()
        )
    }
}
