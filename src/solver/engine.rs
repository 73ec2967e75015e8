//! Main Hangman solver interface

use super::candidates::filter_candidates;
use super::opening::LetterRanking;
use super::strategy::Strategy;
use crate::core::{GameView, Guess, RevealedPattern, Word};
use crate::dictionary::Dictionary;
use rand::Rng;
use thiserror::Error;

/// Failures the solver cannot guess around
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The dictionary has no words of the secret word's length
    #[error("dictionary has no words of length {0}")]
    EmptyBucket(usize),
    /// No dictionary word is consistent with the reported game state
    #[error("no dictionary word matches pattern {pattern}; game state is inconsistent")]
    NoCandidates { pattern: RevealedPattern },
}

/// Main Hangman solver
///
/// Coordinates the solving process using a given strategy. Holds only
/// read-only data, so one solver can serve any number of games, including
/// games running on different threads.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    dictionary: &'a Dictionary,
    ranking: LetterRanking,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver and rank opening letters for every word length
    pub fn new(strategy: S, dictionary: &'a Dictionary) -> Self {
        Self {
            strategy,
            dictionary,
            ranking: LetterRanking::from_dictionary(dictionary),
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn ranking(&self) -> &LetterRanking {
        &self.ranking
    }

    /// Get the next guess, choosing random words with the thread-local RNG
    ///
    /// # Errors
    /// See [`Solver::next_guess_with_rng`].
    pub fn next_guess<G: GameView + ?Sized>(&self, game: &G) -> Result<Guess, SolverError> {
        self.next_guess_with_rng(game, &mut rand::rng())
    }

    /// Get the next guess for the game's current state
    ///
    /// - Nothing revealed and nothing guessed: the most frequent letter for
    ///   the word length.
    /// - One candidate left: that word.
    /// - Otherwise: whatever the strategy selects.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyBucket` if the dictionary has no words of
    /// the game's length, and `SolverError::NoCandidates` if no word is
    /// consistent with the game state.
    pub fn next_guess_with_rng<G, R>(&self, game: &G, rng: &mut R) -> Result<Guess, SolverError>
    where
        G: GameView + ?Sized,
        R: Rng + ?Sized,
    {
        if let Some(letter) = self.opening_letter(game)? {
            return Ok(Guess::Letter(letter));
        }

        let candidates = self.candidates(game)?;

        if let [only] = candidates.as_slice() {
            return Ok(Guess::Word((*only).clone()));
        }

        self.strategy
            .select_guess(&candidates, game.pattern(), game.guessed_letters(), rng)
            .ok_or_else(|| SolverError::NoCandidates {
                pattern: game.pattern().clone(),
            })
    }

    /// Words still consistent with the game state
    ///
    /// # Errors
    /// Same conditions as [`Solver::next_guess_with_rng`], minus the opening.
    pub fn candidates<G: GameView + ?Sized>(&self, game: &G) -> Result<Vec<&'a Word>, SolverError> {
        let length = game.word_length();
        let bucket = self
            .dictionary
            .bucket(length)
            .ok_or(SolverError::EmptyBucket(length))?;

        let candidates = filter_candidates(
            bucket,
            game.pattern(),
            game.guessed_letters(),
            game.guessed_words(),
        );

        if candidates.is_empty() {
            return Err(SolverError::NoCandidates {
                pattern: game.pattern().clone(),
            });
        }

        Ok(candidates)
    }

    /// The opening letter, if this is the first turn of the game
    fn opening_letter<G: GameView + ?Sized>(&self, game: &G) -> Result<Option<u8>, SolverError> {
        if !game.pattern().is_fully_unknown() || !game.guessed_letters().is_empty() {
            return Ok(None);
        }

        let length = game.word_length();
        self.ranking
            .most_frequent(length)
            .map(Some)
            .ok_or(SolverError::EmptyBucket(length))
    }
}
