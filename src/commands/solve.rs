//! Word solving command
//!
//! Plays a single game against a chosen secret word and records each step.

use crate::core::{GameStatus, GameView, Guess, Word};
use crate::game::{DEFAULT_MAX_WRONG_GUESSES, HangmanGame};
use crate::solver::entropy::{binary_guess_entropy, score_letter};
use crate::solver::{Solver, Strategy};
use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_wrong_guesses: usize,
    pub seed: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_wrong_guesses: DEFAULT_MAX_WRONG_GUESSES,
            seed: None,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub steps: Vec<GuessStep>,
    pub status: GameStatus,
    pub score: usize,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == GameStatus::Won
    }
}

/// A single guess in the solution
pub struct GuessStep {
    pub guess: Guess,
    pub candidates_before: usize,
    /// Expected information from the guess, in bits
    pub entropy: f64,
    /// Pattern after the guess was applied
    pub pattern_after: String,
    pub correct: bool,
}

/// Solve a specific word using the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid word or not in the solver's dictionary
/// - The solver cannot produce a guess
pub fn solve_word<S: Strategy>(config: SolveConfig, solver: &Solver<'_, S>) -> Result<SolveResult> {
    let target = Word::new(config.target.as_str())
        .with_context(|| format!("invalid target word '{}'", config.target))?;

    if !solver.dictionary().contains(&target) {
        bail!("'{target}' is not in the dictionary");
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut game = HangmanGame::new(target, config.max_wrong_guesses);
    let mut steps = Vec::new();

    while game.status() == GameStatus::KeepGuessing {
        let candidates = solver.candidates(&game)?;
        let guess = solver.next_guess_with_rng(&game, &mut rng)?;

        let entropy = match &guess {
            Guess::Letter(letter) => {
                let unknown = game.pattern().unknown_positions();
                score_letter(*letter, &unknown, &candidates).entropy
            }
            Guess::Word(_) => binary_guess_entropy(candidates.len()),
        };

        let wrong_before = game.wrong_guesses();
        game.apply(&guess)?;

        steps.push(GuessStep {
            guess,
            candidates_before: candidates.len(),
            entropy,
            pattern_after: game.pattern().to_string(),
            correct: game.wrong_guesses() == wrong_before,
        });
    }

    Ok(SolveResult {
        target: config.target.to_lowercase(),
        steps,
        status: game.status(),
        score: game.current_score(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::solver::EntropyStrategy;

    fn seeded(target: &str) -> SolveConfig {
        SolveConfig {
            seed: Some(5),
            ..SolveConfig::new(target.to_string())
        }
    }

    #[test]
    fn solve_word_succeeds() {
        let dictionary = Dictionary::embedded();
        let solver = Solver::new(EntropyStrategy, &dictionary);

        // Generous limit so the game always runs to a win
        let config = SolveConfig {
            max_wrong_guesses: 100,
            ..seeded("pumpkin")
        };
        let result = solve_word(config, &solver).unwrap();

        assert!(result.success());
        assert!(!result.steps.is_empty());
        assert!(result.score <= result.steps.len());
    }

    #[test]
    fn first_step_is_the_opening_letter() {
        let dictionary = Dictionary::embedded();
        let solver = Solver::new(EntropyStrategy, &dictionary);

        let result = solve_word(seeded("tiger"), &solver).unwrap();
        let expected = solver.ranking().most_frequent(5).unwrap();

        assert_eq!(result.steps[0].guess, Guess::Letter(expected));
        assert_eq!(result.steps[0].candidates_before, dictionary.bucket(5).unwrap().len());
    }

    #[test]
    fn candidates_never_grow() {
        let dictionary = Dictionary::embedded();
        let solver = Solver::new(EntropyStrategy, &dictionary);

        let result = solve_word(seeded("elephant"), &solver).unwrap();
        for pair in result.steps.windows(2) {
            assert!(pair[1].candidates_before <= pair[0].candidates_before);
        }
        assert!(result.steps.iter().all(|s| s.entropy >= 0.0));
    }

    #[test]
    fn unknown_target_is_an_error() {
        let dictionary = Dictionary::embedded();
        let solver = Solver::new(EntropyStrategy, &dictionary);

        assert!(solve_word(seeded("qwxyz"), &solver).is_err());
        assert!(solve_word(seeded("not a word"), &solver).is_err());
    }
}
