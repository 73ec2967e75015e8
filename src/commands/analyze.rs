//! State analysis command
//!
//! Scores every candidate letter for a game state given on the command line
//! and reports what the solver would guess.

use crate::core::{GameStatus, GameView, Guess, LetterSet, RevealedPattern, Word};
use crate::solver::entropy::{LetterScore, binary_guess_entropy, score_letters};
use crate::solver::{Solver, Strategy};
use anyhow::{Context, Result, bail};
use rustc_hash::FxHashSet;

/// How many candidates to list in the report
const SAMPLE_SIZE: usize = 10;

/// A game state described by hand rather than by a running game
#[derive(Debug, Clone)]
pub struct StateSnapshot {
    pattern: RevealedPattern,
    guessed_letters: LetterSet,
    guessed_words: FxHashSet<Word>,
}

impl StateSnapshot {
    /// Build a snapshot from its text form
    ///
    /// Letters revealed in the pattern count as guessed even if they are not
    /// listed in `guessed`.
    ///
    /// # Errors
    ///
    /// Returns an error for an unparseable pattern, a non-letter in
    /// `guessed`, or an invalid rejected word.
    pub fn parse(pattern: &str, guessed: &str, wrong_words: &[String]) -> Result<Self> {
        let pattern = RevealedPattern::parse(pattern)
            .with_context(|| format!("invalid pattern '{pattern}'"))?;

        let mut guessed_letters: LetterSet = pattern.cells().iter().flatten().copied().collect();
        for ch in guessed.chars().filter(|c| !c.is_whitespace() && *c != ',') {
            if !ch.is_ascii_alphabetic() {
                bail!("guessed letters must be letters, got '{ch}'");
            }
            guessed_letters.insert(ch.to_ascii_lowercase() as u8);
        }

        let guessed_words = wrong_words
            .iter()
            .map(|w| Word::new(w.as_str()).with_context(|| format!("invalid word '{w}'")))
            .collect::<Result<FxHashSet<_>>>()?;

        Ok(Self {
            pattern,
            guessed_letters,
            guessed_words,
        })
    }
}

impl GameView for StateSnapshot {
    fn word_length(&self) -> usize {
        self.pattern.len()
    }

    fn pattern(&self) -> &RevealedPattern {
        &self.pattern
    }

    fn guessed_letters(&self) -> LetterSet {
        self.guessed_letters
    }

    fn guessed_words(&self) -> &FxHashSet<Word> {
        &self.guessed_words
    }

    fn status(&self) -> GameStatus {
        GameStatus::KeepGuessing
    }
}

/// Result of analyzing a game state
pub struct AnalysisResult {
    pub pattern: String,
    pub guessed_letters: String,
    pub total_candidates: usize,
    pub sample: Vec<String>,
    pub letter_scores: Vec<LetterScore>,
    pub word_entropy: f64,
    pub recommendation: Guess,
}

/// Analyze a game state
///
/// # Errors
///
/// Returns an error if the solver cannot answer for this state (no words of
/// that length, or no word consistent with it).
pub fn analyze_state<S: Strategy>(
    state: &StateSnapshot,
    solver: &Solver<'_, S>,
) -> Result<AnalysisResult> {
    let candidates = solver.candidates(state)?;
    let unknown_positions = state.pattern().unknown_positions();

    let letter_scores = score_letters(&candidates, &unknown_positions, state.guessed_letters());
    let recommendation = solver.next_guess(state)?;

    Ok(AnalysisResult {
        pattern: state.pattern().to_string(),
        guessed_letters: state.guessed_letters().to_string(),
        total_candidates: candidates.len(),
        sample: candidates
            .iter()
            .take(SAMPLE_SIZE)
            .map(ToString::to_string)
            .collect(),
        letter_scores,
        word_entropy: binary_guess_entropy(candidates.len()),
        recommendation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::dictionary::loader::words_from_slice;
    use crate::solver::EntropyStrategy;

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&["cat", "car", "can", "cot", "dog"]))
    }

    #[test]
    fn snapshot_counts_revealed_letters_as_guessed() {
        let state = StateSnapshot::parse("c-t", "o", &[]).unwrap();
        assert_eq!(state.guessed_letters().to_string(), "cot");
        assert_eq!(state.word_length(), 3);
    }

    #[test]
    fn snapshot_rejects_bad_input() {
        assert!(StateSnapshot::parse("c?t", "", &[]).is_err());
        assert!(StateSnapshot::parse("c-t", "o1", &[]).is_err());
        assert!(StateSnapshot::parse("c-t", "", &["c4t".to_string()]).is_err());
    }

    #[test]
    fn analysis_reports_scores_and_recommendation() {
        let dictionary = dictionary();
        let solver = Solver::new(EntropyStrategy, &dictionary);
        let state = StateSnapshot::parse("c--", "", &[]).unwrap();

        let result = analyze_state(&state, &solver).unwrap();

        assert_eq!(result.total_candidates, 4);
        assert_eq!(result.sample.len(), 4);
        assert!(!result.letter_scores.is_empty());
        assert!(result.letter_scores.iter().all(|s| s.letter != b'c'));
        assert!((result.word_entropy - binary_guess_entropy(4)).abs() < 1e-12);

        // 'a' splits cat/car/can from cot: H(1/4) ≈ 0.811, and 't' splits 2/2
        assert_eq!(result.letter_scores[0].letter, b't');
        assert_eq!(result.recommendation, Guess::Letter(b't'));
    }

    #[test]
    fn rejected_words_shrink_candidates() {
        let dictionary = dictionary();
        let solver = Solver::new(EntropyStrategy, &dictionary);
        let rejected = ["cat".to_string(), "cot".to_string()];
        let state = StateSnapshot::parse("c--", "", &rejected).unwrap();

        let result = analyze_state(&state, &solver).unwrap();
        assert_eq!(result.total_candidates, 2);
    }

    #[test]
    fn impossible_state_is_an_error() {
        let dictionary = dictionary();
        let solver = Solver::new(EntropyStrategy, &dictionary);
        let state = StateSnapshot::parse("z--", "", &[]).unwrap();

        assert!(analyze_state(&state, &solver).is_err());
    }
}
