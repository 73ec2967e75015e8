//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. A strategy only
//! sees turns with at least two candidates; the opening guess and the
//! single-candidate case are handled by the `Solver`.

use super::candidates::trial_letters;
use super::entropy::{ENTROPY_TOLERANCE, binary_guess_entropy, select_best_letter};
use crate::core::{Guess, LetterSet, RevealedPattern, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// A strategy for choosing the next guess from the current candidates
pub trait Strategy {
    /// Select a letter or word to guess
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<R: Rng + ?Sized>(
        &self,
        candidates: &[&Word],
        pattern: &RevealedPattern,
        guessed_letters: LetterSet,
        rng: &mut R,
    ) -> Option<Guess>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Entropy maximization (default)
    Entropy(EntropyStrategy),
    /// Most common untried letter, for comparison
    Frequency(FrequencyStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<R: Rng + ?Sized>(
        &self,
        candidates: &[&Word],
        pattern: &RevealedPattern,
        guessed_letters: LetterSet,
        rng: &mut R,
    ) -> Option<Guess> {
        match self {
            Self::Entropy(s) => s.select_guess(candidates, pattern, guessed_letters, rng),
            Self::Frequency(s) => s.select_guess(candidates, pattern, guessed_letters, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "entropy", "frequency".
    /// Defaults to entropy if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "frequency" | "freq" => Self::Frequency(FrequencyStrategy),
            _ => Self::Entropy(EntropyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Entropy(_) => "entropy",
            Self::Frequency(_) => "frequency",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Entropy(EntropyStrategy)
    }
}

/// Pick one candidate uniformly at random
fn random_word<R: Rng + ?Sized>(candidates: &[&Word], rng: &mut R) -> Option<Guess> {
    candidates
        .choose(rng)
        .map(|&word| Guess::Word(word.clone()))
}

/// Entropy maximization strategy
///
/// Guesses the letter whose outcome carries the most information, unless
/// guessing a random candidate word outright is at least as informative.
/// Entropies within `ENTROPY_TOLERANCE` count as a tie, which goes to the word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess<R: Rng + ?Sized>(
        &self,
        candidates: &[&Word],
        pattern: &RevealedPattern,
        guessed_letters: LetterSet,
        rng: &mut R,
    ) -> Option<Guess> {
        let unknown_positions = pattern.unknown_positions();
        let best = select_best_letter(candidates, &unknown_positions, guessed_letters);
        let word_entropy = binary_guess_entropy(candidates.len());

        match best {
            Some(score) if score.entropy - word_entropy > ENTROPY_TOLERANCE => {
                Some(Guess::Letter(score.letter))
            }
            _ => random_word(candidates, rng),
        }
    }
}

/// Letter frequency strategy
///
/// Guesses the untried letter found in the most candidates (at unknown
/// positions). Falls back to a random candidate when no letter is left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_guess<R: Rng + ?Sized>(
        &self,
        candidates: &[&Word],
        pattern: &RevealedPattern,
        guessed_letters: LetterSet,
        rng: &mut R,
    ) -> Option<Guess> {
        let unknown_positions = pattern.unknown_positions();

        let best = trial_letters(candidates, &unknown_positions, guessed_letters)
            .iter()
            .map(|letter| {
                let hits = candidates
                    .iter()
                    .filter(|word| unknown_positions.iter().any(|&i| word.char_at(i) == letter))
                    .count();
                (letter, hits)
            })
            // Lowest letter wins ties
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)));

        match best {
            Some((letter, _)) => Some(Guess::Letter(letter)),
            None => random_word(candidates, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn letters(s: &str) -> LetterSet {
        s.bytes().collect()
    }

    #[test]
    fn entropy_prefers_word_when_letters_are_useless() {
        // Only 'a' is left to try and it splits nothing
        let words = words_from_slice(&["cat", "car", "can"]);
        let candidates: Vec<&Word> = words.iter().collect();
        let pattern = RevealedPattern::parse("c--").unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let guess = EntropyStrategy
            .select_guess(&candidates, &pattern, letters("cnrt"), &mut rng)
            .unwrap();

        match guess {
            Guess::Word(word) => assert!(words.contains(&word)),
            Guess::Letter(l) => panic!("expected a word guess, got {}", char::from(l)),
        }
    }

    #[test]
    fn entropy_letter_beats_word_on_even_split() {
        let words = words_from_slice(&["dog", "log", "lag", "bag"]);
        let candidates: Vec<&Word> = words.iter().collect();
        let pattern = RevealedPattern::parse("--g").unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let guess = EntropyStrategy
            .select_guess(&candidates, &pattern, letters("g"), &mut rng)
            .unwrap();

        // 1 bit for 'a' against H_word(4) ≈ 0.811
        assert_eq!(guess, Guess::Letter(b'a'));
    }

    #[test]
    fn frequency_picks_most_common_letter() {
        let words = words_from_slice(&["dog", "log", "lag", "bag", "big"]);
        let candidates: Vec<&Word> = words.iter().collect();
        let pattern = RevealedPattern::parse("--g").unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let guess = FrequencyStrategy
            .select_guess(&candidates, &pattern, letters("g"), &mut rng)
            .unwrap();

        // a: 2, b: 2, l: 2, o: 2, d: 1, i: 1 -> lowest of the tied letters
        assert_eq!(guess, Guess::Letter(b'a'));
    }

    #[test]
    fn empty_candidates_give_no_guess() {
        let pattern = RevealedPattern::unknown(3);
        let mut rng = StdRng::seed_from_u64(1);

        assert!(
            EntropyStrategy
                .select_guess(&[], &pattern, LetterSet::new(), &mut rng)
                .is_none()
        );
        assert!(
            FrequencyStrategy
                .select_guess(&[], &pattern, LetterSet::new(), &mut rng)
                .is_none()
        );
    }

    #[test]
    fn strategy_from_name() {
        assert_eq!(StrategyType::from_name("frequency").name(), "frequency");
        assert_eq!(StrategyType::from_name("entropy").name(), "entropy");
        assert_eq!(StrategyType::from_name("bogus"), StrategyType::default());
    }
}
