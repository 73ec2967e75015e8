//! Entropy-based letter selection
//!
//! Scores every trial letter by the entropy of the signature groups it
//! induces over the candidate set.

use super::calculator::{ENTROPY_TOLERANCE, group_entropy};
use crate::core::{LetterSet, Word};
use crate::solver::candidates::trial_letters;
use crate::solver::signature::build_signature_groups;

/// Metrics for one trial letter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterScore {
    pub letter: u8,
    /// Shannon entropy of the split (expected information gain in bits)
    pub entropy: f64,
    /// Number of distinct signature groups
    pub groups: usize,
    /// Largest group size (worst-case remaining candidates)
    pub largest_group: usize,
}

/// Score a single trial letter against the candidates
///
/// `candidates` must be non-empty.
#[must_use]
pub fn score_letter(letter: u8, unknown_positions: &[usize], candidates: &[&Word]) -> LetterScore {
    let groups = build_signature_groups(letter, unknown_positions, candidates);

    // Summed in a fixed order so equal splits give bit-identical entropies
    let mut sizes: Vec<usize> = groups.values().map(Vec::len).collect();
    sizes.sort_unstable();
    let entropy = group_entropy(sizes.iter().copied(), candidates.len());

    LetterScore {
        letter,
        entropy,
        groups: sizes.len(),
        largest_group: sizes.last().copied().unwrap_or(0),
    }
}

/// Score every trial letter, best first
///
/// Sorted by entropy descending, then by letter ascending.
#[must_use]
pub fn score_letters(
    candidates: &[&Word],
    unknown_positions: &[usize],
    guessed_letters: LetterSet,
) -> Vec<LetterScore> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut scores: Vec<LetterScore> = trial_letters(candidates, unknown_positions, guessed_letters)
        .iter()
        .map(|letter| score_letter(letter, unknown_positions, candidates))
        .collect();

    scores.sort_by(|a, b| b.entropy.total_cmp(&a.entropy).then(a.letter.cmp(&b.letter)));
    scores
}

/// Select the trial letter with the highest entropy
///
/// Letters are visited in ascending order and only a strictly greater
/// entropy (beyond `ENTROPY_TOLERANCE`) replaces the current best, so ties
/// go to the lowest letter.
/// Returns `None` when there is no letter left to try.
///
/// # Examples
/// ```
/// use hangman_entropy::core::{LetterSet, Word};
/// use hangman_entropy::dictionary::loader::words_from_slice;
/// use hangman_entropy::solver::entropy::select_best_letter;
///
/// let words = words_from_slice(&["cat", "cot", "cut", "cab"]);
/// let candidates: Vec<&Word> = words.iter().collect();
/// let guessed: LetterSet = b"c".iter().copied().collect();
///
/// let best = select_best_letter(&candidates, &[1, 2], guessed).unwrap();
/// assert_eq!(best.letter, b'a');
/// ```
#[must_use]
pub fn select_best_letter(
    candidates: &[&Word],
    unknown_positions: &[usize],
    guessed_letters: LetterSet,
) -> Option<LetterScore> {
    if candidates.is_empty() {
        return None;
    }

    let mut best: Option<LetterScore> = None;

    for letter in trial_letters(candidates, unknown_positions, guessed_letters).iter() {
        let score = score_letter(letter, unknown_positions, candidates);
        if best.is_none_or(|current| score.entropy > current.entropy + ENTROPY_TOLERANCE) {
            best = Some(score);
        }
    }

    best
}
