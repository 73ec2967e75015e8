//! Candidate filtering
//!
//! Narrows a dictionary bucket to the words still consistent with what the
//! game has revealed, and collects the letters worth trying next.

use crate::core::{LetterSet, RevealedPattern, Word};
use rustc_hash::FxHashSet;

/// Check whether `word` could still be the secret word
///
/// Known cells must match exactly. An unknown cell cannot hold a letter that
/// was already guessed, because guessing it would have revealed that cell.
#[must_use]
pub fn is_candidate(word: &Word, pattern: &RevealedPattern, guessed_letters: LetterSet) -> bool {
    word.len() == pattern.len()
        && pattern
            .cells()
            .iter()
            .zip(word.bytes())
            .all(|(cell, &letter)| match cell {
                Some(known) => *known == letter,
                None => !guessed_letters.contains(letter),
            })
}

/// Filter words down to the candidates for the current turn
///
/// Applies the letter/position screen, then drops words already guessed and
/// rejected. Filtering an already filtered set with the same inputs returns
/// the same set.
///
/// # Examples
/// ```
/// use hangman_entropy::core::{LetterSet, RevealedPattern, Word};
/// use hangman_entropy::dictionary::loader::words_from_slice;
/// use hangman_entropy::solver::filter_candidates;
/// use rustc_hash::FxHashSet;
///
/// let words = words_from_slice(&["cat", "cot", "dog"]);
/// let pattern = RevealedPattern::parse("c--").unwrap();
/// let guessed: LetterSet = b"co".iter().copied().collect();
///
/// let candidates = filter_candidates(&words, &pattern, guessed, &FxHashSet::default());
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].text(), "cat");
/// ```
pub fn filter_candidates<'a, I>(
    words: I,
    pattern: &RevealedPattern,
    guessed_letters: LetterSet,
    guessed_words: &FxHashSet<Word>,
) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    words
        .into_iter()
        .filter(|&word| is_candidate(word, pattern, guessed_letters))
        .filter(|&word| !guessed_words.contains(word))
        .collect()
}

/// Letters appearing at any unknown position of any candidate, minus the
/// letters already guessed
///
/// Stops scanning as soon as the whole alphabet has been seen.
#[must_use]
pub fn trial_letters(
    candidates: &[&Word],
    unknown_positions: &[usize],
    guessed_letters: LetterSet,
) -> LetterSet {
    let mut seen = LetterSet::new();

    for candidate in candidates {
        for &i in unknown_positions {
            seen.insert(candidate.char_at(i));
        }
        if seen.is_full() {
            break;
        }
    }

    seen.difference(guessed_letters)
}
