//! Pattern signatures for a trial letter
//!
//! Guessing a letter reveals it at some subset of the unknown positions.
//! A word's signature for that letter records exactly which subset, so two
//! words with the same signature cannot be told apart by that guess.

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// Symbol for an unknown position where the trial letter does not appear
pub const PLACEHOLDER: u8 = b'_';

/// One symbol per unknown position: the trial letter or `_`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(Vec<u8>);

impl Signature {
    /// Signature of `word` for `letter` over `unknown_positions`
    ///
    /// # Examples
    /// ```
    /// use hangman_entropy::core::Word;
    /// use hangman_entropy::solver::Signature;
    ///
    /// let word = Word::new("banana").unwrap();
    /// let sig = Signature::of(b'a', &[1, 2, 3, 5], &word);
    /// assert_eq!(sig.to_string(), "a_aa");
    /// ```
    #[must_use]
    pub fn of(letter: u8, unknown_positions: &[usize], word: &Word) -> Self {
        Self(
            unknown_positions
                .iter()
                .map(|&i| {
                    if word.char_at(i) == letter {
                        letter
                    } else {
                        PLACEHOLDER
                    }
                })
                .collect(),
        )
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// Group candidates by their signature for `letter`
///
/// Every candidate lands in exactly one group and no group is empty.
pub fn build_signature_groups<'a>(
    letter: u8,
    unknown_positions: &[usize],
    candidates: &[&'a Word],
) -> FxHashMap<Signature, Vec<&'a Word>> {
    let mut groups: FxHashMap<Signature, Vec<&'a Word>> = FxHashMap::default();

    for &candidate in candidates {
        let signature = Signature::of(letter, unknown_positions, candidate);
        groups.entry(signature).or_default().push(candidate);
    }

    groups
}
