//! Compact set of lower-case ASCII letters
//!
//! Stored as a 26-bit mask. Iteration always yields letters in ascending
//! order, which the solver relies on for deterministic tie-breaking.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// A set of letters `a..=z`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter of the alphabet
    pub const FULL: Self = Self((1 << ALPHABET_SIZE) - 1);

    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    #[inline]
    fn bit(letter: u8) -> Option<u32> {
        letter
            .is_ascii_lowercase()
            .then(|| 1 << (letter - b'a'))
    }

    /// Insert a letter, returning `true` if it was not already present
    ///
    /// Non-letters are ignored and return `false`. Callers normalize case.
    pub fn insert(&mut self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) if self.0 & bit == 0 => {
                self.0 |= bit;
                true
            }
            _ => false,
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        Self::bit(letter).is_some_and(|bit| self.0 & bit != 0)
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 == Self::FULL.0
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Iterate letters in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut set = LetterSet::new();
        assert!(set.insert(b'e'));
        assert!(!set.insert(b'e'));
        assert!(set.contains(b'e'));
        assert!(!set.contains(b'a'));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut set = LetterSet::new();
        assert!(!set.insert(b'E'));
        assert!(!set.insert(b'-'));
        assert!(set.is_empty());
        assert!(!set.contains(b'-'));
    }

    #[test]
    fn iterates_in_ascending_order() {
        let set: LetterSet = b"zebra".iter().copied().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), b"aberz".to_vec());
        assert_eq!(set.to_string(), "aberz");
    }

    #[test]
    fn full_and_difference() {
        let all: LetterSet = (b'a'..=b'z').collect();
        assert!(all.is_full());
        assert_eq!(all, LetterSet::FULL);

        let vowels: LetterSet = b"aeiou".iter().copied().collect();
        let consonants = all.difference(vowels);
        assert_eq!(consonants.len(), 21);
        assert!(!consonants.contains(b'a'));
        assert!(consonants.contains(b'b'));
    }
}
