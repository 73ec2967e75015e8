//! Dictionary of candidate secret words
//!
//! Words are de-duplicated and bucketed by length once at construction.
//! The dictionary is immutable afterwards and can be shared freely between
//! concurrently running games.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{DictionaryError, LoadedDictionary, ParsedWords};

use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};

/// Unique words partitioned by exact length
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    buckets: FxHashMap<usize, Vec<Word>>,
    total: usize,
}

impl Dictionary {
    /// Build a dictionary, dropping duplicate words
    ///
    /// Within each bucket words keep their first-seen order.
    ///
    /// # Examples
    /// ```
    /// use hangman_entropy::core::Word;
    /// use hangman_entropy::dictionary::Dictionary;
    ///
    /// let words = ["cat", "dog", "CAT", "horse"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(words);
    ///
    /// assert_eq!(dictionary.len(), 3);
    /// assert_eq!(dictionary.bucket(3).unwrap().len(), 2);
    /// assert!(dictionary.bucket(4).is_none());
    /// ```
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen: FxHashSet<Word> = FxHashSet::default();
        let mut buckets: FxHashMap<usize, Vec<Word>> = FxHashMap::default();

        for word in words {
            if seen.insert(word.clone()) {
                buckets.entry(word.len()).or_default().push(word);
            }
        }

        Self {
            buckets,
            total: seen.len(),
        }
    }

    /// The embedded word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS))
    }

    /// All words of exactly `length` letters, `None` if there are none
    #[must_use]
    pub fn bucket(&self, length: usize) -> Option<&[Word]> {
        self.buckets
            .get(&length)
            .filter(|words| !words.is_empty())
            .map(Vec::as_slice)
    }

    /// Word lengths present, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.buckets.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Every word, bucket by bucket in ascending length order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.lengths()
            .into_iter()
            .flat_map(|len| self.buckets[&len].iter())
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.buckets
            .get(&word.len())
            .is_some_and(|bucket| bucket.contains(word))
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}
