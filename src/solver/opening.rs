//! Opening letter ranking
//!
//! Before anything is revealed, every word of the right length is a
//! candidate and signature scoring tells us little. The first guess is
//! instead the most frequent letter among dictionary words of that length.

use crate::core::ALPHABET_SIZE;
use crate::dictionary::Dictionary;
use rustc_hash::FxHashMap;

/// Per-length letter ranking, most frequent first
///
/// Built once from the whole dictionary and never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct LetterRanking {
    by_length: FxHashMap<usize, Vec<(u8, usize)>>,
}

impl LetterRanking {
    /// Count raw letter occurrences per word length and rank them
    ///
    /// Ties are broken by ascending letter so the ranking is deterministic.
    #[must_use]
    pub fn from_dictionary(dictionary: &Dictionary) -> Self {
        let by_length = dictionary
            .lengths()
            .into_iter()
            .filter_map(|len| dictionary.bucket(len).map(|bucket| (len, bucket)))
            .map(|(len, bucket)| {
                let mut counts = [0usize; ALPHABET_SIZE];
                for word in bucket {
                    for &letter in word.bytes() {
                        counts[usize::from(letter - b'a')] += 1;
                    }
                }

                let mut ranked: Vec<(u8, usize)> = (b'a'..=b'z')
                    .zip(counts)
                    .filter(|&(_, count)| count > 0)
                    .collect();
                ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

                (len, ranked)
            })
            .collect();

        Self { by_length }
    }

    /// Letters with their counts for `length`, most frequent first
    #[must_use]
    pub fn ranking(&self, length: usize) -> Option<&[(u8, usize)]> {
        self.by_length.get(&length).map(Vec::as_slice)
    }

    /// The single most frequent letter for `length`
    #[must_use]
    pub fn most_frequent(&self, length: usize) -> Option<u8> {
        self.ranking(length)
            .and_then(|ranked| ranked.first())
            .map(|&(letter, _)| letter)
    }
}
