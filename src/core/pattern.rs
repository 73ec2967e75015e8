//! Revealed pattern of the secret word
//!
//! One cell per letter position: either a revealed letter or unknown.
//! The text form uses `-` for unknown cells (`_` is also accepted on input),
//! so `c-t` means the first and last letters are known.

use super::Word;
use std::fmt;
use thiserror::Error;

/// Symbol used for unknown cells when printing a pattern
pub const UNKNOWN_CELL: char = '-';

/// Error returned when parsing a pattern string fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Pattern must contain at least one cell")]
    Empty,
    #[error("Invalid pattern character '{0}' (use letters, '-' or '_')")]
    InvalidCell(char),
}

/// Feedback visible to the player: which positions have been revealed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RevealedPattern {
    cells: Vec<Option<u8>>,
}

impl RevealedPattern {
    /// A pattern of `len` unknown cells
    #[must_use]
    pub fn unknown(len: usize) -> Self {
        Self {
            cells: vec![None; len],
        }
    }

    /// Build a pattern directly from cells
    ///
    /// Known letters are lower-cased.
    #[must_use]
    pub fn from_cells(cells: impl IntoIterator<Item = Option<u8>>) -> Self {
        Self {
            cells: cells
                .into_iter()
                .map(|cell| cell.map(|c| c.to_ascii_lowercase()))
                .collect(),
        }
    }

    /// Parse a pattern such as `c-t` or `C_T`
    ///
    /// # Errors
    /// Returns `PatternError` for empty input or any character that is not
    /// an ASCII letter, `-` or `_`.
    ///
    /// # Examples
    /// ```
    /// use hangman_entropy::core::RevealedPattern;
    ///
    /// let p = RevealedPattern::parse("C_t").unwrap();
    /// assert_eq!(p.to_string(), "c-t");
    /// assert_eq!(p.unknown_positions(), vec![1]);
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        if s.is_empty() {
            return Err(PatternError::Empty);
        }

        let cells = s
            .chars()
            .map(|ch| match ch {
                '-' | '_' => Ok(None),
                c if c.is_ascii_alphabetic() => Ok(Some(c.to_ascii_lowercase() as u8)),
                c => Err(PatternError::InvalidCell(c)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { cells })
    }

    /// Number of positions (the secret word's length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Option<u8>] {
        &self.cells
    }

    /// Positions still unknown, in ascending order
    #[must_use]
    pub fn unknown_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.is_none().then_some(i))
            .collect()
    }

    /// True when no position has been revealed yet
    #[must_use]
    pub fn is_fully_unknown(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// True when every position has been revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Reveal `letter` at every position where `secret` holds it
    ///
    /// Returns the number of cells newly revealed.
    pub fn reveal(&mut self, letter: u8, secret: &Word) -> usize {
        debug_assert_eq!(self.len(), secret.len());

        let mut revealed = 0;
        for (cell, &actual) in self.cells.iter_mut().zip(secret.bytes()) {
            if actual == letter && cell.is_none() {
                *cell = Some(letter);
                revealed += 1;
            }
        }
        revealed
    }
}

impl fmt::Display for RevealedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let ch = cell.map_or(UNKNOWN_CELL, char::from);
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for RevealedPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_pattern() {
        let p = RevealedPattern::unknown(5);
        assert_eq!(p.len(), 5);
        assert!(p.is_fully_unknown());
        assert!(!p.is_complete());
        assert_eq!(p.to_string(), "-----");
        assert_eq!(p.unknown_positions(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn parse_mixed_pattern() {
        let p = RevealedPattern::parse("c_T-").unwrap();
        assert_eq!(p.cells(), &[Some(b'c'), None, Some(b't'), None]);
        assert_eq!(p.unknown_positions(), vec![1, 3]);
        assert_eq!(p.to_string(), "c-t-");
    }

    #[test]
    fn parse_rejects_invalid() {
        assert_eq!(RevealedPattern::parse(""), Err(PatternError::Empty));
        assert_eq!(
            RevealedPattern::parse("c?t"),
            Err(PatternError::InvalidCell('?'))
        );
    }

    #[test]
    fn reveal_fills_every_occurrence() {
        let secret = Word::new("banana").unwrap();
        let mut p = RevealedPattern::unknown(6);

        assert_eq!(p.reveal(b'a', &secret), 3);
        assert_eq!(p.to_string(), "-a-a-a");

        assert_eq!(p.reveal(b'z', &secret), 0);
        assert_eq!(p.reveal(b'a', &secret), 0);

        p.reveal(b'b', &secret);
        p.reveal(b'n', &secret);
        assert!(p.is_complete());
        assert_eq!(p.to_string(), "banana");
    }

    #[test]
    fn from_cells_normalizes_case() {
        let p = RevealedPattern::from_cells([Some(b'D'), None, Some(b'g')]);
        assert_eq!(p.to_string(), "d-g");
    }
}
