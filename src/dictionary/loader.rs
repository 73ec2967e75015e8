//! Word list loading utilities
//!
//! Reads one word per line. Lines are trimmed and blank lines ignored.
//! Entries that are not valid words (digits, punctuation, spaces) are left
//! out and their line numbers reported back to the caller.

use super::Dictionary;
use crate::core::Word;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {0} contains no usable words")]
    Empty(PathBuf),
}

/// Words read from a line-oriented source
#[derive(Debug, Clone, Default)]
pub struct ParsedWords {
    pub words: Vec<Word>,
    /// 1-based line numbers of non-blank lines that were not valid words
    pub skipped_lines: Vec<usize>,
}

/// A dictionary loaded from a file, with the lines it had to leave out
#[derive(Debug, Clone)]
pub struct LoadedDictionary {
    pub dictionary: Dictionary,
    pub skipped_lines: Vec<usize>,
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be opened or read, and
/// `DictionaryError::Empty` if it holds no valid words.
///
/// # Examples
/// ```no_run
/// use hangman_entropy::dictionary::loader::load_from_file;
///
/// let loaded = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", loaded.dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<LoadedDictionary, DictionaryError> {
    let path = path.as_ref();
    let io_error = |source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let parsed = read_words(BufReader::new(file)).map_err(io_error)?;

    if parsed.words.is_empty() {
        return Err(DictionaryError::Empty(path.to_path_buf()));
    }

    Ok(LoadedDictionary {
        dictionary: Dictionary::new(parsed.words),
        skipped_lines: parsed.skipped_lines,
    })
}

/// Read words from any line-oriented source
///
/// # Errors
///
/// Returns the underlying I/O error if a line cannot be read.
pub fn read_words<R: BufRead>(reader: R) -> io::Result<ParsedWords> {
    let mut parsed = ParsedWords::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match Word::new(trimmed) {
            Ok(word) => parsed.words.push(word),
            Err(_) => parsed.skipped_lines.push(index + 1),
        }
    }

    Ok(parsed)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use hangman_entropy::dictionary::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "d0g", "horse"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s.trim()).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_words_reports_invalid_lines() {
        let input = "Cat\n\n  dog  \nfoo bar\nr2d2\n\nHorse\n";
        let parsed = read_words(Cursor::new(input)).unwrap();
        let texts: Vec<&str> = parsed.words.iter().map(Word::text).collect();

        assert_eq!(texts, vec!["cat", "dog", "horse"]);
        // blank lines are not counted as skipped
        assert_eq!(parsed.skipped_lines, vec![4, 5]);
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["Apple", "", "pear", "x-ray"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "apple");
        assert_eq!(words[1].text(), "pear");
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/a/real/words.txt");
        assert!(matches!(result, Err(DictionaryError::Io { .. })));
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "hangman_entropy_loader_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "cat\ncar\n\nCAN\nc@t\ncat\n").unwrap();

        let loaded = load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.dictionary.len(), 3);
        assert_eq!(loaded.dictionary.bucket(3).unwrap().len(), 3);
        assert_eq!(loaded.skipped_lines, vec![5]);
    }

    #[test]
    fn load_from_file_without_words_is_empty_error() {
        let path = std::env::temp_dir().join(format!(
            "hangman_entropy_loader_empty_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "\n123\n\n").unwrap();

        let result = load_from_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(DictionaryError::Empty(_))));
    }
}
