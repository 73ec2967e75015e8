//! Build script to embed the default dictionary
//!
//! Reads `data/words.txt` (one word per line, `#` starts a comment line) and
//! writes it out as a const array. Malformed entries fail the build.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const WORD_FILE: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let content =
        fs::read_to_string(WORD_FILE).unwrap_or_else(|e| panic!("Failed to read {WORD_FILE}: {e}"));

    let words = parse_words(&content);
    let source = render(&words);

    let output_path = Path::new(&out_dir).join("words.rs");
    fs::write(&output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));

    println!("cargo:rerun-if-changed={WORD_FILE}");
}

fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, word)| {
            assert!(
                word.bytes().all(|b| b.is_ascii_alphabetic()),
                "{WORD_FILE}:{line_no}: '{word}' is not a plain ASCII word"
            );
            word.to_ascii_lowercase()
        })
        .collect()
}

fn render(words: &[String]) -> String {
    let mut out = String::new();
    out.push_str("// Generated from data/words.txt by build.rs\n\n");
    out.push_str("/// Default Hangman dictionary (mixed word lengths)\n");
    out.push_str("pub const WORDS: &[&str] = &[\n");
    for word in words {
        writeln!(out, "    \"{word}\",").unwrap();
    }
    out.push_str("];\n\n");
    out.push_str("/// Number of entries in `WORDS`\n");
    writeln!(out, "pub const WORDS_COUNT: usize = {};", words.len()).unwrap();
    out
}
