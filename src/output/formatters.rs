//! Formatting utilities for terminal output

use crate::core::Guess;
use colored::{ColoredString, Colorize};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to 4 bits
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 4.0;
    create_progress_bar(entropy, max_entropy, width)
}

/// Spread a pattern out for display, e.g. `-a-a-a` as `_ A _ A _ A`
#[must_use]
pub fn spaced_pattern(pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| if c == '-' { '_' } else { c.to_ascii_uppercase() })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Guess text colored by whether it hit
#[must_use]
pub fn colored_guess(guess: &Guess, correct: bool) -> ColoredString {
    let text = guess.to_string().to_uppercase();
    if correct {
        text.green().bold()
    } else {
        text.red()
    }
}
