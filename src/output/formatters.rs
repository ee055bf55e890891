//! Formatting utilities for terminal output

use crate::core::{Feedback, Label, WORD_LEN, Word};
use colored::{ColoredString, Colorize};
use rustc_hash::FxHashMap;

/// Ordinal names for the six turns
pub const ORDINALS: [&str; 6] = ["1st", "2nd", "3rd", "4th", "5th", "6th"];

/// Ordinal name for a 1-based turn number
#[must_use]
pub fn ordinal(turn: usize) -> &'static str {
    ORDINALS.get(turn - 1).copied().unwrap_or("next")
}

/// Color an uppercase letter according to its label
#[must_use]
pub fn styled_letter(letter: u8, label: Label) -> ColoredString {
    let letter = char::from(letter.to_ascii_uppercase()).to_string();
    match label {
        Label::Correct => letter.bright_green().bold(),
        Label::Present => letter.yellow().bold(),
        Label::Absent => letter.bright_black().bold(),
    }
}

/// Render one guess with its feedback as a colored row
#[must_use]
pub fn feedback_row(guess: &Word, feedback: &Feedback) -> String {
    (0..WORD_LEN)
        .map(|i| styled_letter(guess.letter_at(i), feedback.label_at(i)).to_string())
        .collect()
}

/// Render the secret skeleton: confirmed letters green, the rest underscores
#[must_use]
pub fn skeleton_row(exact: &FxHashMap<usize, u8>) -> String {
    (0..WORD_LEN)
        .map(|i| match exact.get(&i) {
            Some(&letter) => styled_letter(letter, Label::Correct).to_string(),
            None => "_".bright_black().to_string(),
        })
        .collect()
}
