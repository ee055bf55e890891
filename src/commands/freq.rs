//! Letter frequency report
//!
//! Builds frequency tables over the candidate universe, optionally weighted
//! by a per-word weight file (`<word> <weight>` lines).

use crate::core::Word;
use crate::solver::{FrequencyTables, letter_frequencies};
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Load a per-word weight map from a file of `<word> <weight>` lines
///
/// Malformed lines are skipped.
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
pub fn load_weights<P: AsRef<Path>>(path: P) -> io::Result<FxHashMap<String, f64>> {
    let content = fs::read_to_string(path)?;

    let mut weights = FxHashMap::default();
    for line in content.lines() {
        let mut parts = line.split_whitespace();
        if let (Some(word), Some(weight)) = (parts.next(), parts.next())
            && let Ok(weight) = weight.parse::<f64>()
        {
            weights.insert(word.to_string(), weight);
        }
    }

    Ok(weights)
}

/// Build the frequency tables for a word set
#[must_use]
pub fn frequency_report(
    words: &[Word],
    weights: Option<&FxHashMap<String, f64>>,
) -> FrequencyTables {
    letter_frequencies(words, weights)
}
