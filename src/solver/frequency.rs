//! Letter frequency statistics
//!
//! Per-position and overall letter frequency tables over a word set, with
//! optional per-word weights. Used only to rank guesses heuristically, never
//! to filter candidates.

use crate::core::{WORD_LEN, Word};
use rustc_hash::FxHashMap;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// Frequency tables for one word set
///
/// Every letter of the alphabet appears in every table, defaulting to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTables {
    /// One table per word position
    pub by_position: [[f64; ALPHABET_LEN]; WORD_LEN],
    /// Combined table over all positions
    pub overall: [f64; ALPHABET_LEN],
}

impl FrequencyTables {
    /// Overall frequency of a letter
    #[must_use]
    pub fn overall_count(&self, letter: u8) -> f64 {
        self.overall[usize::from(letter - b'a')]
    }

    /// Frequency of a letter at a specific position
    #[must_use]
    pub fn position_count(&self, position: usize, letter: u8) -> f64 {
        self.by_position[position][usize::from(letter - b'a')]
    }
}

/// Build frequency tables for a word set
///
/// When `weights` is supplied, each word contributes its weight instead of 1;
/// words without an entry contribute nothing.
#[must_use]
pub fn letter_frequencies(
    words: &[Word],
    weights: Option<&FxHashMap<String, f64>>,
) -> FrequencyTables {
    let mut by_position = [[0.0; ALPHABET_LEN]; WORD_LEN];
    let mut overall = [0.0; ALPHABET_LEN];

    for word in words {
        let weight = match weights {
            Some(weights) => weights.get(word.text()).copied().unwrap_or(0.0),
            None => 1.0,
        };

        for (position, &letter) in word.letters().iter().enumerate() {
            let index = usize::from(letter - b'a');
            by_position[position][index] += weight;
            overall[index] += weight;
        }
    }

    FrequencyTables {
        by_position,
        overall,
    }
}

/// Letters of the alphabet ordered by descending frequency in `table`
///
/// Ties keep alphabetical order.
#[must_use]
pub fn ranked_letters(table: &[f64; ALPHABET_LEN]) -> Vec<char> {
    let mut letters: Vec<usize> = (0..ALPHABET_LEN).collect();
    letters.sort_by(|&a, &b| table[b].total_cmp(&table[a]).then(a.cmp(&b)));
    letters
        .into_iter()
        .map(|i| char::from(b'a' + i as u8))
        .collect()
}
