//! Word analysis command
//!
//! Scores a single guess against the candidate universe by its average
//! elimination count.

use crate::core::Word;
use crate::solver::average_score;

/// Result of analyzing one guess
pub struct AnalysisResult {
    pub word: String,
    pub score: f64,
    pub total_candidates: usize,
    /// Whether the guess is in the accepted dictionary; scoring proceeds
    /// either way, a missing word is only an advisory warning.
    pub in_dictionary: bool,
}

/// Score a word's average discriminative power against `candidates`
///
/// # Errors
///
/// Returns an error if the word is malformed (wrong length or non-alphabetic
/// characters). A word outside the dictionary is not an error.
pub fn analyze_word(
    word: &str,
    dictionary: &[Word],
    candidates: &[Word],
) -> Result<AnalysisResult, String> {
    let guess = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    let in_dictionary = dictionary.contains(&guess);
    let score = average_score(candidates, &guess);

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        score,
        total_candidates: candidates.len(),
        in_dictionary,
    })
}
