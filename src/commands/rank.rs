//! Offline guess ranking
//!
//! Scores a batch of guesses against the candidate universe, memoizing
//! results in the score cache. Scoring independent guesses is the one
//! parallel computation in the crate; each sweep still runs to completion.

use crate::core::Word;
use crate::solver::{ScoreCache, average_score};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// One scored guess, in input order
pub struct RankedGuess {
    pub word: String,
    pub score: f64,
    /// Whether the score came from the cache
    pub cached: bool,
    /// Whether the guess is in the accepted dictionary (advisory)
    pub in_dictionary: bool,
}

/// Score `guesses` against `candidates`, using and updating `cache`
///
/// Cached guesses are not recomputed. Results keep the input order so the
/// caller can report running maxima.
///
/// # Errors
///
/// Returns an error if any guess is malformed. Guesses outside the
/// dictionary are scored and flagged, not rejected.
pub fn rank_guesses(
    guesses: &[String],
    dictionary: &[Word],
    candidates: &[Word],
    cache: &mut ScoreCache,
) -> Result<Vec<RankedGuess>, String> {
    let words: Vec<Word> = guesses
        .iter()
        .map(|g| Word::new(g.as_str()).map_err(|e| format!("Invalid guess '{g}': {e}")))
        .collect::<Result<_, _>>()?;

    let uncached: Vec<&Word> = words.iter().filter(|w| cache.get(w.text()).is_none()).collect();

    if !uncached.is_empty() {
        let progress = ProgressBar::new(uncached.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        progress.set_message("scoring guesses");

        let scored: Vec<(String, f64)> = uncached
            .par_iter()
            .map(|guess| {
                let score = average_score(candidates, guess);
                progress.inc(1);
                (guess.text().to_string(), score)
            })
            .collect();
        progress.finish_and_clear();

        for (word, score) in scored {
            cache.insert(word, score);
        }
    }

    Ok(words
        .iter()
        .map(|word| RankedGuess {
            word: word.text().to_string(),
            score: cache.get(word.text()).unwrap_or(0.0),
            cached: !uncached.iter().any(|u| u.text() == word.text()),
            in_dictionary: dictionary.contains(word),
        })
        .collect())
}
