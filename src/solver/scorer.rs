//! Guess scoring
//!
//! Scores a guess by the average number of candidates it eliminates across a
//! hypothetical-secret sweep of the candidate universe. The metric is the
//! expected elimination count, not the Shannon entropy of the pattern
//! distribution.

use crate::core::{Constraints, Feedback, Word};
use rustc_hash::FxHashMap;

/// Decimal precision applied to average scores for display stability
const SCORE_PRECISION: f64 = 1000.0;

/// Candidates eliminated by `guess` when `secret` is the hidden word
///
/// Derives the constraints the guess would receive against `secret`, filters
/// the candidate universe by them, and returns how many candidates fall away.
#[must_use]
pub fn eliminations(candidates: &[Word], guess: &Word, secret: &Word) -> usize {
    let feedback = Feedback::calculate(secret, guess);
    let constraints = Constraints::from_feedback(guess, &feedback);

    let surviving = candidates
        .iter()
        .filter(|word| constraints.satisfies(word))
        .count();

    candidates.len() - surviving
}

/// Average number of candidates `guess` eliminates over all hypothetical
/// secrets in `candidates`, rounded to three decimals
///
/// Higher is better: the guess partitions the candidate space more finely on
/// average. Returns 0 exactly when every candidate produces the same feedback
/// against the guess.
///
/// For guesses without repeated letters the sweep runs as a single grouping
/// pass over feedback patterns, which yields the same numbers as the naive
/// per-secret filter sweep. Repeated-letter guesses take the naive path, where
/// constraint filtering (not pattern equality) is the defining semantics.
///
/// # Examples
/// ```
/// use wordle_coach::core::Word;
/// use wordle_coach::solver::average_score;
///
/// let candidates = vec![
///     Word::new("crane").unwrap(),
///     Word::new("crate").unwrap(),
///     Word::new("grape").unwrap(),
/// ];
/// let guess = Word::new("crane").unwrap();
///
/// assert!(average_score(&candidates, &guess) > 0.0);
/// ```
#[must_use]
pub fn average_score(candidates: &[Word], guess: &Word) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let total_eliminated: usize = if guess.has_repeated_letters() {
        candidates
            .iter()
            .map(|secret| eliminations(candidates, guess, secret))
            .sum()
    } else {
        grouped_eliminations(candidates, guess)
    };

    let mean = total_eliminated as f64 / candidates.len() as f64;
    (mean * SCORE_PRECISION).round() / SCORE_PRECISION
}

/// Total eliminations via one grouping pass over feedback patterns
///
/// Every hypothetical secret in a pattern group leaves exactly that group as
/// its surviving partition, so the sweep total is `Σ n · (N − n)` over group
/// sizes without filtering per secret.
fn grouped_eliminations(candidates: &[Word], guess: &Word) -> usize {
    let mut groups: FxHashMap<Feedback, usize> = FxHashMap::default();

    for secret in candidates {
        let feedback = Feedback::calculate(secret, guess);
        *groups.entry(feedback).or_insert(0) += 1;
    }

    let total = candidates.len();
    groups.values().map(|&n| n * (total - n)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    /// Sweep mean computed directly, without the grouping shortcut
    fn naive_average(candidates: &[Word], guess: &Word) -> f64 {
        let mut total = 0usize;
        for secret in candidates {
            let feedback = Feedback::calculate(secret, guess);
            let constraints = Constraints::from_feedback(guess, &feedback);
            let surviving = candidates
                .iter()
                .filter(|w| constraints.satisfies(w))
                .count();
            total += candidates.len() - surviving;
        }
        total as f64 / candidates.len() as f64
    }

    #[test]
    fn eliminations_on_exact_guess() {
        let candidates = words(&["crane", "crate", "grape"]);
        let guess = Word::new("crane").unwrap();
        let secret = Word::new("crane").unwrap();

        // The secret itself partitions to size 1
        assert_eq!(eliminations(&candidates, &guess, &secret), 2);
    }

    #[test]
    fn average_score_crane_crate_grape() {
        let candidates = words(&["crane", "crate", "grape"]);
        let guess = Word::new("crane").unwrap();

        let expected = naive_average(&candidates, &guess);
        let score = average_score(&candidates, &guess);

        assert!((score - expected).abs() < 1e-9);
        // Each hypothetical secret partitions down to itself here
        assert!((score - 2.0).abs() < 1e-9);
    }

    #[test]
    fn zero_information_guess() {
        // Every candidate yields the identical all-absent pattern
        let candidates = words(&["crane", "crate", "grape"]);
        let guess = Word::new("zymib").unwrap();

        assert!((average_score(&candidates, &guess) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn nonzero_iff_patterns_differ() {
        // SLATE and CRATE disagree on the pattern for guess SLATE
        let candidates = words(&["slate", "crate"]);
        let guess = Word::new("slate").unwrap();

        assert!(average_score(&candidates, &guess) > 0.0);
    }

    #[test]
    fn grouped_matches_naive_for_simple_guesses() {
        let candidates = words(&[
            "crane", "crate", "grape", "slate", "irate", "stare", "plumb", "shard",
        ]);

        for guess in ["crane", "slate", "mourn", "pight"] {
            let guess = Word::new(guess).unwrap();
            assert!(!guess.has_repeated_letters());

            let expected = naive_average(&candidates, &guess);
            let expected = (expected * 1000.0).round() / 1000.0;
            assert!(
                (average_score(&candidates, &guess) - expected).abs() < 1e-9,
                "grouped path diverged for {guess}"
            );
        }
    }

    #[test]
    fn repeated_letter_guess_uses_filter_semantics() {
        let candidates = words(&["erase", "geese", "melee", "tepee"]);
        let guess = Word::new("eerie").unwrap();

        let expected = naive_average(&candidates, &guess);
        let expected = (expected * 1000.0).round() / 1000.0;
        assert!((average_score(&candidates, &guess) - expected).abs() < 1e-9);
    }

    #[test]
    fn average_score_empty_candidates() {
        let candidates: Vec<Word> = Vec::new();
        let guess = Word::new("crane").unwrap();

        assert!((average_score(&candidates, &guess) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn average_score_bounded() {
        let candidates = words(&["crane", "crate", "grape", "slate", "irate"]);
        let guess = Word::new("crane").unwrap();

        let score = average_score(&candidates, &guess);
        assert!(score >= 0.0);
        assert!(score <= (candidates.len() - 1) as f64);
    }

    #[test]
    fn score_rounded_to_three_decimals() {
        let candidates = words(&["crane", "crate", "grape"]);
        let guess = Word::new("slate").unwrap();

        let score = average_score(&candidates, &guess);
        let rescaled = score * 1000.0;
        assert!((rescaled - rescaled.round()).abs() < 1e-9);
    }
}
