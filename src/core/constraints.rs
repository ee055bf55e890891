//! Constraint derivation and candidate filtering
//!
//! A [`Constraints`] value is the filterable form of one feedback: exact
//! positions, misplaced-but-required letters, and absent letters. The
//! `satisfies` check consumes letter occurrences in the same order the
//! feedback calculation does; the two must agree or filtering and feedback
//! computation will disagree on words with duplicate letters.

use super::feedback::{Feedback, Label};
use super::word::{WORD_LEN, Word};

/// Sentinel for a consumed position in the scratch buffer
const CONSUMED: u8 = 0;

/// Constraints derived from one guess's feedback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    /// (position, letter): the word has `letter` at exactly `position`
    exact: Vec<(usize, u8)>,
    /// (position, letter): the word contains `letter`, but not at `position`
    present: Vec<(usize, u8)>,
    /// Letters with no unclaimed occurrence in the word
    absent: Vec<u8>,
}

impl Constraints {
    /// Derive constraints from the feedback a guess received
    #[must_use]
    pub fn from_feedback(guess: &Word, feedback: &Feedback) -> Self {
        let mut constraints = Self::default();

        for i in 0..WORD_LEN {
            let letter = guess.letter_at(i);
            match feedback.label_at(i) {
                Label::Correct => constraints.exact.push((i, letter)),
                Label::Present => constraints.present.push((i, letter)),
                Label::Absent => constraints.absent.push(letter),
            }
        }

        constraints
    }

    /// The exact (position, letter) requirements
    #[must_use]
    pub fn exact(&self) -> &[(usize, u8)] {
        &self.exact
    }

    /// The misplaced (position, letter) requirements
    #[must_use]
    pub fn present(&self) -> &[(usize, u8)] {
        &self.present
    }

    /// The absent letters
    #[must_use]
    pub fn absent(&self) -> &[u8] {
        &self.absent
    }

    /// Whether `word` is consistent with these constraints
    ///
    /// Occurrences are consumed from a scratch copy of the word in the same
    /// order the feedback calculation claims them: exact positions first,
    /// then one occurrence per misplaced letter. Absent letters reject only
    /// if an unconsumed occurrence remains, since a letter can be required by
    /// an exact or present entry and separately marked absent for its extra
    /// occurrences.
    #[must_use]
    pub fn satisfies(&self, word: &Word) -> bool {
        let mut scratch = *word.letters();

        for &(position, letter) in &self.exact {
            if word.letter_at(position) != letter {
                return false;
            }
            scratch[position] = CONSUMED;
        }

        for &(position, letter) in &self.present {
            if word.letter_at(position) == letter {
                // Would have been an exact match
                return false;
            }
            let Some(occurrence) = scratch.iter().position(|&l| l == letter) else {
                return false;
            };
            scratch[occurrence] = CONSUMED;
        }

        for &letter in &self.absent {
            if scratch.contains(&letter) {
                return false;
            }
        }

        true
    }
}

/// Filter a candidate sequence down to the words satisfying `constraints`
///
/// Builds a new sequence rather than mutating the source.
#[must_use]
pub fn filter_candidates(candidates: &[Word], constraints: &Constraints) -> Vec<Word> {
    candidates
        .iter()
        .filter(|word| constraints.satisfies(word))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraints_for(secret: &str, guess: &str) -> (Word, Constraints) {
        let secret = Word::new(secret).unwrap();
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::calculate(&secret, &guess);
        (secret, Constraints::from_feedback(&guess, &feedback))
    }

    #[test]
    fn derivation_splits_by_label() {
        let (_, constraints) = constraints_for("crane", "canoe");

        assert_eq!(constraints.exact(), &[(0, b'c'), (4, b'e')]);
        assert_eq!(constraints.present(), &[(1, b'a'), (2, b'n')]);
        assert_eq!(constraints.absent(), &[b'o']);
    }

    #[test]
    fn secret_satisfies_its_own_constraints() {
        // Soundness: filtering by feedback derived from the true secret must
        // never remove the secret.
        let pairs = [
            ("crane", "canoe"),
            ("crane", "slate"),
            ("erase", "speed"),
            ("floor", "robot"),
            ("abbey", "babes"),
            ("maker", "eexxx"),
            ("aaaaa", "aabbb"),
            ("geese", "eagle"),
        ];

        for (secret, guess) in pairs {
            let (secret, constraints) = constraints_for(secret, guess);
            assert!(
                constraints.satisfies(&secret),
                "soundness violated for {secret}"
            );
        }
    }

    #[test]
    fn exact_mismatch_rejects() {
        let (_, constraints) = constraints_for("crane", "crane");

        assert!(constraints.satisfies(&Word::new("crane").unwrap()));
        assert!(!constraints.satisfies(&Word::new("crate").unwrap()));
        assert!(!constraints.satisfies(&Word::new("slate").unwrap()));
    }

    #[test]
    fn present_letter_at_same_position_rejects() {
        // Guess CANOE vs secret CRANE marks A present at position 1,
        // so any word with A at position 1 is inconsistent.
        let (_, constraints) = constraints_for("crane", "canoe");

        assert!(!constraints.satisfies(&Word::new("cable").unwrap()));
    }

    #[test]
    fn present_letter_missing_rejects() {
        let (_, constraints) = constraints_for("crane", "canoe");

        // No N anywhere
        assert!(!constraints.satisfies(&Word::new("cease").unwrap()));
    }

    #[test]
    fn absent_letter_rejects() {
        let (_, constraints) = constraints_for("crane", "canoe");

        // Satisfies every exact and present entry but carries the absent O
        assert!(!constraints.satisfies(&Word::new("coane").unwrap()));
    }

    #[test]
    fn absent_checks_unconsumed_occurrences_only() {
        // Secret MAKER vs guess EEXXX: E present at 0, E absent at 1.
        // A word with exactly one E (claimed by the present entry) passes;
        // a word with two E's fails on the leftover occurrence.
        let (_, constraints) = constraints_for("maker", "eexxx");

        assert!(constraints.satisfies(&Word::new("maker").unwrap()));
        assert!(constraints.satisfies(&Word::new("abets").unwrap()));
        assert!(!constraints.satisfies(&Word::new("melee").unwrap()));
        assert!(!constraints.satisfies(&Word::new("geese").unwrap()));
    }

    #[test]
    fn exact_consumption_shields_present_checks() {
        // Secret GEESE vs guess EAGLE: E correct at 4 consumes one E, the
        // E at position 0 is present, G is present, A and L absent.
        let (secret, constraints) = constraints_for("geese", "eagle");
        assert!(constraints.satisfies(&secret));

        // The guess itself has E at position 0, where E is marked present
        assert!(!constraints.satisfies(&Word::new("eagle").unwrap()));
    }

    #[test]
    fn filter_candidates_builds_new_sequence() {
        let candidates: Vec<Word> = ["crane", "crate", "grape", "slate"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();

        let (_, constraints) = constraints_for("crate", "crane");
        let filtered = filter_candidates(&candidates, &constraints);

        assert_eq!(filtered, vec![Word::new("crate").unwrap()]);
        assert_eq!(candidates.len(), 4); // Source untouched
    }

    #[test]
    fn filter_never_grows() {
        let candidates: Vec<Word> = ["crane", "crate", "grape", "slate", "irate"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();

        let (_, constraints) = constraints_for("grape", "crane");
        let filtered = filter_candidates(&candidates, &constraints);

        assert!(filtered.len() <= candidates.len());
    }
}
