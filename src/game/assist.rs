//! Accumulated per-letter bookkeeping for assistance display
//!
//! Tracks, across one game's turns: letters with a confirmed position,
//! per-letter minimum multiplicities (the most Correct+Present credits any
//! single turn produced), and letters ruled out entirely. Exact knowledge
//! takes precedence over present knowledge for the same letter.

use crate::core::{Feedback, Label, WORD_LEN, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Aggregated letter knowledge across the turns of one game
#[derive(Debug, Default, Clone)]
pub struct AssistTracker {
    /// Confirmed letters by position (authoritative)
    exact: FxHashMap<usize, u8>,
    /// Minimum confirmed multiplicity per letter
    required: FxHashMap<u8, u8>,
    /// Letters with no unclaimed occurrence in the secret
    absent: FxHashSet<u8>,
}

impl AssistTracker {
    /// Create an empty tracker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one turn's feedback into the accumulated knowledge
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) {
        let mut turn_counts: FxHashMap<u8, u8> = FxHashMap::default();
        let mut turn_grays: Vec<u8> = Vec::new();

        for i in 0..WORD_LEN {
            let letter = guess.letter_at(i);
            match feedback.label_at(i) {
                Label::Correct => {
                    self.exact.insert(i, letter);
                    *turn_counts.entry(letter).or_insert(0) += 1;
                }
                Label::Present => {
                    *turn_counts.entry(letter).or_insert(0) += 1;
                }
                Label::Absent => turn_grays.push(letter),
            }
        }

        // A turn's credited count is a lower bound on the letter's
        // multiplicity; keep the highest bound seen so far.
        for (letter, count) in &turn_counts {
            let required = self.required.entry(*letter).or_insert(0);
            *required = (*required).max(*count);
        }

        // A gray letter is only truly ruled out if nothing credited it,
        // neither this turn nor an earlier confirmed position.
        for letter in turn_grays {
            if !turn_counts.contains_key(&letter) && !self.exact.values().any(|&l| l == letter) {
                self.absent.insert(letter);
            }
        }
    }

    /// Confirmed letters by position
    #[must_use]
    pub fn exact_positions(&self) -> &FxHashMap<usize, u8> {
        &self.exact
    }

    /// Required letters still lacking a confirmed position, with their
    /// minimum multiplicities, sorted by letter
    ///
    /// Occurrences already pinned to an exact position are subtracted, so a
    /// letter fully accounted for by greens disappears from the list.
    #[must_use]
    pub fn required_display(&self) -> Vec<(char, u8)> {
        let mut exact_counts: FxHashMap<u8, u8> = FxHashMap::default();
        for &letter in self.exact.values() {
            *exact_counts.entry(letter).or_insert(0) += 1;
        }

        let mut display: Vec<(char, u8)> = self
            .required
            .iter()
            .filter_map(|(&letter, &count)| {
                let pinned = exact_counts.get(&letter).copied().unwrap_or(0);
                let unpinned = count.saturating_sub(pinned);
                (unpinned > 0).then_some((char::from(letter), unpinned))
            })
            .collect();

        display.sort_unstable();
        display
    }

    /// Letters of the alphabet not yet ruled out and not yet known to occur
    #[must_use]
    pub fn remaining_letters(&self) -> Vec<char> {
        (b'a'..=b'z')
            .filter(|letter| {
                !self.absent.contains(letter)
                    && !self.required.contains_key(letter)
                    && !self.exact.values().any(|l| l == letter)
            })
            .map(char::from)
            .collect()
    }

    /// Letters ruled out entirely, sorted
    #[must_use]
    pub fn absent_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.absent.iter().map(|&l| char::from(l)).collect();
        letters.sort_unstable();
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn update_for(tracker: &mut AssistTracker, secret: &str, guess: &str) {
        let secret = Word::new(secret).unwrap();
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::calculate(&secret, &guess);
        tracker.update(&guess, &feedback);
    }

    #[test]
    fn greens_recorded_by_position() {
        let mut tracker = AssistTracker::new();
        update_for(&mut tracker, "crane", "canoe");

        assert_eq!(tracker.exact_positions().get(&0), Some(&b'c'));
        assert_eq!(tracker.exact_positions().get(&4), Some(&b'e'));
        assert_eq!(tracker.exact_positions().len(), 2);
    }

    #[test]
    fn required_subtracts_pinned_occurrences() {
        let mut tracker = AssistTracker::new();
        update_for(&mut tracker, "crane", "canoe");

        // C and E are pinned; A and N are required but unplaced
        assert_eq!(tracker.required_display(), vec![('a', 1), ('n', 1)]);
    }

    #[test]
    fn remaining_excludes_known_and_absent() {
        let mut tracker = AssistTracker::new();
        update_for(&mut tracker, "crane", "canoe");

        let remaining = tracker.remaining_letters();
        // Known letters and the ruled-out O are gone
        for known in ['c', 'a', 'n', 'o', 'e'] {
            assert!(!remaining.contains(&known));
        }
        assert!(remaining.contains(&'r'));
        assert!(remaining.contains(&'z'));
    }

    #[test]
    fn absent_letters_accumulate() {
        let mut tracker = AssistTracker::new();
        update_for(&mut tracker, "crane", "moist");
        update_for(&mut tracker, "crane", "lucky");

        let absent = tracker.absent_letters();
        for letter in ['i', 'k', 'l', 'm', 'o', 's', 't', 'u', 'y'] {
            assert!(absent.contains(&letter), "{letter} should be ruled out");
        }
        // C was credited in the second turn
        assert!(!absent.contains(&'c'));
    }

    #[test]
    fn duplicate_gray_does_not_rule_out_credited_letter() {
        // Secret MAKER, guess EEXXX: one E credited, the extra E gray
        let mut tracker = AssistTracker::new();
        update_for(&mut tracker, "maker", "eexxx");

        assert!(!tracker.absent_letters().contains(&'e'));
        assert_eq!(tracker.required_display(), vec![('e', 1)]);
    }

    #[test]
    fn required_multiplicity_grows_to_best_bound() {
        // Secret GEESE: first turn credits one E, a later turn credits three
        let mut tracker = AssistTracker::new();
        update_for(&mut tracker, "geese", "maker");
        assert_eq!(tracker.required_display(), vec![('e', 1)]);

        // MELEE credits three E's (two pinned by greens, one misplaced),
        // so one required E remains beyond the confirmed positions.
        update_for(&mut tracker, "geese", "melee");
        assert_eq!(tracker.exact_positions().get(&1), Some(&b'e'));
        assert_eq!(tracker.exact_positions().get(&4), Some(&b'e'));
        assert_eq!(tracker.required_display(), vec![('e', 1)]);
    }

    #[test]
    fn fully_pinned_letter_leaves_required_display() {
        let mut tracker = AssistTracker::new();
        update_for(&mut tracker, "crane", "crane");

        assert!(tracker.required_display().is_empty());
        assert_eq!(tracker.exact_positions().len(), WORD_LEN);
    }
}
