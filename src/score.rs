//! Scoring a guess against the target word.

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The status of one letter of a scored guess.
///
/// Declared from most to least revealing, so the derived ordering ranks
/// `Correct` first. The best-known status of a letter across several guesses
/// is the minimum observed; [`KeyboardHints`](crate::KeyboardHints) relies
/// on this to upgrade entries without ever downgrading them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum LetterStatus {
    /// The letter occupies the same position as in the target.
    Correct,

    /// The letter occurs in the target, but at a different position.
    Present,

    /// The letter does not occur in the target, or every occurrence has
    /// already been claimed by another position of the guess.
    Absent,
}

/// The scored record of one submitted guess.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct GuessResult {
    /// The submitted word, uppercased.
    pub guess: String,

    /// One status per letter, index-aligned with the guess.
    pub statuses: Vec<LetterStatus>,

    /// Zero-based index of the attempt that produced this result.
    pub attempt: usize,
}

impl GuessResult {
    /// Returns true if every letter landed in the right position.
    pub fn is_win(&self) -> bool {
        self.statuses.iter().all(|&s| s == LetterStatus::Correct)
    }
}

/// Scores `guess` against `target`, returning one status per guess letter.
///
/// Both words must have the same length; the session validates this before
/// calling. Exact-position matches always claim their letter from the
/// target before partial matches do, so a guess never receives more
/// `Correct` and `Present` marks for a letter than the target contains
/// copies of it.
///
/// # Examples
///
/// ```rust
/// use termo_rs::{score, LetterStatus::*};
///
/// assert_eq!(score("ALLOY", "LOLLY"), [Present, Present, Correct, Absent, Correct]);
/// assert_eq!(score("VINHO", "VINTE"), [Correct, Correct, Correct, Absent, Absent]);
/// ```
pub fn score(target: &str, guess: &str) -> Vec<LetterStatus> {
    debug_assert_eq!(target.chars().count(), guess.chars().count());

    let mut statuses = vec![LetterStatus::Absent; guess.chars().count()];
    let mut remaining = target.chars().counts();

    // First pass: exact positions claim their letter from the pool.
    for (i, (g, t)) in guess.chars().zip(target.chars()).enumerate() {
        if g == t {
            statuses[i] = LetterStatus::Correct;
            if let Some(n) = remaining.get_mut(&g) {
                *n -= 1;
            }
        }
    }

    // Second pass: whatever is left in the pool backs the partial matches.
    for (i, g) in guess.chars().enumerate() {
        if statuses[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(n) = remaining.get_mut(&g) {
            if *n > 0 {
                *n -= 1;
                statuses[i] = LetterStatus::Present;
            }
        }
    }

    statuses
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    /// Builds a status sequence from a compact string: 'c' for correct,
    /// 'p' for present, 'a' for absent.
    fn statuses(input: &str) -> Vec<LetterStatus> {
        input
            .chars()
            .map(|c| match c {
                'c' => LetterStatus::Correct,
                'p' => LetterStatus::Present,
                _ => LetterStatus::Absent,
            })
            .collect()
    }

    #[test]
    fn guessing_the_target_is_all_correct() {
        assert_eq!(score("VINHO", "VINHO"), statuses("ccccc"));
    }

    #[test]
    fn sharing_no_letters_is_all_absent() {
        assert_eq!(score("VINHO", "PASTA"), statuses("aaaaa"));
    }

    #[test]
    fn exact_matches_resolve_before_partial_ones() {
        // Two L's in the target: the one at position 2 is exact, the one at
        // position 0 takes the remaining copy, and position 3 gets nothing.
        assert_eq!(score("ALLOY", "LOLLY"), statuses("ppcac"));
    }

    #[test]
    fn partial_matches_stop_at_target_multiplicity() {
        assert_eq!(score("SOBER", "SPOOL"), statuses("capaa"));
        assert_eq!(score("SOBER", "SOAKS"), statuses("ccaaa"));
    }

    #[test]
    fn duplicate_letters_in_the_target() {
        assert_eq!(score("SPOON", "ODORS"), statuses("pacap"));
        assert_eq!(score("TILLS", "PINES"), statuses("acaac"));
    }

    #[test]
    fn reference_board_opening_guess() {
        assert_eq!(score("VINHO", "VINTE"), statuses("cccaa"));
    }

    #[test]
    fn win_detection() {
        let result = GuessResult {
            guess: "VINHO".into(),
            statuses: score("VINHO", "VINHO"),
            attempt: 0,
        };
        assert!(result.is_win());

        let result = GuessResult {
            guess: "VINTE".into(),
            statuses: score("VINHO", "VINTE"),
            attempt: 0,
        };
        assert!(!result.is_win());
    }

    proptest! {
        #[test]
        fn scoring_a_word_against_itself_wins(word in "[A-Z]{3,8}") {
            prop_assert!(score(&word, &word)
                .iter()
                .all(|&s| s == LetterStatus::Correct));
        }

        #[test]
        fn exact_position_matches_are_always_correct(
            target in "[A-Z]{5}",
            guess in "[A-Z]{5}",
        ) {
            let scored = score(&target, &guess);
            for (i, (g, t)) in guess.chars().zip(target.chars()).enumerate() {
                if g == t {
                    prop_assert_eq!(scored[i], LetterStatus::Correct);
                }
            }
        }

        #[test]
        fn marks_never_exceed_target_multiplicity(
            target in "[A-Z]{5}",
            guess in "[A-Z]{5}",
        ) {
            let scored = score(&target, &guess);
            for letter in guess.chars().unique() {
                let claimed = guess
                    .chars()
                    .zip(scored.iter())
                    .filter(|&(g, &s)| g == letter && s != LetterStatus::Absent)
                    .count();
                let available = target.chars().filter(|&c| c == letter).count();
                prop_assert!(claimed <= available);
            }
        }
    }
}
