//! Cumulative letter hints for keyboard display.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::score::LetterStatus;

/// The best [`LetterStatus`] observed for each letter across all attempts.
///
/// Entries only ever improve: once a letter is known to be `Correct`, no
/// later guess can downgrade it to `Present` or `Absent`. A front-end reads
/// this to color its on-screen keyboard.
///
/// # Examples
///
/// ```rust
/// use termo_rs::{GameConfig, GameSession, LetterStatus};
///
/// let mut session = GameSession::new(GameConfig::new("VINHO", 6)?);
/// session.submit_guess("NOVEL")?;
/// assert_eq!(session.keyboard().get('V'), Some(LetterStatus::Present));
///
/// session.submit_guess("VINTE")?;
/// assert_eq!(session.keyboard().get('V'), Some(LetterStatus::Correct));
/// # Ok::<_, termo_rs::GameError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct KeyboardHints {
    slots: [Option<LetterStatus>; 26],
}

impl KeyboardHints {
    /// Creates an empty map: no letter has been graded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one scored letter into the map, never downgrading an entry.
    pub(crate) fn record(&mut self, letter: char, status: LetterStatus) {
        let Some(i) = index(letter) else { return };
        let slot = &mut self.slots[i];
        *slot = Some(match *slot {
            Some(previous) => previous.min(status),
            None => status,
        });
    }

    /// The best status seen for `letter`, or `None` if it has not been
    /// part of any scored guess. Expects an uppercase ASCII letter.
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        index(letter).and_then(|i| self.slots[i])
    }

    /// Iterates over every graded letter in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|status| ((b'A' + i as u8) as char, status)))
    }

    pub(crate) fn clear(&mut self) {
        self.slots = [None; 26];
    }
}

fn index(letter: char) -> Option<usize> {
    letter
        .is_ascii_uppercase()
        .then(|| letter as usize - 'A' as usize)
}

#[cfg(test)]
mod test {
    use super::*;
    use LetterStatus::*;

    #[test]
    fn entries_upgrade_but_never_downgrade() {
        let mut hints = KeyboardHints::new();

        hints.record('A', Absent);
        assert_eq!(hints.get('A'), Some(Absent));

        hints.record('A', Present);
        assert_eq!(hints.get('A'), Some(Present));

        hints.record('A', Correct);
        assert_eq!(hints.get('A'), Some(Correct));

        hints.record('A', Present);
        hints.record('A', Absent);
        assert_eq!(hints.get('A'), Some(Correct));
    }

    #[test]
    fn ungraded_letters_are_unknown() {
        let hints = KeyboardHints::new();
        assert_eq!(hints.get('Q'), None);
        assert_eq!(hints.iter().count(), 0);
    }

    #[test]
    fn iteration_is_alphabetical() {
        let mut hints = KeyboardHints::new();
        hints.record('Z', Absent);
        hints.record('B', Correct);
        hints.record('M', Present);

        let graded: Vec<_> = hints.iter().collect();
        assert_eq!(graded, [('B', Correct), ('M', Present), ('Z', Absent)]);
    }

    #[test]
    fn clearing_forgets_everything() {
        let mut hints = KeyboardHints::new();
        hints.record('A', Correct);
        hints.clear();
        assert_eq!(hints, KeyboardHints::new());
    }
}
