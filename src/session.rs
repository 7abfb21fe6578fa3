//! The attempt state machine that drives a single game.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    keyboard::KeyboardHints,
    score::{score, GuessResult},
    GameError, Result,
};

/// Board dimensions and the hidden answer for one game.
///
/// Construction validates and uppercases the target, so a [`GameSession`]
/// never has to re-check it. The word length is the target's length.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct GameConfig {
    target: String,
    max_attempts: usize,
}

impl GameConfig {
    /// Creates a configuration for guessing `target` within `max_attempts`.
    ///
    /// The target is uppercased. Returns an error for an empty target, a
    /// zero attempt budget, or any character that is not an ASCII letter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termo_rs::{GameConfig, GameError};
    ///
    /// let config = GameConfig::new("vinho", 6)?;
    /// assert_eq!(config.target(), "VINHO");
    /// assert_eq!(config.word_length(), 5);
    ///
    /// assert_eq!(GameConfig::new("vin4o", 6), Err(GameError::InvalidCharacter('4')));
    /// # Ok::<_, termo_rs::GameError>(())
    /// ```
    pub fn new(target: &str, max_attempts: usize) -> Result<Self> {
        if target.is_empty() {
            return Err(GameError::EmptyTarget);
        }
        if max_attempts == 0 {
            return Err(GameError::NoAttempts);
        }
        if let Some(c) = target.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(GameError::InvalidCharacter(c));
        }

        Ok(GameConfig {
            target: target.to_ascii_uppercase(),
            max_attempts,
        })
    }

    /// The hidden answer, uppercased.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Number of letters in the target word.
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    /// Number of guesses the player may submit.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for GameConfig {
    /// The reference board: six attempts at `"VINHO"`.
    fn default() -> Self {
        GameConfig::new("VINHO", 6).unwrap()
    }
}

/// Where a session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum GameStatus {
    /// Guesses are still being accepted.
    InProgress,

    /// The target word was found.
    Won,

    /// Every attempt was used without finding the target.
    Lost,
}

impl GameStatus {
    /// Returns true once the session stops accepting guesses.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Everything a caller needs to render the outcome of one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Submission {
    /// Session status after this guess was scored.
    pub status: GameStatus,

    /// The scored guess.
    pub result: GuessResult,

    /// Snapshot of the best-known letter statuses, this guess included.
    pub keyboard: KeyboardHints,

    /// Attempts still unused after this guess.
    pub attempts_remaining: usize,

    /// The answer, revealed only when the session is lost.
    pub answer: Option<String>,
}

/// A single game: the attempt counter, entry buffer, guess history, and
/// cumulative letter hints.
///
/// All mutable state lives inside the session, so independent games can
/// coexist. The session owns no presentation concern: it consumes letters
/// and submissions and returns structured results for a front-end to act on.
///
/// # Examples
///
/// ```rust
/// use termo_rs::{GameConfig, GameSession, GameStatus};
///
/// let mut session = GameSession::new(GameConfig::default());
/// for letter in "vinho".chars() {
///     session.push_letter(letter)?;
/// }
/// assert_eq!(session.entry(), "VINHO");
///
/// let submission = session.submit()?;
/// assert_eq!(submission.status, GameStatus::Won);
/// # Ok::<_, termo_rs::GameError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    entry: String,
    history: Vec<GuessResult>,
    keyboard: KeyboardHints,
    attempt: usize,
    status: GameStatus,
}

impl GameSession {
    /// Creates a session in its initial state.
    pub fn new(config: GameConfig) -> Self {
        GameSession {
            config,
            entry: String::new(),
            history: Vec::new(),
            keyboard: KeyboardHints::new(),
            attempt: 0,
            status: GameStatus::InProgress,
        }
    }

    /// The configuration this session was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current status of the session.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Zero-based index of the attempt currently accepting input.
    pub fn attempt(&self) -> usize {
        self.attempt
    }

    /// Attempts the session has not yet consumed.
    ///
    /// A winning guess consumes no attempt, so after a win this reports the
    /// rows that were still unused at that moment.
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts() - self.attempt
    }

    /// The letters entered so far for the current attempt.
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Every scored guess so far, in submission order.
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    /// The best-known status of each letter across all attempts.
    pub fn keyboard(&self) -> &KeyboardHints {
        &self.keyboard
    }

    /// Appends one letter to the in-progress entry.
    ///
    /// Lowercase input is uppercased. A letter beyond the word length is
    /// dropped silently, like a board row with no empty tile left. Returns
    /// [`GameError::GameOver`] once the session is terminal and
    /// [`GameError::InvalidCharacter`] for anything that is not an ASCII
    /// letter; neither changes the entry.
    pub fn push_letter(&mut self, letter: char) -> Result<()> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidCharacter(letter));
        }
        if self.entry.len() < self.config.word_length() {
            self.entry.push(letter.to_ascii_uppercase());
        }
        Ok(())
    }

    /// Removes the most recently entered letter, if any.
    ///
    /// Returns [`GameError::GameOver`] once the session is terminal.
    pub fn delete_letter(&mut self) -> Result<()> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        self.entry.pop();
        Ok(())
    }

    /// Submits the in-progress entry as a full guess.
    ///
    /// The entry buffer is cleared on success and preserved on error, so an
    /// incomplete row stays on the board for the player to finish.
    pub fn submit(&mut self) -> Result<Submission> {
        let entry = std::mem::take(&mut self.entry);
        match self.submit_guess(&entry) {
            Ok(submission) => Ok(submission),
            Err(e) => {
                self.entry = entry;
                Err(e)
            }
        }
    }

    /// Scores `raw` against the target and advances the state machine.
    ///
    /// The guess is uppercased before scoring. The session re-validates
    /// defensively even though a well-behaved front-end cannot submit a bad
    /// guess: [`GameError::GameOver`] once terminal,
    /// [`GameError::InvalidCharacter`] for any non-letter, and
    /// [`GameError::IncompleteGuess`] when the guess is not exactly the
    /// length of the target. Errors leave the session untouched.
    ///
    /// A correct guess ends the session as [`GameStatus::Won`] without
    /// consuming an attempt. An incorrect guess consumes one; the last such
    /// guess ends the session as [`GameStatus::Lost`] and reveals the
    /// answer in the returned [`Submission`].
    pub fn submit_guess(&mut self, raw: &str) -> Result<Submission> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        if let Some(c) = raw.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(GameError::InvalidCharacter(c));
        }
        let expected = self.config.word_length();
        if raw.len() != expected {
            return Err(GameError::IncompleteGuess {
                found: raw.len(),
                expected,
            });
        }

        let guess = raw.to_ascii_uppercase();
        let result = GuessResult {
            statuses: score(self.config.target(), &guess),
            attempt: self.attempt,
            guess,
        };

        for (letter, &status) in result.guess.chars().zip(result.statuses.iter()) {
            self.keyboard.record(letter, status);
        }
        self.history.push(result.clone());

        if result.is_win() {
            self.status = GameStatus::Won;
        } else {
            self.attempt += 1;
            if self.attempt == self.config.max_attempts() {
                self.status = GameStatus::Lost;
            }
        }

        Ok(Submission {
            status: self.status,
            keyboard: self.keyboard,
            attempts_remaining: self.attempts_remaining(),
            answer: (self.status == GameStatus::Lost)
                .then(|| self.config.target().to_string()),
            result,
        })
    }

    /// Returns the session to its initial state, keeping the same target.
    ///
    /// Callable from any state. Afterwards the session is observably
    /// identical to a freshly constructed one with the same configuration.
    pub fn reset(&mut self) {
        self.entry.clear();
        self.history.clear();
        self.keyboard.clear();
        self.attempt = 0;
        self.status = GameStatus::InProgress;
    }
}
