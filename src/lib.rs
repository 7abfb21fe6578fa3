#![doc = include_str!("../README.md")]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod keyboard;
pub use keyboard::KeyboardHints;

pub mod score;
pub use score::{score, GuessResult, LetterStatus};

pub mod session;
pub use session::{GameConfig, GameSession, GameStatus, Submission};

/// Alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, GameError>;

/// The errors that `termo_rs` can produce.
///
/// Every variant is recoverable: a session that returns one is left exactly
/// as it was, and the caller decides what to show the player.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The submitted guess does not have exactly as many letters as the
    /// target word.
    #[error("the guess has {found} letters but the target has {expected}")]
    IncompleteGuess { found: usize, expected: usize },

    /// A guess or an edit arrived after the session reached a terminal state.
    #[error("the game is already over")]
    GameOver,

    /// A character that is not an ASCII letter reached the input boundary.
    #[error("'{0}' is not a letter")]
    InvalidCharacter(char),

    /// A target word must contain at least one letter.
    #[error("the target word is empty")]
    EmptyTarget,

    /// A game must allow at least one attempt.
    #[error("a game must allow at least one attempt")]
    NoAttempts,
}
