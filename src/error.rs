//! Error types for games, hurdle chains and word sources

use crate::core::WordError;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by game and hurdle controllers
///
/// Guess validation errors (`EmptyInput` through `GameOver`) are recoverable:
/// the board is left untouched and the player may try again. Only
/// [`GameError::is_fatal`] errors end a session unexpectedly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Please enter a word")]
    EmptyInput,

    #[error("Guess must be exactly 5 letters, got {0}")]
    InvalidLength(usize),

    #[error("Guess must contain only letters A-Z")]
    InvalidCharacters,

    #[error("'{0}' is not in the word list")]
    NotInDictionary(String),

    #[error("The game is already over")]
    GameOver,

    #[error("No game has been started")]
    NoActiveGame,

    #[error("No hurdle session is active")]
    NoActiveSession,

    #[error("The current hurdle has not been won or was already recorded")]
    HurdleNotWon,

    #[error("No word source available: {0}")]
    WordSourceUnavailable(String),

    #[error("Could not find a word different from '{0}'")]
    DuplicateWordExhausted(String),
}

impl GameError {
    /// True for errors that leave no way to produce a secret word
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::WordSourceUnavailable(_) | Self::DuplicateWordExhausted(_)
        )
    }
}

impl From<WordError> for GameError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(0) => Self::EmptyInput,
            WordError::InvalidLength(len) => Self::InvalidLength(len),
            WordError::InvalidCharacters => Self::InvalidCharacters,
        }
    }
}

/// Errors raised by word sources and dictionaries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("word source unavailable: {0}")]
    Unavailable(String),

    #[error("word source timed out after {0:?}")]
    Timeout(Duration),

    #[error("word list is empty")]
    Empty,

    #[error("word source returned an unusable word: {0}")]
    InvalidWord(String),
}

impl From<DictionaryError> for GameError {
    fn from(err: DictionaryError) -> Self {
        Self::WordSourceUnavailable(err.to_string())
    }
}
