//! Word validity and secret word selection
//!
//! The controllers only see the [`Dictionary`] trait. Two implementations are
//! provided:
//! - [`LocalDictionary`]: in-memory word lists, always available
//! - [`ResilientDictionary`]: a remote [`WordSource`] bounded by a timeout, falling
//!   back to a `LocalDictionary` whenever the remote side fails
//!
//! Secret word selection can be screened by a [`ProperNounFilter`].

mod local;
mod proper_noun;
mod resilient;

pub use local::{LocalDictionary, WordLists};
pub use proper_noun::{ApiFilter, CombinedFilter, PatternFilter, ProperNounFilter, ProperNounLookup};
pub use resilient::{ResilientDictionary, WordSource};

use crate::core::Word;
use crate::error::{DictionaryError, GameError};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Source of guessable words and secret words
#[async_trait]
pub trait Dictionary: Send + Sync {
    /// Whether `word` is accepted as a guess
    async fn is_valid_word(&self, word: &Word) -> bool;

    /// Pick a candidate secret word
    ///
    /// Implementations must keep working when any external service is down,
    /// using their local list.
    async fn random_word(&self) -> Result<Word, DictionaryError>;

    /// Local list of secret word candidates, scanned when random draws keep failing
    fn word_list(&self) -> &[Word];

    /// Whether a word from [`Self::word_list`] may be used as a secret word
    ///
    /// Dictionaries with a proper noun filter reject names here.
    async fn is_secret_candidate(&self, _word: &Word) -> bool {
        true
    }

    /// Number of words in the local list
    fn size(&self) -> usize {
        self.word_list().len()
    }
}

/// Pick a secret word, never `exclude`
///
/// Tries `attempts` random draws, then scans [`Dictionary::word_list`] in order
/// for the first usable word. A failed draw is only fatal once the list is
/// exhausted too.
///
/// # Errors
///
/// - `DuplicateWordExhausted` if `exclude` is the only word available
/// - `WordSourceUnavailable` if no word can be produced at all
pub async fn select_secret_word<D: Dictionary + ?Sized>(
    dictionary: &D,
    attempts: usize,
    exclude: Option<&Word>,
) -> Result<Word, GameError> {
    let mut drew_excluded = false;
    let mut last_error: Option<DictionaryError> = None;

    for attempt in 1..=attempts {
        match dictionary.random_word().await {
            Ok(word) if exclude != Some(&word) => return Ok(word),
            Ok(_) => {
                debug!(attempt, "drew the excluded word again");
                drew_excluded = true;
            }
            Err(err) => {
                warn!(attempt, error = %err, "random word draw failed");
                last_error = Some(err);
            }
        }
    }

    let words = dictionary.word_list();
    for word in words {
        if exclude != Some(word) && dictionary.is_secret_candidate(word).await {
            warn!(word = %word, "random draws exhausted, took next word from list");
            return Ok(word.clone());
        }
    }

    match exclude {
        Some(previous) if drew_excluded || words.contains(previous) => {
            Err(GameError::DuplicateWordExhausted(previous.to_display()))
        }
        _ => Err(last_error.map_or_else(
            || GameError::WordSourceUnavailable("no usable secret word in list".into()),
            GameError::from,
        )),
    }
}
