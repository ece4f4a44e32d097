//! Proper noun screening for secret words
//!
//! A name like PARIS makes a poor secret word. Dictionaries accept an injected
//! [`ProperNounFilter`] so the heuristic can be swapped without touching them.

use crate::core::Word;
use crate::error::DictionaryError;
use crate::wordlists::PROPER_NOUNS;
use async_trait::async_trait;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Yes/no check for whether a word is a proper noun
#[async_trait]
pub trait ProperNounFilter: Send + Sync {
    async fn is_proper_noun(&self, word: &Word) -> bool;
}

/// Matches words against a known list of proper nouns
#[derive(Debug, Clone)]
pub struct PatternFilter {
    names: FxHashSet<String>,
}

impl PatternFilter {
    /// Filter seeded with the embedded proper noun list
    #[must_use]
    pub fn new() -> Self {
        Self::empty().with_names(PROPER_NOUNS.iter().copied())
    }

    /// Filter that matches nothing until names are added
    #[must_use]
    pub fn empty() -> Self {
        Self {
            names: FxHashSet::default(),
        }
    }

    /// Add names (case-insensitive)
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.names
            .extend(names.into_iter().map(|n| n.as_ref().trim().to_lowercase()));
        self
    }

    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.names.contains(word.text())
    }
}

impl Default for PatternFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProperNounFilter for PatternFilter {
    async fn is_proper_noun(&self, word: &Word) -> bool {
        self.matches(word)
    }
}

/// External service answering whether a word is a proper noun
#[async_trait]
pub trait ProperNounLookup: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<bool, DictionaryError>;
}

/// Asks a [`ProperNounLookup`] service, bounded by a timeout
///
/// A failed or slow lookup counts as "not a proper noun" so word selection never stalls.
pub struct ApiFilter {
    lookup: Arc<dyn ProperNounLookup>,
    timeout: Duration,
}

impl ApiFilter {
    #[must_use]
    pub fn new(lookup: Arc<dyn ProperNounLookup>, timeout: Duration) -> Self {
        Self { lookup, timeout }
    }
}

#[async_trait]
impl ProperNounFilter for ApiFilter {
    async fn is_proper_noun(&self, word: &Word) -> bool {
        match tokio::time::timeout(self.timeout, self.lookup.lookup(word.text())).await {
            Ok(Ok(is_proper)) => is_proper,
            Ok(Err(err)) => {
                warn!(word = %word, error = %err, "proper noun lookup failed");
                false
            }
            Err(_) => {
                warn!(word = %word, timeout = ?self.timeout, "proper noun lookup timed out");
                false
            }
        }
    }
}

/// Pattern check first, then the API for words the list doesn't know
pub struct CombinedFilter {
    pattern: PatternFilter,
    api: ApiFilter,
}

impl CombinedFilter {
    #[must_use]
    pub const fn new(pattern: PatternFilter, api: ApiFilter) -> Self {
        Self { pattern, api }
    }
}

#[async_trait]
impl ProperNounFilter for CombinedFilter {
    async fn is_proper_noun(&self, word: &Word) -> bool {
        self.pattern.matches(word) || self.api.is_proper_noun(word).await
    }
}
