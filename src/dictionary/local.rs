//! In-memory dictionary backed by word lists

use super::{Dictionary, ProperNounFilter};
use crate::core::Word;
use crate::error::DictionaryError;
use crate::wordlists::{ALLOWED, ANSWERS, loader::words_from_slice};
use async_trait::async_trait;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Filtered draws attempted before scanning the list in order
const MAX_FILTERED_DRAWS: usize = 20;

/// Secret word candidates plus the set of accepted guesses
///
/// Cheap to clone: both lists are shared.
#[derive(Debug, Clone)]
pub struct WordLists {
    answers: Arc<[Word]>,
    allowed: Arc<FxHashSet<Word>>,
}

impl WordLists {
    /// Build lists from owned words
    ///
    /// Every answer is also accepted as a guess.
    #[must_use]
    pub fn new(answers: Vec<Word>, allowed: Vec<Word>) -> Self {
        let mut allowed_set: FxHashSet<Word> = allowed.into_iter().collect();
        allowed_set.extend(answers.iter().cloned());

        Self {
            answers: answers.into(),
            allowed: Arc::new(allowed_set),
        }
    }

    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }
}

/// Dictionary over local word lists
pub struct LocalDictionary {
    lists: WordLists,
    rng: Mutex<StdRng>,
    filter: Option<Arc<dyn ProperNounFilter>>,
}

impl LocalDictionary {
    /// Create a dictionary with an OS-seeded random generator
    #[must_use]
    pub fn new(lists: WordLists) -> Self {
        Self {
            lists,
            rng: Mutex::new(StdRng::from_os_rng()),
            filter: None,
        }
    }

    /// Dictionary over the embedded word lists
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(WordLists::embedded())
    }

    /// Make secret word selection reproducible
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Screen secret words with a proper noun filter
    #[must_use]
    pub fn with_filter(mut self, filter: Arc<dyn ProperNounFilter>) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub const fn lists(&self) -> &WordLists {
        &self.lists
    }

    fn draw(&self) -> Option<Word> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        self.lists.answers.choose(&mut *rng).cloned()
    }
}

#[async_trait]
impl Dictionary for LocalDictionary {
    async fn is_valid_word(&self, word: &Word) -> bool {
        self.lists.contains(word)
    }

    async fn random_word(&self) -> Result<Word, DictionaryError> {
        let Some(filter) = &self.filter else {
            return self.draw().ok_or(DictionaryError::Empty);
        };

        for _ in 0..MAX_FILTERED_DRAWS {
            let word = self.draw().ok_or(DictionaryError::Empty)?;
            if filter.is_proper_noun(&word).await {
                debug!(word = %word, "skipping proper noun");
            } else {
                return Ok(word);
            }
        }

        for word in self.lists.answers.iter() {
            if !filter.is_proper_noun(word).await {
                return Ok(word.clone());
            }
        }

        Err(DictionaryError::Empty)
    }

    fn word_list(&self) -> &[Word] {
        &self.lists.answers
    }

    async fn is_secret_candidate(&self, word: &Word) -> bool {
        match &self.filter {
            Some(filter) => !filter.is_proper_noun(word).await,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::PatternFilter;

    fn lists(answers: &[&str], allowed: &[&str]) -> WordLists {
        WordLists::new(words_from_slice(answers), words_from_slice(allowed))
    }

    #[test]
    fn answers_are_always_allowed() {
        let lists = lists(&["crane"], &["slate"]);
        assert!(lists.contains(&Word::new("crane").unwrap()));
        assert!(lists.contains(&Word::new("slate").unwrap()));
        assert_eq!(lists.allowed_count(), 2);
    }

    #[test]
    fn embedded_lists_are_non_trivial() {
        let dictionary = LocalDictionary::embedded();
        assert!(dictionary.size() >= 2);
        assert!(dictionary.lists().allowed_count() >= dictionary.size());
    }

    #[tokio::test]
    async fn validity_uses_allowed_set() {
        let dictionary = LocalDictionary::new(lists(&["crane"], &["slate"]));
        assert!(dictionary.is_valid_word(&Word::new("slate").unwrap()).await);
        assert!(dictionary.is_valid_word(&Word::new("CRANE").unwrap()).await);
        assert!(!dictionary.is_valid_word(&Word::new("xxxxx").unwrap()).await);
    }

    #[tokio::test]
    async fn random_word_comes_from_answers() {
        let dictionary = LocalDictionary::new(lists(&["crane", "slate", "irate"], &[])).with_seed(1);
        for _ in 0..50 {
            let word = dictionary.random_word().await.unwrap();
            assert!(dictionary.word_list().contains(&word));
        }
    }

    #[tokio::test]
    async fn seeded_dictionaries_repeat_their_draws() {
        let a = LocalDictionary::embedded().with_seed(42);
        let b = LocalDictionary::embedded().with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.random_word().await.unwrap(), b.random_word().await.unwrap());
        }
    }

    #[tokio::test]
    async fn empty_list_reports_empty() {
        let dictionary = LocalDictionary::new(lists(&[], &["slate"]));
        assert_eq!(dictionary.random_word().await, Err(DictionaryError::Empty));
    }

    #[tokio::test]
    async fn filter_skips_proper_nouns() {
        let filter = Arc::new(PatternFilter::empty().with_names(["paris"]));
        let dictionary = LocalDictionary::new(lists(&["paris", "crane"], &[]))
            .with_seed(3)
            .with_filter(filter);

        for _ in 0..50 {
            assert_eq!(dictionary.random_word().await.unwrap().text(), "crane");
        }
    }

    #[tokio::test]
    async fn filter_rejecting_everything_reports_empty() {
        let filter = Arc::new(PatternFilter::empty().with_names(["paris", "texas"]));
        let dictionary = LocalDictionary::new(lists(&["paris", "texas"], &[])).with_filter(filter);
        assert_eq!(dictionary.random_word().await, Err(DictionaryError::Empty));
    }

    #[tokio::test]
    async fn secret_candidates_respect_filter() {
        let paris = Word::new("paris").unwrap();
        let crane = Word::new("crane").unwrap();

        let unfiltered = LocalDictionary::new(lists(&["paris", "crane"], &[]));
        assert!(unfiltered.is_secret_candidate(&paris).await);

        let filtered = unfiltered.with_filter(Arc::new(PatternFilter::empty().with_names(["paris"])));
        assert!(!filtered.is_secret_candidate(&paris).await);
        assert!(filtered.is_secret_candidate(&crane).await);
    }
}
