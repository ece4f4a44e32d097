//! Remote word source with timeout and local fallback

use super::{Dictionary, LocalDictionary, ProperNounFilter};
use crate::config::HurdleConfig;
use crate::core::Word;
use crate::error::DictionaryError;
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// External word service (random word API, dictionary lookup API, ...)
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Fetch a candidate secret word
    async fn fetch_random_word(&self) -> Result<String, DictionaryError>;

    /// Ask whether `word` is a real word
    async fn check_word(&self, word: &str) -> Result<bool, DictionaryError>;
}

/// Dictionary that prefers a remote [`WordSource`] but never depends on it
///
/// Every remote call is bounded by `lookup_timeout` and retried `lookup_retries`
/// times. When the remote side is exhausted the local dictionary answers instead.
pub struct ResilientDictionary<S> {
    source: S,
    fallback: LocalDictionary,
    timeout: Duration,
    retries: usize,
    filter: Option<Arc<dyn ProperNounFilter>>,
}

impl<S: WordSource> ResilientDictionary<S> {
    #[must_use]
    pub fn new(source: S, fallback: LocalDictionary, config: &HurdleConfig) -> Self {
        Self {
            source,
            fallback,
            timeout: config.lookup_timeout,
            retries: config.lookup_retries,
            filter: None,
        }
    }

    /// Screen remote secret words with a proper noun filter
    #[must_use]
    pub fn with_filter(mut self, filter: Arc<dyn ProperNounFilter>) -> Self {
        self.filter = Some(filter);
        self
    }

    async fn call<T, F, Fut>(&self, operation: &str, mut op: F) -> Result<T, DictionaryError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, DictionaryError>>,
    {
        let mut last_error = DictionaryError::Unavailable(format!("{operation} never attempted"));

        for attempt in 0..=self.retries {
            match tokio::time::timeout(self.timeout, op()).await {
                Ok(Ok(value)) => return Ok(value),
                Ok(Err(err)) => {
                    warn!(operation, attempt, error = %err, "word source call failed");
                    last_error = err;
                }
                Err(_) => {
                    warn!(operation, attempt, timeout = ?self.timeout, "word source call timed out");
                    last_error = DictionaryError::Timeout(self.timeout);
                }
            }
        }

        Err(last_error)
    }

    async fn remote_random_word(&self) -> Result<Word, DictionaryError> {
        let text = self
            .call("fetch_random_word", || self.source.fetch_random_word())
            .await?;
        let word = Word::new(&text).map_err(|_| DictionaryError::InvalidWord(text))?;

        if let Some(filter) = &self.filter
            && filter.is_proper_noun(&word).await
        {
            return Err(DictionaryError::InvalidWord(word.to_string()));
        }

        Ok(word)
    }
}

#[async_trait]
impl<S: WordSource> Dictionary for ResilientDictionary<S> {
    async fn is_valid_word(&self, word: &Word) -> bool {
        if self.fallback.is_valid_word(word).await {
            return true;
        }

        match self.call("check_word", || self.source.check_word(word.text())).await {
            Ok(valid) => valid,
            Err(err) => {
                warn!(word = %word, error = %err, "remote validity check unavailable, rejecting");
                false
            }
        }
    }

    async fn random_word(&self) -> Result<Word, DictionaryError> {
        match self.remote_random_word().await {
            Ok(word) => {
                debug!(word = %word, "secret word from remote source");
                Ok(word)
            }
            Err(err) => {
                warn!(error = %err, "falling back to local word list");
                self.fallback.random_word().await
            }
        }
    }

    fn word_list(&self) -> &[Word] {
        self.fallback.word_list()
    }

    async fn is_secret_candidate(&self, word: &Word) -> bool {
        if let Some(filter) = &self.filter
            && filter.is_proper_noun(word).await
        {
            return false;
        }
        self.fallback.is_secret_candidate(word).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{PatternFilter, WordLists};
    use crate::wordlists::loader::words_from_slice;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted remote source
    struct ScriptedSource {
        word: Result<&'static str, DictionaryError>,
        known: &'static [&'static str],
        delay: Option<Duration>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn returning(word: &'static str) -> Self {
            Self {
                word: Ok(word),
                known: &[],
                delay: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn offline() -> Self {
            Self {
                word: Err(DictionaryError::Unavailable("connection refused".into())),
                ..Self::returning("")
            }
        }
    }

    #[async_trait]
    impl WordSource for ScriptedSource {
        async fn fetch_random_word(&self) -> Result<String, DictionaryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.word.clone().map(str::to_string)
        }

        async fn check_word(&self, word: &str) -> Result<bool, DictionaryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.word.clone()?;
            Ok(self.known.contains(&word))
        }
    }

    fn local() -> LocalDictionary {
        LocalDictionary::new(WordLists::new(
            words_from_slice(&["crane", "slate"]),
            words_from_slice(&["irate"]),
        ))
        .with_seed(5)
    }

    fn resilient(source: ScriptedSource) -> ResilientDictionary<ScriptedSource> {
        ResilientDictionary::new(source, local(), &HurdleConfig::default())
    }

    #[tokio::test]
    async fn uses_remote_word_when_available() {
        let dictionary = resilient(ScriptedSource::returning("PLANT"));
        assert_eq!(dictionary.random_word().await.unwrap().text(), "plant");
    }

    #[tokio::test]
    async fn offline_source_falls_back_after_retries() {
        let dictionary = resilient(ScriptedSource::offline());
        let word = dictionary.random_word().await.unwrap();

        assert!(dictionary.word_list().contains(&word));
        // One attempt plus one retry
        assert_eq!(dictionary.source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_source_times_out_and_falls_back() {
        let source = ScriptedSource {
            delay: Some(Duration::from_secs(30)),
            ..ScriptedSource::returning("plant")
        };
        let dictionary = resilient(source);
        let word = dictionary.random_word().await.unwrap();
        assert!(dictionary.word_list().contains(&word));
    }

    #[tokio::test]
    async fn malformed_remote_word_falls_back() {
        let dictionary = resilient(ScriptedSource::returning("pneumonia"));
        let word = dictionary.random_word().await.unwrap();
        assert!(dictionary.word_list().contains(&word));
    }

    #[tokio::test]
    async fn proper_noun_from_remote_falls_back() {
        let dictionary = resilient(ScriptedSource::returning("paris"))
            .with_filter(Arc::new(PatternFilter::new()));
        let word = dictionary.random_word().await.unwrap();
        assert_ne!(word.text(), "paris");
    }

    #[tokio::test]
    async fn validity_checks_local_list_first() {
        let dictionary = resilient(ScriptedSource::returning("plant"));
        assert!(dictionary.is_valid_word(&Word::new("irate").unwrap()).await);
        assert_eq!(dictionary.source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn validity_asks_remote_for_unknown_words() {
        let source = ScriptedSource {
            known: &["plumb"],
            ..ScriptedSource::returning("plant")
        };
        let dictionary = resilient(source);
        assert!(dictionary.is_valid_word(&Word::new("plumb").unwrap()).await);
        assert!(!dictionary.is_valid_word(&Word::new("qzxvw").unwrap()).await);
    }

    #[tokio::test]
    async fn validity_rejects_when_remote_is_down() {
        let dictionary = resilient(ScriptedSource::offline());
        assert!(!dictionary.is_valid_word(&Word::new("plumb").unwrap()).await);
    }

    #[tokio::test]
    async fn secret_candidates_use_both_filters() {
        let fallback = local().with_filter(Arc::new(PatternFilter::empty().with_names(["crane"])));
        let dictionary =
            ResilientDictionary::new(ScriptedSource::offline(), fallback, &HurdleConfig::default())
                .with_filter(Arc::new(PatternFilter::empty().with_names(["slate"])));

        assert!(!dictionary.is_secret_candidate(&Word::new("crane").unwrap()).await);
        assert!(!dictionary.is_secret_candidate(&Word::new("slate").unwrap()).await);
        assert!(dictionary.is_secret_candidate(&Word::new("irate").unwrap()).await);
        assert_eq!(dictionary.source.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn size_reports_local_list() {
        let dictionary = resilient(ScriptedSource::offline());
        assert_eq!(dictionary.size(), 2);
    }
}
