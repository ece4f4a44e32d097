//! Single puzzle controller
//!
//! Validates raw player input, consults the dictionary and drives a `GameState`.

use super::state::{GameState, Guess};
use crate::config::RANDOM_DRAW_ATTEMPTS;
use crate::core::Word;
use crate::dictionary::{Dictionary, select_secret_word};
use crate::error::GameError;
use std::sync::Arc;
use tracing::debug;

/// Drives one puzzle at a time against a shared dictionary
pub struct GameController<D: ?Sized> {
    dictionary: Arc<D>,
    max_attempts: usize,
    state: Option<GameState>,
}

impl<D: Dictionary + ?Sized> GameController<D> {
    /// Create a controller with no game started
    #[must_use]
    pub const fn new(dictionary: Arc<D>, max_attempts: usize) -> Self {
        Self {
            dictionary,
            max_attempts,
            state: None,
        }
    }

    /// Start a game with a random secret word from the dictionary
    ///
    /// Failed draws are retried, then the dictionary's word list is scanned.
    /// Any previous game is dropped, but only once a word has been found.
    ///
    /// # Errors
    ///
    /// Returns `GameError::WordSourceUnavailable` if the dictionary cannot produce a word.
    pub async fn start_new_game(&mut self) -> Result<&GameState, GameError> {
        let target = select_secret_word(&*self.dictionary, RANDOM_DRAW_ATTEMPTS, None).await?;
        Ok(self.start_with_word(target))
    }

    /// Start a game with a chosen secret word
    pub fn start_with_word(&mut self, target: Word) -> &GameState {
        debug!(max_attempts = self.max_attempts, "starting game");
        self.state.insert(GameState::new(target, self.max_attempts))
    }

    /// Validate and play raw player input
    ///
    /// Input is trimmed and case-normalized. A rejected guess never consumes an
    /// attempt: the state is only touched after every check has passed.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` for blank input
    /// - `InvalidLength` / `InvalidCharacters` for malformed words
    /// - `NoActiveGame` if no game was started
    /// - `GameOver` if the game is already won or lost
    /// - `NotInDictionary` if the dictionary rejects the word
    pub async fn submit_guess(&mut self, raw_input: &str) -> Result<&GameState, GameError> {
        if raw_input.trim().is_empty() {
            return Err(GameError::EmptyInput);
        }
        let word = Word::new(raw_input)?;

        self.ensure_playable()?;

        if !self.dictionary.is_valid_word(&word).await {
            return Err(GameError::NotInDictionary(word.to_display()));
        }

        self.submit_word(word)
    }

    /// Play a word that is already known to be valid, skipping the dictionary
    ///
    /// Used for the hurdle auto-guess, whose word was itself a secret word.
    ///
    /// # Errors
    ///
    /// Returns `NoActiveGame` or `GameOver` as for [`Self::submit_guess`].
    pub fn submit_word(&mut self, word: Word) -> Result<&GameState, GameError> {
        let state = self.state.as_mut().ok_or(GameError::NoActiveGame)?;
        let guess = Guess::evaluate(word, state.target());
        debug!(guess = %guess.word(), feedback = %guess.feedback(), "guess accepted");

        state.add_guess(guess)?;
        Ok(&*state)
    }

    /// Current game
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoActiveGame` if no game has been started.
    pub fn game_state(&self) -> Result<&GameState, GameError> {
        self.state.as_ref().ok_or(GameError::NoActiveGame)
    }

    fn ensure_playable(&self) -> Result<(), GameError> {
        if self.game_state()?.is_game_over() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{LocalDictionary, WordLists};
    use crate::error::DictionaryError;
    use crate::game::GameStatus;
    use crate::wordlists::loader::words_from_slice;
    use async_trait::async_trait;

    fn dictionary() -> Arc<LocalDictionary> {
        Arc::new(
            LocalDictionary::new(WordLists::new(
                words_from_slice(&["crane", "slate", "irate", "grate"]),
                words_from_slice(&["spade", "audio"]),
            ))
            .with_seed(9),
        )
    }

    /// Dictionary whose random draws always fail
    struct Unreachable(Vec<Word>);

    #[async_trait]
    impl Dictionary for Unreachable {
        async fn is_valid_word(&self, _word: &Word) -> bool {
            true
        }

        async fn random_word(&self) -> Result<Word, DictionaryError> {
            Err(DictionaryError::Timeout(std::time::Duration::from_secs(3)))
        }

        fn word_list(&self) -> &[Word] {
            &self.0
        }
    }

    fn controller_with(target: &str) -> GameController<LocalDictionary> {
        let mut controller = GameController::new(dictionary(), 4);
        controller.start_with_word(Word::new(target).unwrap());
        controller
    }

    #[tokio::test]
    async fn start_new_game_uses_dictionary_word() {
        let dictionary = dictionary();
        let mut controller = GameController::new(dictionary.clone(), 4);

        let state = controller.start_new_game().await.unwrap();
        assert!(dictionary.word_list().contains(state.target()));
        assert_eq!(state.max_attempts(), 4);
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[tokio::test]
    async fn failing_draws_use_the_word_list() {
        let dictionary = Arc::new(Unreachable(words_from_slice(&["slate", "crane"])));
        let mut controller = GameController::new(dictionary, 6);

        let state = controller.start_new_game().await.unwrap();
        assert_eq!(state.target().text(), "slate");
    }

    #[tokio::test]
    async fn no_words_anywhere_is_fatal_and_keeps_old_game() {
        let mut controller = GameController::new(Arc::new(Unreachable(Vec::new())), 6);
        controller.start_with_word(Word::new("crane").unwrap());

        let err = controller.start_new_game().await.unwrap_err();
        assert!(matches!(err, GameError::WordSourceUnavailable(_)));
        assert!(err.is_fatal());
        assert_eq!(controller.game_state().unwrap().target().text(), "crane");
    }

    #[tokio::test]
    async fn game_state_before_start_fails() {
        let controller = GameController::new(dictionary(), 4);
        assert_eq!(controller.game_state().unwrap_err(), GameError::NoActiveGame);
    }

    #[tokio::test]
    async fn submit_without_game_fails() {
        let mut controller = GameController::new(dictionary(), 4);
        assert_eq!(
            controller.submit_guess("crane").await.unwrap_err(),
            GameError::NoActiveGame
        );
    }

    #[tokio::test]
    async fn valid_guess_is_normalized_and_recorded() {
        let mut controller = controller_with("crane");
        let state = controller.submit_guess("  SLATE ").await.unwrap();

        assert_eq!(state.guesses().len(), 1);
        assert_eq!(state.guesses()[0].word().text(), "slate");
        assert_eq!(state.remaining_attempts(), 3);
    }

    #[tokio::test]
    async fn invalid_guesses_do_not_consume_attempts() {
        let mut controller = controller_with("crane");

        assert_eq!(controller.submit_guess("").await.unwrap_err(), GameError::EmptyInput);
        assert_eq!(controller.submit_guess("   ").await.unwrap_err(), GameError::EmptyInput);
        assert_eq!(
            controller.submit_guess("cran").await.unwrap_err(),
            GameError::InvalidLength(4)
        );
        assert_eq!(
            controller.submit_guess("cranes").await.unwrap_err(),
            GameError::InvalidLength(6)
        );
        assert_eq!(
            controller.submit_guess("cr4ne").await.unwrap_err(),
            GameError::InvalidCharacters
        );
        assert_eq!(
            controller.submit_guess("qzxvw").await.unwrap_err(),
            GameError::NotInDictionary("QZXVW".into())
        );

        let state = controller.game_state().unwrap();
        assert!(state.guesses().is_empty());
        assert_eq!(state.remaining_attempts(), 4);
    }

    #[tokio::test]
    async fn guess_after_game_over_is_rejected() {
        let mut controller = controller_with("crane");
        controller.submit_guess("crane").await.unwrap();

        assert_eq!(
            controller.submit_guess("slate").await.unwrap_err(),
            GameError::GameOver
        );
        assert_eq!(controller.game_state().unwrap().guesses().len(), 1);
    }

    #[tokio::test]
    async fn four_misses_lose_the_game() {
        let mut controller = controller_with("crane");
        for guess in ["slate", "irate", "grate", "spade"] {
            controller.submit_guess(guess).await.unwrap();
        }
        assert_eq!(controller.game_state().unwrap().status(), GameStatus::Lost);
    }

    #[tokio::test]
    async fn first_guess_win() {
        let mut controller = controller_with("crane");
        let state = controller.submit_guess("crane").await.unwrap();
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.guesses().len(), 1);
    }

    #[tokio::test]
    async fn submit_word_skips_dictionary() {
        let mut controller = controller_with("crane");
        let state = controller.submit_word(Word::new("qzxvw").unwrap()).unwrap();
        assert_eq!(state.guesses().len(), 1);
    }

    #[tokio::test]
    async fn new_games_are_independent() {
        let mut controller = controller_with("crane");
        controller.submit_guess("slate").await.unwrap();
        let first = controller.game_state().unwrap().clone();

        controller.start_with_word(Word::new("irate").unwrap());
        controller.submit_guess("grate").await.unwrap();
        controller.submit_guess("audio").await.unwrap();
        let second = controller.game_state().unwrap();

        assert_eq!(first.guesses().len(), 1);
        assert_eq!(first.target().text(), "crane");
        assert_eq!(second.guesses().len(), 2);
        assert_eq!(second.target().text(), "irate");
    }

    #[tokio::test]
    async fn sequential_start_new_game_histories_are_independent() {
        let mut controller = GameController::new(dictionary(), 4);
        controller.start_new_game().await.unwrap();
        controller.submit_guess("slate").await.unwrap();
        let first = controller.game_state().unwrap().clone();

        let second = controller.start_new_game().await.unwrap();
        assert!(second.guesses().is_empty());
        assert_eq!(first.guesses().len(), 1);
    }
}
