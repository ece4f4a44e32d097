//! Hurdle chain orchestration
//!
//! A session is a chain of 4-attempt games. Each hurdle after the first opens
//! with the previous answer already played as guess one, so the player starts
//! with that feedback for free.

use super::score::{calculate_final_score, calculate_hurdle_score};
use super::state::{CompletedHurdle, EndReason, HurdleState};
use crate::config::HurdleConfig;
use crate::core::Word;
use crate::dictionary::{Dictionary, select_secret_word};
use crate::error::GameError;
use crate::game::{GameController, GameState, GameStatus};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Lifecycle of a hurdle session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainPhase {
    /// No session started yet
    Idle,
    /// Hurdles are being played
    Active,
    /// Session over by failure or manual stop
    Ended,
}

/// Owned snapshot of a hurdle session, for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HurdleSession {
    pub phase: ChainPhase,
    pub current_hurdle_number: u32,
    pub completed_hurdles_count: usize,
    pub total_score: u64,
    pub end_reason: Option<EndReason>,
    /// Set once the session has ended
    pub final_score: Option<u64>,
    /// Answer of the hurdle that was lost
    pub failed_word: Option<Word>,
    pub solved_words: Vec<Word>,
}

/// Outcome of one guess in hurdle mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HurdleProgress {
    /// Guess recorded, the hurdle is still open
    Continue(GameState),
    /// Hurdle cleared and the next one started with its auto-guess
    Cleared {
        completed: CompletedHurdle,
        next: GameState,
    },
    /// The chain is over
    Failed(HurdleSession),
}

/// Runs a hurdle session on top of [`GameController`]
pub struct HurdleController<D: ?Sized> {
    dictionary: Arc<D>,
    config: HurdleConfig,
    game: Option<GameController<D>>,
    state: HurdleState,
    phase: ChainPhase,
    // Whether the current won hurdle has been added to `state`
    recorded: bool,
    final_score: Option<u64>,
    failed_word: Option<Word>,
}

impl<D: Dictionary + ?Sized> HurdleController<D> {
    #[must_use]
    pub const fn new(dictionary: Arc<D>, config: HurdleConfig) -> Self {
        Self {
            dictionary,
            config,
            game: None,
            state: HurdleState::new(),
            phase: ChainPhase::Idle,
            recorded: false,
            final_score: None,
            failed_word: None,
        }
    }

    /// Begin a new session with a random first hurdle
    ///
    /// Failed draws are retried, then the word list is scanned. Any previous
    /// session is discarded, but only after a word has been found: on failure
    /// the controller is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `GameError::WordSourceUnavailable` if no secret word can be drawn.
    pub async fn start_hurdle_mode(&mut self) -> Result<HurdleSession, GameError> {
        let target = self.draw_word(None).await?;
        Ok(self.start_hurdle_mode_with_word(target))
    }

    /// Begin a new session whose first hurdle has a chosen secret word
    pub fn start_hurdle_mode_with_word(&mut self, target: Word) -> HurdleSession {
        self.state.reset();
        self.recorded = false;
        self.final_score = None;
        self.failed_word = None;

        let mut game = GameController::new(Arc::clone(&self.dictionary), self.config.max_attempts);
        game.start_with_word(target);
        self.game = Some(game);
        self.phase = ChainPhase::Active;

        info!(max_attempts = self.config.max_attempts, "hurdle session started");
        self.session()
    }

    /// Record the current hurdle as cleared
    ///
    /// Scores it with the current hurdle number and the guesses used (auto-guess
    /// included), then advances the hurdle counter.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` / `GameOver` if no session is running
    /// - `HurdleNotWon` if the current game is not won, or was already recorded
    pub fn process_hurdle_completion(&mut self) -> Result<CompletedHurdle, GameError> {
        self.ensure_active()?;
        let game = self
            .game
            .as_ref()
            .ok_or(GameError::NoActiveSession)?
            .game_state()?;

        if game.status() != GameStatus::Won || self.recorded {
            return Err(GameError::HurdleNotWon);
        }

        let hurdle_number = self.state.current_hurdle_number();
        let guess_count = game.guesses().len();
        let completed = CompletedHurdle {
            hurdle_number,
            target: game.target().clone(),
            guess_count,
            score: calculate_hurdle_score(hurdle_number, guess_count),
            guesses: game.guesses().to_vec(),
            completed_at: Utc::now(),
        };

        self.state.add_completed_hurdle(completed.clone());
        self.recorded = true;
        info!(
            hurdle = hurdle_number,
            guesses = guess_count,
            score = completed.score,
            total = self.state.total_score(),
            "hurdle cleared"
        );
        Ok(completed)
    }

    /// Start the next hurdle, auto-playing `previous_answer` as its first guess
    ///
    /// The new secret word always differs from `previous_answer`. Should the
    /// auto-guess end the game, the chain moves on by itself: a win is recorded
    /// and another hurdle started, a loss ends the session. The returned state
    /// is therefore either in progress or the lost game that ended the chain.
    ///
    /// A word source failure here is fatal: the session ends with
    /// `EndReason::Failure`, keeping every hurdle already recorded.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` / `GameOver` if no session is running
    /// - `WordSourceUnavailable` if the dictionary has no usable word at all
    /// - `DuplicateWordExhausted` if its only word is `previous_answer`
    pub async fn start_next_hurdle(
        &mut self,
        previous_answer: &Word,
    ) -> Result<GameState, GameError> {
        self.ensure_active()?;
        let mut previous = previous_answer.clone();

        loop {
            let target = match self.draw_word(Some(&previous)).await {
                Ok(word) => word,
                Err(err) => {
                    warn!(error = %err, "no secret word for the next hurdle");
                    self.finish(EndReason::Failure);
                    return Err(err);
                }
            };

            let mut game =
                GameController::new(Arc::clone(&self.dictionary), self.config.max_attempts);
            game.start_with_word(target);
            let state = game.submit_word(previous.clone())?.clone();
            self.game = Some(game);
            self.recorded = false;

            debug!(
                hurdle = self.state.current_hurdle_number(),
                auto_guess = %previous,
                feedback = %state.guesses()[0].feedback(),
                "next hurdle started"
            );

            match state.status() {
                GameStatus::InProgress => return Ok(state),
                GameStatus::Won => {
                    previous = self.process_hurdle_completion()?.target;
                }
                GameStatus::Lost => {
                    self.fail_chain();
                    return Ok(state);
                }
            }
        }
    }

    /// Validate and play raw input on the current hurdle
    ///
    /// A win records the hurdle and starts the next one; a loss ends the
    /// session with `EndReason::Failure`.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` before a session starts, `GameOver` after it ends
    /// - any input error from [`GameController::submit_guess`]; these leave the
    ///   session unchanged
    /// - word source errors while starting the next hurdle, after which the
    ///   session has ended
    pub async fn submit_guess(&mut self, raw_input: &str) -> Result<HurdleProgress, GameError> {
        self.ensure_active()?;
        let game = self.game.as_mut().ok_or(GameError::NoActiveSession)?;
        let state = game.submit_guess(raw_input).await?.clone();

        match state.status() {
            GameStatus::InProgress => Ok(HurdleProgress::Continue(state)),
            GameStatus::Won => {
                let completed = self.process_hurdle_completion()?;
                let next = self.start_next_hurdle(&completed.target).await?;
                if self.phase == ChainPhase::Ended {
                    Ok(HurdleProgress::Failed(self.session()))
                } else {
                    Ok(HurdleProgress::Cleared { completed, next })
                }
            }
            GameStatus::Lost => {
                self.fail_chain();
                Ok(HurdleProgress::Failed(self.session()))
            }
        }
    }

    /// Stop the session by choice
    ///
    /// Keeps every completed hurdle. A session that already ended keeps its
    /// original end reason.
    pub fn end_hurdle_mode(&mut self) -> HurdleSession {
        if self.phase == ChainPhase::Active {
            self.finish(EndReason::ManualStop);
        }
        self.session()
    }

    #[must_use]
    pub const fn hurdle_state(&self) -> &HurdleState {
        &self.state
    }

    /// Game for the current hurdle, kept after the session ends for display
    #[must_use]
    pub fn game_state(&self) -> Option<&GameState> {
        self.game.as_ref().and_then(|game| game.game_state().ok())
    }

    #[must_use]
    pub const fn phase(&self) -> ChainPhase {
        self.phase
    }

    #[must_use]
    pub const fn config(&self) -> &HurdleConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> HurdleSession {
        HurdleSession {
            phase: self.phase,
            current_hurdle_number: self.state.current_hurdle_number(),
            completed_hurdles_count: self.state.completed_hurdles_count(),
            total_score: self.state.total_score(),
            end_reason: self.state.end_reason(),
            final_score: self.final_score,
            failed_word: self.failed_word.clone(),
            solved_words: self.state.solved_words().to_vec(),
        }
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        match self.phase {
            ChainPhase::Active => Ok(()),
            ChainPhase::Idle => Err(GameError::NoActiveSession),
            ChainPhase::Ended => Err(GameError::GameOver),
        }
    }

    async fn draw_word(&self, exclude: Option<&Word>) -> Result<Word, GameError> {
        select_secret_word(&*self.dictionary, self.config.random_draw_attempts, exclude).await
    }

    fn fail_chain(&mut self) {
        self.failed_word = self.game_state().map(|game| game.target().clone());
        self.finish(EndReason::Failure);
    }

    fn finish(&mut self, reason: EndReason) {
        self.state.set_end_reason(reason);
        self.phase = ChainPhase::Ended;
        let final_score = calculate_final_score(self.state.completed_hurdles());
        self.final_score = Some(final_score);
        info!(
            ?reason,
            hurdles = self.state.completed_hurdles_count(),
            final_score,
            "hurdle session ended"
        );
    }
}
