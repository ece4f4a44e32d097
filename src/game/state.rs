//! Single puzzle state
//!
//! `GameState` records the guesses made against one secret word and derives the
//! game status from them. It only ever grows by appending guesses.

use crate::core::{Feedback, Word};
use crate::error::GameError;

/// Status of a single puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A played word and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    feedback: Feedback,
}

impl Guess {
    /// Evaluate `word` against the secret `target`
    #[must_use]
    pub fn evaluate(word: Word, target: &Word) -> Self {
        let feedback = Feedback::generate(&word, target);
        Self { word, feedback }
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// State of one puzzle: the secret, the attempt limit and the guess history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: Word,
    max_attempts: usize,
    guesses: Vec<Guess>,
    status: GameStatus,
}

impl GameState {
    /// Start a fresh puzzle
    ///
    /// A `max_attempts` of zero is raised to one so every game can be played.
    #[must_use]
    pub fn new(target: Word, max_attempts: usize) -> Self {
        let max_attempts = max_attempts.max(1);
        Self {
            target,
            max_attempts,
            guesses: Vec::with_capacity(max_attempts),
            status: GameStatus::InProgress,
        }
    }

    /// Append a guess and recompute the status
    ///
    /// # Errors
    ///
    /// Returns `GameError::GameOver` if the game is already won or lost. The
    /// state is left untouched in that case.
    pub fn add_guess(&mut self, guess: Guess) -> Result<(), GameError> {
        if self.is_game_over() || self.guesses.len() >= self.max_attempts {
            return Err(GameError::GameOver);
        }

        let solved = guess.word == self.target;
        self.guesses.push(guess);

        self.status = if solved {
            GameStatus::Won
        } else if self.guesses.len() == self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        Ok(())
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Guess history in the order played
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<&Guess> {
        self.guesses.last()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts - self.guesses.len()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }
}
