//! Chain-level hurdle counters

use crate::core::Word;
use crate::game::Guess;
use chrono::{DateTime, Utc};

/// Why a hurdle session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// A hurdle ran out of guesses
    Failure,
    /// The player stopped the session
    ManualStop,
}

/// Record of one cleared hurdle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedHurdle {
    pub hurdle_number: u32,
    pub target: Word,
    /// Guesses used, including the auto-guess (1..=4)
    pub guess_count: usize,
    pub score: u64,
    pub guesses: Vec<Guess>,
    pub completed_at: DateTime<Utc>,
}

/// Counters for a hurdle session
///
/// Invariants: `current_hurdle_number == completed_hurdles.len() + 1` and
/// `total_score` equals the sum of the completed hurdles' scores. Only the
/// hurdle controller mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HurdleState {
    current_hurdle_number: u32,
    completed_hurdles: Vec<CompletedHurdle>,
    total_score: u64,
    end_reason: Option<EndReason>,
    solved_words: Vec<Word>,
}

impl HurdleState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_hurdle_number: 1,
            completed_hurdles: Vec::new(),
            total_score: 0,
            end_reason: None,
            solved_words: Vec::new(),
        }
    }

    #[must_use]
    pub const fn current_hurdle_number(&self) -> u32 {
        self.current_hurdle_number
    }

    #[must_use]
    pub fn completed_hurdles_count(&self) -> usize {
        self.completed_hurdles.len()
    }

    #[must_use]
    pub const fn total_score(&self) -> u64 {
        self.total_score
    }

    #[must_use]
    pub fn completed_hurdles(&self) -> &[CompletedHurdle] {
        &self.completed_hurdles
    }

    #[must_use]
    pub const fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Answers of cleared hurdles, in order, for definition lookup
    #[must_use]
    pub fn solved_words(&self) -> &[Word] {
        &self.solved_words
    }

    pub(crate) fn add_completed_hurdle(&mut self, hurdle: CompletedHurdle) {
        self.total_score += hurdle.score;
        self.current_hurdle_number += 1;
        self.solved_words.push(hurdle.target.clone());
        self.completed_hurdles.push(hurdle);
    }

    pub(crate) fn set_end_reason(&mut self, reason: EndReason) {
        self.end_reason = Some(reason);
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for HurdleState {
    fn default() -> Self {
        Self::new()
    }
}
