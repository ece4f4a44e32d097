//! Automated player used by the simulator
//!
//! Keeps only the words consistent with every feedback row seen so far and
//! guesses one of them at random.

use crate::core::{Feedback, Word};
use crate::game::Guess;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

pub struct AutoPlayer {
    candidates: Vec<Word>,
    rng: StdRng,
}

impl AutoPlayer {
    #[must_use]
    pub fn new(candidates: Vec<Word>, seed: u64) -> Self {
        Self {
            candidates,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick the next guess, or `None` if the history rules out every word
    pub fn next_guess(&mut self, history: &[Guess]) -> Option<Word> {
        filter_candidates(&self.candidates, history)
            .choose(&mut self.rng)
            .map(|&word| word.clone())
    }
}

/// Words that would have produced every feedback row in `history`
fn filter_candidates<'a>(words: &'a [Word], history: &[Guess]) -> Vec<&'a Word> {
    words
        .iter()
        .filter(|&candidate| {
            history
                .iter()
                .all(|guess| Feedback::generate(guess.word(), candidate) == *guess.feedback())
        })
        .collect()
}
