//! Feedback for an arbitrary guess/target pair

use crate::core::{Feedback, Word};
use crate::error::GameError;
use anyhow::{Context, Result};

/// Score `guess` against `target` without any dictionary check
///
/// # Errors
///
/// Returns an error if either input is not a 5-letter alphabetic word.
pub fn check_words(guess: &str, target: &str) -> Result<Feedback> {
    let guess = Word::new(guess)
        .map_err(GameError::from)
        .with_context(|| format!("invalid guess '{guess}'"))?;
    let target = Word::new(target)
        .map_err(GameError::from)
        .with_context(|| format!("invalid target '{target}'"))?;
    Ok(Feedback::generate(&guess, &target))
}
