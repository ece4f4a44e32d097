//! Core domain types for Hurdle
//!
//! Words and guess feedback. Everything here is pure and synchronous.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterFeedback, LetterStatus};
pub use word::{WORD_LENGTH, Word, WordError};
