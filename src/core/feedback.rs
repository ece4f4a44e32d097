//! Guess feedback generation and representation
//!
//! Each letter of a guess is classified against the secret word:
//! - Correct: right letter, right position
//! - Present: letter is in the word at another position
//! - Absent: letter is not in the word (or all its occurrences are already used)

use super::Word;
use super::word::WORD_LENGTH;
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Gray - letter not in word
    Absent,
    /// Yellow - letter in word, wrong position
    Present,
    /// Green - letter in correct position
    Correct,
}

impl LetterStatus {
    /// Emoji square used for board and share output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// A guessed letter together with its status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterFeedback {
    pub letter: char,
    pub status: LetterStatus,
}

/// Feedback for a full 5-letter guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// Compute the feedback when `guess` is played against `target`
    ///
    /// Implements Wordle's duplicate letter rules.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches as correct and remove them from the available pool
    /// 2. Second pass: mark remaining letters present while the pool still holds them
    ///
    /// Exact matches are never "stolen" by an earlier present match of the same letter.
    ///
    /// # Examples
    /// ```
    /// use hurdle::core::{Feedback, LetterStatus, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let feedback = Feedback::generate(&guess, &target);
    ///
    /// assert_eq!(feedback.count(LetterStatus::Correct), 2);
    /// assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn generate(guess: &Word, target: &Word) -> Self {
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut available = target.char_counts();

        // First pass: greens
        for (i, (g, t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                statuses[i] = LetterStatus::Correct;
                if let Some(count) = available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: yellows from what is left
        for (i, g) in guess.chars().iter().enumerate() {
            if statuses[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(g)
                && *count > 0
            {
                statuses[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        let letters = std::array::from_fn(|i| LetterFeedback {
            letter: char::from(guess.chars()[i]).to_ascii_uppercase(),
            status: statuses[i],
        });

        Self(letters)
    }

    /// Per-letter feedback in guess order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|l| l.status == LetterStatus::Correct)
    }

    /// Count letters with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|l| l.status == status).count()
    }

    /// Convert feedback to an emoji row like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|l| l.status.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
