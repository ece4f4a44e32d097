//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus};
use crate::hurdle::CompletedHurdle;
use colored::{ColoredString, Colorize};

/// Color one letter tile by its status
#[must_use]
pub fn letter_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        LetterStatus::Correct => tile.black().on_green().bold(),
        LetterStatus::Present => tile.black().on_yellow().bold(),
        LetterStatus::Absent => tile.white().on_bright_black(),
    }
}

/// Render a feedback row as colored letter tiles
#[must_use]
pub fn colored_row(feedback: &Feedback) -> String {
    feedback
        .letters()
        .iter()
        .map(|l| letter_tile(l.letter, l.status).to_string())
        .collect()
}

/// Share-style summary: one emoji block per cleared hurdle
///
/// ```text
/// Hurdle 1 (1/4) +175
/// 🟩🟩🟩🟩🟩
/// ```
#[must_use]
pub fn share_text(completed: &[CompletedHurdle], max_attempts: usize) -> String {
    completed
        .iter()
        .map(|hurdle| {
            let rows: Vec<String> = hurdle
                .guesses
                .iter()
                .map(|g| g.feedback().to_emoji())
                .collect();
            format!(
                "Hurdle {} ({}/{max_attempts}) +{}\n{}",
                hurdle.hurdle_number,
                hurdle.guess_count,
                hurdle.score,
                rows.join("\n")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
