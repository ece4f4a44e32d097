//! Display functions for games and hurdle sessions

use super::formatters::{colored_row, share_text};
use crate::core::{Feedback, Word};
use crate::game::{GameState, GameStatus};
use crate::hurdle::{CompletedHurdle, EndReason, HurdleSession};
use colored::Colorize;

/// Print the guesses so far plus a blank row per remaining attempt
pub fn print_board(state: &GameState) {
    println!();
    for guess in state.guesses() {
        println!("  {}", colored_row(guess.feedback()));
    }
    for _ in 0..state.remaining_attempts() {
        println!("  {}", " _ ".repeat(5).bright_black());
    }
    println!();
}

/// Print one feedback row with its emoji form
pub fn print_feedback(feedback: &Feedback) {
    println!("\n  {}   {}\n", colored_row(feedback), feedback.to_emoji());
}

/// Banner shown when a hurdle begins
pub fn print_hurdle_header(hurdle_number: u32, total_score: u64) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Hurdle {}  |  Score: {}",
        hurdle_number.to_string().bright_yellow().bold(),
        total_score.to_string().bright_green()
    );
    println!("{}", "─".repeat(60).cyan());
}

pub fn print_hurdle_cleared(hurdle: &CompletedHurdle) {
    println!(
        "{} {} in {} {}  {}",
        "✅ Cleared".green().bold(),
        hurdle.target.to_display().bright_white().bold(),
        hurdle.guess_count,
        if hurdle.guess_count == 1 { "guess" } else { "guesses" },
        format!("+{}", hurdle.score).bright_green().bold()
    );
    println!(
        "   {} is your first guess on the next hurdle\n",
        hurdle.target.to_display().bright_cyan()
    );
}

/// Print the final summary of a game played outside hurdle mode
pub fn print_game_result(state: &GameState) {
    match state.status() {
        GameStatus::Won => println!(
            "{}",
            format!("✅ Solved in {} guesses!", state.guesses().len())
                .green()
                .bold()
        ),
        GameStatus::Lost => println!(
            "{} The word was {}",
            "❌ Out of guesses.".red().bold(),
            state.target().to_display().bright_yellow().bold()
        ),
        GameStatus::InProgress => {}
    }
}

/// Print the end-of-session summary
pub fn print_session_summary(
    session: &HurdleSession,
    completed: &[CompletedHurdle],
    max_attempts: usize,
) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    let title = match session.end_reason {
        Some(EndReason::Failure) => "HURDLE CHAIN BROKEN".red().bold(),
        Some(EndReason::ManualStop) => "HURDLE MODE STOPPED".yellow().bold(),
        None => "HURDLE MODE".bright_cyan().bold(),
    };
    println!(" {title}");
    println!("{}", "═".repeat(60).bright_cyan());

    println!(
        "\n  Hurdles cleared: {}",
        session.completed_hurdles_count.to_string().bright_yellow().bold()
    );
    println!(
        "  Final score:     {}",
        session
            .final_score
            .unwrap_or(session.total_score)
            .to_string()
            .bright_green()
            .bold()
    );
    if let Some(word) = &session.failed_word {
        println!("  Missed word:     {}", word.to_display().red().bold());
    }

    if !session.solved_words.is_empty() {
        let solved: Vec<String> = session.solved_words.iter().map(Word::to_display).collect();
        println!("  Solved words:    {}", solved.join(", "));
    }

    if !completed.is_empty() {
        println!("\n{}", share_text(completed, max_attempts));
    }
    println!("\n{}", "═".repeat(60).bright_cyan());
}
