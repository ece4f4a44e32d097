//! Interactive Hurdle Mode
//!
//! Reads guesses line by line and drives a [`HurdleController`] until the chain
//! breaks or the player stops.

use super::{is_quit, read_input};
use crate::dictionary::Dictionary;
use crate::hurdle::{HurdleController, HurdleProgress, HurdleSession};
use crate::output::formatters::colored_row;
use crate::output::{
    print_board, print_hurdle_cleared, print_hurdle_header, print_session_summary,
};
use anyhow::Result;
use colored::Colorize;
use tokio::io::AsyncBufRead;

/// Run hurdle sessions until the player declines another
///
/// Returns the last session played.
///
/// # Errors
///
/// Returns an error on I/O failure or when the word source cannot provide a
/// new secret word. Invalid guesses are reported and re-prompted instead.
pub async fn run_play<D, R>(
    controller: &mut HurdleController<D>,
    input: &mut R,
) -> Result<HurdleSession>
where
    D: Dictionary + ?Sized,
    R: AsyncBufRead + Unpin,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Hurdle - Word Chain Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help(controller.config().max_attempts);

    loop {
        let session = controller.start_hurdle_mode().await?;
        print_hurdle_header(session.current_hurdle_number, session.total_score);
        if let Some(state) = controller.game_state() {
            print_board(state);
        }

        let outcome = play_chain(controller, input).await?;
        print_session_summary(
            &outcome,
            controller.hurdle_state().completed_hurdles(),
            controller.config().max_attempts,
        );

        match read_input(input, "Play again? (yes/no)").await? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                println!("\n🔄 New chain started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(outcome);
            }
        }
    }
}

async fn play_chain<D, R>(
    controller: &mut HurdleController<D>,
    input: &mut R,
) -> Result<HurdleSession>
where
    D: Dictionary + ?Sized,
    R: AsyncBufRead + Unpin,
{
    loop {
        let Some(line) = read_input(input, "Guess").await? else {
            return Ok(controller.end_hurdle_mode());
        };
        if is_quit(&line) {
            return Ok(controller.end_hurdle_mode());
        }
        if matches!(line.as_str(), "help" | "?") {
            print_help(controller.config().max_attempts);
            continue;
        }

        match controller.submit_guess(&line).await {
            Ok(HurdleProgress::Continue(state)) => print_board(&state),
            Ok(HurdleProgress::Cleared { completed, next }) => {
                if let Some(last) = completed.guesses.last() {
                    println!("\n  {}\n", colored_row(last.feedback()));
                }
                print_hurdle_cleared(&completed);

                let state = controller.hurdle_state();
                print_hurdle_header(state.current_hurdle_number(), state.total_score());
                print_board(&next);
            }
            Ok(HurdleProgress::Failed(session)) => {
                if let Some(state) = controller.game_state() {
                    print_board(state);
                }
                return Ok(session);
            }
            Err(err) if err.is_fatal() => return Err(err.into()),
            Err(err) => println!("{} {err}\n", "❌".red()),
        }
    }
}

fn print_help(max_attempts: usize) {
    println!("Guess the 5-letter word in {max_attempts} tries to clear a hurdle.");
    println!("Each new hurdle starts with the previous answer already guessed.\n");
    println!("  Score: hurdle number × 100 × (1.75 / 1.5 / 1.25 / 1.0 for 1-4 guesses)");
    println!("  Commands: 'help', 'quit' to stop and keep your score\n");
}
