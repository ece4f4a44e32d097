//! Single classic game, no chaining or scoring

use super::{is_quit, read_input};
use crate::dictionary::Dictionary;
use crate::game::{GameController, GameState};
use crate::output::{print_board, print_game_result};
use anyhow::Result;
use colored::Colorize;
use tokio::io::AsyncBufRead;

/// Play one game to completion
///
/// Returns the final state; a quit or end of input leaves it in progress.
///
/// # Errors
///
/// Returns an error on I/O failure or if no secret word can be drawn.
pub async fn run_classic<D, R>(
    controller: &mut GameController<D>,
    input: &mut R,
) -> Result<GameState>
where
    D: Dictionary + ?Sized,
    R: AsyncBufRead + Unpin,
{
    let state = controller.start_new_game().await?;
    println!(
        "\nGuess the 5-letter word in {} tries. Type 'quit' to give up.",
        state.max_attempts()
    );
    print_board(state);

    loop {
        let line = match read_input(input, "Guess").await? {
            Some(line) if !is_quit(&line) => line,
            _ => {
                let state = controller.game_state()?;
                println!(
                    "The word was {}",
                    state.target().to_display().bright_yellow().bold()
                );
                return Ok(state.clone());
            }
        };

        match controller.submit_guess(&line).await {
            Ok(state) => {
                print_board(state);
                if state.is_game_over() {
                    print_game_result(state);
                    return Ok(state.clone());
                }
            }
            Err(err) if err.is_fatal() => return Err(err.into()),
            Err(err) => println!("{} {err}\n", "❌".red()),
        }
    }
}
