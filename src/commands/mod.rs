//! Command implementations

pub mod check;
pub mod classic;
pub mod play;
pub mod simulate;

pub use check::check_words;
pub use classic::run_classic;
pub use play::run_play;
pub use simulate::{SimulationStatistics, print_simulation_statistics, run_simulation};

use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Prompt and read one trimmed line, `None` at end of input
pub(crate) async fn read_input<R>(input: &mut R, prompt: &str) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    print!("{prompt}: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub(crate) fn is_quit(command: &str) -> bool {
    matches!(
        command.to_lowercase().as_str(),
        "quit" | "q" | "exit" | "stop"
    )
}
