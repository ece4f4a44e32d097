//! Automated hurdle sessions
//!
//! Plays many sessions in parallel with [`AutoPlayer`] and reports chain
//! lengths, scores and whether any hurdle repeated the previous answer.

use crate::autoplay::AutoPlayer;
use crate::config::HurdleConfig;
use crate::core::Word;
use crate::dictionary::{LocalDictionary, WordLists};
use crate::game::GameStatus;
use crate::hurdle::{HurdleController, HurdleProgress};
use crate::output::formatters::create_progress_bar;
use anyhow::{Result, anyhow};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of one automated session
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub hurdles_cleared: usize,
    pub final_score: u64,
    /// Consecutive answer pairs checked
    pub transitions: usize,
    /// Pairs where the next answer repeated the previous one
    pub repeats: usize,
}

/// Aggregate statistics over all sessions
#[derive(Debug)]
pub struct SimulationStatistics {
    pub sessions: usize,
    pub chain_lengths: BTreeMap<usize, usize>,
    pub average_chain_length: f64,
    pub longest_chain: usize,
    pub average_score: f64,
    pub best_score: u64,
    pub transitions: usize,
    pub repeats: usize,
    pub total_time: Duration,
}

/// Play `sessions` hurdle sessions, each capped at `max_hurdles` cleared hurdles
///
/// Session `i` seeds its dictionary and player from `seed + i`, so a run is
/// reproducible for a given seed.
///
/// # Errors
///
/// Returns an error if a worker runtime cannot be built or a session hits a
/// fatal word source error.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_simulation(
    lists: &WordLists,
    config: &HurdleConfig,
    sessions: usize,
    seed: u64,
    max_hurdles: usize,
) -> Result<SimulationStatistics> {
    println!("🎯 Simulating {sessions} hurdle sessions...");

    let pb = ProgressBar::new(sessions as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let outcomes: Vec<SessionOutcome> = (0..sessions)
        .into_par_iter()
        .map_init(
            || {
                tokio::runtime::Builder::new_current_thread()
                    .enable_time()
                    .build()
            },
            |runtime, i| {
                let runtime = runtime
                    .as_ref()
                    .map_err(|e| anyhow!("failed to build worker runtime: {e}"))?;
                let outcome = runtime.block_on(play_session(
                    lists.clone(),
                    config.clone(),
                    seed.wrapping_add(i as u64),
                    max_hurdles,
                ));
                pb.inc(1);
                outcome
            },
        )
        .collect::<Result<_>>()?;
    pb.finish_with_message("Complete!");

    Ok(summarize(&outcomes, start.elapsed()))
}

/// Play one session with the automated player
///
/// # Errors
///
/// Returns an error on fatal word source failures.
pub async fn play_session(
    lists: WordLists,
    config: HurdleConfig,
    seed: u64,
    max_hurdles: usize,
) -> Result<SessionOutcome> {
    let mut player = AutoPlayer::new(lists.answers().to_vec(), seed);
    let dictionary = Arc::new(LocalDictionary::new(lists).with_seed(seed));
    let mut controller = HurdleController::new(dictionary, config);
    controller.start_hurdle_mode().await?;

    loop {
        if controller.hurdle_state().completed_hurdles_count() >= max_hurdles {
            controller.end_hurdle_mode();
            break;
        }
        let history = controller
            .game_state()
            .map(|state| state.guesses().to_vec())
            .unwrap_or_default();
        let Some(guess) = player.next_guess(&history) else {
            controller.end_hurdle_mode();
            break;
        };
        if let HurdleProgress::Failed(_) = controller.submit_guess(guess.text()).await? {
            break;
        }
    }

    let session = controller.session();
    // Every answer in order, including the unfinished or lost last hurdle
    let mut answers: Vec<&Word> = session.solved_words.iter().collect();
    if let Some(state) = controller.game_state()
        && state.status() != GameStatus::Won
    {
        answers.push(state.target());
    }
    let transitions = answers.len().saturating_sub(1);
    let repeats = answers.windows(2).filter(|pair| pair[0] == pair[1]).count();

    debug!(
        seed,
        hurdles = session.completed_hurdles_count,
        score = session.total_score,
        "simulated session finished"
    );
    Ok(SessionOutcome {
        hurdles_cleared: session.completed_hurdles_count,
        final_score: session.final_score.unwrap_or(session.total_score),
        transitions,
        repeats,
    })
}

fn summarize(outcomes: &[SessionOutcome], total_time: Duration) -> SimulationStatistics {
    let mut chain_lengths = BTreeMap::new();
    for outcome in outcomes {
        *chain_lengths.entry(outcome.hurdles_cleared).or_insert(0) += 1;
    }

    let sessions = outcomes.len();
    let average = |total: f64| {
        if sessions > 0 {
            total / sessions as f64
        } else {
            0.0
        }
    };
    let total_cleared: usize = outcomes.iter().map(|o| o.hurdles_cleared).sum();
    let total_score: u64 = outcomes.iter().map(|o| o.final_score).sum();

    SimulationStatistics {
        sessions,
        chain_lengths,
        average_chain_length: average(total_cleared as f64),
        longest_chain: outcomes.iter().map(|o| o.hurdles_cleared).max().unwrap_or(0),
        average_score: average(total_score as f64),
        best_score: outcomes.iter().map(|o| o.final_score).max().unwrap_or(0),
        transitions: outcomes.iter().map(|o| o.transitions).sum(),
        repeats: outcomes.iter().map(|o| o.repeats).sum(),
        total_time,
    }
}

/// Print simulation statistics
pub fn print_simulation_statistics(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Sessions played:     {}", stats.sessions);
    println!(
        "  Average chain:       {}",
        format!("{:.2} hurdles", stats.average_chain_length)
            .bright_yellow()
            .bold()
    );
    println!("  Longest chain:       {} hurdles", stats.longest_chain);
    println!(
        "  Average score:       {}",
        format!("{:.1}", stats.average_score).bright_yellow().bold()
    );
    println!(
        "  Best score:          {}",
        stats.best_score.to_string().bright_green().bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Chain Length Distribution".bright_cyan().bold());
    let max_count = stats.chain_lengths.values().copied().max().unwrap_or(1);
    for (length, count) in &stats.chain_lengths {
        let percentage = *count as f64 / stats.sessions as f64 * 100.0;
        let bar = create_progress_bar(*count as f64, max_count as f64, 40);
        println!("  {length:3} cleared: {} {count:5} ({percentage:5.1}%)", bar.green());
    }

    println!("\n🔁 {}", "Answer Uniqueness".bright_cyan().bold());
    let verdict = if stats.repeats == 0 {
        "no repeats".green().bold()
    } else {
        format!("{} repeats", stats.repeats).red().bold()
    };
    println!("  {} transitions checked: {verdict}", stats.transitions);
}
