//! Hurdle - CLI
//!
//! Chained Wordle-style puzzles in the terminal, plus feedback checking and
//! automated session simulation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hurdle::{
    commands::{check_words, print_simulation_statistics, run_classic, run_play, run_simulation},
    config::HurdleConfig,
    dictionary::{LocalDictionary, PatternFilter, WordLists},
    game::GameController,
    hurdle::HurdleController,
    output::print_feedback,
    wordlists::{ALLOWED, ANSWERS, loader::words_from_slice},
};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hurdle",
    about = "Chained Wordle-style puzzles with Hurdle Mode scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, answers plus extra valid guesses), 'answers', or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Seed for secret word selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Guesses allowed per puzzle (default: 4 in hurdle mode, 6 in classic)
    #[arg(short, long, global = true)]
    attempts: Option<usize>,

    /// Do not screen proper nouns out of secret words
    #[arg(long, global = true)]
    no_name_filter: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive Hurdle Mode (default)
    Play,

    /// A single classic game
    Classic,

    /// Show the feedback for a guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The secret word
        target: String,
    },

    /// Run automated hurdle sessions and report statistics
    Simulate {
        /// Number of sessions to play
        #[arg(short = 'n', long, default_value = "1000")]
        sessions: usize,

        /// Stop a session after this many cleared hurdles
        #[arg(long, default_value = "100")]
        max_hurdles: usize,
    },
}

/// Load wordlists based on the -w flag
///
/// - "all": answers as secret words, every allowed word accepted as a guess
/// - "answers": answers only, for both secrets and guesses
/// - "<path>": secret words from the file, which are also valid guesses
fn load_wordlists(wordlist_mode: &str) -> Result<WordLists> {
    use hurdle::wordlists::loader::load_from_file;

    match wordlist_mode {
        "all" => Ok(WordLists::embedded()),
        "answers" => Ok(WordLists::new(words_from_slice(ANSWERS), Vec::new())),
        path => {
            let custom_words = load_from_file(path)
                .with_context(|| format!("failed to load word list from '{path}'"))?;
            anyhow::ensure!(!custom_words.is_empty(), "word list '{path}' has no valid words");
            Ok(WordLists::new(custom_words, words_from_slice(ALLOWED)))
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "hurdle=warn",
        1 => "hurdle=info",
        _ => "hurdle=debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_config(cli: &Cli, default_attempts: usize) -> Result<HurdleConfig> {
    let config = HurdleConfig {
        max_attempts: cli.attempts.unwrap_or(default_attempts),
        ..HurdleConfig::default()
    };
    config.validate()?;
    Ok(config)
}

fn build_dictionary(cli: &Cli, lists: WordLists) -> LocalDictionary {
    let mut dictionary = LocalDictionary::new(lists);
    if let Some(seed) = cli.seed {
        dictionary = dictionary.with_seed(seed);
    }
    if !cli.no_name_filter {
        dictionary = dictionary.with_filter(Arc::new(PatternFilter::new()));
    }
    dictionary
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let config = build_config(&cli, HurdleConfig::new().max_attempts)?;
            let dictionary = build_dictionary(&cli, load_wordlists(&cli.wordlist)?);
            let mut controller = HurdleController::new(Arc::new(dictionary), config);
            let mut input = BufReader::new(tokio::io::stdin());
            run_play(&mut controller, &mut input).await?;
        }
        Commands::Classic => {
            let config = build_config(&cli, HurdleConfig::classic().max_attempts)?;
            let dictionary = build_dictionary(&cli, load_wordlists(&cli.wordlist)?);
            let mut controller = GameController::new(Arc::new(dictionary), config.max_attempts);
            let mut input = BufReader::new(tokio::io::stdin());
            run_classic(&mut controller, &mut input).await?;
        }
        Commands::Check { guess, target } => {
            let feedback = check_words(&guess, &target)?;
            print_feedback(&feedback);
        }
        Commands::Simulate {
            sessions,
            max_hurdles,
        } => {
            let config = build_config(&cli, HurdleConfig::new().max_attempts)?;
            let lists = load_wordlists(&cli.wordlist)?;
            let seed = cli.seed.unwrap_or_else(rand::random);
            // Rayon workers block on their own runtimes, off the main runtime's threads
            let stats = tokio::task::spawn_blocking(move || {
                run_simulation(&lists, &config, sessions, seed, max_hurdles)
            })
            .await??;
            print_simulation_statistics(&stats);
        }
    }

    Ok(())
}
