//! Hangman - CLI
//!
//! Play Hangman in the terminal, or watch the automatic player solve words.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{run_benchmark, run_simple, solve_word},
    config::GameConfig,
    core::SecretWord,
    logging::{self, LogTarget},
    output::{print_benchmark_result, print_solve_result},
    solver::{Solver, StrategyType},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file: JSON ({"words": [...]}) or one word per line
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Misses allowed before the round is lost (1-26)
    #[arg(short, long, global = true)]
    budget: Option<usize>,

    /// TOML config file with mistake_budget, placeholder and word_list
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Automatic player strategy: frequency (default), random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Let the automatic player guess a specific word
    Solve {
        /// The secret word to solve
        word: String,
    },

    /// Auto-play words from the list and report performance
    Benchmark {
        /// Number of words to play (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

/// Build the effective config: file values, then command line overrides
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let base = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    Ok(base
        .with_overrides(cli.budget, cli.words.clone())
        .validate()?)
}

/// Load the configured word list, or the embedded one
fn load_words(word_list: Option<&Path>) -> Result<Vec<SecretWord>> {
    let words = match word_list {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(WORDS),
    };
    anyhow::ensure!(!words.is_empty(), "word list contains no usable words");
    Ok(words)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    let target = match command {
        Commands::Play => LogTarget::Silent,
        _ => LogTarget::Stderr,
    };
    logging::init(target, cli.log_file.as_deref())?;

    let config = load_config(&cli)?;
    let words = load_words(config.word_list.as_deref())?;
    tracing::debug!(?config, words = words.len(), "starting");

    match command {
        Commands::Play => run_play_command(&words, config, &cli.strategy),
        Commands::Simple => run_simple_command(&words, &config),
        Commands::Solve { word } => run_solve_command(&cli.strategy, &word, &words, &config),
        Commands::Benchmark { count } => {
            run_benchmark_command(&cli.strategy, count, &words, &config);
            Ok(())
        }
    }
}

fn run_play_command(words: &[SecretWord], config: GameConfig, strategy_name: &str) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(words, config, StrategyType::from_name(strategy_name))?;
    let stats = run_tui(app)?;
    println!(
        "Thanks for playing! You won {} of {} rounds.",
        stats.rounds_won, stats.rounds_played
    );
    Ok(())
}

fn run_simple_command(words: &[SecretWord], config: &GameConfig) -> Result<()> {
    let stdin = io::stdin();
    run_simple(
        words,
        config,
        &mut rand::rng(),
        stdin.lock(),
        io::stdout(),
    )?;
    Ok(())
}

fn run_solve_command(
    strategy_name: &str,
    word: &str,
    words: &[SecretWord],
    config: &GameConfig,
) -> Result<()> {
    let solver = Solver::new(StrategyType::from_name(strategy_name), words);
    let result = solve_word(word, &solver, config)
        .with_context(|| format!("cannot solve '{word}'"))?;
    print_solve_result(&result);
    Ok(())
}

fn run_benchmark_command(
    strategy_name: &str,
    count: Option<usize>,
    words: &[SecretWord],
    config: &GameConfig,
) {
    let count = count.unwrap_or(words.len()).min(words.len());
    println!("Running benchmark on {count} words...");

    let solver = Solver::new(StrategyType::from_name(strategy_name), words);
    let result = run_benchmark(&solver, &words[..count], config, true);
    print_benchmark_result(&result);
}
