//! Hangman Entropy Solver - CLI
//!
//! Plays Hangman by picking, each turn, the guess with the most expected
//! information about the secret word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use hangman_entropy::{
    commands::{PlayConfig, SolveConfig, StateSnapshot, analyze_state, play, solve_word},
    dictionary::{Dictionary, loader::load_from_file},
    game::DEFAULT_MAX_WRONG_GUESSES,
    output::{print_analysis_result, print_play_result, print_solve_result},
    solver::{Solver, StrategyType},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman_entropy",
    about = "Hangman solver using information-theoretic letter selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: entropy (default) or frequency
    #[arg(short, long, global = true, default_value = "entropy")]
    strategy: String,

    /// Dictionary file, one word per line (default: built-in word list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a batch of games against random secret words
    Play {
        /// Number of games to play
        #[arg(short = 'n', long, default_value_t = 15)]
        games: usize,

        /// Wrong guesses allowed before a game is lost
        #[arg(short, long, default_value_t = DEFAULT_MAX_WRONG_GUESSES)]
        max_wrong: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Only print the summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Solve a specific secret word
    Solve {
        /// The secret word
        word: String,

        /// Wrong guesses allowed before the game is lost
        #[arg(short, long, default_value_t = DEFAULT_MAX_WRONG_GUESSES)]
        max_wrong: usize,

        /// Seed for word guesses among equal candidates
        #[arg(long)]
        seed: Option<u64>,

        /// Show candidate counts and entropy per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score every letter for a game state
    Analyze {
        /// Revealed pattern, '-' or '_' for unknown cells (e.g. "-a--a-")
        pattern: String,

        /// Letters already guessed (revealed letters are added automatically)
        #[arg(short, long, default_value = "")]
        guessed: String,

        /// Words already guessed and rejected
        #[arg(short, long, value_delimiter = ',')]
        wrong_words: Vec<String>,
    },
}

/// How many skipped line numbers to list in the warning
const SKIPPED_SHOWN: usize = 10;

fn load_dictionary(path: Option<&PathBuf>) -> Result<Dictionary> {
    let Some(path) = path else {
        return Ok(Dictionary::embedded());
    };

    let loaded = load_from_file(path)
        .with_context(|| format!("failed to load dictionary from {}", path.display()))?;

    if !loaded.skipped_lines.is_empty() {
        let shown: Vec<String> = loaded
            .skipped_lines
            .iter()
            .take(SKIPPED_SHOWN)
            .map(ToString::to_string)
            .collect();
        let more = if loaded.skipped_lines.len() > SKIPPED_SHOWN {
            ", ..."
        } else {
            ""
        };
        eprintln!(
            "{} skipped {} invalid line(s) in {} (lines {}{more})",
            "warning:".yellow().bold(),
            loaded.skipped_lines.len(),
            path.display(),
            shown.join(", ")
        );
    }

    Ok(loaded.dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.dictionary.as_ref())?;
    let strategy = StrategyType::from_name(&cli.strategy);
    let solver = Solver::new(strategy, &dictionary);

    match cli.command {
        Commands::Play {
            games,
            max_wrong,
            seed,
            quiet,
        } => {
            if !quiet {
                println!(
                    "Playing {games} games with {} strategy over {} words...",
                    strategy.name().bright_cyan(),
                    dictionary.len()
                );
            }
            let config = PlayConfig {
                games,
                max_wrong_guesses: max_wrong,
                seed,
                show_progress: !quiet,
            };
            let result = play(&solver, &config)?;
            print_play_result(&result, quiet);
        }
        Commands::Solve {
            word,
            max_wrong,
            seed,
            verbose,
        } => {
            let config = SolveConfig {
                max_wrong_guesses: max_wrong,
                seed,
                ..SolveConfig::new(word)
            };
            let result = solve_word(config, &solver)?;
            print_solve_result(&result, verbose);
        }
        Commands::Analyze {
            pattern,
            guessed,
            wrong_words,
        } => {
            let state = StateSnapshot::parse(&pattern, &guessed, &wrong_words)?;
            let result = analyze_state(&state, &solver)?;
            print_analysis_result(&result);
        }
    }

    Ok(())
}
