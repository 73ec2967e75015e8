//! Play command
//!
//! Plays a batch of games against random secret words and collects
//! statistics. Games run in parallel; each owns its state and RNG and they
//! share one solver.

use crate::core::{GameStatus, GameView, Word};
use crate::dictionary::Dictionary;
use crate::game::{DEFAULT_MAX_WRONG_GUESSES, HangmanGame};
use crate::solver::{Solver, Strategy};
use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a batch of games
#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub games: usize,
    pub max_wrong_guesses: usize,
    /// Seed for secret selection and word guesses; random if `None`
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            games: 15,
            max_wrong_guesses: DEFAULT_MAX_WRONG_GUESSES,
            seed: None,
            show_progress: true,
        }
    }
}

/// Outcome of one game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub secret: String,
    pub guesses: Vec<String>,
    /// Final `pattern; score; status` line
    pub summary: String,
    pub status: GameStatus,
    pub score: usize,
}

/// Result of a batch of games
#[derive(Debug)]
pub struct PlayResult {
    pub records: Vec<GameRecord>,
    pub won: usize,
    pub lost: usize,
    pub total_score: usize,
    pub average_score: f64,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play one game to completion
///
/// # Errors
///
/// Returns an error if the solver cannot produce a guess (word length missing
/// from the dictionary, or a secret word the dictionary cannot explain) or
/// the game rejects a guess.
pub fn play_game<S, R>(
    solver: &Solver<'_, S>,
    secret: Word,
    max_wrong_guesses: usize,
    rng: &mut R,
) -> Result<GameRecord>
where
    S: Strategy,
    R: Rng + ?Sized,
{
    let mut game = HangmanGame::new(secret, max_wrong_guesses);
    let mut guesses = Vec::new();

    while game.status() == GameStatus::KeepGuessing {
        let guess = solver
            .next_guess_with_rng(&game, rng)
            .with_context(|| format!("solver failed on secret word '{}'", game.secret()))?;

        game.apply(&guess)
            .with_context(|| format!("game rejected guess '{guess}'"))?;
        guesses.push(guess.to_string());
    }

    Ok(GameRecord {
        secret: game.secret().to_string(),
        guesses,
        summary: game.to_string(),
        status: game.status(),
        score: game.current_score(),
    })
}

/// Play one game per secret word, in parallel
///
/// Game `i` uses an RNG seeded with `seeds[i]`, so results do not depend on
/// thread scheduling.
///
/// # Errors
///
/// Returns the first game error encountered.
///
/// # Panics
///
/// Panics if `secrets` and `seeds` have different lengths.
pub fn run_games<S>(
    solver: &Solver<'_, S>,
    secrets: &[Word],
    seeds: &[u64],
    max_wrong_guesses: usize,
    show_progress: bool,
) -> Result<PlayResult>
where
    S: Strategy + Sync,
{
    assert_eq!(secrets.len(), seeds.len(), "one seed per secret word");

    let pb = if show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .context("invalid progress bar template")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let records = secrets
        .par_iter()
        .zip(seeds.par_iter())
        .map(|(secret, &seed)| {
            let mut rng = StdRng::seed_from_u64(seed);
            let record = play_game(solver, secret.clone(), max_wrong_guesses, &mut rng);
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("done");

    let duration = start.elapsed();
    let won = records
        .iter()
        .filter(|r| r.status == GameStatus::Won)
        .count();
    let total_score: usize = records.iter().map(|r| r.score).sum();
    let games = records.len();

    Ok(PlayResult {
        won,
        lost: games - won,
        total_score,
        average_score: if games == 0 {
            0.0
        } else {
            total_score as f64 / games as f64
        },
        games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
        duration,
        records,
    })
}

/// Play `config.games` games against secret words drawn from the dictionary
///
/// Secrets are drawn with replacement.
///
/// # Errors
///
/// Returns an error if the dictionary is empty or any game fails.
pub fn play<S>(solver: &Solver<'_, S>, config: &PlayConfig) -> Result<PlayResult>
where
    S: Strategy + Sync,
{
    let dictionary: &Dictionary = solver.dictionary();
    let words: Vec<&Word> = dictionary.iter().collect();
    if words.is_empty() {
        bail!("dictionary is empty");
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut secrets = Vec::with_capacity(config.games);
    let mut seeds = Vec::with_capacity(config.games);
    for _ in 0..config.games {
        if let Some(&word) = words.choose(&mut rng) {
            secrets.push(word.clone());
            seeds.push(rng.random::<u64>());
        }
    }

    run_games(
        solver,
        &secrets,
        &seeds,
        config.max_wrong_guesses,
        config.show_progress,
    )
}
