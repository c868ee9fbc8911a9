//! Benchmark command
//!
//! Auto-plays many games by always guessing a code the helper still
//! considers possible, and reports how many rows the wins took.

use crate::error::GameError;
use crate::game::{GameConfig, GameState, Mode, Status};
use crate::solver::Helper;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub config: GameConfig,
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Average rows used by won games
    pub average_rows: f64,
    pub min_rows: usize,
    pub max_rows: usize,
    /// Rows used → number of wins
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `games` games with `config`
///
/// # Errors
/// Returns `GameError::InvalidConfig` if the settings are not playable.
pub fn run_benchmark<R: Rng>(
    config: &GameConfig,
    games: usize,
    rng: &mut R,
    show_progress: bool,
) -> Result<BenchmarkResult, GameError> {
    // Timing would only add noise
    let config = GameConfig {
        mode: Mode::Relax,
        ..*config
    };
    config.validate()?;

    let pb = if show_progress {
        ProgressBar::new(games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut wins = 0;
    let mut total_rows = 0;
    let mut min_rows = usize::MAX;
    let mut max_rows = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for played in 1..=games {
        let mut game = GameState::new(config, rng)?;
        let helper = Helper::for_game(&game);

        while !game.status().is_over() {
            let Some(guess) = helper.suggest(&game.history(), rng) else {
                break;
            };
            game.fill_row(guess.colors())?;
            game.submit_guess()?;
        }

        if game.status() == Status::Won {
            let rows_used = game.active_row() + 1;
            wins += 1;
            total_rows += rows_used;
            min_rows = min_rows.min(rows_used);
            max_rows = max_rows.max(rows_used);
            *distribution.entry(rows_used).or_insert(0) += 1;
        }

        if played % 10 == 0 && wins > 0 {
            pb.set_message(format!("Avg: {:.2}", total_rows as f64 / wins as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    Ok(BenchmarkResult {
        config,
        total_games: games,
        wins,
        losses: games - wins,
        average_rows: if wins > 0 {
            total_rows as f64 / wins as f64
        } else {
            0.0
        },
        min_rows: if wins > 0 { min_rows } else { 0 },
        max_rows,
        distribution,
        duration,
        games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
