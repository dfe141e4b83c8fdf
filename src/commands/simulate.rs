//! Random-player simulation
//!
//! Plays every pack many times with a player that presses random unused keys,
//! and collects statistics per pack. Games run in parallel; each one owns its
//! own session and seeded RNG so runs are reproducible.

use crate::core::{GameSession, Letter, Pack};
use crate::packs::PuzzleSet;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
    pub max_guesses: usize,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            max_guesses: 200,
        }
    }
}

/// Outcome of a single simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub guesses: usize,
    pub score: u32,
    pub failed_attempts: u32,
    /// Score minus failed attempts, as reported by the session
    pub net_result: i64,
    /// Every letter of the last row was uncovered
    pub completed: bool,
}

/// Aggregated statistics for one pack
#[derive(Debug, Clone)]
pub struct PackStatistics {
    pub name: String,
    pub games: usize,
    pub completed: usize,
    pub average_guesses: f64,
    pub average_score: f64,
    pub average_failed: f64,
    pub best_result: i64,
    pub worst_result: i64,
}

/// Result of a simulation run
pub struct SimulationResult {
    pub packs: Vec<PackStatistics>,
    pub total_games: usize,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play one game on `pack`, pressing random keys that are still enabled
///
/// Stops once the last row is fully uncovered, when every key is disabled,
/// or after `max_guesses` presses.
pub fn play_random_game<R: Rng + ?Sized>(
    pack: &Pack,
    rng: &mut R,
    max_guesses: usize,
) -> GameRecord {
    let mut session = GameSession::new(pack.clone());
    let mut guesses = 0;

    while guesses < max_guesses && !session.is_board_revealed() {
        let available: Vec<Letter> = Letter::ALPHABET
            .into_iter()
            .filter(|&l| !session.is_letter_used(l))
            .collect();

        let Some(&letter) = available.choose(rng) else {
            break;
        };

        session.guess_letter(letter);
        guesses += 1;
    }

    GameRecord {
        guesses,
        score: session.score(),
        failed_attempts: session.failed_attempts(),
        net_result: session.net_result(),
        completed: session.is_board_revealed(),
    }
}

/// Summarize the records of one pack
#[must_use]
pub fn summarize(name: &str, records: &[GameRecord]) -> PackStatistics {
    let games = records.len();
    let average = |f: fn(&GameRecord) -> f64| {
        if games == 0 {
            0.0
        } else {
            records.iter().map(f).sum::<f64>() / games as f64
        }
    };

    PackStatistics {
        name: name.to_string(),
        games,
        completed: records.iter().filter(|r| r.completed).count(),
        average_guesses: average(|r| r.guesses as f64),
        average_score: average(|r| f64::from(r.score)),
        average_failed: average(|r| f64::from(r.failed_attempts)),
        best_result: records.iter().map(|r| r.net_result).max().unwrap_or(0),
        worst_result: records.iter().map(|r| r.net_result).min().unwrap_or(0),
    }
}

/// Run the simulation over every pack in `puzzles`
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_simulation(puzzles: &PuzzleSet, config: &SimulationConfig) -> SimulationResult {
    let total_games = puzzles.len() * config.games;

    println!("🎲 Simulating {} games per pack...", config.games);

    // Progress bar
    let pb = ProgressBar::new(total_games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut packs = Vec::with_capacity(puzzles.len());

    for (pack_index, pack) in puzzles.iter().enumerate() {
        pb.set_message(pack.name().to_string());

        let records: Vec<GameRecord> = (0..config.games)
            .into_par_iter()
            .map(|game| {
                let game_seed = config
                    .seed
                    .wrapping_add((pack_index * config.games + game) as u64);
                let mut rng = StdRng::seed_from_u64(game_seed);
                let record = play_random_game(pack, &mut rng, config.max_guesses);
                pb.inc(1);
                record
            })
            .collect();

        packs.push(summarize(pack.name(), &records));
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();

    SimulationResult {
        packs,
        total_games,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(rows: &[&str]) -> Pack {
        Pack::new("test", rows).unwrap()
    }

    #[test]
    fn random_game_completes_simple_ladder() {
        let p = pack(&["AB", "AC"]);
        let mut rng = StdRng::seed_from_u64(7);
        let record = play_random_game(&p, &mut rng, 200);

        // Only A links and only A, C sit on the last row, so 26 keys suffice
        assert!(record.completed);
        assert!(record.guesses <= 26 + 26);
        assert!(record.score >= 2);
        assert_eq!(
            record.net_result,
            i64::from(record.score) - i64::from(record.failed_attempts)
        );
    }

    #[test]
    fn random_game_respects_guess_limit() {
        let p = pack(&["CYCLING", " INSIDE", "    ELECTRICITY", "RECYCLING"]);
        let mut rng = StdRng::seed_from_u64(1);
        let record = play_random_game(&p, &mut rng, 3);
        assert!(record.guesses <= 3);
    }

    #[test]
    fn random_game_is_reproducible() {
        let p = pack(&["CYCLING", " INSIDE", "    ELECTRICITY", "RECYCLING"]);
        let a = play_random_game(&p, &mut StdRng::seed_from_u64(42), 200);
        let b = play_random_game(&p, &mut StdRng::seed_from_u64(42), 200);
        assert_eq!(a, b);
    }

    #[test]
    fn summarize_averages() {
        let records = [
            GameRecord {
                guesses: 10,
                score: 4,
                failed_attempts: 2,
                net_result: 2,
                completed: true,
            },
            GameRecord {
                guesses: 20,
                score: 2,
                failed_attempts: 6,
                net_result: -4,
                completed: false,
            },
        ];
        let stats = summarize("pack", &records);
        assert_eq!(stats.games, 2);
        assert_eq!(stats.completed, 1);
        assert!((stats.average_guesses - 15.0).abs() < 1e-9);
        assert!((stats.average_score - 3.0).abs() < 1e-9);
        assert!((stats.average_failed - 4.0).abs() < 1e-9);
        assert_eq!(stats.best_result, 2);
        assert_eq!(stats.worst_result, -4);
    }

    #[test]
    fn summarize_empty() {
        let stats = summarize("none", &[]);
        assert_eq!(stats.games, 0);
        assert!(stats.average_score.abs() < f64::EPSILON);
    }

    #[test]
    fn simulation_covers_every_pack() {
        let puzzles = PuzzleSet::embedded();
        let config = SimulationConfig::new(4, 123);
        let result = run_simulation(&puzzles, &config);
        assert_eq!(result.packs.len(), puzzles.len());
        assert_eq!(result.total_games, 4 * puzzles.len());
        assert!(result.packs.iter().all(|p| p.games == 4));
    }
}
