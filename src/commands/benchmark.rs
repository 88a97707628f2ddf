//! Benchmark command
//!
//! Tests solver performance across many secret words.

use super::solve::auto_play;
use crate::config::GameConfig;
use crate::core::SecretWord;
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub average_misses: f64,
    pub miss_distribution: BTreeMap<usize, usize>,
    /// Words the solver lost, in list order
    pub hardest: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Auto-play every word in `target_words` and collect statistics
///
/// Rounds run in parallel; they share only the solver's word list.
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<S>,
    target_words: &[SecretWord],
    config: &GameConfig,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();
    let pb = if show_progress {
        progress_bar(target_words.len())
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<(String, bool, usize)> = target_words
        .par_iter()
        .map(|word| {
            let result = auto_play(word.clone(), solver, config);
            pb.inc(1);
            (result.target, result.won, result.misses)
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    let total_words = results.len();
    let wins = results.iter().filter(|(_, won, _)| *won).count();
    let total_misses: usize = results.iter().map(|(_, _, misses)| misses).sum();

    let mut miss_distribution = BTreeMap::new();
    for (_, _, misses) in &results {
        *miss_distribution.entry(*misses).or_insert(0) += 1;
    }

    let hardest = results
        .into_iter()
        .filter(|(_, won, _)| !won)
        .map(|(word, _, _)| word)
        .collect();

    let (win_rate, average_misses) = if total_words == 0 {
        (0.0, 0.0)
    } else {
        (
            wins as f64 / total_words as f64,
            total_misses as f64 / total_words as f64,
        )
    };

    tracing::info!(total_words, wins, ?duration, "benchmark finished");

    BenchmarkResult {
        total_words,
        wins,
        losses: total_words - wins,
        win_rate,
        average_misses,
        miss_distribution,
        hardest,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FrequencyStrategy, StrategyType};
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn benchmark_counts_add_up() {
        let words = words_from_slice(WORDS);
        let solver = Solver::new(FrequencyStrategy, &words);

        let result = run_benchmark(&solver, &words, &GameConfig::default(), false);

        assert_eq!(result.total_words, words.len());
        assert_eq!(result.wins + result.losses, result.total_words);
        assert_eq!(result.hardest.len(), result.losses);
        assert_eq!(
            result.miss_distribution.values().sum::<usize>(),
            result.total_words
        );
        assert!(result.miss_distribution.keys().all(|&m| m <= 6));
    }

    #[test]
    fn frequency_player_wins_on_own_list() {
        let words = words_from_slice(&["otter", "raven", "trout", "weasel", "wombat", "zebra"]);
        let solver = Solver::new(FrequencyStrategy, &words);

        let result = run_benchmark(&solver, &words, &GameConfig::default(), false);
        assert_eq!(result.wins, words.len());
        assert!((result.win_rate - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn random_player_stays_within_budget() {
        let words = words_from_slice(&["otter", "raven", "trout"]);
        let solver = Solver::new(StrategyType::from_name("random"), &words);
        let config = GameConfig {
            mistake_budget: 3,
            ..GameConfig::default()
        };

        let result = run_benchmark(&solver, &words, &config, false);
        assert!(result.miss_distribution.keys().all(|&m| m <= 3));
    }

    #[test]
    fn empty_benchmark() {
        let words: Vec<SecretWord> = Vec::new();
        let solver = Solver::new(FrequencyStrategy, &words);
        let result = run_benchmark(&solver, &words, &GameConfig::default(), false);
        assert_eq!(result.total_words, 0);
        assert!(result.win_rate.abs() < f64::EPSILON);
    }
}
