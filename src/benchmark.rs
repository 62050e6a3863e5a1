use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use ndarray::Array1;
use ndarray_stats::QuantileExt;
use serde::Serialize;
use tracing::info;

use crate::boggle::{Adjacency, Backing, Board, BoardSearcher, Dictionary};
use crate::config::BenchmarkPlan;
use crate::error::Result;
use crate::utils::loader;

/// Result of one timed search
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub words: BTreeSet<String>,
    pub count: usize,
    pub elapsed_secs: f64,
}

/// Runs `find_words` and measures wall clock time around it
pub fn timed_search<D: Dictionary>(searcher: &BoardSearcher<D>, adjacency: Adjacency) -> SearchReport {
    let start = Instant::now();
    let words = searcher.find_words(adjacency);
    let elapsed = start.elapsed();
    SearchReport {
        count: words.len(),
        words,
        elapsed_secs: elapsed.as_secs_f64(),
    }
}

/// Timing summary for one (rule, grid, dictionary, backing) combination
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub adjacency: Adjacency,
    pub grid: PathBuf,
    pub dictionary: PathBuf,
    pub backing: Backing,
    pub words_found: usize,
    pub trials: usize,
    pub mean_secs: f64,
    pub min_secs: f64,
    pub max_secs: f64,
}

impl Measurement {
    fn summarize(times: &[f64]) -> (f64, f64, f64) {
        let times = Array1::from(times.to_vec());
        let mean = times.mean().unwrap_or(0.0);
        let min = times.min().copied().unwrap_or(0.0);
        let max = times.max().copied().unwrap_or(0.0);
        (mean, min, max)
    }
}

/// Searches every combination in the plan. Grids and word lists are read
/// once up front; a fresh dictionary is built for each combination.
pub fn run(plan: &BenchmarkPlan) -> Result<Vec<Measurement>> {
    let mut grids: HashMap<&PathBuf, Board> = HashMap::new();
    for path in plan.grids.iter() {
        grids.insert(path, loader::load_grid(path)?);
    }
    let mut word_lists: HashMap<&PathBuf, Vec<String>> = HashMap::new();
    for path in plan.dictionaries.iter() {
        word_lists.insert(path, loader::load_words(path)?);
    }

    let trials = plan.trials.max(1);
    let mut results = Vec::with_capacity(plan.total_runs() / trials);
    for &adjacency in plan.adjacencies.iter() {
        for grid_path in plan.grids.iter() {
            for dict_path in plan.dictionaries.iter() {
                for &backing in plan.backings.iter() {
                    let board = grids[grid_path].clone();
                    let dictionary = backing.build(word_lists[dict_path].clone())?;
                    let searcher = BoardSearcher::new(board, dictionary).with_parallelism(plan.parallel);

                    let mut times = Vec::with_capacity(trials);
                    let mut words_found = 0;
                    for _ in 0..trials {
                        let report = timed_search(&searcher, adjacency);
                        words_found = report.count;
                        times.push(report.elapsed_secs);
                    }

                    let (mean_secs, min_secs, max_secs) = Measurement::summarize(&times);
                    info!(
                        rule = %adjacency,
                        grid = %grid_path.display(),
                        dictionary = %dict_path.display(),
                        %backing,
                        words = words_found,
                        mean_secs,
                        "benchmark"
                    );
                    results.push(Measurement {
                        adjacency,
                        grid: grid_path.clone(),
                        dictionary: dict_path.clone(),
                        backing,
                        words_found,
                        trials,
                        mean_secs,
                        min_secs,
                        max_secs,
                    });
                }
            }
        }
    }
    Ok(results)
}

/// Formats a duration the way the run-time lines print it
pub fn format_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}.{:09}", secs / 60, secs % 60, elapsed.subsec_nanos())
}
