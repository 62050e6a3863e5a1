use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::boggle::{Adjacency, Backing};
use crate::error::Result;
use crate::utils::serialization;

/// Settings for a single search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub adjacency: Adjacency,
    pub backing: Backing,
    /// Explore starting cells on the rayon pool
    pub parallel: bool,
    /// Only report the count and run time
    pub quiet: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            adjacency: Adjacency::EightWay,
            backing: Backing::Sorted,
            parallel: true,
            quiet: false,
        }
    }
}

impl SearchConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        serialization::load_from_disk(path)
    }
}

/// Every combination of these is searched `trials` times by the benchmark
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkPlan {
    pub adjacencies: Vec<Adjacency>,
    pub grids: Vec<PathBuf>,
    pub dictionaries: Vec<PathBuf>,
    pub backings: Vec<Backing>,
    pub trials: usize,
    pub parallel: bool,
}

impl Default for BenchmarkPlan {
    fn default() -> Self {
        Self {
            adjacencies: Adjacency::iter().copied().collect(),
            grids: Vec::new(),
            dictionaries: Vec::new(),
            backings: Backing::iter().copied().collect(),
            trials: 1,
            parallel: true,
        }
    }
}

impl BenchmarkPlan {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        serialization::load_from_disk(path)
    }

    /// Number of searches a run performs
    pub fn total_runs(&self) -> usize {
        self.adjacencies.len()
            * self.grids.len()
            * self.dictionaries.len()
            * self.backings.len()
            * self.trials.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordSearchError;

    #[test]
    fn test_search_config_defaults() {
        let config: SearchConfig = serialization::from_json("{\"adjacency\": \"4way\"}").unwrap();
        assert_eq!(config.adjacency, Adjacency::FourWay);
        assert_eq!(config.backing, Backing::Sorted);
        assert!(config.parallel);
        assert!(!config.quiet);
    }

    #[test]
    fn test_bad_rule_in_config() {
        let err = serialization::from_json::<SearchConfig>("{\"adjacency\": \"6way\"}").unwrap_err();
        assert!(matches!(err, WordSearchError::Config(_)));
        assert!(err.to_string().contains("6way"));
    }

    #[test]
    fn test_benchmark_plan() {
        let plan: BenchmarkPlan = serialization::from_json(
            r#"{
                "grids": ["data/grid2x3.txt", "data/grid4x4.txt"],
                "dictionaries": ["data/words_small.txt"],
                "backings": ["TreeSet", "fst"],
                "trials": 3
            }"#,
        )
        .unwrap();
        assert_eq!(plan.adjacencies.len(), 2);
        assert_eq!(plan.backings, vec![Backing::Ordered, Backing::Fst]);
        assert_eq!(plan.total_runs(), 2 * 2 * 1 * 2 * 3);

        let round_trip: BenchmarkPlan =
            serialization::from_json(&serialization::to_json(&plan).unwrap()).unwrap();
        assert_eq!(round_trip, plan);
    }
}
