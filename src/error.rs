use std::path::PathBuf;

/// Errors produced while preparing a search session.
///
/// The search itself never fails; everything here comes from parsing
/// selectors, validating a grid, building a dictionary index or reading files.
#[derive(Debug, thiserror::Error)]
pub enum WordSearchError {
    #[error("unexpected adjacency rule: {0} (expected 4way or 8way)")]
    InvalidAdjacencyRule(String),
    #[error("unexpected dictionary backing: {0}")]
    InvalidBacking(String),
    #[error("error reading file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("grid has no cells")]
    EmptyGrid,
    #[error("grid row {row} has {found} letters, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("failed to build dictionary index: {0}")]
    DictionaryBuild(String),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WordSearchError>;
