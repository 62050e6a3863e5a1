use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::boggle::Board;
use crate::error::{Result, WordSearchError};

fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| WordSearchError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line.map_err(io_err)?);
    }
    Ok(lines)
}

/// Cleans up a word list: one word per line, surrounding whitespace removed,
/// blank lines skipped. Case is left alone.
pub fn parse_words<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let word = line.as_ref().trim();
            if word.is_empty() {
                None
            } else {
                Some(word.to_string())
            }
        })
        .collect()
}

/// Parses a grid: one row per line. Trailing whitespace (including `\r`) is
/// stripped and trailing blank lines dropped before the shape is validated
pub fn parse_grid<I, S>(lines: I) -> Result<Board>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rows = lines
        .into_iter()
        .map(|line| line.as_ref().trim_end().to_string())
        .collect::<Vec<_>>();
    while rows.last().map_or(false, |r| r.is_empty()) {
        rows.pop();
    }
    Board::from_rows(&rows)
}

/// Reads a word list from disk
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let words = parse_words(read_lines(&path)?);
    info!(path = %path.as_ref().display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Reads and validates a grid from disk
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<Board> {
    let board = parse_grid(read_lines(&path)?)?;
    info!(
        path = %path.as_ref().display(),
        rows = board.rows(),
        cols = board.cols(),
        "loaded grid"
    );
    Ok(board)
}
