use std::fmt;

use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;

use super::util::{Adjacency, Cell};
use crate::error::{Result, WordSearchError};

/// Immutable rectangular grid of letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells indexed by [row, col]
    cells: Array2<Cell>,
}

impl Board {
    /// Builds a board from rows of letters. Letters are lowercased; every row
    /// must have the same number of characters as the first.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let width = match rows.first() {
            Some(first) => first.as_ref().chars().count(),
            None => return Err(WordSearchError::EmptyGrid),
        };
        if width == 0 {
            return Err(WordSearchError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows.len() * width);
        for (row, line) in rows.iter().enumerate() {
            let found = line.as_ref().chars().count();
            if found != width {
                return Err(WordSearchError::RaggedGrid {
                    row,
                    expected: width,
                    found,
                });
            }
            cells.extend(
                line.as_ref()
                    .chars()
                    .enumerate()
                    .map(|(col, letter)| Cell::new(row, col, letter)),
            );
        }

        let cells = Array2::from_shape_vec((rows.len(), width), cells)
            .map_err(|_| WordSearchError::EmptyGrid)?;
        Ok(Self { cells })
    }

    /// Generates a board of uniformly random letters a-z
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(WordSearchError::EmptyGrid);
        }
        let letters = Array2::random_using((rows, cols), Uniform::new_inclusive(b'a', b'z'), rng);
        let cells = Array2::from_shape_fn((rows, cols), |(row, col)| {
            Cell::new(row, col, letters[[row, col]] as char)
        });
        Ok(Self { cells })
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get([row, col])
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Cells reachable from `cell` in one step under the rule. Positions that
    /// would leave the board are skipped.
    pub fn neighbors<'a>(
        &'a self,
        cell: &'a Cell,
        adjacency: Adjacency,
    ) -> impl Iterator<Item = &'a Cell> + 'a {
        let (rows, cols) = self.cells.dim();
        adjacency
            .offsets()
            .iter()
            .filter_map(move |&o| cell.offset(o, rows, cols))
            .map(move |(row, col)| &self.cells[[row, col]])
    }
}

impl std::ops::Index<(usize, usize)> for Board {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[[row, col]]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.cells.rows().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
