use std::collections::{BTreeSet, HashSet};

use rayon::prelude::*;
use tracing::debug;

use super::board::Board;
use super::dictionary::Dictionary;
use super::util::{Adjacency, Cell};

/// Shortest string that is ever reported as a word
pub const MIN_WORD_LENGTH: usize = 3;

/*
    Depth first search over every simple path on the board. Each branch carries
    its own copy of the visited cells, so branches started from different cells
    never share mutable state and can run on the rayon pool.
*/

#[derive(Debug)]
pub struct BoardSearcher<D> {
    board: Board,
    dictionary: D,
    /// Fan starting cells out across threads
    parallel: bool,
}

impl<D: Dictionary> BoardSearcher<D> {
    pub fn new(board: Board, dictionary: D) -> Self {
        Self {
            board,
            dictionary,
            parallel: true,
        }
    }

    /// Runs starting cells one after another instead of on the thread pool
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Finds every dictionary word of at least [`MIN_WORD_LENGTH`] letters that
    /// can be traced through adjacent cells without reusing one
    pub fn find_words(&self, adjacency: Adjacency) -> BTreeSet<String> {
        debug!(
            rule = %adjacency,
            backing = %self.dictionary.backing(),
            starts = self.board.rows() * self.board.cols(),
            parallel = self.parallel,
            "searching board"
        );

        let starts = self.board.cells().collect::<Vec<_>>();
        let words = if self.parallel {
            starts
                .into_par_iter()
                .map(|cell| self.search_from(cell, String::new(), &HashSet::new(), adjacency))
                .reduce(BTreeSet::new, |mut acc, found| {
                    acc.extend(found);
                    acc
                })
        } else {
            starts.into_iter().fold(BTreeSet::new(), |mut acc, cell| {
                acc.extend(self.search_from(cell, String::new(), &HashSet::new(), adjacency));
                acc
            })
        };

        debug!(found = words.len(), "search complete");
        words
    }

    /// Words found by extending `partial` through `cell`. `visited` holds the
    /// cells of the current path only
    fn search_from(
        &self,
        cell: &Cell,
        mut partial: String,
        visited: &HashSet<Cell>,
        adjacency: Adjacency,
    ) -> BTreeSet<String> {
        let mut words = BTreeSet::new();
        if visited.contains(cell) {
            return words;
        }

        partial.push(cell.letter);
        let length = visited.len() + 1;
        if length > self.dictionary.longest_word_len() {
            return words;
        }

        if length >= MIN_WORD_LENGTH {
            if self.dictionary.contains_exact(&partial) {
                words.insert(partial.clone());
            } else if !self.dictionary.has_prefix(&partial) {
                return words;
            }
        }

        // Children get their own copy so siblings never see each other's path
        let mut path = visited.clone();
        path.insert(*cell);
        for next in self.board.neighbors(cell, adjacency) {
            words.extend(self.search_from(next, partial.clone(), &path, adjacency));
        }
        words
    }
}
