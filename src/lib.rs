//! Boggle style word search.
//!
//! Finds every dictionary word that can be traced through adjacent letters of
//! a rectangular grid, under either orthogonal or orthogonal plus diagonal
//! adjacency. The dictionary can be backed by several containers so their
//! effect on search time can be compared.

pub mod benchmark;
pub mod boggle;
pub mod config;
pub mod error;
pub mod logging;
pub mod utils;

pub use boggle::{Adjacency, Backing, Board, BoardSearcher, Cell, Dictionary};
pub use error::{Result, WordSearchError};
