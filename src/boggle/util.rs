use std::fmt;
use std::slice::Iter;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WordSearchError;

/// Which neighbouring cells are reachable in a single step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Adjacency {
    /// Up, down, left and right only
    FourWay,
    /// Orthogonal plus diagonal moves
    EightWay,
}

impl Adjacency {
    pub fn iter() -> Iter<'static, Adjacency> {
        static RULES: [Adjacency; 2] = [Adjacency::FourWay, Adjacency::EightWay];
        RULES.iter()
    }

    /// Row/col offsets of the cells reachable in one step
    pub fn offsets(&self) -> &'static [(isize, isize)] {
        static FOUR: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        static EIGHT: [(isize, isize); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        match self {
            Self::FourWay => &FOUR,
            Self::EightWay => &EIGHT,
        }
    }
}

impl FromStr for Adjacency {
    type Err = WordSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "4way" | "four" | "fourway" => Ok(Self::FourWay),
            "8way" | "eight" | "eightway" => Ok(Self::EightWay),
            _ => Err(WordSearchError::InvalidAdjacencyRule(s.to_string())),
        }
    }
}

impl TryFrom<String> for Adjacency {
    type Error = WordSearchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Adjacency> for String {
    fn from(rule: Adjacency) -> Self {
        rule.to_string()
    }
}

impl fmt::Display for Adjacency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::FourWay => write!(f, "4way"),
            Self::EightWay => write!(f, "8way"),
        }
    }
}

/// A single letter on the board. Equality and hashing cover all three fields
/// so two boards loaded from the same rows produce interchangeable cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub letter: char,
}

impl Cell {
    pub fn new(row: usize, col: usize, letter: char) -> Self {
        Self {
            row,
            col,
            letter: letter.to_lowercase().next().unwrap_or(letter),
        }
    }

    /// Position one step away by the given offset, or None when it would leave
    /// a `rows` x `cols` board
    pub fn offset(&self, (dr, dc): (isize, isize), rows: usize, cols: usize) -> Option<(usize, usize)> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row < rows && col < cols {
            Some((row, col))
        } else {
            None
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;

    fn hash_of(cell: &Cell) -> u64 {
        let mut hasher = DefaultHasher::new();
        cell.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_parse_adjacency() {
        assert_eq!("4way".parse::<Adjacency>().unwrap(), Adjacency::FourWay);
        assert_eq!("EIGHT".parse::<Adjacency>().unwrap(), Adjacency::EightWay);
        let err = "6way".parse::<Adjacency>().unwrap_err();
        assert!(matches!(err, WordSearchError::InvalidAdjacencyRule(ref s) if s == "6way"));
    }

    #[test]
    fn test_adjacency_serde() {
        let rule: Adjacency = serde_json::from_str("\"8way\"").unwrap();
        assert_eq!(rule, Adjacency::EightWay);
        assert_eq!(serde_json::to_string(&Adjacency::FourWay).unwrap(), "\"4way\"");
        assert!(serde_json::from_str::<Adjacency>("\"diagonal\"").is_err());
    }

    #[test]
    fn test_offsets() {
        assert_eq!(Adjacency::FourWay.offsets().len(), 4);
        assert_eq!(Adjacency::EightWay.offsets().len(), 8);
        assert!(!Adjacency::EightWay.offsets().contains(&(0, 0)));
        for o in Adjacency::FourWay.offsets() {
            assert!(Adjacency::EightWay.offsets().contains(o));
        }
    }

    #[test]
    fn test_cell_value_semantics() {
        let a = Cell::new(2, 3, 'Q');
        let b = Cell::new(2, 3, 'q');
        assert_eq!(a, b);
        assert_eq!(a.letter, 'q');
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, Cell::new(3, 2, 'q'));
    }

    #[test]
    fn test_cell_offset_bounds() {
        let corner = Cell::new(0, 0, 'a');
        assert_eq!(corner.offset((-1, 0), 2, 2), None);
        assert_eq!(corner.offset((0, -1), 2, 2), None);
        assert_eq!(corner.offset((1, 1), 2, 2), Some((1, 1)));
        let far = Cell::new(1, 1, 'd');
        assert_eq!(far.offset((0, 1), 2, 2), None);
        assert_eq!(far.offset((-1, -1), 2, 2), Some((0, 0)));
    }
}
