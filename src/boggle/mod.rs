pub mod board;
pub mod dictionary;
pub mod util;
pub mod word_search;

pub use self::board::Board;
pub use self::dictionary::{Backing, Dictionary};
pub use self::util::{Adjacency, Cell};
pub use self::word_search::{BoardSearcher, MIN_WORD_LENGTH};
