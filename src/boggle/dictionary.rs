use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::ops::Bound;
use std::slice::Iter;
use std::str::FromStr;

use fst::automaton::{Automaton, Str};
use fst::{IntoStreamer, Set, Streamer};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordSearchError};

/// Word membership oracle used by the board searcher.
///
/// Every backing must give the same answers; they only differ in how fast
/// they give them.
pub trait Dictionary: Send + Sync {
    /// Adds all words. Backings that need sorted storage sort afterwards
    fn load(&mut self, words: Vec<String>) -> Result<()>;
    /// True if `word` was loaded
    fn contains_exact(&self, word: &str) -> bool;
    /// True if at least one loaded word starts with `prefix`
    fn has_prefix(&self, prefix: &str) -> bool;
    /// Number of stored entries, duplicates included for backings that keep them
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Length in characters of the longest stored word
    fn longest_word_len(&self) -> usize;
    /// Which backing strategy answers the queries
    fn backing(&self) -> Backing;
}

impl<T: Dictionary + ?Sized> Dictionary for Box<T> {
    fn load(&mut self, words: Vec<String>) -> Result<()> {
        (**self).load(words)
    }
    fn contains_exact(&self, word: &str) -> bool {
        (**self).contains_exact(word)
    }
    fn has_prefix(&self, prefix: &str) -> bool {
        (**self).has_prefix(prefix)
    }
    fn len(&self) -> usize {
        (**self).len()
    }
    fn longest_word_len(&self) -> usize {
        (**self).longest_word_len()
    }
    fn backing(&self) -> Backing {
        (**self).backing()
    }
}

/// Selects the container a dictionary is built on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Backing {
    /// Sorted vector, binary search with neighbour inspection for prefixes
    Sorted,
    /// Ordered set, prefix answered from the next lower/higher entries
    Ordered,
    /// Hash set, linear scan for prefixes
    Hash,
    /// Unsorted vector, linear scan for everything
    Linear,
    /// Finite state transducer, prefix answered by an automaton search
    Fst,
}

impl Backing {
    pub fn iter() -> Iter<'static, Backing> {
        static ALL: [Backing; 5] = [
            Backing::Sorted,
            Backing::Ordered,
            Backing::Hash,
            Backing::Linear,
            Backing::Fst,
        ];
        ALL.iter()
    }

    /// Creates an empty dictionary on this backing
    pub fn empty(self) -> Box<dyn Dictionary> {
        match self {
            Self::Sorted => Box::new(SortedDictionary::default()),
            Self::Ordered => Box::new(OrderedDictionary::default()),
            Self::Hash => Box::new(HashDictionary::default()),
            Self::Linear => Box::new(LinearDictionary::default()),
            Self::Fst => Box::new(FstDictionary::default()),
        }
    }

    /// Creates a dictionary on this backing and loads `words` into it
    pub fn build(self, words: Vec<String>) -> Result<Box<dyn Dictionary>> {
        let mut dict = self.empty();
        dict.load(words)?;
        Ok(dict)
    }
}

impl FromStr for Backing {
    type Err = WordSearchError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sorted" | "arraylist" => Ok(Self::Sorted),
            "ordered" | "treeset" => Ok(Self::Ordered),
            "hash" | "hashset" | "linkedhashset" => Ok(Self::Hash),
            "linear" | "linkedlist" => Ok(Self::Linear),
            "fst" => Ok(Self::Fst),
            _ => Err(WordSearchError::InvalidBacking(s.to_string())),
        }
    }
}

impl TryFrom<String> for Backing {
    type Error = WordSearchError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Backing> for String {
    fn from(backing: Backing) -> Self {
        backing.to_string()
    }
}

impl fmt::Display for Backing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Sorted => "sorted",
            Self::Ordered => "ordered",
            Self::Hash => "hash",
            Self::Linear => "linear",
            Self::Fst => "fst",
        };
        write!(f, "{}", name)
    }
}

fn longest(words: &[String]) -> usize {
    words.iter().map(|w| w.chars().count()).max().unwrap_or(0)
}

/// No stored word can start with a prefix longer than the longest word
fn too_long(prefix: &str, longest: usize) -> bool {
    prefix.len() > longest && prefix.chars().count() > longest
}

#[derive(Debug, Default)]
pub struct SortedDictionary {
    /// Kept sorted after every load. Duplicates are not removed
    words: Vec<String>,
    longest: usize,
}

impl Dictionary for SortedDictionary {
    fn load(&mut self, words: Vec<String>) -> Result<()> {
        self.longest = self.longest.max(longest(&words));
        self.words.extend(words);
        self.words.sort_unstable();
        Ok(())
    }

    fn contains_exact(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        if too_long(prefix, self.longest) {
            return false;
        }
        match self.words.binary_search_by(|w| w.as_str().cmp(prefix)) {
            Ok(_) => true,
            // Words sharing a prefix are contiguous, so only the neighbours of
            // the insertion point can match
            Err(i) => {
                let at = self.words.get(i).map_or(false, |w| w.starts_with(prefix));
                let before = i
                    .checked_sub(1)
                    .and_then(|j| self.words.get(j))
                    .map_or(false, |w| w.starts_with(prefix));
                at || before
            }
        }
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn longest_word_len(&self) -> usize {
        self.longest
    }

    fn backing(&self) -> Backing {
        Backing::Sorted
    }
}

#[derive(Debug, Default)]
pub struct OrderedDictionary {
    words: BTreeSet<String>,
    longest: usize,
}

impl Dictionary for OrderedDictionary {
    fn load(&mut self, words: Vec<String>) -> Result<()> {
        self.longest = self.longest.max(longest(&words));
        self.words.extend(words);
        Ok(())
    }

    fn contains_exact(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        if too_long(prefix, self.longest) {
            return false;
        }
        if self.words.contains(prefix) {
            return true;
        }
        let bounds = (Bound::Excluded(prefix), Bound::Unbounded);
        let higher = self.words.range::<str, _>(bounds).next();
        let lower = self
            .words
            .range::<str, _>((Bound::Unbounded, Bound::Excluded(prefix)))
            .next_back();
        [lower, higher]
            .into_iter()
            .flatten()
            .any(|w| w.starts_with(prefix))
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn longest_word_len(&self) -> usize {
        self.longest
    }

    fn backing(&self) -> Backing {
        Backing::Ordered
    }
}

#[derive(Debug, Default)]
pub struct HashDictionary {
    words: HashSet<String>,
    longest: usize,
}

impl Dictionary for HashDictionary {
    fn load(&mut self, words: Vec<String>) -> Result<()> {
        self.longest = self.longest.max(longest(&words));
        self.words.reserve(words.len());
        self.words.extend(words);
        Ok(())
    }

    fn contains_exact(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    // O(n) per call
    fn has_prefix(&self, prefix: &str) -> bool {
        if too_long(prefix, self.longest) {
            return false;
        }
        self.words.iter().any(|w| w.starts_with(prefix))
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn longest_word_len(&self) -> usize {
        self.longest
    }

    fn backing(&self) -> Backing {
        Backing::Hash
    }
}

/// Slowest baseline: words in load order, every query scans
#[derive(Debug, Default)]
pub struct LinearDictionary {
    words: Vec<String>,
    longest: usize,
}

impl Dictionary for LinearDictionary {
    fn load(&mut self, words: Vec<String>) -> Result<()> {
        self.longest = self.longest.max(longest(&words));
        self.words.extend(words);
        Ok(())
    }

    fn contains_exact(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        if too_long(prefix, self.longest) {
            return false;
        }
        self.words.iter().any(|w| w.starts_with(prefix))
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn longest_word_len(&self) -> usize {
        self.longest
    }

    fn backing(&self) -> Backing {
        Backing::Linear
    }
}

#[derive(Default)]
pub struct FstDictionary {
    /// None until the first load
    set: Option<Set<Vec<u8>>>,
    longest: usize,
}

impl fmt::Debug for FstDictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FstDictionary")
            .field("len", &self.len())
            .field("longest", &self.longest)
            .finish()
    }
}

impl Dictionary for FstDictionary {
    fn load(&mut self, words: Vec<String>) -> Result<()> {
        self.longest = self.longest.max(longest(&words));

        // The set is immutable, so merge the existing keys with the new ones
        // and rebuild. Input to the builder must be sorted and unique
        let mut all = match &self.set {
            Some(set) => set
                .stream()
                .into_strs()
                .map_err(|e| WordSearchError::DictionaryBuild(e.to_string()))?,
            None => Vec::new(),
        };
        all.extend(words);
        all.sort_unstable();
        all.dedup();

        let set = Set::from_iter(all).map_err(|e| WordSearchError::DictionaryBuild(e.to_string()))?;
        self.set = Some(set);
        Ok(())
    }

    fn contains_exact(&self, word: &str) -> bool {
        self.set.as_ref().map_or(false, |set| set.contains(word))
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        let set = match &self.set {
            Some(set) if !too_long(prefix, self.longest) => set,
            _ => return false,
        };
        let matcher = Str::new(prefix).starts_with();
        let mut stream = set.search(matcher).into_stream();
        stream.next().is_some()
    }

    fn len(&self) -> usize {
        self.set.as_ref().map_or(0, |set| set.len())
    }

    fn longest_word_len(&self) -> usize {
        self.longest
    }

    fn backing(&self) -> Backing {
        Backing::Fst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vec<String> {
        vec![
            "cat".into(),
            "dog".into(),
            "mouse".into(),
            "moose".into(),
            "laptop".into(),
            "cat".into(),
        ]
    }

    #[test]
    fn test_contains_exact() {
        for &backing in Backing::iter() {
            let dict = backing.build(vocab()).unwrap();
            assert!(dict.contains_exact("moose"), "{}", backing);
            assert!(dict.contains_exact("cat"), "{}", backing);
            assert!(!dict.contains_exact("moos"), "{}", backing);
            assert!(!dict.contains_exact("cats"), "{}", backing);
            assert_eq!(dict.backing(), backing);
            assert_eq!(dict.longest_word_len(), 6);
        }
    }

    #[test]
    fn test_duplicates_only_kept_by_sequences() {
        assert_eq!(Backing::Sorted.build(vocab()).unwrap().len(), 6);
        assert_eq!(Backing::Linear.build(vocab()).unwrap().len(), 6);
        assert_eq!(Backing::Ordered.build(vocab()).unwrap().len(), 5);
        assert_eq!(Backing::Hash.build(vocab()).unwrap().len(), 5);
        assert_eq!(Backing::Fst.build(vocab()).unwrap().len(), 5);
    }

    #[test]
    fn test_has_prefix() {
        for &backing in Backing::iter() {
            let dict = backing.build(vocab()).unwrap();
            assert!(dict.has_prefix(""), "{}", backing);
            assert!(dict.has_prefix("mo"), "{}", backing);
            assert!(dict.has_prefix("moo"), "{}", backing);
            assert!(dict.has_prefix("laptop"), "{}", backing);
            assert!(!dict.has_prefix("a"), "{}", backing);
            assert!(!dict.has_prefix("laptops"), "{}", backing);
            assert!(!dict.has_prefix("zzz"), "{}", backing);
            // sorts before every entry
            assert!(!dict.has_prefix("aaa"), "{}", backing);
            assert!(dict.has_prefix("c"), "{}", backing);
            assert!(dict.has_prefix("l"), "{}", backing);
        }
    }

    #[test]
    fn test_empty_dictionary() {
        for &backing in Backing::iter() {
            let dict = backing.build(Vec::new()).unwrap();
            assert!(dict.is_empty());
            assert!(!dict.has_prefix(""), "{}", backing);
            assert!(!dict.has_prefix("a"), "{}", backing);
            assert!(!dict.contains_exact(""), "{}", backing);
        }
    }

    #[test]
    fn test_repeated_load() {
        for &backing in Backing::iter() {
            let mut dict = backing.empty();
            dict.load(vec!["zebra".into()]).unwrap();
            dict.load(vec!["apple".into(), "banana".into()]).unwrap();
            assert!(dict.contains_exact("zebra"), "{}", backing);
            assert!(dict.contains_exact("apple"), "{}", backing);
            assert!(dict.has_prefix("ban"), "{}", backing);
            assert_eq!(dict.longest_word_len(), 6);
        }
    }

    #[test]
    fn test_parse_backing() {
        assert_eq!("TreeSet".parse::<Backing>().unwrap(), Backing::Ordered);
        assert_eq!("ArrayList".parse::<Backing>().unwrap(), Backing::Sorted);
        assert_eq!("LinkedList".parse::<Backing>().unwrap(), Backing::Linear);
        assert_eq!("LinkedHashSet".parse::<Backing>().unwrap(), Backing::Hash);
        assert_eq!("FST".parse::<Backing>().unwrap(), Backing::Fst);
        assert!(matches!(
            "vector".parse::<Backing>(),
            Err(WordSearchError::InvalidBacking(_))
        ));
        for &backing in Backing::iter() {
            assert_eq!(backing.to_string().parse::<Backing>().unwrap(), backing);
        }
    }
}
