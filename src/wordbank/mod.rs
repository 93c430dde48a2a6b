//! The word bank
//!
//! One immutable, ordered word list serves two roles: indexed by day offset
//! it is the answer schedule, and as a set it is the dictionary of accepted
//! guesses. Every schedulable answer is therefore a valid guess.

mod embedded;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Immutable ordered word list with a fast membership index
///
/// Loaded once at startup (embedded or from a file) and shared read-only
/// from then on.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordBank {
    /// Build a bank from an ordered list of words
    ///
    /// The list order is the answer schedule; the membership index is
    /// derived from the same entries.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let index = words.iter().map(|w| w.text().to_string()).collect();
        Self { words, index }
    }

    /// Build a bank from lines of text, one candidate word per line
    ///
    /// Each line is trimmed and must pass [`Word::new`]; blank lines and
    /// malformed entries are skipped rather than aborting the load. Line
    /// order becomes the schedule order.
    ///
    /// # Examples
    /// ```
    /// use verba::wordbank::WordBank;
    ///
    /// let bank = WordBank::from_lines(["terra", "  aquae ", "", "ara"]);
    /// assert_eq!(bank.len(), 2);
    /// assert!(bank.is_valid("aquae"));
    /// ```
    #[must_use]
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words = lines
            .into_iter()
            .filter_map(|line| Word::new(line.trim()).ok())
            .collect();
        Self::new(words)
    }

    /// Load a bank from a word list file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or opened.
    ///
    /// # Examples
    /// ```no_run
    /// use verba::wordbank::WordBank;
    ///
    /// let bank = WordBank::load_from_file("data/words.txt").unwrap();
    /// println!("Loaded {} words", bank.len());
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_lines(content.lines()))
    }

    /// The bank compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use verba::wordbank::WordBank;
    ///
    /// let bank = WordBank::embedded();
    /// assert!(!bank.is_empty());
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_lines(WORDS.iter().copied())
    }

    /// Membership test against the bank
    ///
    /// The lookup is exact: entries are stored in canonical lowercase form,
    /// so callers normalize case before calling, matching the schedule's
    /// lowercase convention.
    ///
    /// # Examples
    /// ```
    /// use verba::wordbank::WordBank;
    ///
    /// let bank = WordBank::embedded();
    /// assert!(bank.is_valid("terra"));
    /// assert!(!bank.is_valid("zzzzz"));
    /// ```
    #[inline]
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// The scheduled word at a day offset
    #[inline]
    #[must_use]
    pub fn word_at(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// All words in schedule order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the bank
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the bank holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
