//! Playable word pool
//!
//! Built once from a frequency corpus and read-only afterwards, so it can be
//! shared by reference across any number of games.

use super::corpus::{FrequencyRecord, ParseError, parse_corpus};
use log::{debug, warn};
use rustc_hash::FxHashSet;

/// Frequency-ranked words of a single length
///
/// Every member has exactly `word_len` characters.
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Vec<String>,
    word_len: usize,
    limit: usize,
    index: FxHashSet<String>,
}

impl WordPool {
    /// Build a pool from parsed records
    ///
    /// 1. Stable sort by frequency, highest first (ties keep corpus order)
    /// 2. Keep the first `limit` records
    /// 3. Drop frequencies
    /// 4. Keep words with exactly `word_len` characters, preserving rank order
    ///
    /// The result may be empty; callers check before starting a game.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::{FrequencyRecord, WordPool};
    ///
    /// let records = vec![
    ///     FrequencyRecord::new("grape", 30),
    ///     FrequencyRecord::new("apple", 100),
    ///     FrequencyRecord::new("fig", 80),
    /// ];
    /// let pool = WordPool::build(records, 5, 10);
    /// assert_eq!(pool.words(), &["apple", "grape"]);
    /// ```
    #[must_use]
    pub fn build(mut records: Vec<FrequencyRecord>, word_len: usize, limit: usize) -> Self {
        let total = records.len();
        if total < limit {
            warn!("Corpus has {total} records, fewer than the limit of {limit}");
        }

        records.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        records.truncate(limit);

        let words: Vec<String> = records
            .into_iter()
            .map(|record| record.word)
            .filter(|word| word.chars().count() == word_len)
            .collect();

        let index = words.iter().map(|w| w.to_uppercase()).collect();

        debug!(
            "Built pool of {} {word_len}-letter words from {total} records (limit {limit})",
            words.len()
        );

        Self {
            words,
            word_len,
            limit,
            index,
        }
    }

    /// Parse a corpus and build a pool from it
    ///
    /// # Errors
    /// Returns the first malformed record; no partial pool is built.
    pub fn from_corpus(source: &str, word_len: usize, limit: usize) -> Result<Self, ParseError> {
        let records = parse_corpus(source)?;
        Ok(Self::build(records, word_len, limit))
    }

    /// Words in rank order, as spelled in the corpus
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[inline]
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_uppercase())
    }
}
