//! Corpus loading utilities
//!
//! Reads a corpus from a file, any buffered reader, or the embedded sample, and
//! builds the word pool from it.

use super::corpus::{FrequencyRecord, parse_record};
use super::{SAMPLE_CORPUS, WordPool};
use crate::error::GameError;
use crate::game::GameConfig;
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read every record from a buffered source
///
/// # Errors
///
/// Returns `GameError::Io` if reading fails and `GameError::Parse` for the first
/// malformed record.
pub fn read_corpus<R: BufRead>(reader: R) -> Result<Vec<FrequencyRecord>, GameError> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        records.push(parse_record(i + 1, &line?)?);
    }
    Ok(records)
}

/// Load a corpus file and build the pool described by `config`
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains a malformed record.
///
/// # Examples
/// ```no_run
/// use wordle_game::game::GameConfig;
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let pool = load_from_file("data/sample_corpus.csv", &GameConfig::default()).unwrap();
/// println!("Loaded {} words", pool.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, config: &GameConfig) -> Result<WordPool, GameError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records = read_corpus(BufReader::new(file))?;
    info!("Read {} corpus records from {}", records.len(), path.display());
    Ok(WordPool::build(records, config.word_len, config.limit))
}

/// Build the pool described by `config` from the embedded sample corpus
///
/// # Errors
///
/// Returns `GameError::Parse` if the embedded corpus is malformed.
///
/// # Examples
/// ```
/// use wordle_game::game::GameConfig;
/// use wordle_game::wordlists::loader::load_embedded;
///
/// let pool = load_embedded(&GameConfig::default()).unwrap();
/// assert!(pool.words().iter().all(|w| w.chars().count() == 5));
/// ```
pub fn load_embedded(config: &GameConfig) -> Result<WordPool, GameError> {
    Ok(WordPool::from_corpus(
        SAMPLE_CORPUS,
        config.word_len,
        config.limit,
    )?)
}
