//! Word pool inspection command

use crate::error::GameError;
use crate::game::GameConfig;
use crate::wordlists::WordPool;
use crate::wordlists::loader::{load_embedded, load_from_file};
use std::path::Path;

/// Summary of a built pool
#[derive(Debug)]
pub struct PoolReport {
    pub word_len: usize,
    pub limit: usize,
    pub size: usize,
    pub top: Vec<String>,
}

/// Build the pool described by `config` from a corpus file, or from the
/// embedded sample when no path is given
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the corpus cannot be
/// read or parsed. An empty pool is not an error here.
pub fn load_pool(corpus: Option<&Path>, config: &GameConfig) -> Result<WordPool, GameError> {
    config.validate()?;
    match corpus {
        Some(path) => load_from_file(path, config),
        None => load_embedded(config),
    }
}

/// Describe a pool, listing its first `show` words in rank order
#[must_use]
pub fn describe_pool(pool: &WordPool, show: usize) -> PoolReport {
    PoolReport {
        word_len: pool.word_len(),
        limit: pool.limit(),
        size: pool.len(),
        top: pool.words().iter().take(show).cloned().collect(),
    }
}
