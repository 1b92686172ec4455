//! Secret word selection

use crate::core::Word;
use crate::error::GameError;
use crate::wordlists::WordPool;
use log::trace;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Deterministic random source for a given seed
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Pick the secret for one game, in uppercase
///
/// The same pool and an identically seeded source always give the same secret.
///
/// # Errors
///
/// Returns `GameError::EmptyPool` if the pool has no words, or
/// `GameError::Word` if the chosen entry is not a valid word.
///
/// # Examples
/// ```
/// use wordle_game::game::{seeded_rng, select_secret};
/// use wordle_game::wordlists::WordPool;
///
/// let pool = WordPool::from_corpus("apple,100\napply,50\ngrape,30", 5, 10).unwrap();
/// let secret = select_secret(&pool, &mut seeded_rng(42)).unwrap();
/// assert!(["APPLE", "APPLY", "GRAPE"].contains(&secret.text()));
/// ```
pub fn select_secret<R: rand::Rng + ?Sized>(
    pool: &WordPool,
    rng: &mut R,
) -> Result<Word, GameError> {
    let chosen = pool
        .words()
        .choose(rng)
        .ok_or_else(|| GameError::EmptyPool {
            word_len: pool.word_len(),
            limit: pool.limit(),
        })?;
    let secret = Word::new(chosen)?;
    trace!("Selected secret {secret}");
    Ok(secret)
}
