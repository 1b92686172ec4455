//! Interactive game command

use crate::error::GameError;
use crate::game::{GameConfig, GameState, run_game, seeded_rng, select_secret};
use crate::output::Renderer;
use crate::wordlists::WordPool;
use std::io::BufRead;

/// Select a seeded secret from `pool` and play one game
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the pool is empty, or
/// input/output fails.
pub fn run_play<R: BufRead, O: Renderer>(
    pool: &WordPool,
    config: &GameConfig,
    input: R,
    out: &mut O,
) -> Result<GameState, GameError> {
    config.validate()?;

    let mut rng = seeded_rng(config.seed);
    let secret = select_secret(pool, &mut rng)?;

    run_game(pool, secret, config, input, out)
}
