//! Game engine
//!
//! Configuration, secret selection, the turn state machine, and the blocking
//! loop that drives it from an input source.

mod config;
mod secret;
mod session;
mod state;

pub use config::{DEFAULT_ATTEMPT_BUDGET, DEFAULT_LIMIT, DEFAULT_SEED, DEFAULT_WORD_LEN, GameConfig};
pub use secret::{seeded_rng, select_secret};
pub use session::run_game;
pub use state::{GameState, Outcome, TurnEvent, step};
