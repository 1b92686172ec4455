//! Command implementations

pub mod play;
pub mod pool;
pub mod score;

pub use play::run_play;
pub use pool::{PoolReport, describe_pool, load_pool};
pub use score::{ScoreResult, score_guess};
