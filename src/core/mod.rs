//! Core domain types for the game
//!
//! Words and per-letter feedback. Everything here is pure and has no I/O.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterVerdict};
pub use word::{Word, WordError};
