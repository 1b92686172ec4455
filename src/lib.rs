//! Wordle Game
//!
//! A terminal word-guessing game: a secret word is drawn from a frequency-ranked
//! vocabulary and the player has a fixed number of guesses to find it, with
//! per-letter feedback after each one.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, Word};
//! use wordle_game::game::{GameConfig, seeded_rng, select_secret};
//! use wordle_game::wordlists::WordPool;
//!
//! // Build the pool and pick a reproducible secret
//! let pool = WordPool::from_corpus("apple,100\napply,50\ngrape,30", 5, 10).unwrap();
//! let secret = select_secret(&pool, &mut seeded_rng(GameConfig::default().seed)).unwrap();
//!
//! // Score a guess
//! let feedback = Feedback::calculate(&Word::new("grape").unwrap(), &secret);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Game engine
pub mod game;

// Vocabulary construction
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
