//! Error taxonomy for building vocabularies and starting games
//!
//! Turn-level rejections (wrong length, unknown word) are not errors; they are
//! reported as [`crate::game::TurnEvent`] values and never leave the game loop.

use crate::core::WordError;
use crate::wordlists::ParseError;
use std::fmt;
use std::io;

/// Invalid construction-time configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWordLength,
    ZeroLimit,
    ZeroAttemptBudget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWordLength => write!(f, "Word length must be greater than zero"),
            Self::ZeroLimit => write!(f, "Vocabulary limit must be greater than zero"),
            Self::ZeroAttemptBudget => write!(f, "Attempt budget must be greater than zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors that stop a game from being built or played
#[derive(Debug)]
pub enum GameError {
    /// Reading the corpus or the console failed
    Io(io::Error),
    /// The corpus contains a malformed record
    Parse(ParseError),
    /// No word of the requested length survived ranking and truncation
    EmptyPool { word_len: usize, limit: usize },
    /// Configuration rejected before any work was done
    Config(ConfigError),
    /// A pool entry is not a playable word
    Word(WordError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse(e) => write!(f, "Corpus error: {e}"),
            Self::EmptyPool { word_len, limit } => write!(
                f,
                "No {word_len}-letter words among the top {limit} corpus entries"
            ),
            Self::Config(e) => write!(f, "Invalid configuration: {e}"),
            Self::Word(e) => write!(f, "Invalid pool word: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Word(e) => Some(e),
            Self::EmptyPool { .. } => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseError> for GameError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

impl From<ConfigError> for GameError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
