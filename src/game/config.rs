//! Construction-time game options

use crate::error::ConfigError;

pub const DEFAULT_WORD_LEN: usize = 5;
pub const DEFAULT_LIMIT: usize = 10_000;
pub const DEFAULT_ATTEMPT_BUDGET: u32 = 6;
pub const DEFAULT_SEED: u64 = 42;

/// Options for building a pool and playing a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Length of every word in the pool
    pub word_len: usize,
    /// Number of top-ranked corpus records considered
    pub limit: usize,
    /// Scored guesses allowed before the game is lost
    pub attempt_budget: u32,
    /// Seed for secret selection
    pub seed: u64,
    /// Input that abandons the game, compared case-insensitively
    pub quit_token: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_len: DEFAULT_WORD_LEN,
            limit: DEFAULT_LIMIT,
            attempt_budget: DEFAULT_ATTEMPT_BUDGET,
            seed: DEFAULT_SEED,
            quit_token: "q".to_string(),
        }
    }
}

impl GameConfig {
    /// Check that every numeric option is usable
    ///
    /// # Errors
    /// Returns the first zero-valued option found.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.word_len == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if self.limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        if self.attempt_budget == 0 {
            return Err(ConfigError::ZeroAttemptBudget);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.word_len, 5);
        assert_eq!(config.limit, 10_000);
        assert_eq!(config.attempt_budget, 6);
        assert_eq!(config.seed, 42);
        assert_eq!(config.quit_token, "q");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_options() {
        let zero_len = GameConfig {
            word_len: 0,
            ..GameConfig::default()
        };
        assert_eq!(zero_len.validate(), Err(ConfigError::ZeroWordLength));

        let zero_limit = GameConfig {
            limit: 0,
            ..GameConfig::default()
        };
        assert_eq!(zero_limit.validate(), Err(ConfigError::ZeroLimit));

        let zero_budget = GameConfig {
            attempt_budget: 0,
            ..GameConfig::default()
        };
        assert_eq!(zero_budget.validate(), Err(ConfigError::ZeroAttemptBudget));
    }
}
