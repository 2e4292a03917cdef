//! Environment-backed configuration.
//!
//! Everything has a default. Override with `PREPFLOW_*` environment
//! variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::constants::{DEFAULT_MAX_QUESTIONS, DEFAULT_NONVERBAL_WEIGHT};

/// Runtime configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `PREPFLOW_*` overrides on top of
/// defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Global cap on selected questions per session. Default: `5`.
    pub max_questions: usize,

    /// Non-verbal share when blending with an external sub-score.
    /// Default: `0.4`.
    pub nonverbal_weight: f32,

    /// Fixed RNG seed for reproducible selection. Unset in production, where
    /// the tier anchors stay genuinely random.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_questions: DEFAULT_MAX_QUESTIONS,
            nonverbal_weight: DEFAULT_NONVERBAL_WEIGHT,
            seed: None,
        }
    }
}

impl Config {
    const ENV_MAX_QUESTIONS: &'static str = "PREPFLOW_MAX_QUESTIONS";
    const ENV_NONVERBAL_WEIGHT: &'static str = "PREPFLOW_NONVERBAL_WEIGHT";
    const ENV_SEED: &'static str = "PREPFLOW_SEED";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let max_questions = Self::parse_max_questions_from_env(defaults.max_questions)?;
        let nonverbal_weight = Self::parse_weight_from_env(defaults.nonverbal_weight)?;
        let seed = Self::parse_seed_from_env()?;

        let config = Self {
            max_questions,
            nonverbal_weight,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_questions == 0 {
            return Err(ConfigError::InvalidMaxQuestions {
                value: self.max_questions.to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.nonverbal_weight) {
            return Err(ConfigError::InvalidWeight {
                value: self.nonverbal_weight.to_string(),
            });
        }
        Ok(())
    }

    /// Returns the generator to drive tier-anchor selection: seeded when
    /// [`Config::seed`] is set, entropy-backed otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn parse_max_questions_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_MAX_QUESTIONS) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::MaxQuestionsParseError { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_weight_from_env(default: f32) -> Result<f32, ConfigError> {
        match env::var(Self::ENV_NONVERBAL_WEIGHT) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::WeightParseError { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_seed_from_env() -> Result<Option<u64>, ConfigError> {
        match env::var(Self::ENV_SEED) {
            Ok(value) => value
                .parse()
                .map(Some)
                .map_err(|e| ConfigError::SeedParseError { value, source: e }),
            Err(_) => Ok(None),
        }
    }
}
