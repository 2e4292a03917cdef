//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Max-questions value is zero or otherwise unusable.
    #[error("invalid max questions '{value}': must be at least 1")]
    InvalidMaxQuestions { value: String },

    /// Max-questions string could not be parsed as a number.
    #[error("failed to parse max questions '{value}': {source}")]
    MaxQuestionsParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Blend weight is outside `[0, 1]`.
    #[error("invalid non-verbal weight '{value}': must be within 0.0..=1.0")]
    InvalidWeight { value: String },

    /// Blend weight string could not be parsed as a float.
    #[error("failed to parse non-verbal weight '{value}': {source}")]
    WeightParseError {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Seed string could not be parsed as a number.
    #[error("failed to parse seed '{value}': {source}")]
    SeedParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
