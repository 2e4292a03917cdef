use thiserror::Error;

/// Failures of the external semantic-similarity oracle.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The oracle's backing model or service could not be reached.
    #[error("semantic oracle unavailable: {reason}")]
    Unavailable { reason: String },

    /// The oracle rejected the input it was handed.
    #[error("semantic oracle rejected input: {reason}")]
    InvalidInput { reason: String },

    /// The oracle produced a score outside `[0, 1]`.
    #[error("semantic oracle returned out-of-range score {score}")]
    OutOfRangeScore { score: f32 },
}
