//! Deterministic oracle substitutes for tests.

use super::{OracleError, SemanticOracle};

/// Scripted oracle: returns a fixed score, or a fixed failure.
#[derive(Debug, Clone)]
pub struct MockSemanticOracle {
    outcome: Outcome,
}

#[derive(Debug, Clone)]
enum Outcome {
    Score(f32),
    Unavailable(String),
}

impl MockSemanticOracle {
    /// Always returns `score`.
    pub fn fixed(score: f32) -> Self {
        Self {
            outcome: Outcome::Score(score),
        }
    }

    /// Always fails with [`OracleError::Unavailable`].
    pub fn unavailable(reason: &str) -> Self {
        Self {
            outcome: Outcome::Unavailable(reason.to_string()),
        }
    }
}

impl SemanticOracle for MockSemanticOracle {
    fn embed_and_compare(&self, _reference: &str, _candidate: &str) -> Result<f32, OracleError> {
        match &self.outcome {
            Outcome::Score(score) => Ok(*score),
            Outcome::Unavailable(reason) => Err(OracleError::Unavailable {
                reason: reason.clone(),
            }),
        }
    }
}
