use thiserror::Error;

use crate::oracle::OracleError;

/// Failures of a single answer evaluation.
///
/// Only the external oracle can fail an evaluation; degenerate inputs (empty
/// answers, empty key-term sets) are handled by guards, not errors.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("semantic oracle failed: {0}")]
    Oracle(#[from] OracleError),
}
