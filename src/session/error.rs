use thiserror::Error;

/// Failures when curating a session from a pool snapshot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurationError {
    /// The filtered pool has zero eligible questions; no session can start.
    #[error("question pool is empty, cannot start a session")]
    EmptyPool,
}
