//! Semantic-similarity oracle boundary.
//!
//! Embedding generation lives outside this crate. The evaluator only needs a
//! normalized similarity between two texts, so the dependency is a narrow
//! trait the hosting system implements over its model runtime. Oracle
//! failures are surfaced as-is: the evaluator performs no private fallback
//! similarity computation.

pub mod error;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::OracleError;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockSemanticOracle;

/// External dense-embedding similarity provider.
///
/// Implementations embed both texts and return their cosine similarity,
/// clamped to `[0, 1]` by construction.
pub trait SemanticOracle {
    /// Embeds `reference` and `candidate` and compares them.
    fn embed_and_compare(&self, reference: &str, candidate: &str) -> Result<f32, OracleError>;
}

impl<T: SemanticOracle + ?Sized> SemanticOracle for &T {
    fn embed_and_compare(&self, reference: &str, candidate: &str) -> Result<f32, OracleError> {
        (**self).embed_and_compare(reference, candidate)
    }
}
