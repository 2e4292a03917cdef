//! Adaptive interview-practice core.
//!
//! Two engines, both synchronous and free of shared mutable state:
//!
//! - **Question curation**: a caller-supplied, pre-filtered [`Pool`] is
//!   difficulty-tagged at construction, a [`TfidfIndex`] is built over its
//!   texts, and the tier-walk [`select`] produces an ordered session in
//!   Easy -> Medium -> Hard blocks with topically coherent neighbors inside
//!   each block. [`plan_session`] bundles these steps.
//! - **Answer evaluation**: [`AnswerEvaluator`] blends a semantic signal
//!   from an injected [`SemanticOracle`] with lexical key-term coverage and
//!   an answer-depth ratio into an [`EvaluationResult`] carrying qualitative
//!   feedback and improvement suggestions.
//!
//! The web/session layer, persistence, and the embedding model itself are
//! external collaborators; this crate exchanges plain data with them.
//!
//! # Test/Mock Support
//!
//! [`MockSemanticOracle`] is available behind
//! `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod difficulty;
pub mod evaluation;
pub mod oracle;
pub mod pool;
pub mod selector;
pub mod session;
pub mod similarity;
pub mod text;

pub use config::{Config, ConfigError};
pub use difficulty::{Difficulty, classify};
pub use evaluation::{
    AnswerEvaluator, EvaluationError, EvaluationResult, ScoreBand, extract_key_terms,
    improvement_suggestions, missing_terms,
};
pub use oracle::{OracleError, SemanticOracle};
pub use pool::{Pool, Question};
pub use selector::{Affinity, DEFAULT_MAX_QUESTIONS, select};
pub use session::{
    CurationError, PlannedQuestion, SessionPlan, blend_with_nonverbal, plan_session, to_percent,
};
pub use similarity::TfidfIndex;

#[cfg(any(test, feature = "mock"))]
pub use oracle::MockSemanticOracle;
