//! Answer evaluation: multi-signal scoring plus qualitative feedback.
//!
//! A free-text answer is scored as a weighted blend of three signals:
//! semantic similarity from the external oracle, key-term coverage of the
//! reference answer, and an answer-depth length ratio. Single-token pairs
//! short-circuit to exact comparison (the MCQ path).

pub mod error;
pub mod evaluator;
pub mod keyterms;
pub mod suggestions;
pub mod types;


pub use error::EvaluationError;
pub use evaluator::AnswerEvaluator;
pub use keyterms::{extract_key_terms, missing_terms};
pub use suggestions::improvement_suggestions;
pub use types::{EvaluationResult, ScoreBand};
