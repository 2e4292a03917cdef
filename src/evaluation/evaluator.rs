use tracing::debug;

use crate::constants::{KEYWORD_WEIGHT, LENGTH_WEIGHT, SEMANTIC_WEIGHT, round2};
use crate::oracle::SemanticOracle;
use crate::text::word_count;

use super::error::EvaluationError;
use super::keyterms::{extract_key_terms, missing_terms};
use super::suggestions::improvement_suggestions;
use super::types::{EvaluationResult, ScoreBand};

/// Scores a candidate's answer against a reference answer.
///
/// The semantic signal comes from the injected [`SemanticOracle`]; the
/// lexical and length signals are computed locally. Construct one evaluator
/// per oracle instance and reuse it across questions.
#[derive(Debug, Clone)]
pub struct AnswerEvaluator<O> {
    oracle: O,
}

impl<O: SemanticOracle> AnswerEvaluator<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Evaluates `user_answer` against `ideal_answer`.
    ///
    /// Both answers are trimmed first. If each is at most one token the
    /// comparison is exact case-insensitive equality (short-form/MCQ
    /// branch); otherwise the weighted multi-signal model applies.
    ///
    /// Oracle failures surface as [`EvaluationError::Oracle`]; retry or
    /// abort policy belongs to the caller.
    pub fn evaluate(
        &self,
        user_answer: &str,
        ideal_answer: &str,
    ) -> Result<EvaluationResult, EvaluationError> {
        let user_answer = user_answer.trim();
        let ideal_answer = ideal_answer.trim();

        if word_count(user_answer) <= 1 && word_count(ideal_answer) <= 1 {
            let matched = user_answer.to_lowercase() == ideal_answer.to_lowercase();
            debug!(matched, "Short-form comparison");
            return Ok(if matched {
                EvaluationResult::correct()
            } else {
                EvaluationResult::incorrect()
            });
        }

        let semantic_similarity =
            round2(self.oracle.embed_and_compare(ideal_answer, user_answer)?);

        let key_terms = extract_key_terms(ideal_answer);
        let missing = missing_terms(user_answer, &key_terms);
        let keyword_score = if key_terms.is_empty() {
            1.0
        } else {
            round2(1.0 - missing.len() as f32 / key_terms.len() as f32)
        };

        let ideal_words = word_count(ideal_answer);
        let user_words = word_count(user_answer);
        // No penalty is possible against an empty reference.
        let length_score = if ideal_words == 0 {
            1.0
        } else {
            round2((user_words as f32 / ideal_words as f32).min(1.0))
        };

        let final_score = round2(
            SEMANTIC_WEIGHT * semantic_similarity
                + KEYWORD_WEIGHT * keyword_score
                + LENGTH_WEIGHT * length_score,
        );

        debug!(
            semantic_similarity,
            keyword_score,
            length_score,
            final_score,
            missing_terms = missing.len(),
            "Evaluated free-text answer"
        );

        let feedback = ScoreBand::of(final_score).feedback().to_string();
        let improvement_suggestions =
            improvement_suggestions(user_answer, ideal_answer, &missing);

        Ok(EvaluationResult {
            final_score,
            semantic_similarity,
            keyword_score,
            length_score,
            feedback,
            improvement_suggestions,
        })
    }
}
