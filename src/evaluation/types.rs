use serde::{Deserialize, Serialize};

use crate::constants::{AVERAGE_THRESHOLD, GOOD_THRESHOLD, OUTSTANDING_THRESHOLD};

/// Qualitative band of a final score. Thresholds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Outstanding,
    Good,
    Average,
    Weak,
}

impl ScoreBand {
    /// Maps a final score in `[0, 1]` to its band.
    pub fn of(final_score: f32) -> Self {
        if final_score >= OUTSTANDING_THRESHOLD {
            ScoreBand::Outstanding
        } else if final_score >= GOOD_THRESHOLD {
            ScoreBand::Good
        } else if final_score >= AVERAGE_THRESHOLD {
            ScoreBand::Average
        } else {
            ScoreBand::Weak
        }
    }

    /// Candidate-facing feedback line for this band.
    pub fn feedback(&self) -> &'static str {
        match self {
            ScoreBand::Outstanding => {
                "Outstanding answer. Strong conceptual clarity and coverage."
            }
            ScoreBand::Good => {
                "Good answer. You understand the concept well but can improve depth."
            }
            ScoreBand::Average => "Average answer. Some important concepts are missing.",
            ScoreBand::Weak => "Weak answer. Focus on explaining core ideas clearly.",
        }
    }
}

/// Outcome of scoring one `(user_answer, ideal_answer)` pair.
///
/// Immutable once returned; the hosting layer persists or serves it as-is.
/// All scores are rounded to two decimals and lie in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Weighted blend of the three sub-scores.
    pub final_score: f32,
    /// Dense-embedding similarity from the external oracle.
    pub semantic_similarity: f32,
    /// Key-term coverage of the reference answer.
    pub keyword_score: f32,
    /// Answer-depth ratio against the reference answer.
    pub length_score: f32,
    /// Qualitative feedback line.
    pub feedback: String,
    /// Ordered improvement suggestions (display order). Empty for the
    /// short-form branch.
    pub improvement_suggestions: Vec<String>,
}

impl EvaluationResult {
    /// Short-form match: everything maximal, no suggestions.
    pub(crate) fn correct() -> Self {
        Self {
            final_score: 1.0,
            semantic_similarity: 1.0,
            keyword_score: 1.0,
            length_score: 1.0,
            feedback: "Correct answer.".to_string(),
            improvement_suggestions: Vec::new(),
        }
    }

    /// Short-form mismatch: everything zero, no suggestions.
    pub(crate) fn incorrect() -> Self {
        Self {
            final_score: 0.0,
            semantic_similarity: 0.0,
            keyword_score: 0.0,
            length_score: 0.0,
            feedback: "Incorrect answer. Review the concept and try again.".to_string(),
            improvement_suggestions: Vec::new(),
        }
    }

    /// Band of the final score.
    pub fn band(&self) -> ScoreBand {
        ScoreBand::of(self.final_score)
    }
}
