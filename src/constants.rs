//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary constants from primary ones to avoid drift. The
//! evaluation weights are a contract with stored historical scores: changing
//! them re-scales every score the hosting system has already persisted.

/// Global cap on selected questions per session.
pub const DEFAULT_MAX_QUESTIONS: usize = 5;

/// Weight of the semantic-similarity signal in the final score.
pub const SEMANTIC_WEIGHT: f32 = 0.6;

/// Weight of the key-term coverage signal in the final score.
pub const KEYWORD_WEIGHT: f32 = 0.3;

/// Weight of the answer-length signal in the final score.
pub const LENGTH_WEIGHT: f32 = 1.0 - SEMANTIC_WEIGHT - KEYWORD_WEIGHT;

/// Maximum number of key terms extracted from a reference answer.
pub const MAX_KEY_TERMS: usize = 6;

/// Minimum length of an alphabetic run to qualify as a key term.
pub const MIN_KEY_TERM_LEN: usize = 4;

/// Final-score threshold for "Outstanding" feedback (inclusive).
pub const OUTSTANDING_THRESHOLD: f32 = 0.85;

/// Final-score threshold for "Good" feedback (inclusive).
pub const GOOD_THRESHOLD: f32 = 0.70;

/// Final-score threshold for "Average" feedback (inclusive).
pub const AVERAGE_THRESHOLD: f32 = 0.50;

/// A user answer shorter than this fraction of the reference answer draws an
/// elaboration suggestion.
pub const BRIEF_ANSWER_RATIO: f32 = 0.5;

/// Default weight of the external non-verbal sub-score when a caller blends
/// it with the text score.
pub const DEFAULT_NONVERBAL_WEIGHT: f32 = 0.4;

/// Rounds to two decimal places, the precision every reported score carries.
#[inline]
pub fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
