//! Difficulty classification for interview questions.
//!
//! Pure keyword/length heuristics; no model involved. The rules are applied
//! in order and the first match wins.


use serde::{Deserialize, Serialize};

use crate::text::word_count;

/// Keywords signaling comparative or causal reasoning. Any hit makes the
/// question [`Difficulty::Hard`] regardless of length.
const HARD_KEYWORDS: [&str; 7] = [
    "compare",
    "difference",
    "why",
    "how",
    "tradeoff",
    "counterfactual",
    "shap",
];

/// Keywords that promote a short question to [`Difficulty::Medium`].
const MEDIUM_KEYWORDS: [&str; 3] = ["explain", "describe", "define"];

/// Word count above which a question is at least [`Difficulty::Medium`].
const MEDIUM_WORD_COUNT: usize = 8;

/// Discrete difficulty tier of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Tiers in session order. Selection walks them front to back.
    pub const ORDERED: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Short label for logging and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a question text into a difficulty tier.
///
/// Case-insensitive and deterministic. Keyword checks are substring
/// containment, so "How" in "show" also triggers; the rule set predates this
/// crate and is kept as-is for parity with the corpus it was tuned on.
/// Empty text has word count zero and no keyword hits, so it is `Easy`.
pub fn classify(text: &str) -> Difficulty {
    let lowered = text.to_lowercase();

    if HARD_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return Difficulty::Hard;
    }

    if word_count(&lowered) > MEDIUM_WORD_COUNT || MEDIUM_KEYWORDS.iter().any(|k| lowered.contains(k))
    {
        return Difficulty::Medium;
    }

    Difficulty::Easy
}
