//! Improvement-suggestion synthesis from the evaluator's intermediate
//! signals. Conditions are independent and append in a fixed display order.

use crate::constants::BRIEF_ANSWER_RATIO;
use crate::text::word_count;

/// Derives 0..=4 ordered suggestions for a free-text answer.
pub fn improvement_suggestions(
    user_answer: &str,
    ideal_answer: &str,
    missing_terms: &[String],
) -> Vec<String> {
    let mut suggestions = Vec::new();
    let lowered = user_answer.to_lowercase();

    if !missing_terms.is_empty() {
        let shown = missing_terms.len().min(3);
        suggestions.push(format!(
            "Try including key concepts such as: {}",
            missing_terms[..shown].join(", ")
        ));
    }

    if (word_count(user_answer) as f32) < word_count(ideal_answer) as f32 * BRIEF_ANSWER_RATIO {
        suggestions.push("Your answer is brief. Consider adding more explanation.".to_string());
    }

    if !lowered.contains("example") {
        suggestions.push("Adding a simple example could strengthen your answer.".to_string());
    }

    if !lowered.contains("impact") && !lowered.contains("effect") {
        suggestions
            .push("You may also explain the impact or consequence of this concept.".to_string());
    }

    suggestions
}
