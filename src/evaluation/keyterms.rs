//! Key-term extraction and coverage.

use crate::constants::{MAX_KEY_TERMS, MIN_KEY_TERM_LEN};
use crate::text::{alphabetic_terms, is_stopword};

/// Extracts up to [`MAX_KEY_TERMS`] content-bearing terms from a reference
/// answer: alphabetic runs of length >= [`MIN_KEY_TERM_LEN`], lowercased,
/// stopwords dropped, deduplicated in first-seen order.
pub fn extract_key_terms(text: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::with_capacity(MAX_KEY_TERMS);
    for term in alphabetic_terms(text, MIN_KEY_TERM_LEN) {
        if is_stopword(&term) || terms.contains(&term) {
            continue;
        }
        terms.push(term);
        if terms.len() == MAX_KEY_TERMS {
            break;
        }
    }
    terms
}

/// Key terms with no case-insensitive substring occurrence in `user_answer`.
pub fn missing_terms(user_answer: &str, key_terms: &[String]) -> Vec<String> {
    let lowered = user_answer.to_lowercase();
    key_terms
        .iter()
        .filter(|term| !lowered.contains(term.as_str()))
        .cloned()
        .collect()
}
