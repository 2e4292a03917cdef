//! Shared text utilities.
//!
//! Tokenization here is deliberately simple: the curation and evaluation
//! signals are lexical, and both must agree on what counts as a word.

mod stopwords;


pub use stopwords::is_stopword;

/// Lowercased alphanumeric tokens of length >= 2, stopwords removed.
///
/// This is the vocabulary feed for the similarity index.
pub fn index_tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2 && !is_stopword(t))
        .map(str::to_string)
        .collect()
}

/// Lowercased purely alphabetic runs of at least `min_len` characters.
///
/// Stopwords are kept; callers decide whether to filter them.
pub fn alphabetic_terms(text: &str, min_len: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphabetic())
        .filter(|t| t.chars().count() >= min_len)
        .map(str::to_string)
        .collect()
}

/// Whitespace-delimited word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
