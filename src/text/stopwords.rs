//! English stopword set shared by indexing and key-term extraction.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Function words carrying no topical signal. Both the similarity index and
/// the key-term extractor must filter against the same set, otherwise a term
/// can count toward coverage without ever contributing to similarity.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "all", "also", "am", "an", "and", "any", "are",
        "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
        "by", "can", "could", "dare", "did", "do", "does", "doing", "down", "during", "each",
        "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
        "hers", "him", "his", "how", "however", "i", "if", "in", "into", "is", "it", "its",
        "itself", "just", "may", "me", "might", "more", "most", "must", "my", "need", "no", "nor",
        "not", "now", "of", "off", "on", "once", "only", "or", "other", "ought", "our", "ours",
        "out", "over", "own", "same", "shall", "she", "should", "so", "some", "such", "than",
        "that", "the", "their", "theirs", "them", "then", "there", "these", "they", "this",
        "those", "through", "to", "too", "under", "until", "up", "used", "very", "was", "we",
        "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
        "would", "you", "your", "yours",
    ]
    .into_iter()
    .collect()
});

/// Returns `true` if `word` (already lowercased) is a stopword.
pub fn is_stopword(word: &str) -> bool {
    STOP_WORDS.contains(word)
}
