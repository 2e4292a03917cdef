//! Term-weighted similarity over a fixed pool of question texts.
//!
//! Each text becomes a sparse tf-idf vector (smoothed idf, L2-normalized),
//! and pairwise similarity is the cosine of two vectors. The index is built
//! once per pool snapshot and never mutated; rebuild it when the pool
//! changes.


use std::collections::HashMap;

use tracing::debug;

use crate::text::index_tokens;

/// Sparse term id/weight pair. Term ids are private to one index build.
type Term = (u32, f32);

/// Pairwise tf-idf similarity lookup over a fixed set of texts.
#[derive(Debug, Clone)]
pub struct TfidfIndex {
    /// One L2-normalized sparse vector per text, sorted by term id.
    vectors: Vec<Vec<Term>>,
}

impl TfidfIndex {
    /// Builds the index over `texts`, in order. Index positions correspond
    /// 1:1 to text positions.
    pub fn build<'a, I>(texts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let tokenized: Vec<Vec<String>> = texts.into_iter().map(index_tokens).collect();

        // Vocabulary and per-term document frequency.
        let mut term_ids: HashMap<&str, u32> = HashMap::new();
        let mut doc_freq: Vec<u32> = Vec::new();
        for tokens in &tokenized {
            let mut seen: Vec<u32> = Vec::new();
            for token in tokens {
                let next_id = term_ids.len() as u32;
                let id = *term_ids.entry(token.as_str()).or_insert_with(|| {
                    doc_freq.push(0);
                    next_id
                });
                if !seen.contains(&id) {
                    seen.push(id);
                    doc_freq[id as usize] += 1;
                }
            }
        }

        // Smoothed idf: ln((1 + n) / (1 + df)) + 1. Keeps ubiquitous terms
        // from dominating without ever zeroing them out.
        let n_docs = tokenized.len() as f32;
        let idf: Vec<f32> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        let vectors = tokenized
            .iter()
            .map(|tokens| {
                let mut counts: HashMap<u32, f32> = HashMap::new();
                for token in tokens {
                    let id = term_ids[token.as_str()];
                    *counts.entry(id).or_insert(0.0) += 1.0;
                }

                let mut vector: Vec<Term> = counts
                    .into_iter()
                    .map(|(id, tf)| (id, tf * idf[id as usize]))
                    .collect();
                vector.sort_unstable_by_key(|&(id, _)| id);

                let norm = vector
                    .iter()
                    .map(|&(_, w)| w * w)
                    .sum::<f32>()
                    .sqrt();
                if norm > 0.0 {
                    for term in &mut vector {
                        term.1 /= norm;
                    }
                }
                vector
            })
            .collect::<Vec<_>>();

        debug!(
            num_texts = vectors.len(),
            vocab_size = term_ids.len(),
            "Built tf-idf index"
        );

        Self { vectors }
    }

    /// Number of indexed texts.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Cosine similarity between texts `i` and `j`, in `[0, 1]`.
    ///
    /// Vectors are already L2-normalized, so this is a sparse dot product.
    /// A text with no surviving tokens has a zero vector and similarity 0.0
    /// to everything, itself included.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds; callers iterate indices they
    /// obtained from the same pool snapshot.
    pub fn similarity(&self, i: usize, j: usize) -> f32 {
        sparse_dot(&self.vectors[i], &self.vectors[j]).clamp(0.0, 1.0)
    }
}

/// Dot product of two sparse vectors sorted by term id.
fn sparse_dot(a: &[Term], b: &[Term]) -> f32 {
    let mut dot = 0.0;
    let (mut ai, mut bi) = (0, 0);
    while ai < a.len() && bi < b.len() {
        match a[ai].0.cmp(&b[bi].0) {
            std::cmp::Ordering::Less => ai += 1,
            std::cmp::Ordering::Greater => bi += 1,
            std::cmp::Ordering::Equal => {
                dot += a[ai].1 * b[bi].1;
                ai += 1;
                bi += 1;
            }
        }
    }
    dot
}
