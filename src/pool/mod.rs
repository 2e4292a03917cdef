//! Immutable question pool snapshots.
//!
//! The caller owns filtering: a [`Pool`] is built from the already
//! role/type-filtered `(question, answer)` pairs for one session. Indices are
//! positional and stable for the lifetime of the snapshot; selection results
//! refer back into the pool by these indices, so re-filtering must reproduce
//! the same order or previously returned indices are invalid.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::difficulty::{Difficulty, classify};

/// One candidate question with its paired reference answer.
///
/// `difficulty` is computed at pool construction, never supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Pool-local positional index.
    pub index: usize,
    /// The question text shown to the candidate.
    pub text: String,
    /// Reference answer used for evaluation.
    pub answer: String,
    /// Computed difficulty tier.
    pub difficulty: Difficulty,
}

/// An index-stable, pre-filtered set of candidate questions sharing one
/// (role, question type) combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    role: String,
    question_type: String,
    questions: Vec<Question>,
}

impl Pool {
    /// Builds a pool from `(question, answer)` pairs, classifying each
    /// question's difficulty. Pair order determines indices.
    pub fn new<I, S>(role: &str, question_type: &str, items: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let questions = items
            .into_iter()
            .enumerate()
            .map(|(index, (text, answer))| {
                let text = text.into();
                let difficulty = classify(&text);
                Question {
                    index,
                    text,
                    answer: answer.into(),
                    difficulty,
                }
            })
            .collect();

        Self {
            role: role.to_string(),
            question_type: question_type.to_string(),
            questions,
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn question_type(&self) -> &str {
        &self.question_type
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Returns the question at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Question texts in index order (the similarity index is built over
    /// exactly this sequence).
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|q| q.text.as_str())
    }

    /// Indices of all questions in `tier`, in index order.
    pub fn tier_members(&self, tier: Difficulty) -> Vec<usize> {
        self.questions
            .iter()
            .filter(|q| q.difficulty == tier)
            .map(|q| q.index)
            .collect()
    }
}
