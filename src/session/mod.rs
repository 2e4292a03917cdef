//! Session-level orchestration helpers.
//!
//! The hosting layer owns persistence and transport; this module only turns
//! a pool snapshot into an ordered session plan and offers the score-shaping
//! helpers the host applies around evaluation (percent scaling and the
//! text/non-verbal blend).

pub mod error;


pub use error::CurationError;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::round2;
use crate::difficulty::Difficulty;
use crate::pool::Pool;
use crate::selector::select;
use crate::similarity::TfidfIndex;

/// One planned question of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedQuestion {
    /// 1-based position in the session.
    pub order: usize,
    /// Pool-local question index.
    pub index: usize,
    /// Difficulty of the planned question.
    pub difficulty: Difficulty,
}

/// Ordered question plan for one session, valid against the pool snapshot it
/// was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPlan {
    entries: Vec<PlannedQuestion>,
}

impl SessionPlan {
    pub fn entries(&self) -> &[PlannedQuestion] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pool indices in session order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|e| e.index)
    }
}

/// Builds the similarity index over `pool` and runs the tier walk.
///
/// The one reported curation failure is an empty pool: no session can start
/// from it, and the caller must not treat that as a crash.
pub fn plan_session<R: Rng>(
    pool: &Pool,
    max_questions: usize,
    rng: &mut R,
) -> Result<SessionPlan, CurationError> {
    if pool.is_empty() {
        return Err(CurationError::EmptyPool);
    }

    let index = TfidfIndex::build(pool.texts());
    let selected = select(pool, &index, max_questions, rng);

    // Selection only returns indices it read from this pool snapshot.
    let entries = selected
        .iter()
        .enumerate()
        .filter_map(|(i, &index)| {
            pool.get(index).map(|q| PlannedQuestion {
                order: i + 1,
                index,
                difficulty: q.difficulty,
            })
        })
        .collect::<Vec<_>>();

    info!(
        role = pool.role(),
        question_type = pool.question_type(),
        pool_size = pool.len(),
        planned = entries.len(),
        "Planned session"
    );

    Ok(SessionPlan { entries })
}

/// Scales a unit-interval score to a percentage, two decimals.
pub fn to_percent(score: f32) -> f32 {
    round2(score * 100.0)
}

/// Blends a text score with an external non-verbal sub-score, both on the
/// 0..=100 scale. `nonverbal_weight` is the non-verbal share; the default
/// policy is 60% text / 40% non-verbal.
pub fn blend_with_nonverbal(
    text_percent: f32,
    nonverbal_percent: f32,
    nonverbal_weight: f32,
) -> f32 {
    round2(text_percent * (1.0 - nonverbal_weight) + nonverbal_percent * nonverbal_weight)
}
