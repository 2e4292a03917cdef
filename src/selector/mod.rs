//! Tier-walk question selection.
//!
//! Selection fixes the tier order Easy, Medium, Hard so a session always
//! progresses in difficulty, then keeps each tier topically coherent with a
//! chained nearest-neighbor walk: the anchor advances to every pick, and the
//! next pick is the unvisited same-tier question most similar to it.
//!
//! The only non-determinism is the first pick per tier, drawn uniformly from
//! the tier's members through the injected [`Rng`], so tests run against a
//! seeded generator.


use rand::Rng;
use tracing::debug;

use crate::difficulty::Difficulty;
use crate::pool::Pool;
use crate::similarity::TfidfIndex;

/// Default global cap on selected questions per session.
pub const DEFAULT_MAX_QUESTIONS: usize = crate::constants::DEFAULT_MAX_QUESTIONS;

/// Similarity of one candidate relative to the current anchor, with masking
/// made explicit: visited and cross-tier candidates are `Excluded` rather
/// than carrying a sentinel score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Affinity {
    /// Candidate is eligible, with this similarity to the anchor.
    Score(f32),
    /// Candidate is visited or outside the current tier.
    Excluded,
}

impl Affinity {
    /// Returns the score for eligible candidates.
    pub fn score(&self) -> Option<f32> {
        match self {
            Affinity::Score(s) => Some(*s),
            Affinity::Excluded => None,
        }
    }
}

/// Walk state for one selection run. Lives only for the duration of a
/// [`select`] call.
struct SelectionState {
    visited: Vec<bool>,
    result: Vec<usize>,
    max_questions: usize,
}

impl SelectionState {
    fn new(pool_len: usize, max_questions: usize) -> Self {
        Self {
            visited: vec![false; pool_len],
            result: Vec::with_capacity(max_questions.min(pool_len)),
            max_questions,
        }
    }

    fn full(&self) -> bool {
        self.result.len() >= self.max_questions
    }

    fn pick(&mut self, index: usize) {
        self.visited[index] = true;
        self.result.push(index);
    }
}

/// Produces the session's ordered question indices.
///
/// The result has no duplicates, is capped at `max_questions` and at the pool
/// size, and preserves tier-block order: all Easy picks precede all Medium
/// picks, which precede all Hard picks. An empty pool yields an empty result.
pub fn select<R: Rng>(
    pool: &Pool,
    index: &TfidfIndex,
    max_questions: usize,
    rng: &mut R,
) -> Vec<usize> {
    debug_assert_eq!(pool.len(), index.len(), "index built over a different pool");

    let mut state = SelectionState::new(pool.len(), max_questions);

    for tier in Difficulty::ORDERED {
        if state.full() {
            break;
        }

        let members = pool.tier_members(tier);
        if members.is_empty() {
            continue;
        }

        let mut anchor = members[rng.gen_range(0..members.len())];
        state.pick(anchor);

        debug!(
            tier = %tier,
            anchor = anchor,
            tier_size = members.len(),
            "Anchored tier walk"
        );

        while !state.full() {
            match nearest_unvisited(pool, index, &state, tier, anchor) {
                Some((next, score)) => {
                    debug!(tier = %tier, from = anchor, to = next, score, "Walk step");
                    state.pick(next);
                    anchor = next;
                }
                // Tier exhausted; advance to the next tier.
                None => break,
            }
        }
    }

    state.result
}

/// Scans the whole pool with masking and returns the argmax-affinity
/// candidate, ties resolving to the lowest index. `None` when every
/// candidate is excluded.
fn nearest_unvisited(
    pool: &Pool,
    index: &TfidfIndex,
    state: &SelectionState,
    tier: Difficulty,
    anchor: usize,
) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;

    for candidate in 0..pool.len() {
        let affinity = affinity_to(pool, index, state, tier, anchor, candidate);
        if let Affinity::Score(score) = affinity {
            // Strictly greater keeps the first maximum.
            if best.is_none_or(|(_, b)| score > b) {
                best = Some((candidate, score));
            }
        }
    }

    best
}

/// Masked similarity of `candidate` relative to `anchor`.
fn affinity_to(
    pool: &Pool,
    index: &TfidfIndex,
    state: &SelectionState,
    tier: Difficulty,
    anchor: usize,
    candidate: usize,
) -> Affinity {
    if state.visited[candidate] {
        return Affinity::Excluded;
    }
    match pool.get(candidate) {
        Some(question) if question.difficulty == tier => {
            Affinity::Score(index.similarity(anchor, candidate))
        }
        _ => Affinity::Excluded,
    }
}
