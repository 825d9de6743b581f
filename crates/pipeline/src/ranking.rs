//! Rank Aggregator.
//!
//! - Single-list ranking: stable sort, highest score first. Equal scores
//!   keep candidate order, which providers deliver in ascending id order.
//! - Multi-list aggregation: concatenate independently ranked lists and
//!   drop repeated mentor ids, keeping the first occurrence.

use crate::scoring::ScoredMentor;
use catalog::{Mentor, MentorId};
use std::collections::HashSet;

/// Sort descending by score. Stable.
pub fn rank_by_score(mut scored: Vec<ScoredMentor>) -> Vec<ScoredMentor> {
    scored.sort_by(|a, b| b.score.value().total_cmp(&a.score.value()));
    scored
}

/// Rank and keep the best `limit`
pub fn top_n(scored: Vec<ScoredMentor>, limit: usize) -> Vec<ScoredMentor> {
    let mut ranked = rank_by_score(scored);
    ranked.truncate(limit);
    ranked
}

/// Concatenate `lists` in order and remove duplicate ids.
///
/// ## Algorithm
/// Walk every list front to back, tracking seen ids in a HashSet; a
/// mentor is emitted only the first time its id is seen.
pub fn merge_unique<I>(lists: I) -> Vec<Mentor>
where
    I: IntoIterator<Item = Vec<Mentor>>,
{
    let mut seen: HashSet<MentorId> = HashSet::new();
    let mut merged = Vec::new();

    for list in lists {
        for mentor in list {
            if seen.insert(mentor.id.clone()) {
                merged.push(mentor);
            }
        }
    }

    merged
}
