//! Filter on technology-stack overlap.
//!
//! "Has some" semantics: a mentor passes when at least one of its stacks
//! is among the requested ones. Comparison is case-insensitive.

use crate::traits::Filter;
use catalog::{Mentor, normalize_stacks};
use std::collections::HashSet;

/// Keeps mentors sharing at least one stack with the requested set.
///
/// An empty requested set imposes no constraint.
pub struct StackOverlapFilter {
    stacks: HashSet<String>,
}

impl StackOverlapFilter {
    pub fn new(stacks: &[String]) -> Self {
        Self {
            stacks: normalize_stacks(stacks).into_iter().collect(),
        }
    }
}

impl Filter for StackOverlapFilter {
    fn name(&self) -> &str {
        "StackOverlapFilter"
    }

    fn keep(&self, mentor: &Mentor) -> bool {
        if self.stacks.is_empty() {
            return true;
        }
        mentor
            .stacks
            .iter()
            .any(|s| self.stacks.contains(&s.to_lowercase()))
    }
}
