//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to mentor snapshots.

use catalog::Mentor;

/// Core trait for a single mentor-selection constraint.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a pipeline to be evaluated from any provider thread
/// - `keep` is a pure predicate; `apply` takes ownership of the Vec and
///   returns the retained mentors without cloning
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `mentor` satisfies this constraint
    fn keep(&self, mentor: &Mentor) -> bool;

    /// Apply this filter to a set of mentors, preserving their order.
    fn apply(&self, mentors: Vec<Mentor>) -> Vec<Mentor> {
        mentors.into_iter().filter(|m| self.keep(m)).collect()
    }
}
