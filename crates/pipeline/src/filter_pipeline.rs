//! The FilterPipeline chains mentor filters.
//!
//! A pipeline is the evaluable form of a `MentorCriteria`: one filter per
//! constraint that is actually present. An empty pipeline accepts every
//! mentor.

use crate::traits::Filter;
use catalog::Mentor;
use tracing;

/// Chains multiple filters together using the builder pattern.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ApprovedFilter)
///     .add_filter(StackOverlapFilter::new(&["react".to_string()]))
///     .add_filter(AvailabilityFilter::new(10));
///
/// let kept = pipeline.apply(mentors);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// True iff every filter keeps `mentor`. Short-circuits on the first
    /// rejecting filter.
    pub fn matches(&self, mentor: &Mentor) -> bool {
        self.filters.iter().all(|filter| filter.keep(mentor))
    }

    /// Apply all filters in sequence, logging counts per stage.
    pub fn apply(&self, mentors: Vec<Mentor>) -> Vec<Mentor> {
        let mut current = mentors;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} ({} -> {})",
                filter.name(),
                before,
                current.len()
            );
        }
        current
    }

    /// Names of the filters in evaluation order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
