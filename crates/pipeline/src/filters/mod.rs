//! Filter implementations for mentor selection.
//!
//! Each filter covers one dimension of a `MentorCriteria`. A missing
//! criterion simply means its filter is never added to the pipeline.

pub mod approved;
pub mod availability;
pub mod hourly_rate;
pub mod seniority;
pub mod stack_overlap;

// Re-export for convenience
pub use approved::{ActiveUserFilter, ApprovedFilter};
pub use availability::AvailabilityFilter;
pub use hourly_rate::HourlyRateFilter;
pub use seniority::SeniorityFilter;
pub use stack_overlap::StackOverlapFilter;
