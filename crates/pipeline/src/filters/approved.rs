//! Eligibility filters.
//!
//! Only approved mentors may appear in any ranked output. Search
//! additionally hides mentors whose user account has been deactivated.

use crate::traits::Filter;
use catalog::Mentor;

/// Keeps mentors whose profile has been approved.
pub struct ApprovedFilter;

impl Filter for ApprovedFilter {
    fn name(&self) -> &str {
        "ApprovedFilter"
    }

    fn keep(&self, mentor: &Mentor) -> bool {
        mentor.is_approved
    }
}

/// Keeps mentors whose owning user account is active.
pub struct ActiveUserFilter;

impl Filter for ActiveUserFilter {
    fn name(&self) -> &str {
        "ActiveUserFilter"
    }

    fn keep(&self, mentor: &Mentor) -> bool {
        mentor.user_active
    }
}
