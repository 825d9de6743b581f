//! Filter on exact seniority tier.

use crate::traits::Filter;
use catalog::{Mentor, Seniority};

/// Keeps mentors at exactly the requested tier.
pub struct SeniorityFilter {
    seniority: Seniority,
}

impl SeniorityFilter {
    pub fn new(seniority: Seniority) -> Self {
        Self { seniority }
    }
}

impl Filter for SeniorityFilter {
    fn name(&self) -> &str {
        "SeniorityFilter"
    }

    fn keep(&self, mentor: &Mentor) -> bool {
        mentor.seniority == self.seniority
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::mentor;

    #[test]
    fn test_exact_match_only() {
        let filter = SeniorityFilter::new(Seniority::Staff);

        let mut staff = mentor("a");
        staff.seniority = Seniority::Staff;

        // test_support mentors are SENIOR
        assert!(filter.keep(&staff));
        assert!(!filter.keep(&mentor("b")));
    }
}
