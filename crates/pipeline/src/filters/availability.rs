//! Filter on weekly availability.

use crate::traits::Filter;
use catalog::Mentor;

/// Keeps mentors offering at least `min_hours` per week.
pub struct AvailabilityFilter {
    min_hours: u32,
}

impl AvailabilityFilter {
    pub fn new(min_hours: u32) -> Self {
        Self { min_hours }
    }
}

impl Filter for AvailabilityFilter {
    fn name(&self) -> &str {
        "AvailabilityFilter"
    }

    fn keep(&self, mentor: &Mentor) -> bool {
        mentor.availability_hours_per_week >= self.min_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::mentor;

    #[test]
    fn test_floor_is_inclusive() {
        let filter = AvailabilityFilter::new(10);

        let mut exact = mentor("a");
        exact.availability_hours_per_week = 10;
        let mut below = mentor("b");
        below.availability_hours_per_week = 9;

        assert!(filter.keep(&exact));
        assert!(!filter.keep(&below));
    }
}
