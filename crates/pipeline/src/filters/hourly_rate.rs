//! Filter on hourly rate bounds.

use crate::traits::Filter;
use catalog::Mentor;

/// Keeps mentors whose hourly rate lies in the closed range given.
///
/// Either bound may be absent; with both absent every mentor passes.
pub struct HourlyRateFilter {
    min: Option<f64>,
    max: Option<f64>,
}

impl HourlyRateFilter {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }
}

impl Filter for HourlyRateFilter {
    fn name(&self) -> &str {
        "HourlyRateFilter"
    }

    fn keep(&self, mentor: &Mentor) -> bool {
        let rate = mentor.hourly_rate;
        self.min.is_none_or(|min| rate >= min) && self.max.is_none_or(|max| rate <= max)
    }
}
