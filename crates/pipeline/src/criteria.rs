//! Filter Evaluator: request filters and the selection criteria they
//! translate into.
//!
//! `SearchFilters` is what a caller sends; `MentorCriteria` is the
//! tagged set of optional constraints handed to the data layer. The
//! explicit predicate builder is `MentorCriteria::to_pipeline`, which
//! adds one filter per present constraint.

use crate::error::{FilterError, Result};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::*;
use catalog::{Company, Mentor, Seniority, normalize_stacks};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Upper bound accepted for the availability floor
pub const MAX_AVAILABILITY_FILTER_HOURS: u32 = 60;

/// A mentor search request. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default)]
    pub stacks: Option<Vec<String>>,
    #[serde(default)]
    pub seniority: Option<Seniority>,
    #[serde(default)]
    pub min_hourly_rate: Option<f64>,
    #[serde(default)]
    pub max_hourly_rate: Option<f64>,
    #[serde(default)]
    pub min_availability_hours: Option<u32>,
}

impl SearchFilters {
    /// Boundary validation; the engine itself assumes valid input.
    pub fn validate(&self) -> Result<()> {
        if let Some(stacks) = &self.stacks {
            if stacks.iter().any(|s| s.trim().is_empty()) {
                return Err(invalid("stacks", "stack tags must not be blank"));
            }
        }
        for (field, value) in [
            ("minHourlyRate", self.min_hourly_rate),
            ("maxHourlyRate", self.max_hourly_rate),
        ] {
            if let Some(rate) = value {
                if !rate.is_finite() || rate < 0.0 {
                    return Err(invalid(field, "must be a non-negative number"));
                }
            }
        }
        if let (Some(min), Some(max)) = (self.min_hourly_rate, self.max_hourly_rate) {
            if min > max {
                return Err(invalid("minHourlyRate", "must not exceed maxHourlyRate"));
            }
        }
        if let Some(hours) = self.min_availability_hours {
            if hours > MAX_AVAILABILITY_FILTER_HOURS {
                return Err(invalid("minAvailabilityHours", "must be between 0 and 60"));
            }
        }
        Ok(())
    }
}

/// Candidate-selection constraints for mentors.
///
/// An empty `stacks` list means "no stack constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MentorCriteria {
    pub approved_only: bool,
    pub active_users_only: bool,
    pub stacks: Vec<String>,
    pub seniority: Option<Seniority>,
    pub min_hourly_rate: Option<f64>,
    pub max_hourly_rate: Option<f64>,
    pub min_availability_hours: Option<u32>,
}

impl MentorCriteria {
    /// Every approved mentor
    pub fn approved() -> Self {
        Self {
            approved_only: true,
            ..Self::default()
        }
    }

    /// Criteria for the plain search feed: approved, active account, plus
    /// whatever the request specifies.
    pub fn for_search(filters: &SearchFilters) -> Self {
        Self {
            approved_only: true,
            active_users_only: true,
            stacks: filters
                .stacks
                .as_deref()
                .map(normalize_stacks)
                .unwrap_or_default(),
            seniority: filters.seniority,
            min_hourly_rate: filters.min_hourly_rate,
            max_hourly_rate: filters.max_hourly_rate,
            min_availability_hours: filters.min_availability_hours,
        }
    }

    /// Require overlap with any of `stacks` (case-insensitive)
    pub fn with_any_stack(mut self, stacks: &[String]) -> Self {
        self.stacks = normalize_stacks(stacks);
        self
    }

    /// Build the evaluable predicate for these criteria.
    pub fn to_pipeline(&self) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new();
        if self.approved_only {
            pipeline = pipeline.add_filter(ApprovedFilter);
        }
        if self.active_users_only {
            pipeline = pipeline.add_filter(ActiveUserFilter);
        }
        if !self.stacks.is_empty() {
            pipeline = pipeline.add_filter(StackOverlapFilter::new(&self.stacks));
        }
        if let Some(seniority) = self.seniority {
            pipeline = pipeline.add_filter(SeniorityFilter::new(seniority));
        }
        if self.min_hourly_rate.is_some() || self.max_hourly_rate.is_some() {
            pipeline =
                pipeline.add_filter(HourlyRateFilter::new(self.min_hourly_rate, self.max_hourly_rate));
        }
        if let Some(hours) = self.min_availability_hours {
            pipeline = pipeline.add_filter(AvailabilityFilter::new(hours));
        }
        pipeline
    }
}

/// A company search request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFilters {
    #[serde(default)]
    pub stacks: Option<Vec<String>>,
    #[serde(default)]
    pub min_learners: Option<u32>,
    #[serde(default)]
    pub max_learners: Option<u32>,
}

impl CompanyFilters {
    pub fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min_learners, self.max_learners) {
            if min > max {
                return Err(invalid("minLearners", "must not exceed maxLearners"));
            }
        }
        Ok(())
    }

    /// Whether `company` satisfies every present constraint.
    ///
    /// A company without a planned-learner count fails any learner bound.
    pub fn matches(&self, company: &Company) -> bool {
        if let Some(stacks) = self.stacks.as_deref().filter(|s| !s.is_empty()) {
            let wanted: HashSet<String> = normalize_stacks(stacks).into_iter().collect();
            if !company
                .required_stacks
                .iter()
                .any(|s| wanted.contains(&s.to_lowercase()))
            {
                return false;
            }
        }
        if self.min_learners.is_some() || self.max_learners.is_some() {
            let Some(learners) = company.planned_learners else {
                return false;
            };
            if self.min_learners.is_some_and(|min| learners < min)
                || self.max_learners.is_some_and(|max| learners > max)
            {
                return false;
            }
        }
        true
    }
}

/// Convenience for one-off checks outside a provider
pub fn mentor_matches(criteria: &MentorCriteria, mentor: &Mentor) -> bool {
    criteria.to_pipeline().matches(mentor)
}

fn invalid(field: &str, reason: &str) -> FilterError {
    FilterError::InvalidInput {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{company, mentor, mentor_with_stacks};

    #[test]
    fn test_approved_criteria_has_single_filter() {
        let pipeline = MentorCriteria::approved().to_pipeline();
        assert_eq!(pipeline.filter_names(), vec!["ApprovedFilter"]);
    }

    #[test]
    fn test_absent_fields_add_no_filters() {
        let criteria = MentorCriteria::for_search(&SearchFilters::default());
        assert_eq!(
            criteria.to_pipeline().filter_names(),
            vec!["ApprovedFilter", "ActiveUserFilter"]
        );
    }

    #[test]
    fn test_search_criteria_full() {
        let filters = SearchFilters {
            stacks: Some(vec!["React".to_string(), "GO".to_string()]),
            seniority: Some(Seniority::Senior),
            min_hourly_rate: Some(50.0),
            max_hourly_rate: Some(150.0),
            min_availability_hours: Some(5),
        };
        let criteria = MentorCriteria::for_search(&filters);
        assert_eq!(criteria.stacks, vec!["react", "go"]);

        let mut hit = mentor_with_stacks("a", &["go"]);
        hit.hourly_rate = 100.0;
        assert!(mentor_matches(&criteria, &hit));

        let mut too_expensive = hit.clone();
        too_expensive.hourly_rate = 151.0;
        assert!(!mentor_matches(&criteria, &too_expensive));

        let mut wrong_tier = hit.clone();
        wrong_tier.seniority = Seniority::Junior;
        assert!(!mentor_matches(&criteria, &wrong_tier));

        let mut inactive = hit.clone();
        inactive.user_active = false;
        assert!(!mentor_matches(&criteria, &inactive));
    }

    #[test]
    fn test_unapproved_never_matches() {
        let mut pending = mentor("a");
        pending.is_approved = false;
        assert!(!mentor_matches(&MentorCriteria::approved(), &pending));
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let negative = SearchFilters {
            min_hourly_rate: Some(-1.0),
            ..Default::default()
        };
        assert!(negative.validate().is_err());

        let inverted = SearchFilters {
            min_hourly_rate: Some(200.0),
            max_hourly_rate: Some(100.0),
            ..Default::default()
        };
        assert!(inverted.validate().is_err());

        let too_many_hours = SearchFilters {
            min_availability_hours: Some(61),
            ..Default::default()
        };
        assert!(too_many_hours.validate().is_err());

        let blank = SearchFilters {
            stacks: Some(vec!["  ".to_string()]),
            ..Default::default()
        };
        assert!(matches!(
            blank.validate(),
            Err(FilterError::InvalidInput { .. })
        ));

        assert!(SearchFilters::default().validate().is_ok());
    }

    #[test]
    fn test_search_filters_deserialize_camel_case() {
        let filters: SearchFilters = serde_json::from_str(
            r#"{"stacks":["rust"],"seniority":"STAFF","minAvailabilityHours":8}"#,
        )
        .unwrap();
        assert_eq!(filters.seniority, Some(Seniority::Staff));
        assert_eq!(filters.min_availability_hours, Some(8));
        assert_eq!(filters.max_hourly_rate, None);
    }

    #[test]
    fn test_company_filters() {
        let mut c = company("c1", &["react", "node"]);
        c.planned_learners = Some(20);

        let by_stack = CompanyFilters {
            stacks: Some(vec!["NODE".to_string()]),
            ..Default::default()
        };
        assert!(by_stack.matches(&c));

        let by_learners = CompanyFilters {
            min_learners: Some(10),
            max_learners: Some(20),
            ..Default::default()
        };
        assert!(by_learners.matches(&c));

        let too_few = CompanyFilters {
            min_learners: Some(21),
            ..Default::default()
        };
        assert!(!too_few.matches(&c));

        let mut unknown = company("c2", &["react"]);
        unknown.planned_learners = None;
        assert!(!by_learners.matches(&unknown));
        assert!(CompanyFilters::default().matches(&unknown));

        let inverted = CompanyFilters {
            min_learners: Some(5),
            max_learners: Some(1),
            ..Default::default()
        };
        assert!(inverted.validate().is_err());
    }
}
