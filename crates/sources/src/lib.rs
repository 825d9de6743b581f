//! # Sources Crate
//!
//! Candidate supply for the ranking engine.
//!
//! ## Components
//!
//! ### SnapshotProvider
//! The read-only contract the engine needs from the data layer:
//! filtered, ordered, bounded mentor lookups and company lookups.
//!
//! ### CatalogSource
//! An in-memory provider over a shared `Catalog`, using its stack index
//! to narrow candidates before evaluating the criteria's filter pipeline.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{CatalogSource, MentorOrder, SnapshotProvider};
//! use pipeline::MentorCriteria;
//!
//! let source = CatalogSource::new(Arc::new(catalog));
//! let newest = source
//!     .find_mentors(&MentorCriteria::approved(), MentorOrder::Newest, 10)
//!     .await?;
//! ```

pub mod error;
pub mod ordering;
pub mod provider;
pub mod catalog_source;

// Re-export commonly used types
pub use error::{Result, SourceError};
pub use ordering::MentorOrder;
pub use provider::SnapshotProvider;
pub use catalog_source::CatalogSource;

#[cfg(test)]
pub(crate) mod test_support {
    use catalog::{Company, Mentor, Seniority};
    use chrono::{TimeZone, Utc};

    pub fn mentor(id: &str) -> Mentor {
        let ts = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        Mentor {
            id: id.to_string(),
            name: format!("Mentor {id}"),
            title: None,
            stacks: vec![],
            seniority: Seniority::Senior,
            hourly_rate: 120.0,
            availability_hours_per_week: 10,
            rating: None,
            total_reviews: None,
            is_approved: true,
            user_active: true,
            total_mentorships: 0,
            created_at: ts,
            updated_at: ts,
        }
    }

    pub fn company(id: &str, stacks: &[&str]) -> Company {
        let ts = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        Company {
            id: id.to_string(),
            company_name: format!("Company {id}"),
            industry: None,
            required_stacks: stacks.iter().map(|s| s.to_string()).collect(),
            planned_learners: None,
            created_at: ts,
            updated_at: ts,
        }
    }
}
