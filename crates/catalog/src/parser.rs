//! Parse catalog fixture files into Rust structs.
//!
//! Both files are JSON arrays using the camelCase field names of the
//! marketplace API, e.g.
//!
//! ```text
//! [{ "id": "m1", "name": "Alice", "stacks": ["react"], "seniority": "SENIOR",
//!    "hourlyRate": 200, "availabilityHoursPerWeek": 12, "rating": 4.8,
//!    "totalReviews": 31, "isApproved": true, "totalMentorships": 14,
//!    "createdAt": "2024-01-10T12:00:00Z", "updatedAt": "2024-06-01T08:30:00Z" }]
//! ```

use crate::error::{CatalogError, Result};
use crate::types::{Company, Mentor};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse a `mentors.json` file
pub fn parse_mentors(path: &Path) -> Result<Vec<Mentor>> {
    parse_json_array(path)
}

/// Parse a `companies.json` file
pub fn parse_companies(path: &Path) -> Result<Vec<Company>> {
    parse_json_array(path)
}

/// Parse mentors from an in-memory JSON string
pub fn parse_mentors_str(json: &str) -> Result<Vec<Mentor>> {
    serde_json::from_str(json).map_err(|source| CatalogError::ParseError {
        file: "<inline>".to_string(),
        source,
    })
}

/// Parse companies from an in-memory JSON string
pub fn parse_companies_str(json: &str) -> Result<Vec<Company>> {
    serde_json::from_str(json).map_err(|source| CatalogError::ParseError {
        file: "<inline>".to_string(),
        source,
    })
}

fn parse_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(err),
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| CatalogError::ParseError {
        file: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Seniority;

    #[test]
    fn test_parse_mentor_with_defaults() {
        let json = r#"[{
            "id": "m1",
            "name": "Alice",
            "seniority": "SENIOR",
            "createdAt": "2024-01-10T12:00:00Z",
            "updatedAt": "2024-06-01T08:30:00Z"
        }]"#;

        let mentors = parse_mentors_str(json).unwrap();
        assert_eq!(mentors.len(), 1);

        let mentor = &mentors[0];
        assert_eq!(mentor.seniority, Seniority::Senior);
        assert!(mentor.stacks.is_empty());
        assert_eq!(mentor.rating, None);
        assert_eq!(mentor.total_reviews, None);
        assert!(!mentor.is_approved);
        assert!(mentor.user_active);
        assert_eq!(mentor.availability_hours_per_week, 0);
    }

    #[test]
    fn test_parse_company() {
        let json = r#"[{
            "id": "c1",
            "companyName": "TechCorp",
            "requiredStacks": ["React", "node"],
            "plannedLearners": 12,
            "createdAt": "2024-01-10T12:00:00Z",
            "updatedAt": "2024-01-10T12:00:00Z"
        }]"#;

        let companies = parse_companies_str(json).unwrap();
        assert_eq!(companies[0].company_name, "TechCorp");
        assert_eq!(companies[0].planned_learners, Some(12));
        // Normalization happens on insert, not on parse
        assert_eq!(companies[0].required_stacks, vec!["React", "node"]);
    }

    #[test]
    fn test_unknown_seniority_is_parse_error() {
        let json = r#"[{
            "id": "m1", "name": "Bob", "seniority": "INTERN",
            "createdAt": "2024-01-10T12:00:00Z", "updatedAt": "2024-01-10T12:00:00Z"
        }]"#;

        let err = parse_mentors_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::ParseError { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_mentors(Path::new("/definitely/not/here/mentors.json")).unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound { .. }));
    }
}
