//! Catalog building and indexing logic.
//!
//! - Parse the fixture files (in parallel)
//! - Build primary maps and the stack secondary index
//! - Validate value ranges

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load a catalog from a directory holding `mentors.json` and
    /// `companies.json`.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading catalog from {:?}", data_dir);

        let mentors_path = data_dir.join("mentors.json");
        let companies_path = data_dir.join("companies.json");

        let (mentors, companies) = rayon::join(
            || parser::parse_mentors(&mentors_path),
            || parser::parse_companies(&companies_path),
        );
        let mentors = mentors?;
        let companies = companies?;

        info!(
            "Parsed {} mentors, {} companies",
            mentors.len(),
            companies.len()
        );

        Self::from_records(mentors, companies)
    }

    /// Build a validated catalog from already-parsed records.
    ///
    /// Fails on the first duplicate id or out-of-range value.
    pub fn from_records(mentors: Vec<Mentor>, companies: Vec<Company>) -> Result<Self> {
        let mut catalog = Catalog::new();

        for mentor in mentors {
            if catalog.mentors.contains_key(&mentor.id) {
                return Err(CatalogError::DuplicateId {
                    entity: "Mentor".to_string(),
                    id: mentor.id,
                });
            }
            catalog.insert_mentor(mentor);
        }

        for company in companies {
            if catalog.companies.contains_key(&company.id) {
                return Err(CatalogError::DuplicateId {
                    entity: "Company".to_string(),
                    id: company.id,
                });
            }
            catalog.insert_company(company);
        }

        catalog.build_stack_index();
        catalog.validate()?;

        Ok(catalog)
    }

    /// Rebuild the stack -> mentor ids index.
    ///
    /// Ids inside each bucket are ascending because the primary map is
    /// iterated in key order.
    pub fn build_stack_index(&mut self) {
        self.stack_index.clear();
        for (mentor_id, mentor) in &self.mentors {
            for stack in &mentor.stacks {
                self.stack_index
                    .entry(stack.clone())
                    .or_default()
                    .push(mentor_id.clone());
            }
        }
    }

    /// Validate value ranges.
    ///
    /// Check that:
    /// - ratings are within [0, 5]
    /// - hourly rates are finite and non-negative
    pub fn validate(&self) -> Result<()> {
        let mentors: Vec<&Mentor> = self.mentors.values().collect();
        mentors.par_iter().try_for_each(|mentor| validate_mentor(mentor))
    }
}

fn validate_mentor(mentor: &Mentor) -> Result<()> {
    if let Some(rating) = mentor.rating {
        if !(0.0..=5.0).contains(&rating) {
            return Err(invalid(mentor, "rating", rating.to_string()));
        }
    }
    if !mentor.hourly_rate.is_finite() || mentor.hourly_rate < 0.0 {
        return Err(invalid(mentor, "hourlyRate", mentor.hourly_rate.to_string()));
    }
    Ok(())
}

fn invalid(mentor: &Mentor, field: &str, value: String) -> CatalogError {
    CatalogError::InvalidValue {
        entity: "Mentor".to_string(),
        id: mentor.id.clone(),
        field: field.to_string(),
        value,
    }
}
