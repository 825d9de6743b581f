//! Catalog Source - in-memory snapshot provider
//!
//! Serves `SnapshotProvider` queries from a loaded `Catalog`.
//!
//! ## Algorithm
//! 1. Narrow the candidate ids: when the criteria name stacks, take the
//!    union of the stack-index buckets, otherwise every mentor
//! 2. Evaluate the criteria's filter pipeline on each candidate
//! 3. Sort by the requested order (id ascending as final key)
//! 4. Truncate to the limit

use crate::error::Result;
use crate::ordering::MentorOrder;
use crate::provider::SnapshotProvider;
use async_trait::async_trait;
use catalog::{Catalog, Company, Mentor, MentorId, normalize_stacks};
use pipeline::{CompanyFilters, MentorCriteria};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Snapshot provider backed by a shared, read-only catalog
#[derive(Clone)]
pub struct CatalogSource {
    /// Shared reference to the catalog (read-only, so no Mutex needed)
    catalog: Arc<Catalog>,
}

impl CatalogSource {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mentors tagged with any of `stacks`, in ascending id order
    fn candidates_for_stacks(&self, stacks: &[String]) -> Vec<&Mentor> {
        let ids: BTreeSet<&MentorId> = normalize_stacks(stacks)
            .iter()
            .flat_map(|stack| self.catalog.get_mentors_by_stack(stack))
            .collect();

        ids.into_iter()
            .filter_map(|id| self.catalog.get_mentor(id))
            .collect()
    }

    /// Synchronous core of `find_mentors`
    pub fn select_mentors(
        &self,
        criteria: &MentorCriteria,
        order: MentorOrder,
        limit: usize,
    ) -> Vec<Mentor> {
        let predicate = criteria.to_pipeline();

        let candidates: Vec<&Mentor> = if criteria.stacks.is_empty() {
            self.catalog.mentors().collect()
        } else {
            self.candidates_for_stacks(&criteria.stacks)
        };
        let scanned = candidates.len();

        let mut selected: Vec<Mentor> = candidates
            .into_iter()
            .filter(|mentor| predicate.matches(mentor))
            .cloned()
            .collect();

        order.sort(&mut selected);
        selected.truncate(limit);

        debug!(
            "Selected {} of {} scanned mentors ({} filters)",
            selected.len(),
            scanned,
            predicate.len()
        );
        selected
    }

    /// Synchronous core of `find_companies`
    pub fn select_companies(&self, filters: &CompanyFilters, limit: usize) -> Vec<Company> {
        let mut selected: Vec<Company> = self
            .catalog
            .companies()
            .filter(|company| filters.matches(company))
            .cloned()
            .collect();

        selected.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.id.cmp(&b.id)));
        selected.truncate(limit);
        selected
    }
}

#[async_trait]
impl SnapshotProvider for CatalogSource {
    #[instrument(skip(self, criteria), fields(stacks = criteria.stacks.len()))]
    async fn find_mentors(
        &self,
        criteria: &MentorCriteria,
        order: MentorOrder,
        limit: usize,
    ) -> Result<Vec<Mentor>> {
        Ok(self.select_mentors(criteria, order, limit))
    }

    async fn find_company_by_id(&self, id: &str) -> Result<Option<Company>> {
        Ok(self.catalog.get_company(id).cloned())
    }

    #[instrument(skip(self, filters))]
    async fn find_companies(&self, filters: &CompanyFilters, limit: usize) -> Result<Vec<Company>> {
        Ok(self.select_companies(filters, limit))
    }
}
