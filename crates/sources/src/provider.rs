//! The data-access contract the ranking engine depends on.

use crate::error::Result;
use crate::ordering::MentorOrder;
use async_trait::async_trait;
use catalog::{Company, Mentor};
use pipeline::{CompanyFilters, MentorCriteria};

/// Read-only query interface over mentor and company records.
///
/// Implementations must have no side effects visible to the engine. Any
/// failure is returned as-is; callers do not retry.
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Mentors satisfying `criteria`, sorted by `order`, at most `limit`.
    async fn find_mentors(
        &self,
        criteria: &MentorCriteria,
        order: MentorOrder,
        limit: usize,
    ) -> Result<Vec<Mentor>>;

    /// A single company, or `None` when the id is unknown
    async fn find_company_by_id(&self, id: &str) -> Result<Option<Company>>;

    /// Companies satisfying `filters`, most recently updated first
    async fn find_companies(&self, filters: &CompanyFilters, limit: usize)
        -> Result<Vec<Company>>;
}
