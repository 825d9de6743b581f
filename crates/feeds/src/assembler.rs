//! # Feed Assembler
//!
//! Orchestrates the ranking engine per feed:
//! 1. Resolve the company (company-driven feeds only)
//! 2. Translate the request into `MentorCriteria`
//! 3. Fetch candidates from the snapshot provider (bounded by a timeout;
//!    independent sub-lists are fetched concurrently)
//! 4. Score, rank and aggregate
//! 5. Shuffle a bounded set for the curated feeds
//!
//! | Feed        | Fetch                     | Score      | Randomized |
//! |-------------|---------------------------|------------|------------|
//! | search      | criteria, recency, 50     | -          | no         |
//! | match       | stack overlap, 100        | match      | no         |
//! | top         | approved, 2 x limit       | reputation | no         |
//! | highlighted | 3 orderings, limit each   | -          | no         |
//! | discover    | top + active + newest     | reputation | yes        |
//! | suggestions | stack overlap, 3 x limit  | match      | yes        |
//!
//! Every request is independent: no state is shared between calls and
//! no score outlives the call that computed it.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, instrument};

use catalog::{Company, Mentor};
use pipeline::ranking::{merge_unique, rank_by_score, top_n};
use pipeline::shuffle::shuffle_and_truncate;
use pipeline::{CompanyFilters, MentorCriteria, ScoreCalculator, ScoredMentor, SearchFilters};
use sources::{MentorOrder, SnapshotProvider};

use crate::config::FeedConfig;
use crate::error::{FeedError, Result};

/// The three independent lists of the highlighted feed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightedMentors {
    pub top_by_reputation: Vec<Mentor>,
    pub most_active: Vec<Mentor>,
    pub newest_approved: Vec<Mentor>,
}

/// Entry point for every mentor feed
#[derive(Clone)]
pub struct FeedAssembler {
    source: Arc<dyn SnapshotProvider>,
    config: FeedConfig,
}

impl FeedAssembler {
    /// Create an assembler with default limits
    pub fn new(source: Arc<dyn SnapshotProvider>) -> Self {
        Self {
            source,
            config: FeedConfig::default(),
        }
    }

    pub fn with_config(mut self, config: FeedConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    // =========================================================================
    // Feeds
    // =========================================================================

    /// Plain filtered search, most recently updated first. Never scored or
    /// randomized.
    #[instrument(skip(self, filters))]
    pub async fn search(&self, filters: &SearchFilters) -> Result<Vec<Mentor>> {
        let criteria = MentorCriteria::for_search(filters);
        let mentors = self
            .fetch_mentors(&criteria, MentorOrder::RecentlyUpdated, self.config.search_limit)
            .await?;

        info!("Search returned {} mentors", mentors.len());
        Ok(mentors)
    }

    /// Best-fitting mentors for a company's required stacks.
    ///
    /// Fails with `NotFound` when the company does not exist.
    #[instrument(skip(self))]
    pub async fn match_for_company(&self, company_id: &str) -> Result<Vec<ScoredMentor>> {
        let start_time = Instant::now();
        let company = self.require_company(company_id).await?;

        let candidates = self
            .fetch_company_candidates(&company, self.config.match_candidate_limit)
            .await?;
        let scored = ScoreCalculator::for_required_stacks(&company.required_stacks)
            .score_all(candidates);
        let ranked = top_n(scored, self.config.match_result_limit);

        info!(
            "Matched {} mentors for company {} in {:.2?}",
            ranked.len(),
            company_id,
            start_time.elapsed()
        );
        Ok(ranked)
    }

    /// Approved mentors ranked by confidence-adjusted reputation.
    #[instrument(skip(self))]
    pub async fn get_top_mentors(&self, limit: usize) -> Result<Vec<ScoredMentor>> {
        let fetch_limit = limit.saturating_mul(self.config.top_fetch_multiplier);
        let candidates = self
            .fetch_mentors(&MentorCriteria::approved(), MentorOrder::Reputation, fetch_limit)
            .await?;

        let ranked = top_n(ScoreCalculator::reputation().score_all(candidates), limit);
        debug!("Top mentors: {} of {} fetched", ranked.len(), fetch_limit);
        Ok(ranked)
    }

    /// Three independent, unmerged lists, each capped at `limit`.
    #[instrument(skip(self))]
    pub async fn get_highlighted_mentors(&self, limit: usize) -> Result<HighlightedMentors> {
        let approved = MentorCriteria::approved();

        let (top_by_reputation, most_active, newest_approved) = tokio::try_join!(
            self.fetch_mentors(&approved, MentorOrder::Reputation, limit),
            self.fetch_mentors(&approved, MentorOrder::MostActive, limit),
            self.fetch_mentors(&approved, MentorOrder::Newest, limit)
        )?;

        Ok(HighlightedMentors {
            top_by_reputation,
            most_active,
            newest_approved,
        })
    }

    /// Shuffled, deduplicated union of the top, most active and newest
    /// approved mentors, truncated to `limit`.
    pub async fn get_discover_mentors(&self, limit: usize) -> Result<Vec<Mentor>> {
        let pool = self.discover_pool(limit).await?;
        let mut rng = rand::rng();
        Ok(shuffle_and_truncate(pool, limit, &mut rng))
    }

    /// `get_discover_mentors` with a caller-supplied random source
    pub async fn get_discover_mentors_with_rng<R: Rng + ?Sized>(
        &self,
        limit: usize,
        rng: &mut R,
    ) -> Result<Vec<Mentor>> {
        let pool = self.discover_pool(limit).await?;
        Ok(shuffle_and_truncate(pool, limit, rng))
    }

    /// Match-scored mentors for a company, sorted, then shuffled as a
    /// whole and truncated to `limit`.
    ///
    /// Fails with `NotFound` when the company does not exist.
    pub async fn get_suggestions_for_company(
        &self,
        company_id: &str,
        limit: usize,
    ) -> Result<Vec<ScoredMentor>> {
        let ranked = self.ranked_suggestions(company_id, limit).await?;
        let mut rng = rand::rng();
        Ok(shuffle_and_truncate(ranked, limit, &mut rng))
    }

    /// `get_suggestions_for_company` with a caller-supplied random source
    pub async fn get_suggestions_for_company_with_rng<R: Rng + ?Sized>(
        &self,
        company_id: &str,
        limit: usize,
        rng: &mut R,
    ) -> Result<Vec<ScoredMentor>> {
        let ranked = self.ranked_suggestions(company_id, limit).await?;
        Ok(shuffle_and_truncate(ranked, limit, rng))
    }

    /// Companies matching `filters`, most recently updated first
    #[instrument(skip(self, filters))]
    pub async fn search_companies(&self, filters: &CompanyFilters) -> Result<Vec<Company>> {
        let fut = self.source.find_companies(filters, self.config.search_limit);
        let companies = self.bounded("find_companies", fut).await??;
        info!("Company search returned {} companies", companies.len());
        Ok(companies)
    }

    // =========================================================================
    // Steps
    // =========================================================================

    #[instrument(skip(self))]
    async fn discover_pool(&self, limit: usize) -> Result<Vec<Mentor>> {
        let approved = MentorCriteria::approved();

        let (top, most_active, newest) = tokio::try_join!(
            self.get_top_mentors(limit),
            self.fetch_mentors(&approved, MentorOrder::MostActive, limit),
            self.fetch_mentors(&approved, MentorOrder::Newest, limit)
        )?;

        let top: Vec<Mentor> = top.into_iter().map(|scored| scored.mentor).collect();
        let pool = merge_unique([top, most_active, newest]);

        debug!("Discover pool holds {} unique mentors", pool.len());
        Ok(pool)
    }

    #[instrument(skip(self))]
    async fn ranked_suggestions(&self, company_id: &str, limit: usize) -> Result<Vec<ScoredMentor>> {
        let company = self.require_company(company_id).await?;

        let fetch_limit = limit.saturating_mul(self.config.suggestion_fetch_multiplier);
        let candidates = self.fetch_company_candidates(&company, fetch_limit).await?;
        let scored = ScoreCalculator::for_required_stacks(&company.required_stacks)
            .score_all(candidates);

        Ok(rank_by_score(scored))
    }

    /// Approved mentors sharing a stack with the company. A company with
    /// no required stacks imposes no stack constraint.
    async fn fetch_company_candidates(&self, company: &Company, limit: usize) -> Result<Vec<Mentor>> {
        let criteria = MentorCriteria::approved().with_any_stack(&company.required_stacks);
        self.fetch_mentors(&criteria, MentorOrder::Unordered, limit).await
    }

    async fn require_company(&self, company_id: &str) -> Result<Company> {
        let fut = self.source.find_company_by_id(company_id);
        self.bounded("find_company_by_id", fut)
            .await??
            .ok_or_else(|| FeedError::NotFound {
                company_id: company_id.to_string(),
            })
    }

    async fn fetch_mentors(
        &self,
        criteria: &MentorCriteria,
        order: MentorOrder,
        limit: usize,
    ) -> Result<Vec<Mentor>> {
        let fut = self.source.find_mentors(criteria, order, limit);
        let mentors = self.bounded("find_mentors", fut).await??;
        Ok(mentors)
    }

    /// Run a provider call under the configured timeout
    async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = T>,
    {
        let after = self.config.fetch_timeout();
        tokio::time::timeout(after, fut)
            .await
            .map_err(|_| FeedError::Timeout { operation, after })
    }
}
