//! Mentor ranking pipeline: selection, scoring, aggregation and
//! presentation.
//!
//! This crate provides:
//! - Filter trait, concrete filters and FilterPipeline (the predicate a
//!   `MentorCriteria` compiles to)
//! - ScoreCalculator for reputation and company match scores
//! - Rank aggregation (stable sort, multi-list dedupe)
//! - Fisher–Yates presentation shuffle with an injectable random source
//!
//! Everything here is pure and synchronous; fetching candidates is the
//! job of a `sources::SnapshotProvider`.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{MentorCriteria, ScoreCalculator, ranking};
//!
//! let criteria = MentorCriteria::approved().with_any_stack(&company.required_stacks);
//! let candidates = criteria.to_pipeline().apply(all_mentors);
//! let scored = ScoreCalculator::for_required_stacks(&company.required_stacks)
//!     .score_all(candidates);
//! let best = ranking::top_n(scored, 10);
//! ```

pub mod error;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod criteria;
pub mod scoring;
pub mod ranking;
pub mod shuffle;

// Re-export main types
pub use error::FilterError;
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use criteria::{CompanyFilters, MentorCriteria, SearchFilters};
pub use scoring::{MatchBreakdown, MentorScore, ScoreCalculator, ScoredMentor};
