//! Errors returned by feed entry points.

use sources::SourceError;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    /// The referenced company does not exist. A client error; not retried.
    #[error("Company {company_id} not found")]
    NotFound { company_id: String },

    /// The snapshot provider failed; propagated unchanged
    #[error(transparent)]
    Source(#[from] SourceError),

    /// A provider call exceeded the configured fetch timeout
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl FeedError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FeedError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
