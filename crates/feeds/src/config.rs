//! Feed limits and timeouts.
//!
//! All fields default, so a config file only needs the values it changes:
//!
//! ```text
//! { "searchLimit": 25, "fetchTimeoutMs": 2000 }
//! ```

use crate::error::{FeedError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedConfig {
    /// Hard cap for plain search results
    pub search_limit: usize,
    /// Candidates fetched before match scoring
    pub match_candidate_limit: usize,
    /// Results returned by the match feed
    pub match_result_limit: usize,
    /// `top(limit)` fetches `limit * top_fetch_multiplier` candidates
    pub top_fetch_multiplier: usize,
    /// `suggestions(limit)` fetches `limit * suggestion_fetch_multiplier`
    pub suggestion_fetch_multiplier: usize,
    /// Upper bound for every provider call
    pub fetch_timeout_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            search_limit: 50,
            match_candidate_limit: 100,
            match_result_limit: 10,
            top_fetch_multiplier: 2,
            suggestion_fetch_multiplier: 3,
            fetch_timeout_ms: 5_000,
        }
    }
}

impl FeedConfig {
    /// Read a JSON config file and validate it
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| FeedError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: FeedConfig =
            serde_json::from_str(raw).map_err(|e| FeedError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_fetch_multiplier == 0 || self.suggestion_fetch_multiplier == 0 {
            return Err(FeedError::Config(
                "fetch multipliers must be at least 1".to_string(),
            ));
        }
        if self.fetch_timeout_ms == 0 {
            return Err(FeedError::Config("fetchTimeoutMs must be positive".to_string()));
        }
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    pub fn with_match_limits(mut self, candidates: usize, results: usize) -> Self {
        self.match_candidate_limit = candidates;
        self.match_result_limit = results;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout_ms = timeout.as_millis() as u64;
        self
    }
}
