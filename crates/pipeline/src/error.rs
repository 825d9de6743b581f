//! Error types for the pipeline crate.

use thiserror::Error;

/// Raised when a request's filter values are malformed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, FilterError>;
