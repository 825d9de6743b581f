//! Errors surfaced by snapshot providers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    /// The backing store could not be reached or answered with a failure
    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Catalog(#[from] catalog::CatalogError),
}

pub type Result<T> = std::result::Result<T, SourceError>;
