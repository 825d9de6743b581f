//! # Catalog Crate
//!
//! Snapshot types for mentors and companies, plus an in-memory indexed
//! catalog that plays the role of the marketplace's data layer.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Mentor, Company, Seniority, Catalog)
//! - **parser**: Parse JSON fixture files into Rust structs
//! - **index**: Build the stack index and validate loaded data
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_dir(Path::new("data"))?;
//! let react_mentors = catalog.get_mentors_by_stack("react");
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{CatalogError, Result};
pub use types::{
    // Type aliases
    MentorId,
    CompanyId,
    // Core types
    Mentor,
    Company,
    Catalog,
    Seniority,
    normalize_stacks,
};
