//! Feed crate for the mentor marketplace ranking engine.
//!
//! `FeedAssembler` coordinates candidate fetching, scoring, ranking and
//! presentation for each feed the marketplace exposes.

pub mod assembler;
pub mod config;
pub mod error;

pub use assembler::{FeedAssembler, HighlightedMentors};
pub use config::FeedConfig;
pub use error::{FeedError, Result};
