//! Shared data model for bian2context: summaries, errors, configuration and
//! safe navigation over parsed specification documents.

pub mod collate;
pub mod config;
pub mod document;
pub mod error;
pub mod types;

pub use config::SummarizerConfig;
pub use document::Document;
pub use error::{BianError, Result};
pub use types::{DomainSummary, Entity, INVALID_DOCUMENT, UNKNOWN_DOMAIN};

#[cfg(test)]
mod tests;
