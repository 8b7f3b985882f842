//! Error types for the search engine.

use thiserror::Error;

/// Errors that can occur when setting up search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The stemmer language name is not recognized.
    #[error("unknown stemmer language: {0}")]
    InvalidLanguage(String),
}
