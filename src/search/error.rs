//! Search session error types
//!
//! Filtering, hovering and selecting never fail; anomalies there degrade to
//! "no match" or a no-op. The only error is assembling a session without the
//! pieces it needs.

use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// Session builder was missing a required part
    #[error("Failed to build search session: {0}")]
    BuildError(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
