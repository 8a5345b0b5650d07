//! Nestfind - search, filtering and list/map sync for property listings
//!
//! This library provides the engine behind a listing-discovery interface:
//! one search surface over rental units, homes for sale and short-term
//! stays, with memoized filtering, a cancellable loading phase, hover sync
//! between a result list and a map, and click-through selection.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod filters;
pub mod listing;
pub mod output;
pub mod search;
pub mod sync;
pub mod telemetry;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum NestfindError {
    /// Catalog ingestion error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] listing::CatalogError),
    /// Search session error
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Logging setup error
    #[error("Telemetry error: {0}")]
    TelemetryError(#[from] telemetry::TelemetryError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
