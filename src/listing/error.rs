//! Error types for catalog ingestion
//!
//! Listing records are trusted once loaded; the only failures are reading the
//! catalog document and parsing it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog document is not valid JSON for the expected shape
    #[error("Invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_display_includes_path() {
        let error = CatalogError::Io {
            path: PathBuf::from("/tmp/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let display = error.to_string();
        assert!(display.contains("/tmp/missing.json"));
        assert!(display.contains("not found"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_parse_error_from_serde() {
        let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: CatalogError = serde_error.into();
        assert!(error.to_string().starts_with("Invalid catalog document"));
    }
}
