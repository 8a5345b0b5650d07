//! The three listing collections supplied at startup
//!
//! A catalog is loaded once, in full, and never mutated. Each collection keeps
//! the order of the source document; that order is the order results are shown
//! in.
//!
//! # Document format
//!
//! ```json
//! {
//!   "rentals":    [ { "id": 1, "title": "...", "priceMin": 2450, ... } ],
//!   "properties": [ { "id": 101, "address": "...", "price": 625000, ... } ],
//!   "stays":      [ { "id": 201, "title": "...", "nightlyRate": 185, ... } ]
//! }
//! ```

use super::error::CatalogError;
use super::types::{Listing, RentalUnit, SaleProperty, Stay};
use crate::search::SearchMode;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    rentals: Vec<RentalUnit>,
    #[serde(default)]
    properties: Vec<SaleProperty>,
    #[serde(default)]
    stays: Vec<Stay>,
}

/// Immutable set of rental, sale and stay listings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    rentals: Vec<Listing>,
    properties: Vec<Listing>,
    stays: Vec<Listing>,
}

impl Catalog {
    #[must_use]
    pub fn new(rentals: Vec<RentalUnit>, properties: Vec<SaleProperty>, stays: Vec<Stay>) -> Self {
        Self {
            rentals: rentals.into_iter().map(Listing::Rental).collect(),
            properties: properties.into_iter().map(Listing::Sale).collect(),
            stays: stays.into_iter().map(Listing::Stay).collect(),
        }
    }

    /// Parse a catalog document
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the text is not a valid catalog document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        let catalog = Self::new(document.rentals, document.properties, document.stays);
        tracing::debug!(
            rentals = catalog.rentals.len(),
            properties = catalog.properties.len(),
            stays = catalog.stays.len(),
            "catalog parsed"
        );
        Ok(catalog)
    }

    /// Read and parse a catalog document from disk
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, or
    /// `CatalogError::Parse` if its contents are malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Collection backing the given search mode
    #[must_use]
    pub fn listings(&self, mode: SearchMode) -> &[Listing] {
        match mode {
            SearchMode::Rent => &self.rentals,
            SearchMode::Buy => &self.properties,
            SearchMode::Stays => &self.stays,
        }
    }

    /// Total number of listings across all collections
    #[must_use]
    pub fn len(&self) -> usize {
        self.rentals.len() + self.properties.len() + self.stays.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::types::{ListingId, ListingKind};
    use crate::testing::reference_catalog;
    use std::io::Write;

    #[test]
    fn test_reference_catalog_sizes() {
        let catalog = reference_catalog();
        assert_eq!(catalog.listings(SearchMode::Rent).len(), 6);
        assert_eq!(catalog.listings(SearchMode::Buy).len(), 4);
        assert_eq!(catalog.listings(SearchMode::Stays).len(), 4);
        assert_eq!(catalog.len(), 14);
    }

    #[test]
    fn test_collections_preserve_document_order() {
        let catalog = reference_catalog();
        let ids: Vec<ListingId> = catalog
            .listings(SearchMode::Rent)
            .iter()
            .map(Listing::id)
            .collect();
        assert_eq!(ids, (1..=6).map(ListingId).collect::<Vec<_>>());
    }

    #[test]
    fn test_collections_match_mode_kind() {
        let catalog = reference_catalog();
        for (mode, kind) in [
            (SearchMode::Rent, ListingKind::Rental),
            (SearchMode::Buy, ListingKind::Sale),
            (SearchMode::Stays, ListingKind::Stay),
        ] {
            assert!(catalog.listings(mode).iter().all(|l| l.kind() == kind));
        }
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let catalog = Catalog::from_json_str("{}").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let result = Catalog::from_json_str(r#"{ "rentals": [ { "id": "x" } ] }"#);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(crate::testing::REFERENCE_CATALOG_JSON.as_bytes())
            .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog, reference_catalog());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = Catalog::load("/nonexistent/nestfind/catalog.json");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
