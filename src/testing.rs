//! Testing utilities for nestfind
//!
//! Shared fixtures for unit tests: the reference catalog and a few helpers
//! for asserting on result order.
//!
//! Only available when compiled with `cfg(test)`.

use crate::listing::{Catalog, DateRange, Listing, ListingId};
use chrono::NaiveDate;

/// Reference catalog document: six rentals, four sale properties, four stays
pub const REFERENCE_CATALOG_JSON: &str = include_str!("../tests/fixtures/reference_catalog.json");

/// Parse the reference catalog
///
/// # Panics
/// Panics if the fixture does not parse.
#[must_use]
pub fn reference_catalog() -> Catalog {
    Catalog::from_json_str(REFERENCE_CATALOG_JSON).expect("reference catalog fixture should parse")
}

/// Ids of `listings`, preserving order
#[must_use]
pub fn ids(listings: &[&Listing]) -> Vec<ListingId> {
    listings.iter().map(|listing| listing.id()).collect()
}

/// December 20 through 27, 2026
///
/// # Panics
/// Panics if the hardcoded dates are invalid.
#[must_use]
pub fn december_week() -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2026, 12, 20).expect("valid date"),
        NaiveDate::from_ymd_opt(2026, 12, 27).expect("valid date"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchMode;

    #[test]
    fn test_ids_preserve_order() {
        let catalog = reference_catalog();
        let picked: Vec<&Listing> = catalog
            .listings(SearchMode::Rent)
            .iter()
            .rev()
            .take(2)
            .collect();
        assert_eq!(ids(&picked), vec![ListingId(6), ListingId(5)]);
    }
}
