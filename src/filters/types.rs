//! Filter data structures and types
//!
//! This module defines the user-chosen constraints applied on top of the
//! free-text query:
//! - `FilterState`: every optional constraint, all unset by default
//! - `PriceRange`: inclusive budget bounds
//! - `FilterField`: names each constraint so modes can declare which they expose
//!
//! `FilterState` is hashable so it can key the result memo.

use crate::listing::DateRange;
use serde::{Deserialize, Serialize};

/// Inclusive price bounds
///
/// `min > max` is accepted as-is; such a range matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    #[must_use]
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Whether a listing priced across `[low, high]` overlaps this budget
    #[must_use]
    pub const fn overlaps(&self, low: u64, high: u64) -> bool {
        low <= self.max && high >= self.min
    }

    /// Whether a single price falls inside this budget
    #[must_use]
    pub const fn contains(&self, price: u64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Individual constraint in a `FilterState`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Price,
    Beds,
    Pets,
    Amenities,
    PropertyType,
    Guests,
    Dates,
}

/// Current set of constraints independent of the text query
///
/// Each field constrains only listings whose kind exposes the matching
/// concern; everything else passes that field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub price_range: Option<PriceRange>,

    #[serde(default)]
    pub min_beds: Option<u32>,

    /// Only `Some(true)` constrains; `Some(false)` means "don't care"
    #[serde(default)]
    pub pets_allowed: Option<bool>,

    /// Every entry must appear (case-insensitive substring) among a listing's descriptors
    #[serde(default)]
    pub amenities: Option<Vec<String>>,

    /// Acceptable property types; empty means unconstrained
    #[serde(default)]
    pub property_type: Option<Vec<String>>,

    #[serde(default)]
    pub min_guests: Option<u32>,

    #[serde(default)]
    pub date_range: Option<DateRange>,
}

impl FilterState {
    /// Create a new filter state builder
    #[must_use]
    pub fn builder() -> FilterStateBuilder {
        FilterStateBuilder::default()
    }

    /// Whether no constraint is set
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Number of constraints currently set, for the filter badge
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_fields().len()
    }

    /// Constraints currently set
    #[must_use]
    pub fn active_fields(&self) -> Vec<FilterField> {
        let mut fields = Vec::new();
        if self.price_range.is_some() {
            fields.push(FilterField::Price);
        }
        if self.min_beds.is_some() {
            fields.push(FilterField::Beds);
        }
        if self.pets_allowed == Some(true) {
            fields.push(FilterField::Pets);
        }
        if self.amenities.as_ref().is_some_and(|a| !a.is_empty()) {
            fields.push(FilterField::Amenities);
        }
        if self.property_type.as_ref().is_some_and(|t| !t.is_empty()) {
            fields.push(FilterField::PropertyType);
        }
        if self.min_guests.is_some() {
            fields.push(FilterField::Guests);
        }
        if self.date_range.is_some() {
            fields.push(FilterField::Dates);
        }
        fields
    }

    /// Drop every constraint
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Builder for `FilterState`
#[derive(Debug, Clone, Default)]
pub struct FilterStateBuilder {
    state: FilterState,
}

impl FilterStateBuilder {
    #[must_use]
    pub const fn price_range(mut self, min: u64, max: u64) -> Self {
        self.state.price_range = Some(PriceRange::new(min, max));
        self
    }

    #[must_use]
    pub const fn min_beds(mut self, beds: u32) -> Self {
        self.state.min_beds = Some(beds);
        self
    }

    #[must_use]
    pub const fn pets_allowed(mut self, allowed: bool) -> Self {
        self.state.pets_allowed = Some(allowed);
        self
    }

    /// Add a single required amenity
    #[must_use]
    pub fn amenity(mut self, amenity: impl Into<String>) -> Self {
        self.state
            .amenities
            .get_or_insert_with(Vec::new)
            .push(amenity.into());
        self
    }

    #[must_use]
    pub fn amenities(mut self, amenities: Vec<String>) -> Self {
        self.state.amenities = Some(amenities);
        self
    }

    /// Add a single acceptable property type
    #[must_use]
    pub fn property_type(mut self, property_type: impl Into<String>) -> Self {
        self.state
            .property_type
            .get_or_insert_with(Vec::new)
            .push(property_type.into());
        self
    }

    #[must_use]
    pub fn property_types(mut self, types: Vec<String>) -> Self {
        self.state.property_type = Some(types);
        self
    }

    #[must_use]
    pub const fn min_guests(mut self, guests: u32) -> Self {
        self.state.min_guests = Some(guests);
        self
    }

    #[must_use]
    pub const fn date_range(mut self, range: DateRange) -> Self {
        self.state.date_range = Some(range);
        self
    }

    #[must_use]
    pub fn build(self) -> FilterState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_default_is_unconstrained() {
        let state = FilterState::default();
        assert!(state.is_default());
        assert_eq!(state.active_count(), 0);
    }

    #[test]
    fn test_price_range_overlap() {
        let budget = PriceRange::new(4000, 99_999);
        assert!(budget.overlaps(2450, 4200));
        assert!(budget.overlaps(4000, 4000));
        assert!(!budget.overlaps(1650, 2100));
    }

    #[test]
    fn test_price_range_containment_is_inclusive() {
        let budget = PriceRange::new(0, 500_000);
        assert!(budget.contains(0));
        assert!(budget.contains(500_000));
        assert!(!budget.contains(625_000));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let inverted = PriceRange::new(5000, 1000);
        assert!(!inverted.contains(3000));
        assert!(!inverted.overlaps(2000, 4000));
    }

    #[test]
    fn test_builder_accumulates_lists() {
        let state = FilterState::builder()
            .amenity("Gym")
            .amenity("Parking")
            .property_type("Condo")
            .build();

        assert_eq!(state.amenities, Some(vec!["Gym".into(), "Parking".into()]));
        assert_eq!(state.property_type, Some(vec!["Condo".into()]));
    }

    #[test]
    fn test_active_fields_ignore_noop_values() {
        let state = FilterState::builder()
            .pets_allowed(false)
            .amenities(vec![])
            .min_beds(2)
            .build();

        assert_eq!(state.active_fields(), vec![FilterField::Beds]);
    }

    #[test]
    fn test_active_count_all_fields() {
        let dates = DateRange::new(
            NaiveDate::from_ymd_opt(2026, 12, 20).unwrap(),
            NaiveDate::from_ymd_opt(2026, 12, 27).unwrap(),
        );
        let state = FilterState::builder()
            .price_range(0, 500)
            .min_beds(1)
            .pets_allowed(true)
            .amenity("Wifi")
            .property_type("Cabin")
            .min_guests(2)
            .date_range(dates)
            .build();

        assert_eq!(state.active_count(), 7);
    }

    #[test]
    fn test_reset_restores_default() {
        let mut state = FilterState::builder().price_range(0, 1500).build();
        state.reset();
        assert!(state.is_default());
    }
}
