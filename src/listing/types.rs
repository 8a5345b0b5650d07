//! Listing data structures
//!
//! This module defines the three catalog record shapes and the tagged union
//! that carries them through the rest of the crate:
//! - `RentalUnit`: long-term rentals priced as a monthly range
//! - `SaleProperty`: for-sale homes with a single asking price
//! - `Stay`: short-term stays with a nightly rate
//! - `Listing`: the discriminated union over all three
//!
//! Records deserialize from camelCase JSON matching the catalog feed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Identity of a listing within its catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub u32);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ListingId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Pre-resolved geographic position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Inclusive calendar range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `other` lies entirely within this range
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        self.start <= other.start && self.end >= other.end
    }
}

/// Discriminant of the `Listing` union
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Rental,
    Sale,
    Stay,
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rental => write!(f, "rental"),
            Self::Sale => write!(f, "sale"),
            Self::Stay => write!(f, "stay"),
        }
    }
}

/// Long-term rental building or unit
///
/// Location is either a free-form `location` string or an
/// `address` + `city_state_zip` pair; `location` wins when both exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalUnit {
    pub id: ListingId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_state_zip: Option<String>,
    pub price_min: u64,
    pub price_max: u64,
    /// Display text such as "2-3 Beds" or "Studio - 1 Bed"
    pub beds: String,
    /// Numeric floor of `beds`; studios count as zero
    pub beds_min: u32,
    pub baths: String,
    pub pets_allowed: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    pub availability: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub images: Vec<String>,
}

impl RentalUnit {
    /// Location text used for display and query matching
    #[must_use]
    pub fn location_text(&self) -> Cow<'_, str> {
        if let Some(location) = &self.location {
            return Cow::Borrowed(location);
        }

        match (&self.address, &self.city_state_zip) {
            (Some(address), Some(csz)) => Cow::Owned(format!("{address}, {csz}")),
            (Some(only), None) | (None, Some(only)) => Cow::Borrowed(only),
            (None, None) => Cow::Borrowed(""),
        }
    }
}

/// Property type of a home for sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    House,
    Condo,
    Townhouse,
    #[serde(rename = "Multi-Family")]
    MultiFamily,
    Land,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::House => "House",
            Self::Condo => "Condo",
            Self::Townhouse => "Townhouse",
            Self::MultiFamily => "Multi-Family",
            Self::Land => "Land",
        };
        f.write_str(label)
    }
}

/// Market status of a home for sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleStatus {
    Active,
    Pending,
    Contingent,
    Sold,
}

impl fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Contingent => "Contingent",
            Self::Sold => "Sold",
        };
        f.write_str(label)
    }
}

/// Home listed for sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleProperty {
    pub id: ListingId,
    pub address: String,
    pub city_state_zip: String,
    pub price: u64,
    pub beds: u32,
    pub baths: f32,
    pub sqft: u32,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: SaleStatus,
    pub year_built: u16,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub images: Vec<String>,
}

impl SaleProperty {
    #[must_use]
    pub fn location_text(&self) -> String {
        format!("{}, {}", self.address, self.city_state_zip)
    }
}

/// Short-term stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stay {
    pub id: ListingId,
    pub title: String,
    pub location: String,
    pub nightly_rate: u64,
    pub beds: u32,
    pub baths: f32,
    pub guests: u32,
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Bookable window; stays without one are treated as always open
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<DateRange>,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Any catalog record, discriminated by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Listing {
    Rental(RentalUnit),
    Sale(SaleProperty),
    Stay(Stay),
}

impl Listing {
    #[must_use]
    pub const fn kind(&self) -> ListingKind {
        match self {
            Self::Rental(_) => ListingKind::Rental,
            Self::Sale(_) => ListingKind::Sale,
            Self::Stay(_) => ListingKind::Stay,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ListingId {
        match self {
            Self::Rental(unit) => unit.id,
            Self::Sale(property) => property.id,
            Self::Stay(stay) => stay.id,
        }
    }

    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        match self {
            Self::Rental(unit) => unit.coordinates,
            Self::Sale(property) => property.coordinates,
            Self::Stay(stay) => stay.coordinates,
        }
    }

    /// Headline shown on cards and markers
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Rental(unit) => &unit.title,
            Self::Sale(property) => &property.address,
            Self::Stay(stay) => &stay.title,
        }
    }

    /// Normalized categorical descriptors
    ///
    /// Rentals expose their tags, stays their amenities, and sale properties
    /// the tags synthesized by the adapter from status, type and build year.
    #[must_use]
    pub fn descriptors(&self) -> Cow<'_, [String]> {
        match self {
            Self::Rental(unit) => Cow::Borrowed(&unit.tags),
            Self::Sale(property) => Cow::Owned(super::adapter::sale_tags(property)),
            Self::Stay(stay) => Cow::Borrowed(&stay.amenities),
        }
    }
}

impl From<RentalUnit> for Listing {
    fn from(unit: RentalUnit) -> Self {
        Self::Rental(unit)
    }
}

impl From<SaleProperty> for Listing {
    fn from(property: SaleProperty) -> Self {
        Self::Sale(property)
    }
}

impl From<Stay> for Listing {
    fn from(stay: Stay) -> Self {
        Self::Stay(stay)
    }
}
