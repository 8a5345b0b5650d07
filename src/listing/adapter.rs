//! Card normalization for the shared list renderer
//!
//! The list card was designed around rental units: a price range, bed and
//! bath text, a tag row and an availability label. `adapt` reshapes a sale
//! property into that contract; `From` conversions cover rentals and stays so
//! one renderer handles every kind. Nothing here filters.

use super::types::{Coordinates, Listing, ListingId, RentalUnit, SaleProperty, SaleStatus, Stay};

/// What a listed price is quoted per
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceUnit {
    Month,
    Total,
    Night,
}

/// Rental-shaped display record consumed by the list card renderer
#[derive(Debug, Clone, PartialEq)]
pub struct RentalLikeView {
    pub id: ListingId,
    pub title: String,
    pub location: String,
    pub price_min: u64,
    pub price_max: u64,
    pub price_unit: PriceUnit,
    pub beds: String,
    pub beds_min: u32,
    pub baths: String,
    pub pets_allowed: bool,
    pub tags: Vec<String>,
    pub availability: String,
    pub property_type: Option<String>,
    pub coordinates: Coordinates,
    pub images: Vec<String>,
}

impl RentalLikeView {
    /// Formatted price with its unit suffix, e.g. `$2,450 - $4,200/mo`
    #[must_use]
    pub fn price_label(&self) -> String {
        let amount = format_price_range(self.price_min, self.price_max);
        match self.price_unit {
            PriceUnit::Month => format!("{amount}/mo"),
            PriceUnit::Total => amount,
            PriceUnit::Night => format!("{amount}/night"),
        }
    }
}

/// Reshape a sale property into the rental card contract
///
/// Sale listings carry no pet restriction, so `pets_allowed` is always true.
#[must_use]
pub fn adapt(property: &SaleProperty) -> RentalLikeView {
    RentalLikeView {
        id: property.id,
        title: property.address.clone(),
        location: property.location_text(),
        price_min: property.price,
        price_max: property.price,
        price_unit: PriceUnit::Total,
        beds: property.beds.to_string(),
        beds_min: property.beds,
        baths: format_baths(property.baths),
        pets_allowed: true,
        tags: sale_tags(property),
        availability: availability_label(property.status).to_string(),
        property_type: Some(property.property_type.to_string()),
        coordinates: property.coordinates,
        images: property.images.clone(),
    }
}

/// Three-element tag row synthesized from status, type and build year
#[must_use]
pub fn sale_tags(property: &SaleProperty) -> Vec<String> {
    vec![
        property.status.to_string(),
        property.property_type.to_string(),
        format!("Built {}", property.year_built),
    ]
}

#[must_use]
pub const fn availability_label(status: SaleStatus) -> &'static str {
    match status {
        SaleStatus::Active => "Available Now",
        _ => "Pending",
    }
}

impl From<&RentalUnit> for RentalLikeView {
    fn from(unit: &RentalUnit) -> Self {
        Self {
            id: unit.id,
            title: unit.title.clone(),
            location: unit.location_text().into_owned(),
            price_min: unit.price_min,
            price_max: unit.price_max,
            price_unit: PriceUnit::Month,
            beds: unit.beds.clone(),
            beds_min: unit.beds_min,
            baths: unit.baths.clone(),
            pets_allowed: unit.pets_allowed,
            tags: unit.tags.clone(),
            availability: unit.availability.clone(),
            property_type: None,
            coordinates: unit.coordinates,
            images: unit.images.clone(),
        }
    }
}

impl From<&SaleProperty> for RentalLikeView {
    fn from(property: &SaleProperty) -> Self {
        adapt(property)
    }
}

impl From<&Stay> for RentalLikeView {
    fn from(stay: &Stay) -> Self {
        let pets_allowed = stay
            .amenities
            .iter()
            .any(|a| a.to_lowercase().contains("pet"));

        Self {
            id: stay.id,
            title: stay.title.clone(),
            location: stay.location.clone(),
            price_min: stay.nightly_rate,
            price_max: stay.nightly_rate,
            price_unit: PriceUnit::Night,
            beds: stay.beds.to_string(),
            beds_min: stay.beds,
            baths: format_baths(stay.baths),
            pets_allowed,
            tags: stay.amenities.clone(),
            availability: format!("Sleeps {}", stay.guests),
            property_type: Some(stay.property_type.clone()),
            coordinates: stay.coordinates,
            images: stay.images.clone(),
        }
    }
}

impl From<&Listing> for RentalLikeView {
    fn from(listing: &Listing) -> Self {
        match listing {
            Listing::Rental(unit) => unit.into(),
            Listing::Sale(property) => adapt(property),
            Listing::Stay(stay) => stay.into(),
        }
    }
}

/// `$2,450 - $4,200`, collapsing to a single amount when both ends agree
#[must_use]
pub fn format_price_range(min: u64, max: u64) -> String {
    if min == max {
        format_usd(min)
    } else {
        format!("{} - {}", format_usd(min), format_usd(max))
    }
}

/// Whole-dollar amount with thousands separators
#[must_use]
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn format_baths(baths: f32) -> String {
    if baths.fract() == 0.0 {
        format!("{baths:.0}")
    } else {
        format!("{baths}")
    }
}
