//! Listing catalog module
//!
//! Rental units, sale properties and short-term stays share an identity and a
//! map position but little else. This module keeps them as one tagged union
//! and provides the adapter that lets a single list card render all three.
//!
//! # Architecture
//!
//! - `types`: record shapes and the `Listing` union
//! - `adapter`: normalization into the rental-shaped card view
//! - `catalog`: the three ordered collections loaded at startup

pub mod adapter;
pub mod catalog;
pub mod error;
pub mod types;

pub use adapter::{PriceUnit, RentalLikeView, adapt, format_price_range, format_usd};
pub use catalog::Catalog;
pub use error::CatalogError;
pub use types::{
    Coordinates, DateRange, Listing, ListingId, ListingKind, PropertyType, RentalUnit,
    SaleProperty, SaleStatus, Stay,
};
