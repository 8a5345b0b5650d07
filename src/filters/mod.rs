//! Filter module
//!
//! Holds the user's structured constraints and the engine that applies them,
//! together with the free-text query, to a listing collection.
//!
//! # Features
//!
//! - **Typed concerns**: predicates read prices, beds and descriptors through
//!   the `Filterable` trait instead of probing for optional fields
//! - **Opt-in constraints**: a constraint a listing kind cannot express never
//!   excludes that listing
//! - **Stable output**: results keep the catalog order
//!
//! # Examples
//!
//! ```
//! use nestfind::filters::FilterState;
//!
//! let state = FilterState::builder()
//!     .price_range(1500, 3000)
//!     .min_beds(2)
//!     .pets_allowed(true)
//!     .build();
//!
//! assert_eq!(state.active_count(), 3);
//! ```

pub mod engine;
pub mod types;

pub use engine::{Filterable, PriceConcern, filter_listings, matching_indices};
pub use types::{FilterField, FilterState, FilterStateBuilder, PriceRange};
