//! Listing filtering
//!
//! `filter_listings` applies the text query and every `FilterState` constraint
//! as one conjunction, keeping the input order. Each predicate asks the
//! listing for a typed concern (`PriceConcern`, guest capacity, ...) and a
//! listing kind without that concern passes the predicate.
//!
//! The predicates are written against the [`Filterable`] trait so the same
//! rules apply to raw [`Listing`] values and to adapted [`RentalLikeView`]
//! cards.
//!
//! ```ignore
//! use nestfind::filters::{FilterState, filter_listings};
//! use nestfind::search::SearchMode;
//!
//! let state = FilterState::builder().min_beds(2).build();
//! let shown = filter_listings(SearchMode::Rent, catalog.listings(SearchMode::Rent), "", &state);
//! ```

use super::types::{FilterField, FilterState};
use crate::listing::{DateRange, Listing, RentalLikeView, format_price_range};
use crate::search::SearchMode;
use std::borrow::Cow;

/// How a listing is priced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceConcern {
    /// Advertised as a span; matches a budget it overlaps
    Range { min: u64, max: u64 },
    /// Single figure; matches a budget that contains it
    Point(u64),
}

/// Typed access to the concerns filter predicates evaluate
pub trait Filterable {
    fn price(&self) -> PriceConcern;

    /// Numeric bedroom floor
    fn beds_floor(&self) -> u32;

    /// Explicit pet policy, if the record states one
    fn explicit_pets(&self) -> Option<bool>;

    /// Normalized categorical descriptors (tags or amenities)
    fn descriptors(&self) -> Cow<'_, [String]>;

    fn guest_capacity(&self) -> Option<u32> {
        None
    }

    fn property_type(&self) -> Option<Cow<'_, str>> {
        None
    }

    fn availability(&self) -> Option<DateRange> {
        None
    }

    /// Text fields searched by the query, in priority order
    fn search_text(&self) -> Vec<Cow<'_, str>>;
}

impl Filterable for Listing {
    fn price(&self) -> PriceConcern {
        match self {
            Self::Rental(unit) => PriceConcern::Range {
                min: unit.price_min,
                max: unit.price_max,
            },
            Self::Sale(property) => PriceConcern::Point(property.price),
            Self::Stay(stay) => PriceConcern::Point(stay.nightly_rate),
        }
    }

    fn beds_floor(&self) -> u32 {
        match self {
            Self::Rental(unit) => unit.beds_min,
            Self::Sale(property) => property.beds,
            Self::Stay(stay) => stay.beds,
        }
    }

    fn explicit_pets(&self) -> Option<bool> {
        match self {
            Self::Rental(unit) => Some(unit.pets_allowed),
            // Ownership carries no landlord pet restriction
            Self::Sale(_) => Some(true),
            Self::Stay(_) => None,
        }
    }

    fn descriptors(&self) -> Cow<'_, [String]> {
        Listing::descriptors(self)
    }

    fn guest_capacity(&self) -> Option<u32> {
        match self {
            Self::Stay(stay) => Some(stay.guests),
            _ => None,
        }
    }

    fn property_type(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Rental(_) => None,
            Self::Sale(property) => Some(Cow::Owned(property.property_type.to_string())),
            Self::Stay(stay) => Some(Cow::Borrowed(&stay.property_type)),
        }
    }

    fn availability(&self) -> Option<DateRange> {
        match self {
            Self::Stay(stay) => stay.available,
            _ => None,
        }
    }

    fn search_text(&self) -> Vec<Cow<'_, str>> {
        match self {
            Self::Rental(unit) => vec![
                unit.location_text(),
                Cow::Owned(format_price_range(unit.price_min, unit.price_max)),
            ],
            Self::Sale(property) => vec![
                Cow::Borrowed(property.address.as_str()),
                Cow::Borrowed(property.city_state_zip.as_str()),
            ],
            Self::Stay(stay) => vec![
                Cow::Borrowed(stay.location.as_str()),
                Cow::Borrowed(stay.title.as_str()),
            ],
        }
    }
}

impl Filterable for RentalLikeView {
    fn price(&self) -> PriceConcern {
        PriceConcern::Range {
            min: self.price_min,
            max: self.price_max,
        }
    }

    fn beds_floor(&self) -> u32 {
        self.beds_min
    }

    fn explicit_pets(&self) -> Option<bool> {
        Some(self.pets_allowed)
    }

    fn descriptors(&self) -> Cow<'_, [String]> {
        Cow::Borrowed(&self.tags)
    }

    fn property_type(&self) -> Option<Cow<'_, str>> {
        self.property_type.as_deref().map(Cow::Borrowed)
    }

    fn search_text(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.location.as_str()),
            Cow::Owned(format_price_range(self.price_min, self.price_max)),
        ]
    }
}

/// Filter `entities` by query and constraints, preserving order
#[must_use]
pub fn filter_listings<'a, T: Filterable>(
    mode: SearchMode,
    entities: &'a [T],
    query: &str,
    state: &FilterState,
) -> Vec<&'a T> {
    matching_indices(mode, entities, query, state)
        .into_iter()
        .map(|idx| &entities[idx])
        .collect()
}

/// Positions in `entities` that satisfy the query and constraints, ascending
#[must_use]
pub fn matching_indices<T: Filterable>(
    mode: SearchMode,
    entities: &[T],
    query: &str,
    state: &FilterState,
) -> Vec<usize> {
    let needle = query.to_lowercase();
    let amenities: Vec<String> = state
        .amenities
        .iter()
        .flatten()
        .map(|a| a.to_lowercase())
        .collect();

    entities
        .iter()
        .enumerate()
        .filter(|(_, entity)| {
            matches_query(*entity, &needle)
                && matches_filters(mode, *entity, state, &amenities)
        })
        .map(|(idx, _)| idx)
        .collect()
}

/// Whether an entity matches the (already lower-cased) query
fn matches_query<T: Filterable>(entity: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    entity
        .search_text()
        .iter()
        .any(|text| text.to_lowercase().contains(needle))
}

fn matches_filters<T: Filterable>(
    mode: SearchMode,
    entity: &T,
    state: &FilterState,
    amenities: &[String],
) -> bool {
    let applies = |field| mode.supports(field);

    if applies(FilterField::Price)
        && let Some(budget) = state.price_range
    {
        let within = match entity.price() {
            PriceConcern::Range { min, max } => budget.overlaps(min, max),
            PriceConcern::Point(price) => budget.contains(price),
        };
        if !within {
            return false;
        }
    }

    if applies(FilterField::Guests)
        && let Some(min_guests) = state.min_guests
        && let Some(capacity) = entity.guest_capacity()
        && capacity < min_guests
    {
        return false;
    }

    if applies(FilterField::PropertyType)
        && let Some(accepted) = state.property_type.as_ref().filter(|t| !t.is_empty())
        && let Some(property_type) = entity.property_type()
        && !accepted
            .iter()
            .any(|t| t.eq_ignore_ascii_case(&property_type))
    {
        return false;
    }

    if applies(FilterField::Beds)
        && let Some(min_beds) = state.min_beds
        && entity.beds_floor() < min_beds
    {
        return false;
    }

    if applies(FilterField::Pets) && state.pets_allowed == Some(true) && !allows_pets(entity) {
        return false;
    }

    if applies(FilterField::Amenities) && !amenities.is_empty() {
        let descriptors: Vec<String> = entity
            .descriptors()
            .iter()
            .map(|d| d.to_lowercase())
            .collect();
        let all_found = amenities
            .iter()
            .all(|wanted| descriptors.iter().any(|d| d.contains(wanted.as_str())));
        if !all_found {
            return false;
        }
    }

    if applies(FilterField::Dates)
        && let Some(requested) = state.date_range
        && let Some(window) = entity.availability()
        && !window.covers(&requested)
    {
        return false;
    }

    true
}

/// Explicit pet policy, falling back to a "pet" mention in the descriptors
fn allows_pets<T: Filterable>(entity: &T) -> bool {
    match entity.explicit_pets() {
        Some(allowed) => allowed,
        None => entity
            .descriptors()
            .iter()
            .any(|d| d.to_lowercase().contains("pet")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{ListingId, adapt};
    use crate::testing::{december_week, ids, reference_catalog};

    fn run(mode: SearchMode, query: &str, state: &FilterState) -> Vec<ListingId> {
        let catalog = reference_catalog();
        ids(&filter_listings(mode, catalog.listings(mode), query, state))
    }

    #[test]
    fn test_identity_for_every_mode() {
        let catalog = reference_catalog();
        for mode in SearchMode::ALL {
            let all = catalog.listings(mode);
            let filtered = filter_listings(mode, all, "", &FilterState::default());
            let expected: Vec<&Listing> = all.iter().collect();
            assert_eq!(filtered, expected, "identity failed for {mode}");
        }
    }

    #[test]
    fn test_default_rentals_keep_reference_order() {
        let result = run(SearchMode::Rent, "", &FilterState::default());
        assert_eq!(result, ids_of(&[1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_rental_price_overlap() {
        let state = FilterState::builder().price_range(4000, 99_999).build();
        assert_eq!(run(SearchMode::Rent, "", &state), ids_of(&[1, 3, 6]));
    }

    #[test]
    fn test_stay_nightly_rate_containment() {
        let state = FilterState::builder().price_range(0, 200).build();
        assert_eq!(run(SearchMode::Stays, "", &state), ids_of(&[201]));
    }

    #[test]
    fn test_sale_price_containment() {
        let state = FilterState::builder().price_range(0, 500_000).build();
        let result = run(SearchMode::Buy, "", &state);
        assert_eq!(result, ids_of(&[102]));
        assert!(!result.contains(&ListingId(101)));
    }

    #[test]
    fn test_inverted_price_range_excludes_everything() {
        let state = FilterState::builder().price_range(5000, 1000).build();
        assert!(run(SearchMode::Rent, "", &state).is_empty());
    }

    #[test]
    fn test_beds_floor() {
        let state = FilterState::builder().min_beds(2).build();
        assert_eq!(run(SearchMode::Rent, "", &state), ids_of(&[1, 3, 5, 6]));
    }

    #[test]
    fn test_beds_floor_for_sales() {
        let state = FilterState::builder().min_beds(4).build();
        assert_eq!(run(SearchMode::Buy, "", &state), ids_of(&[104]));
    }

    #[test]
    fn test_rental_pets_use_explicit_flag() {
        let state = FilterState::builder().pets_allowed(true).build();
        assert_eq!(run(SearchMode::Rent, "", &state), ids_of(&[1, 3, 5]));
    }

    #[test]
    fn test_stay_pets_inferred_from_amenities() {
        let state = FilterState::builder().pets_allowed(true).build();
        assert_eq!(run(SearchMode::Stays, "", &state), ids_of(&[201, 203]));
    }

    #[test]
    fn test_pets_false_does_not_constrain() {
        let state = FilterState::builder().pets_allowed(false).build();
        assert_eq!(run(SearchMode::Rent, "", &state).len(), 6);
    }

    #[test]
    fn test_guests_filter_only_touches_stays() {
        let state = FilterState::builder().min_guests(5).build();
        assert_eq!(run(SearchMode::Stays, "", &state), ids_of(&[203, 204]));
        assert_eq!(run(SearchMode::Rent, "", &state).len(), 6);
    }

    #[test]
    fn test_guests_filter_skips_listings_without_capacity() {
        // Rentals have no guest concern even when evaluated under stays semantics
        let catalog = reference_catalog();
        let state = FilterState::builder().min_guests(50).build();
        let rentals = catalog.listings(SearchMode::Rent);
        assert_eq!(filter_listings(SearchMode::Stays, rentals, "", &state).len(), 6);
    }

    #[test]
    fn test_property_type_membership() {
        let state = FilterState::builder()
            .property_type("Condo")
            .property_type("townhouse")
            .build();
        assert_eq!(run(SearchMode::Buy, "", &state), ids_of(&[102, 103]));
    }

    #[test]
    fn test_property_type_for_stays() {
        let state = FilterState::builder().property_type("Cabin").build();
        assert_eq!(run(SearchMode::Stays, "", &state), ids_of(&[201]));
    }

    #[test]
    fn test_empty_property_type_list_is_unconstrained() {
        let state = FilterState::builder().property_types(vec![]).build();
        assert_eq!(run(SearchMode::Buy, "", &state).len(), 4);
    }

    #[test]
    fn test_amenities_require_every_entry() {
        let state = FilterState::builder()
            .amenity("laundry")
            .amenity("gym")
            .build();
        assert_eq!(run(SearchMode::Rent, "", &state), ids_of(&[1]));
    }

    #[test]
    fn test_amenities_against_empty_descriptors_fail() {
        let mut catalog_unit = match reference_catalog().listings(SearchMode::Rent)[0].clone() {
            Listing::Rental(unit) => unit,
            other => panic!("expected rental, got {other:?}"),
        };
        catalog_unit.tags.clear();
        let listings = vec![Listing::Rental(catalog_unit)];

        let state = FilterState::builder().amenity("Gym").build();
        assert!(filter_listings(SearchMode::Rent, &listings, "", &state).is_empty());

        let empty = FilterState::builder().amenities(vec![]).build();
        assert_eq!(filter_listings(SearchMode::Rent, &listings, "", &empty).len(), 1);
    }

    #[test]
    fn test_sale_amenities_match_synthesized_tags() {
        let state = FilterState::builder().amenity("built 20").build();
        assert_eq!(run(SearchMode::Buy, "", &state), ids_of(&[102, 103]));
    }

    #[test]
    fn test_date_range_uses_stay_windows() {
        let state = FilterState::builder().date_range(december_week()).build();
        assert_eq!(run(SearchMode::Stays, "", &state), ids_of(&[201, 202, 204]));
    }

    #[test]
    fn test_query_matches_location_text() {
        assert_eq!(
            run(SearchMode::Rent, "SEATTLE", &FilterState::default()),
            ids_of(&[1, 2, 3, 4, 5])
        );
        assert_eq!(
            run(SearchMode::Rent, "kirkland", &FilterState::default()),
            ids_of(&[6])
        );
    }

    #[test]
    fn test_query_matches_rental_price_string() {
        assert_eq!(
            run(SearchMode::Rent, "2,450", &FilterState::default()),
            ids_of(&[1])
        );
    }

    #[test]
    fn test_query_ignores_rental_titles() {
        assert!(run(SearchMode::Rent, "lofts", &FilterState::default()).is_empty());
    }

    #[test]
    fn test_query_matches_stay_titles() {
        assert_eq!(
            run(SearchMode::Stays, "cabin", &FilterState::default()),
            ids_of(&[201])
        );
    }

    #[test]
    fn test_query_matches_sale_city_state_zip() {
        assert_eq!(
            run(SearchMode::Buy, "98103", &FilterState::default()),
            ids_of(&[103])
        );
    }

    #[test]
    fn test_predicates_combine_as_conjunction() {
        let state = FilterState::builder()
            .min_beds(2)
            .pets_allowed(true)
            .price_range(0, 3000)
            .build();
        assert_eq!(run(SearchMode::Rent, "seattle", &state), ids_of(&[1, 5]));
    }

    #[test]
    fn test_adapted_sales_all_pass_pets_filter() {
        let catalog = reference_catalog();
        let views: Vec<RentalLikeView> = catalog
            .listings(SearchMode::Buy)
            .iter()
            .filter_map(|l| match l {
                Listing::Sale(property) => Some(adapt(property)),
                _ => None,
            })
            .collect();

        let state = FilterState::builder().pets_allowed(true).build();
        let passed = filter_listings(SearchMode::Buy, &views, "", &state);
        assert_eq!(passed.len(), views.len());
    }

    #[test]
    fn test_adapted_sales_agree_with_raw_price_filter() {
        let catalog = reference_catalog();
        let raw = catalog.listings(SearchMode::Buy);
        let views: Vec<RentalLikeView> = raw.iter().map(RentalLikeView::from).collect();
        let state = FilterState::builder().price_range(0, 500_000).build();

        let raw_ids = ids(&filter_listings(SearchMode::Buy, raw, "", &state));
        let view_ids: Vec<ListingId> = filter_listings(SearchMode::Buy, &views, "", &state)
            .iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(raw_ids, view_ids);
    }

    fn ids_of(raw: &[u32]) -> Vec<ListingId> {
        raw.iter().copied().map(ListingId).collect()
    }
}
