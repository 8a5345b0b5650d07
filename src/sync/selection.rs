//! Selected listing and its detail view
//!
//! At most one listing is selected at a time, and it always belongs to the
//! mode it was selected under. Clicking a row or a marker selects; closing
//! the detail view or switching modes clears.

use crate::listing::{Listing, ListingId};
use crate::search::SearchMode;

/// Mode-specific detail view to open for a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailView {
    /// Rental unit detail with floor plans and tour scheduling
    RentalDetail(ListingId),
    /// Home-for-sale detail
    PropertyDetail(ListingId),
    /// Short-stay booking sheet
    StayBooking(ListingId),
}

impl DetailView {
    #[must_use]
    pub const fn for_mode(mode: SearchMode, id: ListingId) -> Self {
        match mode {
            SearchMode::Rent => Self::RentalDetail(id),
            SearchMode::Buy => Self::PropertyDetail(id),
            SearchMode::Stays => Self::StayBooking(id),
        }
    }

    #[must_use]
    pub const fn listing_id(&self) -> ListingId {
        match self {
            Self::RentalDetail(id) | Self::PropertyDetail(id) | Self::StayBooking(id) => *id,
        }
    }
}

#[derive(Debug, Clone)]
struct Selection {
    mode: SearchMode,
    listing: Listing,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    current: Option<Selection>,
}

impl SelectionController {
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Select `listing` under `mode` and return the view to open
    ///
    /// A listing whose kind does not belong to `mode` is ignored.
    pub fn select(&mut self, mode: SearchMode, listing: &Listing) -> Option<DetailView> {
        if listing.kind() != mode.kind() {
            tracing::debug!(id = %listing.id(), %mode, "ignored selection of mismatched kind");
            return None;
        }

        self.current = Some(Selection {
            mode,
            listing: listing.clone(),
        });
        Some(DetailView::for_mode(mode, listing.id()))
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Listing> {
        self.current.as_ref().map(|s| &s.listing)
    }

    /// Detail view to show for the current selection
    #[must_use]
    pub fn detail_view(&self) -> Option<DetailView> {
        self.current
            .as_ref()
            .map(|s| DetailView::for_mode(s.mode, s.listing.id()))
    }

    /// Close the detail view
    pub fn close(&mut self) {
        self.current = None;
    }

    /// Drop the selection on mode change
    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            tracing::debug!("selection cleared");
        }
    }
}
