//! List/map hover synchronization
//!
//! The result list and the map each report pointer hovers independently. The
//! coordinator owns both signals and exposes one derived value, the active
//! listing id, which both views use to decide highlight styling. List hover
//! wins when both are set.
//!
//! Entering a map marker additionally asks the list to scroll the matching
//! row into view and the map to fly to the listing.
//!
//! Hovered ids that are not in the currently visible set are inert: they
//! produce no highlight and no view commands.

use crate::listing::{Coordinates, Listing, ListingId};

/// Vertical placement of a row scrolled into view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    Start,
    Center,
    End,
}

/// Side effect requested from a view
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    /// Scroll the list so the row for `id` is visible
    ScrollIntoView {
        id: ListingId,
        align: ScrollAlign,
        smooth: bool,
    },
    /// Move the map camera
    FlyTo {
        center: Coordinates,
        zoom: f64,
        animate: bool,
    },
}

/// Highlight decision for one row or marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Active,
    Normal,
}

/// Which view produced a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverSource {
    List,
    Map,
}

#[derive(Debug, Clone)]
pub struct ListMapSyncCoordinator {
    list_hover: Option<ListingId>,
    map_hover: Option<ListingId>,
    focus_zoom: f64,
}

impl ListMapSyncCoordinator {
    /// Create a coordinator that zooms the map to `focus_zoom` on marker hover
    #[must_use]
    pub const fn new(focus_zoom: f64) -> Self {
        Self {
            list_hover: None,
            map_hover: None,
            focus_zoom,
        }
    }

    pub fn list_enter(&mut self, id: ListingId) {
        tracing::trace!(%id, "list hover");
        self.list_hover = Some(id);
    }

    pub fn list_leave(&mut self) {
        self.list_hover = None;
    }

    /// Record a marker hover and return the follow-up view commands
    ///
    /// No commands are returned when `id` is not among `visible`.
    pub fn map_enter(&mut self, id: ListingId, visible: &[&Listing]) -> Vec<ViewCommand> {
        tracing::trace!(%id, "map hover");
        self.map_hover = Some(id);

        let Some(listing) = find(visible, id) else {
            tracing::debug!(%id, "hovered marker not in visible set");
            return Vec::new();
        };

        vec![
            ViewCommand::ScrollIntoView {
                id,
                align: ScrollAlign::Center,
                smooth: true,
            },
            ViewCommand::FlyTo {
                center: listing.coordinates(),
                zoom: self.focus_zoom,
                animate: true,
            },
        ]
    }

    pub fn map_leave(&mut self) {
        self.map_hover = None;
    }

    /// Dispatch a pointer-enter by source
    pub fn enter(
        &mut self,
        source: HoverSource,
        id: ListingId,
        visible: &[&Listing],
    ) -> Vec<ViewCommand> {
        match source {
            HoverSource::List => {
                self.list_enter(id);
                Vec::new()
            }
            HoverSource::Map => self.map_enter(id, visible),
        }
    }

    /// Dispatch a pointer-leave by source
    pub fn leave(&mut self, source: HoverSource) {
        match source {
            HoverSource::List => self.list_leave(),
            HoverSource::Map => self.map_leave(),
        }
    }

    /// The listing both views should emphasize
    ///
    /// List hover takes precedence over map hover; an id that is not visible
    /// resolves to nothing.
    #[must_use]
    pub fn active_id(&self, visible: &[&Listing]) -> Option<ListingId> {
        self.list_hover
            .or(self.map_hover)
            .filter(|id| find(visible, *id).is_some())
    }

    /// Highlight decision for the row or marker of `id`
    #[must_use]
    pub fn emphasis(&self, id: ListingId, visible: &[&Listing]) -> Emphasis {
        if self.active_id(visible) == Some(id) {
            Emphasis::Active
        } else {
            Emphasis::Normal
        }
    }

    /// Forget both hover signals
    pub fn clear(&mut self) {
        self.list_hover = None;
        self.map_hover = None;
    }
}

fn find<'a>(visible: &[&'a Listing], id: ListingId) -> Option<&'a Listing> {
    visible.iter().copied().find(|listing| listing.id() == id)
}
