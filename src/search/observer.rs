//! Session change notifications
//!
//! Collaborators such as a favorites list or a recently-viewed store subscribe
//! here instead of reaching into the session. Every method has an empty
//! default so observers implement only what they care about.

use crate::filters::FilterState;
use crate::listing::Listing;
use crate::search::mode::ModeTransition;

pub trait SessionObserver {
    fn on_mode_changed(&self, _transition: ModeTransition) {}

    fn on_filters_changed(&self, _filters: &FilterState) {}

    /// Called with the new selection, or `None` when it is cleared
    fn on_selection_changed(&self, _selected: Option<&Listing>) {}
}
