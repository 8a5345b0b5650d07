//! Search mode and its controller
//!
//! The mode picks which catalog is shown and which constraints the filter
//! menu exposes. Every mode is reachable from every other; there is no
//! invalid or unknown mode.

use crate::filters::FilterField;
use crate::listing::ListingKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog currently being browsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Long-term rental units
    #[default]
    Rent,
    /// Homes for sale
    Buy,
    /// Short-term stays
    Stays,
}

impl SearchMode {
    pub const ALL: [Self; 3] = [Self::Rent, Self::Buy, Self::Stays];

    /// Listing kind held by this mode's catalog
    #[must_use]
    pub const fn kind(self) -> ListingKind {
        match self {
            Self::Rent => ListingKind::Rental,
            Self::Buy => ListingKind::Sale,
            Self::Stays => ListingKind::Stay,
        }
    }

    /// Whether the filter menu for this mode offers `field`
    #[must_use]
    pub const fn supports(self, field: FilterField) -> bool {
        match field {
            FilterField::Price | FilterField::Beds | FilterField::Pets | FilterField::Amenities => {
                true
            }
            FilterField::PropertyType => matches!(self, Self::Buy | Self::Stays),
            FilterField::Guests | FilterField::Dates => matches!(self, Self::Stays),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rent => write!(f, "rent"),
            Self::Buy => write!(f, "buy"),
            Self::Stays => write!(f, "stays"),
        }
    }
}

/// A completed mode change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTransition {
    pub from: SearchMode,
    pub to: SearchMode,
}

/// Owns the active search mode
///
/// The controller only records transitions; the session applies their side
/// effects (filter reset, selection clear, loading phase).
#[derive(Debug, Clone, Default)]
pub struct SearchModeController {
    current: SearchMode,
}

impl SearchModeController {
    #[must_use]
    pub const fn new(initial: SearchMode) -> Self {
        Self { current: initial }
    }

    #[must_use]
    pub const fn current(&self) -> SearchMode {
        self.current
    }

    /// Switch to `next`
    ///
    /// Returns `None` when `next` is already active.
    pub fn set_mode(&mut self, next: SearchMode) -> Option<ModeTransition> {
        if next == self.current {
            return None;
        }

        let transition = ModeTransition {
            from: self.current,
            to: next,
        };
        self.current = next;
        tracing::info!(from = %transition.from, to = %transition.to, "search mode changed");
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_rent() {
        assert_eq!(SearchModeController::default().current(), SearchMode::Rent);
    }

    #[test]
    fn test_every_mode_reachable_from_every_other() {
        for from in SearchMode::ALL {
            for to in SearchMode::ALL {
                let mut controller = SearchModeController::new(from);
                let transition = controller.set_mode(to);
                assert_eq!(controller.current(), to);
                if from == to {
                    assert!(transition.is_none());
                } else {
                    assert_eq!(transition, Some(ModeTransition { from, to }));
                }
            }
        }
    }

    #[test]
    fn test_mode_kinds() {
        assert_eq!(SearchMode::Rent.kind(), ListingKind::Rental);
        assert_eq!(SearchMode::Buy.kind(), ListingKind::Sale);
        assert_eq!(SearchMode::Stays.kind(), ListingKind::Stay);
    }

    #[test]
    fn test_supported_fields() {
        assert!(!SearchMode::Rent.supports(FilterField::Guests));
        assert!(!SearchMode::Rent.supports(FilterField::PropertyType));
        assert!(SearchMode::Buy.supports(FilterField::PropertyType));
        assert!(!SearchMode::Buy.supports(FilterField::Dates));
        assert!(SearchMode::Stays.supports(FilterField::Guests));
        assert!(SearchMode::Stays.supports(FilterField::Dates));
        for mode in SearchMode::ALL {
            assert!(mode.supports(FilterField::Price));
            assert!(mode.supports(FilterField::Beds));
        }
    }

    #[test]
    fn test_mode_display_and_serde() {
        assert_eq!(SearchMode::Stays.to_string(), "stays");
        let parsed: SearchMode = serde_json::from_str("\"buy\"").unwrap();
        assert_eq!(parsed, SearchMode::Buy);
    }
}
