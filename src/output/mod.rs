//! Output formatting for CLI display
//!
//! This module renders listing cards, the empty state and detail headers.
//! Quiet mode drops decoration and prints one listing per line.

use crate::listing::{Listing, RentalLikeView};
use crate::search::SearchMode;
use crate::sync::DetailView;
use colored::Colorize;

/// Format a card for the result list
#[must_use]
pub fn card(view: &RentalLikeView, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}\t{}", view.id, view.title, view.price_label());
    }

    let mut lines = vec![
        format!("  {} {}", format!("#{}", view.id).dimmed(), view.title.bold()),
        format!("    {}", view.location),
        format!(
            "    {}  {} bd / {} ba  {}",
            view.price_label().green(),
            view.beds,
            view.baths,
            availability(view)
        ),
    ];

    if !view.tags.is_empty() {
        lines.push(format!("    [{}]", view.tags.join(", ")));
    }
    lines.join("\n")
}

fn availability(view: &RentalLikeView) -> String {
    let pets = if view.pets_allowed { "pets ok" } else { "no pets" };
    format!("{} · {}", view.availability.cyan(), pets)
}

/// Message shown when no listing matches
#[must_use]
pub fn empty_state(mode: SearchMode, can_clear_filters: bool) -> String {
    let noun = match mode {
        SearchMode::Rent => "rentals",
        SearchMode::Buy => "homes for sale",
        SearchMode::Stays => "stays",
    };
    let mut message = format!("No {noun} match your search.").yellow().to_string();
    if can_clear_filters {
        message.push_str("\nTry clearing filters to see every listing.");
    }
    message
}

/// Summary line printed above the cards
#[must_use]
pub fn result_count(mode: SearchMode, count: usize) -> String {
    format!("{count} {mode} listing(s)").bold().to_string()
}

/// Header for an opened detail view
#[must_use]
pub fn detail_header(view: DetailView, listing: &Listing) -> String {
    let label = match view {
        DetailView::RentalDetail(_) => "Rental details",
        DetailView::PropertyDetail(_) => "Property details",
        DetailView::StayBooking(_) => "Book this stay",
    };
    format!("{} {} ({})", "▶".blue(), label.bold(), listing.title())
}
