//! View synchronization module
//!
//! Keeps the result list and the map consistent with each other: which
//! listing is emphasized while the pointer moves, and which one is open in a
//! detail view after a click.

pub mod coordinator;
pub mod selection;

pub use coordinator::{
    Emphasis, HoverSource, ListMapSyncCoordinator, ScrollAlign, ViewCommand,
};
pub use selection::{DetailView, SelectionController};
