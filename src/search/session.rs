//! Search session management
//!
//! This module ties the engine together for one user session: the active
//! mode, the text query and filters, the loading phase, hover
//! synchronization and the selected listing.
//!
//! # Workflow
//!
//! ```text
//! Session built (initial mode)
//!     ↓
//! Loading phase ──tick/fire──→ Ready
//!     ↓
//! ┌─→ User event
//! │   ├─ Query / filter change → memoized filter → results()
//! │   ├─ Hover enter/leave     → coordinator → active_id() + view commands
//! │   ├─ Row / marker click    → selection → detail view
//! │   └─ Mode toggle           → reset filters, clear selection + hover,
//! │                              restart loading
//! └───────┘
//! ```

use super::error::SearchError;
use super::loading::{LoadingPhase, LoadingStateMachine, TimerHandle};
use super::memo::{FilterKey, FilterMemo};
use super::mode::{SearchMode, SearchModeController};
use super::observer::SessionObserver;
use crate::config::EngineConfig;
use crate::filters::FilterState;
use crate::listing::{Catalog, Listing, ListingId, RentalLikeView};
use crate::sync::{
    DetailView, Emphasis, HoverSource, ListMapSyncCoordinator, SelectionController, ViewCommand,
};
use std::sync::Arc;
use std::time::Instant;

/// What the result area should render
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView<'a> {
    /// Mode just changed; show skeleton rows
    Loading { placeholders: usize },
    /// Nothing matched; offer to clear filters when any are set
    Empty { can_clear_filters: bool },
    /// Matching listings in catalog order
    Ready { listings: Vec<&'a Listing> },
}

/// One user's search session over a catalog
pub struct SearchSession {
    catalog: Catalog,
    config: EngineConfig,
    mode: SearchModeController,
    query: String,
    filters: FilterState,
    loading: LoadingStateMachine,
    memo: FilterMemo,
    sync: ListMapSyncCoordinator,
    selection: SelectionController,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl SearchSession {
    /// Create a new builder for constructing a `SearchSession`
    #[must_use]
    pub fn builder() -> SearchSessionBuilder {
        SearchSessionBuilder::new()
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub const fn mode(&self) -> SearchMode {
        self.mode.current()
    }

    /// Switch catalogs
    ///
    /// Resets filters, clears selection and hover, and restarts the loading
    /// phase. Returns the new loading timer, or `None` if `next` was already
    /// active.
    pub fn set_mode(&mut self, next: SearchMode, now: Instant) -> Option<TimerHandle> {
        let transition = self.mode.set_mode(next)?;

        self.filters.reset();
        self.selection.clear();
        self.sync.clear();
        let handle = self.loading.begin(now);

        for observer in &self.observers {
            observer.on_mode_changed(transition);
            observer.on_filters_changed(&self.filters);
            observer.on_selection_changed(None);
        }
        Some(handle)
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Replace the filter state
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.notify_filters();
    }

    /// Apply a single filter-change event
    pub fn update_filters(&mut self, change: impl FnOnce(&mut FilterState)) {
        change(&mut self.filters);
        self.notify_filters();
    }

    /// Reset every filter without touching mode or query
    pub fn clear_filters(&mut self) {
        self.filters.reset();
        self.notify_filters();
    }

    fn notify_filters(&self) {
        tracing::debug!(active = self.filters.active_count(), "filters changed");
        for observer in &self.observers {
            observer.on_filters_changed(&self.filters);
        }
    }

    fn matching(&self) -> Arc<[usize]> {
        let key = FilterKey::new(self.mode(), &self.query, &self.filters);
        self.memo.matching(&self.catalog, &key)
    }

    /// Listings matching the current query and filters, in catalog order
    #[must_use]
    pub fn visible(&self) -> Vec<&Listing> {
        let listings = self.catalog.listings(self.mode());
        self.matching().iter().map(|&idx| &listings[idx]).collect()
    }

    /// Card views for the visible listings
    #[must_use]
    pub fn cards(&self) -> Vec<RentalLikeView> {
        self.visible().into_iter().map(RentalLikeView::from).collect()
    }

    #[must_use]
    pub const fn loading_phase(&self) -> LoadingPhase {
        self.loading.phase()
    }

    /// Advance the loading phase for tick-driven hosts
    pub fn tick(&mut self, now: Instant) -> Option<TimerHandle> {
        self.loading.poll(now)
    }

    /// Complete the loading phase from an externally scheduled timer
    pub fn fire_loading_timer(&mut self, handle: TimerHandle) -> bool {
        self.loading.fire(handle)
    }

    /// What the result list and map should render right now
    #[must_use]
    pub fn results(&self) -> ResultsView<'_> {
        if self.loading.is_loading() {
            return ResultsView::Loading {
                placeholders: self.config.skeleton_count,
            };
        }

        let listings = self.visible();
        if listings.is_empty() {
            ResultsView::Empty {
                can_clear_filters: !self.filters.is_default(),
            }
        } else {
            ResultsView::Ready { listings }
        }
    }

    /// Pointer entered a list row or map marker
    pub fn hover_enter(&mut self, source: HoverSource, id: ListingId) -> Vec<ViewCommand> {
        let indices = self.matching();
        let listings = self.catalog.listings(self.mode.current());
        let visible: Vec<&Listing> = indices.iter().map(|&idx| &listings[idx]).collect();
        self.sync.enter(source, id, &visible)
    }

    /// Pointer left a list row or map marker
    pub fn hover_leave(&mut self, source: HoverSource) {
        self.sync.leave(source);
    }

    /// Listing both views should emphasize
    #[must_use]
    pub fn active_id(&self) -> Option<ListingId> {
        self.sync.active_id(&self.visible())
    }

    #[must_use]
    pub fn emphasis(&self, id: ListingId) -> Emphasis {
        self.sync.emphasis(id, &self.visible())
    }

    /// Row or marker clicked; hover state is left as is
    ///
    /// Returns the detail view to open, or `None` if `id` is not visible.
    pub fn click(&mut self, id: ListingId) -> Option<DetailView> {
        let mode = self.mode.current();
        let indices = self.matching();
        let listings = self.catalog.listings(mode);
        let listing = indices
            .iter()
            .map(|&idx| &listings[idx])
            .find(|listing| listing.id() == id)?;

        let view = self.selection.select(mode, listing)?;
        for observer in &self.observers {
            observer.on_selection_changed(self.selection.selected());
        }
        Some(view)
    }

    /// Close the open detail view
    pub fn close_detail(&mut self) {
        self.selection.close();
        for observer in &self.observers {
            observer.on_selection_changed(None);
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Listing> {
        self.selection.selected()
    }

    #[must_use]
    pub fn detail_view(&self) -> Option<DetailView> {
        self.selection.detail_view()
    }

    /// Times the filter predicates actually ran (memo misses)
    #[must_use]
    pub fn filter_evaluations(&self) -> u64 {
        self.memo.evaluations()
    }
}

/// Builder for `SearchSession`
///
/// ```no_run
/// # use nestfind::listing::Catalog;
/// # use nestfind::search::{SearchMode, SearchSession};
/// # fn example(catalog: Catalog) -> Result<(), Box<dyn std::error::Error>> {
/// let session = SearchSession::builder()
///     .catalog(catalog)
///     .initial_mode(SearchMode::Stays)
///     .build(std::time::Instant::now())?;
/// # Ok(())
/// # }
/// ```
pub struct SearchSessionBuilder {
    catalog: Option<Catalog>,
    config: EngineConfig,
    initial_mode: SearchMode,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl SearchSessionBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: None,
            config: EngineConfig::default(),
            initial_mode: SearchMode::default(),
            observers: Vec::new(),
        }
    }

    /// Set the catalog (required)
    #[must_use]
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    #[must_use]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn initial_mode(mut self, mode: SearchMode) -> Self {
        self.initial_mode = mode;
        self
    }

    /// Subscribe a collaborator to session changes
    #[must_use]
    pub fn observer(mut self, observer: impl SessionObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Build the session and start its initial loading phase at `now`
    ///
    /// # Errors
    ///
    /// Returns `SearchError::BuildError` if no catalog was provided.
    pub fn build(self, now: Instant) -> Result<SearchSession, SearchError> {
        let catalog = self
            .catalog
            .ok_or_else(|| SearchError::BuildError("catalog is required".to_string()))?;

        let mut loading = LoadingStateMachine::new(self.config.loading_delay());
        loading.begin(now);

        tracing::info!(mode = %self.initial_mode, listings = catalog.len(), "search session started");

        Ok(SearchSession {
            memo: FilterMemo::new(self.config.memo_capacity),
            sync: ListMapSyncCoordinator::new(self.config.focus_zoom),
            catalog,
            mode: SearchModeController::new(self.initial_mode),
            query: String::new(),
            filters: FilterState::default(),
            loading,
            selection: SelectionController::new(),
            observers: self.observers,
            config: self.config,
        })
    }
}

impl Default for SearchSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
