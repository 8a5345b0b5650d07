//! Memoized filter results
//!
//! Evaluating every predicate over a large catalog on each render is wasteful
//! when nothing relevant changed. Results are cached as index lists keyed by
//! the three inputs that determine them: mode, query and filter state.

use crate::filters::{FilterState, matching_indices};
use crate::listing::Catalog;
use crate::search::SearchMode;
use moka::sync::Cache;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Everything a filter result depends on besides the (immutable) catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterKey {
    pub mode: SearchMode,
    pub query: String,
    pub state: FilterState,
}

impl FilterKey {
    /// Build a key; the query is lower-cased since matching ignores case
    #[must_use]
    pub fn new(mode: SearchMode, query: &str, state: &FilterState) -> Self {
        Self {
            mode,
            query: query.to_lowercase(),
            state: state.clone(),
        }
    }
}

/// Cache of matching catalog positions
pub struct FilterMemo {
    cache: Cache<FilterKey, Arc<[usize]>>,
    evaluations: AtomicU64,
}

impl FilterMemo {
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_capacity).build(),
            evaluations: AtomicU64::new(0),
        }
    }

    /// Matching positions in the mode's collection, computed at most once per key
    pub fn matching(&self, catalog: &Catalog, key: &FilterKey) -> Arc<[usize]> {
        self.cache.get_with_by_ref(key, || {
            self.evaluations.fetch_add(1, Ordering::Relaxed);
            let indices =
                matching_indices(key.mode, catalog.listings(key.mode), &key.query, &key.state);
            tracing::debug!(
                mode = %key.mode,
                query = %key.query,
                matched = indices.len(),
                "filter evaluated"
            );
            Arc::from(indices)
        })
    }

    /// Number of times the predicate chain actually ran
    #[must_use]
    pub fn evaluations(&self) -> u64 {
        self.evaluations.load(Ordering::Relaxed)
    }

    /// Drop every cached result
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl std::fmt::Debug for FilterMemo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterMemo")
            .field("entries", &self.cache.entry_count())
            .field("evaluations", &self.evaluations())
            .finish()
    }
}
