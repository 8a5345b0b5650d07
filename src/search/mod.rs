//! Search session module
//!
//! Provides the pieces of a listing search:
//! 1. Mode selection between rentals, sales and stays
//! 2. The loading phase shown after every mode change
//! 3. Memoized filter results keyed by mode, query and filters
//! 4. A session that composes them with hover sync and selection

pub mod error;
pub mod loading;
pub mod memo;
pub mod mode;
pub mod observer;
pub mod session;

pub use error::SearchError;
pub use loading::{LoadingPhase, LoadingStateMachine, TimerHandle};
pub use memo::{FilterKey, FilterMemo};
pub use mode::{ModeTransition, SearchMode, SearchModeController};
pub use observer::SessionObserver;
pub use session::{ResultsView, SearchSession, SearchSessionBuilder};
