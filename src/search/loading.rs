//! Loading phase with a cancellable delayed transition
//!
//! Every mode change shows placeholders for a short delay before real content.
//! Each `begin` allocates a new [`TimerHandle`] and drops the pending one, so
//! only the most recent mode change can ever complete the phase.
//!
//! Two ways to drive completion:
//! - tick-based hosts call [`LoadingStateMachine::poll`] with the current time
//! - callback-based hosts schedule their own timer and pass the handle back to
//!   [`LoadingStateMachine::fire`]

use std::time::{Duration, Instant};

/// Whether content or placeholders should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Loading,
    Ready,
}

/// Identifies one scheduled loading completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    handle: TimerHandle,
    deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct LoadingStateMachine {
    phase: LoadingPhase,
    delay: Duration,
    next_handle: u64,
    pending: Option<PendingTimer>,
}

/// Longest loading delay honored; longer requests are clamped
pub const MAX_LOADING_DELAY: Duration = Duration::from_secs(60 * 60);

impl LoadingStateMachine {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            phase: LoadingPhase::Ready,
            delay: delay.min(MAX_LOADING_DELAY),
            next_handle: 0,
            pending: None,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> LoadingPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, LoadingPhase::Loading)
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Handle of the completion currently scheduled, if any
    #[must_use]
    pub fn pending_handle(&self) -> Option<TimerHandle> {
        self.pending.map(|p| p.handle)
    }

    /// Time left before the pending completion is due
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|p| p.deadline.saturating_duration_since(now))
    }

    /// Enter `Loading` and schedule `Ready` after the configured delay
    ///
    /// Any previously scheduled completion is invalidated first.
    pub fn begin(&mut self, now: Instant) -> TimerHandle {
        if let Some(stale) = self.pending.take() {
            tracing::debug!(handle = stale.handle.0, "cancelled pending loading timer");
        }

        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.pending = Some(PendingTimer {
            handle,
            deadline: now.checked_add(self.delay).unwrap_or(now),
        });
        self.phase = LoadingPhase::Loading;
        tracing::debug!(
            handle = handle.0,
            delay_ms = self.delay.as_millis() as u64,
            "loading started"
        );
        handle
    }

    /// Complete the pending timer if its deadline has passed
    ///
    /// Returns the handle that completed.
    pub fn poll(&mut self, now: Instant) -> Option<TimerHandle> {
        let pending = self.pending?;
        if now < pending.deadline {
            return None;
        }
        self.complete(pending.handle);
        Some(pending.handle)
    }

    /// Complete the phase on behalf of an externally scheduled timer
    ///
    /// Returns `false`, leaving state untouched, when `handle` has been
    /// superseded by a later `begin`.
    pub fn fire(&mut self, handle: TimerHandle) -> bool {
        match self.pending {
            Some(pending) if pending.handle == handle => {
                self.complete(handle);
                true
            }
            _ => {
                tracing::debug!(handle = handle.0, "ignored stale loading timer");
                false
            }
        }
    }

    fn complete(&mut self, handle: TimerHandle) {
        self.pending = None;
        self.phase = LoadingPhase::Ready;
        tracing::debug!(handle = handle.0, "loading finished");
    }
}
