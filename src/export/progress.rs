//! Progress accounting with synchronous observer fan-out.
//!
//! A [`ProgressTracker`] holds a `(current, total)` pair. Every recorded unit
//! notifies all registered observers on the caller's thread before
//! [`ProgressTracker::record_unit`] returns; there is no buffering or
//! coalescing, so a slow observer slows the export down.

use std::fmt;

use log::trace;

/// Snapshot of export progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressState {
    /// Units the export is expected to produce. `0` until metadata arrives.
    pub total: u64,
    /// Units completed so far.
    pub current: u64,
}

impl ProgressState {
    /// Completion in whole percent, or `None` while the total is unknown.
    ///
    /// Saturates at 100 when more units arrive than were declared.
    pub fn percent(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        let percent = (self.current.saturating_mul(100) / self.total).min(100);
        Some(percent as u8)
    }
}

/// Receives progress updates from a tracker.
pub trait ProgressObserver {
    fn on_progress(&mut self, progress: &ProgressState);
}

impl<F> ProgressObserver for F
where
    F: FnMut(&ProgressState),
{
    fn on_progress(&mut self, progress: &ProgressState) {
        self(progress)
    }
}

/// Handle returned on registration, used to remove an observer again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Counter pair plus the observers interested in it.
#[derive(Default)]
pub struct ProgressTracker {
    state: ProgressState,
    observers: Vec<(ObserverId, Box<dyn ProgressObserver>)>,
    next_id: u64,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the expected unit count. Later calls overwrite earlier ones.
    pub fn set_total(&mut self, total: u64) {
        self.state.total = total;
    }

    /// Counts one completed unit and notifies every observer in registration order.
    pub fn record_unit(&mut self) {
        self.state.current += 1;
        trace!(
            "Progress: {}/{} ({} observers)",
            self.state.current,
            self.state.total,
            self.observers.len()
        );
        let state = self.state;
        for (_, observer) in &mut self.observers {
            observer.on_progress(&state);
        }
    }

    /// Registers an observer. The same observer may be registered more than once.
    pub fn add_observer(&mut self, observer: Box<dyn ProgressObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Removes a previously registered observer. Returns `false` for unknown ids.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    pub fn state(&self) -> ProgressState {
        self.state
    }

    /// Zeroes the counter pair. Observers stay registered.
    pub fn reset(&mut self) {
        self.state = ProgressState::default();
    }
}

impl fmt::Debug for ProgressTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressTracker")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
