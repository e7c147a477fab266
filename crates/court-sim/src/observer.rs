//! Run observer for progress reporting and data collection.

use crate::snapshot::Snapshot;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] as the
/// history grows.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait SimObserver {
    /// Called after each snapshot is appended.  `index` is the history row
    /// number of `snapshot` (1 for the first processed event; row 0 is the
    /// initial state and is available from the engine before `run`).
    fn on_step(&mut self, _index: u64, _snapshot: &Snapshot) {}

    /// Called once when the run loop stops, with the final snapshot.
    fn on_run_end(&mut self, _last: &Snapshot) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
