//! The closed event alphabet and the scheduler's verdict type.

use std::fmt;

use court_core::Discipline;

/// What happened at a snapshot's instant.
///
/// One handler exists per variant (except `Init`, which labels the state
/// before any event); the `match` in the engine is exhaustive, so adding an
/// event forces a handler.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// Row 0 only: the primed state before the first event.
    Init,
    Arrival(Discipline),
    /// The running game ended; the court frees.
    GameEnd,
    /// Changeover complete; the parked batch starts playing.
    ConditioningEnd,
}

impl EventKind {
    /// Stable label used in table and CSV cells.
    pub fn label(self) -> String {
        match self {
            EventKind::Init => "init".to_owned(),
            EventKind::Arrival(d) => format!("arrival_{}", d.code()),
            EventKind::GameEnd => "game_end".to_owned(),
            EventKind::ConditioningEnd => "conditioning_end".to_owned(),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Scheduler verdict for one step.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum NextEvent {
    /// The earliest active event source fires `kind` at clock `at`.
    At { kind: EventKind, at: f64 },
    /// No event source is active; the run is over.
    Exhausted,
}
