//! Team entities and their lifecycle.
//!
//! A team is created on arrival, transitions Waiting → Playing → Finished,
//! and is never destroyed: the snapshot's team arena keeps every team for
//! the whole run so waits and occupancy can be audited after the fact.

use std::fmt;

use crate::Discipline;

// ── TeamId ────────────────────────────────────────────────────────────────────

/// Index of a team in the snapshot's team arena.
///
/// Queues and the on-court set store `TeamId`s rather than teams, so a team
/// has exactly one owner (the arena) and cloning a snapshot cannot produce
/// aliased lifecycle state.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamId(pub u32);

impl TeamId {
    /// Cast to `usize` for direct use as an arena index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TeamId({})", self.0)
    }
}

// ── TeamPhase ─────────────────────────────────────────────────────────────────

/// Lifecycle phase of a team.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TeamPhase {
    /// In a queue, or parked on the court while it is being conditioned.
    Waiting,
    /// On the court with the game clock running.
    Playing,
    /// Game over.
    Finished,
}

impl fmt::Display for TeamPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TeamPhase::Waiting => "waiting",
            TeamPhase::Playing => "playing",
            TeamPhase::Finished => "finished",
        };
        write!(f, "{s}")
    }
}

// ── Team ──────────────────────────────────────────────────────────────────────

/// One arriving team.  `started_at` and `finished_at` are each set exactly
/// once, by [`begin_play`](Team::begin_play) and [`finish`](Team::finish).
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    pub discipline:  Discipline,
    /// 1-based sequence number within the discipline (`B3` is the third
    /// basketball team to arrive).
    pub number:      u32,
    /// Simulation clock (minutes) at arrival.
    pub arrived_at:  f64,
    pub phase:       TeamPhase,
    pub started_at:  Option<f64>,
    pub finished_at: Option<f64>,
    /// `started_at − arrived_at`; 0 until play begins.
    pub wait:        f64,
}

impl Team {
    pub fn new(discipline: Discipline, number: u32, now: f64) -> Self {
        Self {
            discipline,
            number,
            arrived_at: now,
            phase: TeamPhase::Waiting,
            started_at: None,
            finished_at: None,
            wait: 0.0,
        }
    }

    /// Waiting → Playing: record the service start and the realized wait.
    pub fn begin_play(&mut self, now: f64) {
        self.started_at = Some(now);
        self.wait = now - self.arrived_at;
        self.phase = TeamPhase::Playing;
    }

    /// Playing → Finished: record the service end.
    pub fn finish(&mut self, now: f64) {
        self.finished_at = Some(now);
        self.phase = TeamPhase::Finished;
    }

    /// Short tag like `H1` or `B12`, used in queue listings and CSV rows.
    pub fn tag(&self) -> String {
        format!("{}{}", self.discipline.code(), self.number)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.discipline.code(), self.number)
    }
}
