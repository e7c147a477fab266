//! Per-class statistics and the derived run summary.

use court_core::{ByDiscipline, Discipline, TeamPhase};

use crate::snapshot::{CourtState, Snapshot};

// ── ClassStats ────────────────────────────────────────────────────────────────

/// Running accumulators for one discipline, bumped when a team begins play.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassStats {
    /// Teams that have started playing.
    pub served:     u64,
    /// Sum of realized waits (minutes) of those teams.
    pub total_wait: f64,
}

impl ClassStats {
    /// Record one team entering the court.
    pub fn record(&mut self, wait: f64) {
        self.served += 1;
        self.total_wait += wait;
    }

    /// Mean wait, or `None` when no team of this class was served.
    pub fn average_wait(&self) -> Option<f64> {
        (self.served > 0).then(|| self.total_wait / self.served as f64)
    }
}

// ── RunSummary ────────────────────────────────────────────────────────────────

/// Everything the final report needs, derived from the last snapshot.
/// Holds no state of its own.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub final_clock_min:      f64,
    pub court:                CourtState,
    pub per_class:            ByDiscipline<ClassStats>,
    pub shared_queue_len:     usize,
    pub basketball_queue_len: usize,
    pub teams_created:        usize,
    pub teams_finished:       usize,
}

impl RunSummary {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            final_clock_min:      snapshot.clock,
            court:                snapshot.court,
            per_class:            snapshot.stats,
            shared_queue_len:     snapshot.shared_queue.len(),
            basketball_queue_len: snapshot.basketball_queue.len(),
            teams_created:        snapshot.teams.len(),
            teams_finished:       snapshot
                .teams
                .iter()
                .filter(|t| t.phase == TeamPhase::Finished)
                .count(),
        }
    }

    /// Mean wait of one discipline, if any team of it was served.
    pub fn average_wait(&self, d: Discipline) -> Option<f64> {
        self.per_class[d].average_wait()
    }
}
