//! Court allocation: who enters the court when it might be free.
//!
//! Decision order (first match wins):
//!
//! 1. two or more basketball teams waiting → dequeue two as one batch;
//! 2. exactly one basketball team waiting and the shared H/F queue empty
//!    → dequeue that lone team;
//! 3. shared queue non-empty → dequeue its front team;
//! 4. otherwise nothing happens — a lone basketball team keeps waiting
//!    while handball/football teams exist.
//!
//! A selected batch starts playing immediately when its discipline matches
//! the last one served; otherwise it is parked on court for a fixed
//! conditioning delay first.

use court_core::{Discipline, TeamId, UniformSource};

use crate::engine::Simulation;
use crate::snapshot::{CourtState, Snapshot};

impl<U: UniformSource> Simulation<U> {
    /// Invoked after every arrival and game end.  No-op unless the court is
    /// free and some queue is non-empty.
    pub(crate) fn allocate(&mut self, snap: &mut Snapshot) {
        if snap.court != CourtState::Free {
            return;
        }

        let waiting_b = snap.basketball_queue.len();
        let shared_waiting = !snap.shared_queue.is_empty();

        let mut batch: Vec<TeamId> = Vec::new();
        if waiting_b >= 2 {
            batch.extend(snap.basketball_queue.drain(..2));
        } else if waiting_b == 1 && !shared_waiting {
            if let Some(id) = snap.basketball_queue.pop_front() {
                batch.push(id);
            }
        } else if shared_waiting {
            if let Some(id) = snap.shared_queue.pop_front() {
                batch.push(id);
            }
        }
        let Some(&front) = batch.first() else {
            return;
        };

        let discipline = snap.team(front).discipline;
        match snap.last_served {
            Some(previous) if previous != discipline => {
                // Changeover: park the batch without starting play.
                snap.court = CourtState::Conditioning;
                snap.on_court = batch;
                snap.conditioning_end_at = Some(snap.clock + self.params.changeover_min);
            }
            _ => self.start_game(snap, batch, discipline),
        }
    }

    /// Begin play for `batch`: record waits and stats, occupy the court,
    /// and schedule the game end from a freshly drawn (or cached) duration.
    pub(crate) fn start_game(
        &mut self,
        snap:       &mut Snapshot,
        batch:      Vec<TeamId>,
        discipline: Discipline,
    ) {
        let now = snap.clock;
        for &id in &batch {
            let team = &mut snap.teams[id.index()];
            team.begin_play(now);
            let wait = team.wait;
            snap.stats[discipline].record(wait);
        }

        snap.on_court = batch;
        snap.court = CourtState::Busy(discipline);
        let params = self.params.occupancy[discipline];
        let duration = snap.occupancy[discipline].draw(&mut self.rng, params);
        snap.game_end_at = Some(now + duration);
    }
}
