//! The state snapshot: everything the simulation knows at one instant.
//!
//! Each processed event produces one new `Snapshot`, cloned from its
//! predecessor and mutated by exactly one handler; once appended to the
//! run's history a snapshot is never touched again.  Queues and the
//! on-court set hold [`TeamId`]s into the snapshot's own team arena, so a
//! clone of a snapshot owns a complete, independent copy of every team.

use std::collections::VecDeque;
use std::fmt;

use court_core::variates::{exponential, normal};
use court_core::{ArrivalLaw, ByDiscipline, Discipline, SimParams, Team, TeamId, UniformSource};

use crate::cache::{OccupancyCache, PairDraw};
use crate::event::EventKind;
use crate::stats::ClassStats;

// ── Arrival bookkeeping ───────────────────────────────────────────────────────

/// The most recent uniform draw(s) behind a class's scheduled arrival.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrivalDraw {
    /// Box-Muller classes: the full pair plus the spare flag.
    Pair(PairDraw),
    /// Exponential class: a single uniform per delta.
    Single { u: f64 },
}

/// Pending-arrival state for one discipline.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalState {
    pub draw:       ArrivalDraw,
    /// The delta most recently generated (minutes; may be negative for
    /// normal laws — kept as produced).
    pub last_delta: f64,
    /// Absolute clock value of the next arrival.
    pub next_at:    f64,
}

impl ArrivalState {
    /// Schedule the very first arrival of a class at clock 0.
    pub fn prime(rng: &mut impl UniformSource, law: ArrivalLaw) -> Self {
        let mut state = ArrivalState {
            draw:       ArrivalDraw::Single { u: 0.0 },
            last_delta: 0.0,
            next_at:    0.0,
        };
        state.schedule_next(rng, law, 0.0);
        state
    }

    /// Generate the next delta under `law` and schedule `now + delta`.
    ///
    /// Normal laws follow the paired-variate contract: consume the spare
    /// `z1` if one is cached, otherwise draw a fresh pair and consume its
    /// `z0`, leaving `z1` spare.  The exponential law redraws one uniform.
    pub fn schedule_next(&mut self, rng: &mut impl UniformSource, law: ArrivalLaw, now: f64) {
        let delta = match law {
            ArrivalLaw::Normal(params) => normal(self.next_z(rng), params),
            ArrivalLaw::Exponential { mean } => {
                let u = rng.next_uniform();
                self.draw = ArrivalDraw::Single { u };
                exponential(u, mean)
            }
        };
        self.last_delta = delta;
        self.next_at = now + delta;
    }

    fn next_z(&mut self, rng: &mut impl UniformSource) -> f64 {
        if let ArrivalDraw::Pair(pair) = &mut self.draw {
            if let Some(z) = pair.take_spare() {
                return z;
            }
        }
        let fresh = PairDraw::fresh(rng);
        let z = fresh.z0;
        self.draw = ArrivalDraw::Pair(fresh);
        z
    }
}

// ── Court state ───────────────────────────────────────────────────────────────

/// Operational state of the single court.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CourtState {
    Free,
    /// Changeover in progress; the next batch is parked on court but not
    /// playing.
    Conditioning,
    Busy(Discipline),
}

impl CourtState {
    /// Compact label for table/CSV cells (`free`, `conditioning`, `busy_H`).
    pub fn label(self) -> String {
        match self {
            CourtState::Free => "free".to_owned(),
            CourtState::Conditioning => "conditioning".to_owned(),
            CourtState::Busy(d) => format!("busy_{}", d.code()),
        }
    }
}

impl fmt::Display for CourtState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// Complete simulation state at one instant.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Simulation clock, minutes.
    pub clock: f64,

    /// The event whose handler produced this snapshot (`Init` for row 0).
    pub event: EventKind,

    /// Discipline of the last batch to finish (or to come out of
    /// conditioning).  Decides whether the next batch needs a changeover.
    pub last_served: Option<Discipline>,

    /// Per-class pending-arrival bookkeeping.
    pub arrivals: ByDiscipline<ArrivalState>,

    /// Per-class occupancy duration caches.
    pub occupancy: ByDiscipline<OccupancyCache>,

    /// FIFO queue shared by handball and football.
    pub shared_queue: VecDeque<TeamId>,

    /// FIFO queue for basketball.
    pub basketball_queue: VecDeque<TeamId>,

    pub court: CourtState,

    /// Teams currently occupying the court: empty when `Free`, one team
    /// (H/F or a lone B) or two (paired B) otherwise.
    pub on_court: Vec<TeamId>,

    /// Scheduled end of the running game; `None` while no game runs.
    pub game_end_at: Option<f64>,

    /// Scheduled end of the running changeover; `None` while none runs.
    pub conditioning_end_at: Option<f64>,

    /// Running served-count / cumulative-wait accumulators.
    pub stats: ByDiscipline<ClassStats>,

    /// Every team created so far, in arrival order.  `TeamId` indexes here.
    pub teams: Vec<Team>,

    /// Next per-class sequence number (1-based).
    pub next_number: ByDiscipline<u32>,
}

impl Snapshot {
    /// The state before any event: clock 0, empty queues, free court, and
    /// every arrival stream primed under its *first*-arrival law.
    pub fn initial(params: &SimParams, rng: &mut impl UniformSource) -> Self {
        Snapshot {
            clock: 0.0,
            event: EventKind::Init,
            last_served: None,
            arrivals: ByDiscipline::from_fn(|d| {
                ArrivalState::prime(rng, params.arrivals[d].first)
            }),
            occupancy: ByDiscipline::default(),
            shared_queue: VecDeque::new(),
            basketball_queue: VecDeque::new(),
            court: CourtState::Free,
            on_court: Vec::new(),
            game_end_at: None,
            conditioning_end_at: None,
            stats: ByDiscipline::default(),
            teams: Vec::new(),
            next_number: ByDiscipline::from_fn(|_| 1),
        }
    }

    /// Look up a team by arena id.
    #[inline]
    pub fn team(&self, id: TeamId) -> &Team {
        &self.teams[id.index()]
    }

    /// Court-state / occupancy consistency: `Free` ⇔ nobody on court.
    pub fn court_consistent(&self) -> bool {
        (self.court == CourtState::Free) == self.on_court.is_empty()
    }

    /// Render a queue (or the on-court set) as `H1, F2, …` tags.
    pub fn tags<'a>(&self, ids: impl IntoIterator<Item = &'a TeamId>) -> String {
        ids.into_iter()
            .map(|&id| self.team(id).tag())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
