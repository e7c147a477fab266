//! The `Simulation` engine: event determination, clock advance, handlers,
//! and the stopping policy.

use court_core::{
    Discipline, RunConfig, SeededUniform, SimParams, StopRule, Team, TeamId, UniformSource,
};
use tracing::{debug, info};

use crate::error::SimResult;
use crate::event::{EventKind, NextEvent};
use crate::observer::SimObserver;
use crate::snapshot::{CourtState, Snapshot};
use crate::stats::RunSummary;

/// The simulation engine.
///
/// Owns the model parameters, the uniform source, the stop rule, and the
/// append-only snapshot history (row 0 is the initial state).  All mutation
/// happens on a working copy of the latest snapshot; rows already in the
/// history are never touched.
pub struct Simulation<U: UniformSource> {
    pub(crate) params:  SimParams,
    pub(crate) stop:    StopRule,
    pub(crate) rng:     U,
    pub(crate) history: Vec<Snapshot>,
    pub(crate) steps:   u64,
}

impl Simulation<SeededUniform> {
    /// Build an engine from an external run configuration, seeding from
    /// `config.seed` (or entropy when absent).  Validation happens here —
    /// a non-positive limit never reaches the run loop.
    pub fn from_config(params: SimParams, config: RunConfig) -> SimResult<Self> {
        let rng = match config.seed {
            Some(seed) => SeededUniform::seeded(seed),
            None => SeededUniform::from_entropy(),
        };
        Self::new(params, config, rng)
    }
}

impl<U: UniformSource> Simulation<U> {
    /// Build an engine over an explicit uniform source (tests use a
    /// scripted one).
    pub fn new(params: SimParams, config: RunConfig, mut rng: U) -> SimResult<Self> {
        config.validate()?;
        let initial = Snapshot::initial(&params, &mut rng);
        Ok(Self {
            params,
            stop: config.stop,
            rng,
            history: vec![initial],
            steps: 0,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The full snapshot history, one row per instant (row 0 = initial).
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// The most recent snapshot.
    pub fn latest(&self) -> &Snapshot {
        &self.history[self.history.len() - 1]
    }

    /// Events processed so far (`history().len() - 1`).
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Statistics derived from the latest snapshot.
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_snapshot(self.latest())
    }

    // ── Event determination ───────────────────────────────────────────────

    /// Scan the active event sources of `snapshot` and pick the earliest.
    ///
    /// Sources are scanned in fixed order — arrivals H, F, B, then game
    /// end, then conditioning end — and a later source only wins with a
    /// strictly earlier time.  This tie-break is part of the
    /// reproducibility contract; do not reorder.
    pub fn next_event(snapshot: &Snapshot) -> NextEvent {
        let mut best: Option<(EventKind, f64)> = None;
        let mut consider = |kind: EventKind, at: Option<f64>| {
            if let Some(t) = at {
                if t.is_finite() && best.is_none_or(|(_, earliest)| t < earliest) {
                    best = Some((kind, t));
                }
            }
        };

        for d in Discipline::ALL {
            consider(EventKind::Arrival(d), Some(snapshot.arrivals[d].next_at));
        }
        consider(EventKind::GameEnd, snapshot.game_end_at);
        consider(EventKind::ConditioningEnd, snapshot.conditioning_end_at);

        match best {
            Some((kind, at)) => NextEvent::At { kind, at },
            None => NextEvent::Exhausted,
        }
    }

    // ── Run loop ──────────────────────────────────────────────────────────

    /// Run until the stop rule fires or no event source remains active.
    pub fn run(&mut self, observer: &mut impl SimObserver) {
        info!(stop = ?self.stop, "simulation starting");

        loop {
            let verdict = Self::next_event(self.latest());
            let (kind, at) = match verdict {
                NextEvent::Exhausted => {
                    info!(steps = self.steps, "no active event sources left");
                    break;
                }
                NextEvent::At { kind, at } => (kind, at),
            };

            match self.stop {
                // The over-limit event is peeked but never applied, so no
                // snapshot's clock exceeds the limit.
                StopRule::SimTime { limit_min } if at > limit_min => {
                    info!(next = at, limit = limit_min, "next event past time limit");
                    break;
                }
                StopRule::Iterations { limit } if self.steps >= limit => {
                    info!(limit, "iteration limit reached");
                    break;
                }
                _ => {}
            }

            let next = self.apply_event(kind, at);
            self.history.push(next);
            self.steps += 1;
            observer.on_step(self.steps, self.latest());

            if self.steps % 10 == 0 {
                debug!(step = self.steps, clock_min = self.latest().clock, "progress");
            }
        }

        observer.on_run_end(self.latest());
        info!(
            steps = self.steps,
            clock_min = self.latest().clock,
            "simulation complete"
        );
    }

    // ── One step ──────────────────────────────────────────────────────────

    /// Build the next snapshot: clone the latest, expire occupancy caches,
    /// advance the clock to `at`, and dispatch `kind`'s handler.
    fn apply_event(&mut self, kind: EventKind, at: f64) -> Snapshot {
        let mut snap = self.history[self.history.len() - 1].clone();

        for d in Discipline::ALL {
            snap.occupancy[d].expire();
        }

        snap.clock = at;
        snap.event = kind;

        match kind {
            EventKind::Arrival(d) => self.handle_arrival(&mut snap, d),
            EventKind::GameEnd => self.handle_game_end(&mut snap),
            EventKind::ConditioningEnd => self.handle_conditioning_end(&mut snap),
            // Never scheduled; `Init` only labels row 0.
            EventKind::Init => {}
        }

        snap
    }

    // ── Handlers ──────────────────────────────────────────────────────────

    /// A team of discipline `d` arrives: create it, enqueue it, schedule
    /// the class's next arrival, and try to allocate the court.
    fn handle_arrival(&mut self, snap: &mut Snapshot, d: Discipline) {
        let number = snap.next_number[d];
        snap.next_number[d] = number + 1;

        let id = TeamId(snap.teams.len() as u32);
        snap.teams.push(Team::new(d, number, snap.clock));
        if d.shares_queue() {
            snap.shared_queue.push_back(id);
        } else {
            snap.basketball_queue.push_back(id);
        }

        let law = self.params.arrivals[d].rest;
        let now = snap.clock;
        snap.arrivals[d].schedule_next(&mut self.rng, law, now);

        self.allocate(snap);
    }

    /// The running game ends: finish every on-court team, record the
    /// discipline as last served, free the court, and reallocate.
    fn handle_game_end(&mut self, snap: &mut Snapshot) {
        let now = snap.clock;
        let leaving = std::mem::take(&mut snap.on_court);
        for id in leaving {
            let team = &mut snap.teams[id.index()];
            team.finish(now);
            snap.last_served = Some(team.discipline);
        }

        snap.court = CourtState::Free;
        snap.game_end_at = None;

        self.allocate(snap);
    }

    /// Changeover complete: the parked batch starts playing now.
    fn handle_conditioning_end(&mut self, snap: &mut Snapshot) {
        snap.conditioning_end_at = None;

        let batch = std::mem::take(&mut snap.on_court);
        let Some(&front) = batch.first() else {
            return;
        };
        let discipline = snap.team(front).discipline;

        self.start_game(snap, batch, discipline);
        snap.last_served = Some(discipline);
    }
}
