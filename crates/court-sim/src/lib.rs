//! `court-sim` — the discrete-event kernel of the courtsim simulator.
//!
//! # Step loop
//!
//! ```text
//! history[0] = Snapshot::initial(params, rng)
//! loop:
//!   ① Peek     — scan event sources of the latest snapshot in fixed order
//!                (arrivals H, F, B, then game end, then conditioning end);
//!                earliest time wins, ties keep the first scanned.
//!   ② Stop?    — Exhausted, time limit passed (event left unapplied), or
//!                iteration limit reached.
//!   ③ Clone    — next snapshot starts as a copy of the latest; expired
//!                occupancy caches are cleared before anything else.
//!   ④ Dispatch — advance the clock and run exactly one handler
//!                (arrival / game end / conditioning end).
//!   ⑤ Append   — push the snapshot; history rows are never mutated again.
//! ```
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`cache`]    | `PairDraw`, `OccupancyCache` — paired-variate caching  |
//! | [`snapshot`] | `Snapshot`, `ArrivalState`, `CourtState`               |
//! | [`event`]    | `EventKind`, `NextEvent`                               |
//! | [`engine`]   | `Simulation` — step loop and event handlers            |
//! | [`allocate`] | court allocation policy and game start                 |
//! | [`stats`]    | `ClassStats`, `RunSummary`                             |
//! | [`observer`] | `SimObserver`, `NoopObserver`                          |
//! | [`error`]    | `SimError`, `SimResult`                                |

pub mod allocate;
pub mod cache;
pub mod engine;
pub mod error;
pub mod event;
pub mod observer;
pub mod snapshot;
pub mod stats;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cache::{OccupancyCache, OccupancyPair, PairDraw};
pub use engine::Simulation;
pub use error::{SimError, SimResult};
pub use event::{EventKind, NextEvent};
pub use observer::{NoopObserver, SimObserver};
pub use snapshot::{ArrivalDraw, ArrivalState, CourtState, Snapshot};
pub use stats::{ClassStats, RunSummary};
