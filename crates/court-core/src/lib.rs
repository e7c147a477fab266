//! `court-core` — foundational types for the courtsim discrete-event simulator.
//!
//! This crate is a dependency of every other `court-*` crate.  It has no
//! `court-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`discipline`] | `Discipline`, `ByDiscipline<T>`                        |
//! | [`team`]       | `TeamId`, `Team`, `TeamPhase`                          |
//! | [`variates`]   | exponential / Box-Muller / normal transforms           |
//! | [`rng`]        | `UniformSource`, `SeededUniform`, `ScriptedUniform`    |
//! | [`params`]     | `SimParams`, arrival/occupancy laws, `RunConfig`       |
//! | [`error`]      | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod discipline;
pub mod error;
pub mod params;
pub mod rng;
pub mod team;
pub mod variates;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use discipline::{ByDiscipline, Discipline};
pub use error::{CoreError, CoreResult};
pub use params::{ArrivalLaw, ArrivalProfile, NormalParams, RunConfig, SimParams, StopRule};
pub use rng::{ScriptedUniform, SeededUniform, UniformSource};
pub use team::{Team, TeamId, TeamPhase};
