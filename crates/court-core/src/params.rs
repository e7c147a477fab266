//! Simulation parameters and run configuration.
//!
//! Every distribution constant of the model lives here rather than at its
//! use site, so tests can run the kernel under alternate parameterizations
//! (degenerate `sd = 0` laws make scenarios fully deterministic).

use crate::{ByDiscipline, CoreError, CoreResult};

/// Minutes per hour — arrival means are quoted in hours, the clock runs in
/// minutes.
const HOUR: f64 = 60.0;

// ── Laws ──────────────────────────────────────────────────────────────────────

/// Mean and standard deviation of a normal law, in minutes.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalParams {
    pub mean: f64,
    pub sd:   f64,
}

impl NormalParams {
    pub const fn new(mean: f64, sd: f64) -> Self {
        Self { mean, sd }
    }
}

/// Law of an inter-arrival delta.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrivalLaw {
    /// Normal via Box-Muller; deltas are *not* clamped, negative values are
    /// kept as produced.
    Normal(NormalParams),
    /// Negative exponential; one uniform per delta.
    Exponential { mean: f64 },
}

/// Arrival laws for one discipline: the law of the very first arrival and
/// the law of every arrival after it.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalProfile {
    pub first: ArrivalLaw,
    pub rest:  ArrivalLaw,
}

impl ArrivalProfile {
    /// Same law for the first and all later arrivals.
    pub const fn steady(law: ArrivalLaw) -> Self {
        Self { first: law, rest: law }
    }
}

// ── SimParams ─────────────────────────────────────────────────────────────────

/// All model constants: arrival profiles, occupancy laws, changeover time.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    pub arrivals:       ByDiscipline<ArrivalProfile>,
    /// Per-discipline occupancy law, clamped at zero when sampled.
    pub occupancy:      ByDiscipline<NormalParams>,
    /// Fixed conditioning delay when the court switches discipline.
    pub changeover_min: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            arrivals: ByDiscipline {
                // The first handball arrival runs on a 12 h mean, later
                // ones on 6 h.  Intentional; recorded histories depend on
                // the asymmetry, do not normalize it.
                handball: ArrivalProfile {
                    first: ArrivalLaw::Normal(NormalParams::new(12.0 * HOUR, 2.0 * HOUR)),
                    rest:  ArrivalLaw::Normal(NormalParams::new(6.0 * HOUR, 2.0 * HOUR)),
                },
                football: ArrivalProfile::steady(ArrivalLaw::Exponential { mean: 10.0 * HOUR }),
                basketball: ArrivalProfile::steady(ArrivalLaw::Normal(NormalParams::new(
                    8.0 * HOUR,
                    2.0 * HOUR,
                ))),
            },
            occupancy: ByDiscipline {
                handball:   NormalParams::new(80.0, 20.0),
                football:   NormalParams::new(90.0, 10.0),
                basketball: NormalParams::new(100.0, 30.0),
            },
            changeover_min: 10.0,
        }
    }
}

// ── Stopping policy ───────────────────────────────────────────────────────────

/// When the run loop stops appending snapshots.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopRule {
    /// Stop before applying the first event whose time exceeds the limit.
    /// No snapshot's clock ever passes `limit_min`.
    SimTime { limit_min: f64 },
    /// Stop after processing exactly `limit` events; history then holds
    /// `limit + 1` snapshots (the initial state plus one per event).
    Iterations { limit: u64 },
}

/// External run configuration, validated before the engine is built.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    pub stop: StopRule,
    /// `None` means seed from entropy (non-reproducible run).
    pub seed: Option<u64>,
}

impl RunConfig {
    /// Reject unusable stopping limits.  The kernel assumes a validated
    /// configuration and has no misuse path of its own.
    pub fn validate(&self) -> CoreResult<()> {
        match self.stop {
            StopRule::SimTime { limit_min } => {
                if !limit_min.is_finite() || limit_min <= 0.0 {
                    return Err(CoreError::Config(format!(
                        "time limit must be a positive number of minutes, got {limit_min}"
                    )));
                }
            }
            StopRule::Iterations { limit } => {
                if limit == 0 {
                    return Err(CoreError::Config(
                        "iteration limit must be at least 1".to_owned(),
                    ));
                }
            }
        }
        Ok(())
    }
}
