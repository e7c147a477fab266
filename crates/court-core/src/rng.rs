//! Uniform draw sources.
//!
//! # Determinism strategy
//!
//! The kernel consumes raw uniforms in `[0, 1)` through the [`UniformSource`]
//! trait and derives every variate from them with the pure transforms in
//! [`variates`](crate::variates).  A run is therefore reproducible from a
//! seed alone ([`SeededUniform`]), and any prefix of a run is reproducible
//! from its recorded draws ([`ScriptedUniform`]) — the two sources the test
//! suites and the CLI share.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A stream of uniform draws in `[0, 1)`.
///
/// The scheduler consumes exactly two uniforms per fresh Box-Muller pair and
/// one per exponential delta; nothing else in the kernel draws.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

// ── SeededUniform ─────────────────────────────────────────────────────────────

/// Deterministic uniform source backed by `SmallRng`.
pub struct SeededUniform(SmallRng);

impl SeededUniform {
    /// Seed deterministically — the same seed always yields the same run.
    pub fn seeded(seed: u64) -> Self {
        SeededUniform(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy, for runs where reproducibility is not wanted.
    pub fn from_entropy() -> Self {
        SeededUniform(SmallRng::from_entropy())
    }
}

impl UniformSource for SeededUniform {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── ScriptedUniform ───────────────────────────────────────────────────────────

/// Replays a fixed list of uniforms, in order.  Test helper: lets a test
/// pin every draw of a scenario and afterwards assert how many were taken.
///
/// # Panics
///
/// Panics when asked for more draws than it was given — a scenario that
/// under-provisions its script is a broken scenario, not a run to continue.
pub struct ScriptedUniform {
    values: Vec<f64>,
    pos:    usize,
}

impl ScriptedUniform {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, pos: 0 }
    }

    /// Number of draws consumed so far.
    pub fn drawn(&self) -> usize {
        self.pos
    }
}

impl UniformSource for ScriptedUniform {
    fn next_uniform(&mut self) -> f64 {
        let Some(&v) = self.values.get(self.pos) else {
            panic!("scripted uniform source exhausted after {} draws", self.pos);
        };
        self.pos += 1;
        v
    }
}
