//! Paired-variate caches.
//!
//! Box-Muller yields two normals per pair of uniforms.  One is consumed
//! immediately, the other is the *spare*; each class stream keeps its own
//! spare so draws alternate fresh-pair / cached-spare.  Two cache shapes
//! exist because arrivals and occupancies retire their spares differently:
//!
//! - arrival spares ([`PairDraw`]) are consumed by the very next arrival of
//!   the same class;
//! - occupancy spares ([`OccupancyCache`]) are consumed by the next game of
//!   the same class, and once consumed the whole cache is cleared at the
//!   top of the following step so a stale duration can never leak into a
//!   later game.

use court_core::variates::{box_muller, normal_non_negative};
use court_core::{NormalParams, UniformSource};

// ── PairDraw ──────────────────────────────────────────────────────────────────

/// One Box-Muller draw: the two source uniforms, both normals, and whether
/// the sine-branch member is still unconsumed.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairDraw {
    pub u1:    f64,
    pub u2:    f64,
    pub z0:    f64,
    pub z1:    f64,
    /// `true` while `z1` has not been handed out yet.
    pub spare: bool,
}

impl PairDraw {
    /// Draw two fresh uniforms and transform them.  `z0` is for the caller
    /// to use now; `z1` starts out spare.
    pub fn fresh(rng: &mut impl UniformSource) -> Self {
        let u1 = rng.next_uniform();
        let u2 = rng.next_uniform();
        let (z0, z1) = box_muller(u1, u2);
        Self { u1, u2, z0, z1, spare: true }
    }

    /// Hand out `z1` if it is still spare.
    pub fn take_spare(&mut self) -> Option<f64> {
        if self.spare {
            self.spare = false;
            Some(self.z1)
        } else {
            None
        }
    }
}

// ── OccupancyCache ────────────────────────────────────────────────────────────

/// Both durations produced by one occupancy draw, pre-clamped at zero.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyPair {
    pub u1:     f64,
    pub u2:     f64,
    pub first:  f64,
    pub second: f64,
}

/// Per-class occupancy duration cache.
///
/// State machine: empty → full pair (first consumed at generation) →
/// second consumed (`second_used` set) → cleared by [`expire`] at the top
/// of the next step.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyCache {
    pub pair:        Option<OccupancyPair>,
    /// Set when the cached second duration is handed out; tells [`expire`]
    /// to clear the cache on the next step.
    pub second_used: bool,
}

impl OccupancyCache {
    /// Step-top cleanup: drop the pair iff its second member was consumed
    /// during an earlier step.
    pub fn expire(&mut self) {
        if self.second_used {
            self.pair = None;
            self.second_used = false;
        }
    }

    /// Next occupancy duration for this class.
    ///
    /// Consumes the cached second duration when a pair is present;
    /// otherwise generates a fresh pair from two uniforms and consumes its
    /// first member.
    pub fn draw(&mut self, rng: &mut impl UniformSource, params: NormalParams) -> f64 {
        if let Some(pair) = self.pair {
            self.second_used = true;
            return pair.second;
        }

        let u1 = rng.next_uniform();
        let u2 = rng.next_uniform();
        let (z0, z1) = box_muller(u1, u2);
        let first = normal_non_negative(z0, params);
        let second = normal_non_negative(z1, params);
        self.pair = Some(OccupancyPair { u1, u2, first, second });
        first
    }
}
