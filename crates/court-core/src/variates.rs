//! Variate transforms: exponential and Box-Muller normal.
//!
//! All functions here are pure — they turn uniforms (or an already-computed
//! standard normal) into a variate and keep no state.  Pairing and caching
//! of the second Box-Muller member is entirely the caller's concern, which
//! is what makes histories replayable from their recorded draws.

use std::f64::consts::TAU;

use crate::NormalParams;

/// Floor applied to the radial uniform before taking its log.  `rand`'s
/// `[0, 1)` range can produce an exact 0, which would blow up `ln`.
const MIN_UNIFORM: f64 = 1e-10;

/// Exponential variate with the given mean: `-mean · ln(1 − u)`.
///
/// `u ∈ [0, 1)` keeps `1 − u` strictly positive, so no floor is needed.
#[inline]
pub fn exponential(u: f64, mean: f64) -> f64 {
    -mean * (1.0 - u).ln()
}

/// Box-Muller transform: two independent standard normals from two fresh
/// uniforms.
///
/// Returns `(z0, z1)` where `z0` uses the cosine branch and `z1` the sine
/// branch.  Callers consume `z0` immediately and cache `z1` for the next
/// draw from the same stream.
#[inline]
pub fn box_muller(u1: f64, u2: f64) -> (f64, f64) {
    let r = (-2.0 * u1.max(MIN_UNIFORM).ln()).sqrt();
    let theta = TAU * u2;
    (r * theta.cos(), r * theta.sin())
}

/// Scale a standard normal: `mean + sd · z`.  Not clamped — arrival deltas
/// keep whatever value the transform produces.
#[inline]
pub fn normal(z: f64, params: NormalParams) -> f64 {
    params.mean + params.sd * z
}

/// Clamped normal for occupancy durations: a game cannot run for negative
/// time, so values below zero collapse to zero rather than fail.
#[inline]
pub fn normal_non_negative(z: f64, params: NormalParams) -> f64 {
    normal(z, params).max(0.0)
}
