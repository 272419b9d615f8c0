//! Progression remapping used for radial placement
//!
//! A single signed parameter skews a normalized progression toward one end
//! with an exponential curve. Zero leaves the progression untouched.

use crate::io::configuration::{DISTRIBUTION_IDENTITY_EPSILON, DIVISION_FLOOR};

/// Linear interpolation between `a` and `b`
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a).mul_add(t, a)
}

/// Modulo that always lands in `[0, m)` for positive `m`
pub fn wrap(x: f64, m: f64) -> f64 {
    ((x % m) + m) % m
}

/// Remap `t` in `[0, 1]` through an exponential skew controlled by `k`
///
/// Positive `k` concentrates samples toward `t = 1`, negative `k` toward
/// `t = 0`. Both endpoints are fixed points and the curve is monotonic
/// non-decreasing for every `k`.
pub fn apply_distribution(t: f64, k: f64) -> f64 {
    if !k.is_finite() || k.abs() < DISTRIBUTION_IDENTITY_EPSILON {
        return t;
    }

    if k > 0.0 {
        let numerator = (k * t).exp_m1();
        let denominator = k.exp_m1().max(DIVISION_FLOOR);
        numerator / denominator
    } else {
        let kp = -k;
        let tt = 1.0 - t;
        let numerator = (kp * tt).exp_m1();
        let denominator = kp.exp_m1().max(DIVISION_FLOOR);
        1.0 - numerator / denominator
    }
}
