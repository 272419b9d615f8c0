//! Shape radius sampler

use crate::io::configuration::{COSINE_FLOOR, MIN_SPIKE_COUNT, SPIKE_AMPLITUDE, SPIKE_EXPONENT};
use crate::math::distribution::{lerp, wrap};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Primitive a layer morphs from or to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Plain circle
    #[default]
    #[serde(alias = "concentric circles")]
    Circle,
    /// Straight-edged regular polygon
    #[serde(alias = "multi-sided shapes")]
    Polygon,
    /// Circle with sharp evenly spaced spikes
    #[serde(alias = "radiating lines")]
    RadiatingLines,
    /// Logarithmic spiral arms, drawn by their own routine
    #[serde(alias = "fibonacci spiral")]
    FibonacciSpiral,
}

/// Boundary radius of `kind` at `angle`
///
/// `spike_count_hint` is the approximate number of instances, used only to
/// space the spikes of [`ShapeKind::RadiatingLines`].
pub fn base_radius(
    kind: ShapeKind,
    radius: f64,
    sides: u32,
    angle: f64,
    spike_count_hint: u32,
) -> f64 {
    match kind {
        ShapeKind::Circle | ShapeKind::FibonacciSpiral => radius,
        ShapeKind::Polygon => polygon_radius(radius, sides, angle),
        ShapeKind::RadiatingLines => spike_radius(radius, angle, spike_count_hint),
    }
}

/// Radius interpolated between the start and end shapes at `morph`
pub fn morph_radius(
    start: (ShapeKind, u32),
    end: (ShapeKind, u32),
    radius: f64,
    angle: f64,
    morph: f64,
    spike_count_hint: u32,
) -> f64 {
    let from = base_radius(start.0, radius, start.1, angle, spike_count_hint);
    let to = base_radius(end.0, radius, end.1, angle, spike_count_hint);
    lerp(from, to, morph)
}

fn polygon_radius(radius: f64, sides: u32, angle: f64) -> f64 {
    let sides = f64::from(sides.max(1));
    let half = PI / sides;
    let sector = TAU / sides;
    let phi = wrap(angle + half, sector) - half;

    let mut cosine = phi.cos();
    if cosine.abs() < COSINE_FLOOR {
        cosine = COSINE_FLOOR.copysign(cosine);
    }

    radius * half.cos() / cosine
}

fn spike_radius(radius: f64, angle: f64, spike_count_hint: u32) -> f64 {
    let spike_count = f64::from(spike_count_hint.max(MIN_SPIKE_COUNT as u32));
    let spike = (angle * spike_count).sin().abs().powf(SPIKE_EXPONENT);
    (radius * SPIKE_AMPLITUDE).mul_add(spike, radius)
}
