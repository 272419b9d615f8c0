//! Waveform library
//!
//! Every waveform maps a phase in radians to a signed unit amplitude with
//! period `2π`. The secondary modulation is a separate, additive-only
//! stepwise offset driven by a normalized progression.

use crate::document::layer::Layer;
use crate::io::configuration::{PRIMARY_SAMPLE_HOLD_OFFSET, SECONDARY_SAMPLE_HOLD_OFFSET};
use crate::math::distribution::wrap;
use crate::math::noise::pseudo_random_hash;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_2_PI, TAU};

/// Primary modulation waveform
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// `sin(phase)`
    #[default]
    Sine,
    /// `cos(phase)`
    Cosine,
    /// `+1` for the first `duty` fraction of each period, `-1` after
    Square,
    /// Piecewise-linear wave through `±1`
    Triangle,
    /// Random level held for each full turn
    #[serde(alias = "sample & hold", alias = "sample-hold")]
    SampleHold,
}

impl Waveform {
    /// Evaluate the waveform at `phase`
    ///
    /// `duty` only affects [`Waveform::Square`].
    pub fn sample(self, phase: f64, duty: f64) -> f64 {
        match self {
            Self::Sine => phase.sin(),
            Self::Cosine => phase.cos(),
            Self::Triangle => FRAC_2_PI * phase.sin().asin(),
            Self::Square => {
                let position = wrap(phase, TAU) / TAU;
                if position < duty { 1.0 } else { -1.0 }
            }
            Self::SampleHold => primary_sample_hold(phase),
        }
    }
}

/// Evaluate `kind` at `phase`
pub fn waveform(kind: Waveform, phase: f64, duty: f64) -> f64 {
    kind.sample(phase, duty)
}

/// Sample-and-hold level for the full turn containing `phase`, in `[-1, 1)`
pub fn primary_sample_hold(phase: f64) -> f64 {
    let index = (phase / TAU).floor();
    pseudo_random_hash(index + PRIMARY_SAMPLE_HOLD_OFFSET).mul_add(2.0, -1.0)
}

/// Additive secondary offset at progression `t`
///
/// Zero when the layer's secondary modulation is disabled. Otherwise a
/// non-negative level held constant across bins `1 / frequency` wide.
pub fn secondary_modulation(t: f64, layer: &Layer) -> f64 {
    let secondary = &layer.secondary;
    if !secondary.enabled {
        return 0.0;
    }

    let index = (t * secondary.frequency).floor();
    pseudo_random_hash(index + SECONDARY_SAMPLE_HOLD_OFFSET) * secondary.amplitude.max(0.0)
}
