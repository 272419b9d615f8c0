//! Erosion filter
//!
//! Decides per sampled point whether it survives, from coherent noise
//! offset per layer and a threshold that rises toward the outer edge of
//! the whole composition.

use crate::document::layer::{Layer, composition_radius};
use crate::io::configuration::EROSION_LAYER_OFFSET;
use crate::math::distribution::lerp;
use crate::math::noise::CoherentNoise;

/// Erosion test bound to one document snapshot
///
/// The radius normalization reads every layer once, so the threshold decay
/// is consistent across the whole composition.
#[derive(Clone, Copy, Debug)]
pub struct ErosionField<'a> {
    noise: &'a CoherentNoise,
    layers: &'a [Layer],
    max_radius: f64,
}

impl<'a> ErosionField<'a> {
    /// Bind the noise field to the layers of a document
    pub fn new(noise: &'a CoherentNoise, layers: &'a [Layer]) -> Self {
        Self {
            noise,
            layers,
            max_radius: composition_radius(layers),
        }
    }

    /// Radius every point is normalized against, never below 1
    pub const fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// Whether the point `(x, y)` of layer `layer_index` is kept
    ///
    /// Indices past the end fall back to the last layer. Layers without
    /// erosion keep every point.
    pub fn keep(&self, x: f64, y: f64, layer_index: usize) -> bool {
        let Some(layer) = self
            .layers
            .get(layer_index.min(self.layers.len().saturating_sub(1)))
        else {
            return true;
        };

        let erosion = &layer.erosion;
        if !erosion.enabled {
            return true;
        }

        let offset = layer_index as f64 * EROSION_LAYER_OFFSET;
        let value = self
            .noise
            .sample((x + offset) * erosion.scale, (y + offset) * erosion.scale);

        let normalized_radius = (x.hypot(y) / self.max_radius).clamp(0.0, 1.0);
        let threshold = lerp(erosion.threshold, 1.0, erosion.decay * normalized_radius);

        value >= threshold
    }
}
