//! Layer geometry engine
//!
//! Turns one layer into drawing commands in layer-local coordinates. The
//! engine is a pure function of the layer, its index, the global
//! distribution parameter and the erosion field: it never mutates the
//! layer and emits the same command sequence on every call.
//!
//! Four modes share one per-sample pipeline:
//! 1. radial placement with distribution remapping
//! 2. shape morph interpolation
//! 3. waveform plus secondary modulation
//! 4. erosion test and segment emission

use crate::document::layer::Layer;
use crate::geometry::erosion::ErosionField;
use crate::geometry::shape::{ShapeKind, morph_radius};
use crate::io::configuration::{
    CURVE_STEP_ANGLE, DIVISION_FLOOR, FIBONACCI_ANGLE_STEP, LINE_STEP_T, MIN_FIBONACCI_SAMPLES,
    MIN_INSTANCE_SCALE, MIN_STROKE_WIDTH, RADIAL_NUDGE, SPIRAL_GROWTH,
};
use crate::math::distribution::{apply_distribution, lerp};
use crate::modulation::waveform::{secondary_modulation, waveform};
use crate::render::command::DrawingSink;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Drawing mode a layer renders with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// Concentric morphing shapes, one closed outline per instance
    Concentric,
    /// Straight lines radiating from the center
    RadiatingLines,
    /// One sub-shape replicated around a circle
    CircularArray,
    /// Logarithmic spiral arms
    FibonacciSpiral,
}

impl DrawMode {
    /// Mode selected by the layer's shapes and flags
    ///
    /// Fibonacci wins when either end is a spiral, then radiating lines when
    /// both ends are spikes, then the circular array flag, then concentric.
    pub fn select(layer: &Layer) -> Self {
        let start = layer.start_shape;
        let end = layer.end_shape;

        if start == ShapeKind::FibonacciSpiral || end == ShapeKind::FibonacciSpiral {
            Self::FibonacciSpiral
        } else if start == ShapeKind::RadiatingLines && end == ShapeKind::RadiatingLines {
            Self::RadiatingLines
        } else if layer.circular_array.enabled {
            Self::CircularArray
        } else {
            Self::Concentric
        }
    }

    /// Whether the mode strokes open polylines only
    pub const fn is_line_based(self) -> bool {
        matches!(self, Self::RadiatingLines | Self::FibonacciSpiral)
    }

    /// Whether a layer in this mode gets its fill color applied
    pub fn fills(self, layer: &Layer) -> bool {
        layer.solid_fill && !self.is_line_based()
    }
}

/// Number of angle samples in one outline after the first
pub fn angle_sample_steps() -> usize {
    (TAU / CURVE_STEP_ANGLE).floor() as usize
}

/// Number of progression samples along one radiating line after the first
pub fn line_sample_steps() -> usize {
    (1.0 / LINE_STEP_T).round().max(1.0) as usize
}

/// Number of samples along one Fibonacci arm after the first
pub fn fibonacci_sample_steps(turns: u32) -> usize {
    let theta_max = TAU * f64::from(turns.max(1));
    ((theta_max / FIBONACCI_ANGLE_STEP).ceil() as usize).max(MIN_FIBONACCI_SAMPLES)
}

/// Emit the commands of `layer` into `sink` and return the mode used
///
/// Sets the stroke color and fill policy first, then draws in layer-local
/// coordinates centered on the origin.
pub fn draw_layer<S: DrawingSink + ?Sized>(
    sink: &mut S,
    layer: &Layer,
    layer_index: usize,
    distribution: f64,
    erosion: &ErosionField<'_>,
) -> DrawMode {
    let mode = DrawMode::select(layer);

    sink.set_stroke_color(layer.stroke_color);
    sink.set_fill_color(mode.fills(layer).then_some(layer.fill_color));

    let mut pass = LayerPass {
        layer,
        layer_index,
        distribution,
        erosion,
        fill: mode.fills(layer),
        stroke_width: None,
    };

    match mode {
        DrawMode::Concentric => pass.concentric(sink),
        DrawMode::RadiatingLines => pass.radiating_lines(sink),
        DrawMode::CircularArray => pass.circular_array(sink),
        DrawMode::FibonacciSpiral => pass.fibonacci(sink),
    }

    mode
}

/// Position of instance `index` in `[0, 1]`, zero for a single instance
fn progression(index: u32, count: u32) -> f64 {
    if count > 1 {
        f64::from(index) / f64::from(count - 1)
    } else {
        0.0
    }
}

struct LayerPass<'a, 'b> {
    layer: &'a Layer,
    layer_index: usize,
    distribution: f64,
    erosion: &'a ErosionField<'b>,
    fill: bool,
    stroke_width: Option<f64>,
}

impl LayerPass<'_, '_> {
    fn count(&self) -> u32 {
        self.layer.count.max(1)
    }

    fn rotation_offset(&self) -> f64 {
        self.layer.rotation_offset_deg.to_radians()
    }

    fn radius_at(&self, t: f64) -> f64 {
        lerp(
            self.layer.start_radius,
            self.layer.end_radius,
            apply_distribution(t, self.distribution),
        )
    }

    fn amplitude_at(&self, t: f64) -> f64 {
        let modulation = &self.layer.modulation;
        lerp(modulation.amplitude_start, modulation.amplitude_end, t)
    }

    fn line_width_at(&self, t: f64) -> f64 {
        lerp(self.layer.line_width_start, self.layer.line_width_end, t)
    }

    /// Primary waveform plus secondary offset
    fn offset_at(&self, phase: f64, amplitude: f64, progress: f64) -> f64 {
        let modulation = &self.layer.modulation;
        waveform(modulation.waveform, phase, modulation.duty)
            .mul_add(amplitude, secondary_modulation(progress, self.layer))
    }

    fn set_stroke_width<S: DrawingSink + ?Sized>(&mut self, sink: &mut S, width: f64) {
        let width = width.max(MIN_STROKE_WIDTH);
        if self.stroke_width != Some(width) {
            sink.set_stroke_width(width);
            self.stroke_width = Some(width);
        }
    }

    fn concentric<S: DrawingSink + ?Sized>(&mut self, sink: &mut S) {
        let count = self.count();
        let rotation = self.rotation_offset();

        for index in 0..count {
            let t = progression(index, count);
            let radius = self.radius_at(t);
            let shift = f64::from(index) * rotation;
            let width = self.line_width_at(t);
            self.set_stroke_width(sink, width);
            self.sweep_outline(sink, radius, shift, self.amplitude_at(t), t);
        }
    }

    fn circular_array<S: DrawingSink + ?Sized>(&mut self, sink: &mut S) {
        let count = self.count();
        let rotation = self.rotation_offset();
        let (scale_start, scale_end) = self.layer.circular_array.scale_factors();
        let spread = self.layer.circular_array.radial_spread;

        for index in 0..count {
            let t = progression(index, count);
            let origin_radius = lerp(self.layer.start_radius, self.layer.end_radius, spread * t);
            let angle = f64::from(index) * TAU / f64::from(count);
            let instance_scale = lerp(scale_start, scale_end, t);

            sink.push();
            sink.translate(origin_radius * angle.cos(), origin_radius * angle.sin());
            sink.rotate(angle + rotation);
            sink.scale(instance_scale);

            // Compensate the instance scale so the visible thickness stays put
            let width = self.line_width_at(t) / instance_scale.max(MIN_INSTANCE_SCALE);
            self.stroke_width = None;
            self.set_stroke_width(sink, width);
            self.sweep_outline(sink, self.radius_at(t), 0.0, self.amplitude_at(t), 0.0);

            sink.pop();
        }
    }

    /// One full angle sweep of the morphed, modulated outline
    fn sweep_outline<S: DrawingSink + ?Sized>(
        &self,
        sink: &mut S,
        radius: f64,
        shift: f64,
        amplitude: f64,
        morph: f64,
    ) {
        let layer = self.layer;
        let frequency = f64::from(layer.modulation.frequency);
        let start = (layer.start_shape, layer.start_sides);
        let end = (layer.end_shape, layer.end_sides);
        let mut outline = OutlineEmitter::new(self.fill);

        for step in 0..=angle_sample_steps() {
            let angle = step as f64 * CURVE_STEP_ANGLE;
            let base = morph_radius(start, end, radius, angle, morph, layer.count);
            let r = base + self.offset_at(angle.mul_add(frequency, shift), amplitude, angle / TAU);

            let x = r * (angle + shift).cos();
            let y = r * (angle + shift).sin();
            let keep = self.erosion.keep(x, y, self.layer_index);

            outline.push(sink, x, y, keep);
        }

        outline.finish(sink);
    }

    fn radiating_lines<S: DrawingSink + ?Sized>(&mut self, sink: &mut S) {
        let layer = self.layer;
        let count = self.count();
        let rotation = self.rotation_offset();
        let frequency = f64::from(layer.modulation.frequency);
        let start = (layer.start_shape, layer.start_sides);
        let end = (layer.end_shape, layer.end_sides);
        let steps = line_sample_steps();

        for index in 0..count {
            let base_angle = f64::from(index).mul_add(TAU / f64::from(count), rotation);
            let tangent = base_angle + FRAC_PI_2;
            let mut previous: Option<LineSample> = None;

            for step in 0..=steps {
                let t = step as f64 / steps as f64;
                let r = self.radius_at(t);
                let shaped = morph_radius(start, end, r, base_angle, t, layer.count);
                let nudge = (shaped - r) * RADIAL_NUDGE;
                let offset = self.offset_at(t * frequency * TAU, self.amplitude_at(t), t);

                let x = (r + nudge).mul_add(base_angle.cos(), offset * tangent.cos());
                let y = (r + nudge).mul_add(base_angle.sin(), offset * tangent.sin());
                let sample = LineSample {
                    x,
                    y,
                    progress: t,
                    keep: self.erosion.keep(x, y, self.layer_index),
                };

                self.stroke_segment(sink, previous, sample);
                previous = Some(sample);
            }
        }
    }

    fn fibonacci<S: DrawingSink + ?Sized>(&mut self, sink: &mut S) {
        let layer = self.layer;
        let count = self.count();
        let rotation = self.rotation_offset();
        let frequency = f64::from(layer.modulation.frequency);
        let turns = layer.fibonacci.turns.max(1);
        let theta_max = TAU * f64::from(turns);
        let growth = SPIRAL_GROWTH / f64::from(turns);
        let direction: f64 = if layer.fibonacci.reversed { -1.0 } else { 1.0 };
        let steps = fibonacci_sample_steps(turns);

        // Spiral radius r0 * e^(b * theta) with r0 = 1, normalized to [0, 1]
        let spiral_min = 1.0;
        let spiral_max = (growth * theta_max).exp();
        let spiral_span = (spiral_max - spiral_min).max(DIVISION_FLOOR);

        for index in 0..count {
            let base_angle = f64::from(index).mul_add(TAU / f64::from(count), rotation);
            let mut previous: Option<LineSample> = None;

            for step in 0..=steps {
                let u = step as f64 / steps as f64;
                let sweep = u * theta_max;
                let spiral = ((growth * sweep).exp() - spiral_min) / spiral_span;
                let r = self.radius_at(spiral);
                let offset = self.offset_at(u * frequency * TAU, self.amplitude_at(u), u);

                let angle = direction.mul_add(sweep, base_angle);
                let tangent = angle + FRAC_PI_2;
                let x = r.mul_add(angle.cos(), offset * tangent.cos());
                let y = r.mul_add(angle.sin(), offset * tangent.sin());
                let sample = LineSample {
                    x,
                    y,
                    progress: u,
                    keep: self.erosion.keep(x, y, self.layer_index),
                };

                self.stroke_segment(sink, previous, sample);
                previous = Some(sample);
            }
        }
    }

    /// Stroke from `previous` to `current` unless both endpoints are eroded
    fn stroke_segment<S: DrawingSink + ?Sized>(
        &mut self,
        sink: &mut S,
        previous: Option<LineSample>,
        current: LineSample,
    ) {
        let Some(previous) = previous else {
            return;
        };
        if !(previous.keep || current.keep) {
            return;
        }

        let midpoint = (previous.progress + current.progress) * 0.5;
        let width = self.line_width_at(midpoint);
        self.set_stroke_width(sink, width);
        sink.line(previous.x, previous.y, current.x, current.y);
    }
}

#[derive(Clone, Copy, Debug)]
struct LineSample {
    x: f64,
    y: f64,
    progress: f64,
    keep: bool,
}

/// Keep/break state machine for one swept outline
///
/// Stroked outlines keep a vertex when it or its predecessor survives
/// erosion and split into open segments where both fail. Filled outlines
/// skip rejected vertices and stay one closed path.
struct OutlineEmitter {
    filled: bool,
    emitting: bool,
    previous_keep: Option<bool>,
    broken: bool,
}

impl OutlineEmitter {
    const fn new(filled: bool) -> Self {
        Self {
            filled,
            emitting: false,
            previous_keep: None,
            broken: false,
        }
    }

    fn push<S: DrawingSink + ?Sized>(&mut self, sink: &mut S, x: f64, y: f64, keep: bool) {
        let visible = if self.filled {
            keep
        } else {
            keep || self.previous_keep.unwrap_or(false)
        };
        self.previous_keep = Some(keep);

        if visible {
            if !self.emitting {
                sink.begin_path();
                self.emitting = true;
            }
            sink.vertex(x, y);
        } else {
            self.broken = true;
            if self.emitting && !self.filled {
                sink.close_path(false);
                self.emitting = false;
            }
        }
    }

    fn finish<S: DrawingSink + ?Sized>(self, sink: &mut S) {
        if self.emitting {
            sink.close_path(self.filled || !self.broken);
        }
    }
}
