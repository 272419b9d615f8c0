//! Layer parameter set
//!
//! A layer is the unit of configuration and composition. It is fully
//! self-contained: the engine reads it as an immutable snapshot and every
//! field falls back to a neutral default when absent from a document.

use crate::geometry::shape::ShapeKind;
use crate::io::configuration::{
    MAX_INSTANCE_COUNT, MAX_SPIRAL_TURNS, MIN_STROKE_WIDTH, NEUTRAL_ARRAY_SCALE_PERCENT,
};
use crate::io::error::{PatternError, invalid_parameter};
use crate::modulation::Waveform;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 8-bit RGBA color, serialized as `#rrggbb` or `#rrggbbaa`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    /// Opaque white
    pub const WHITE: Self = Self([255, 255, 255, 255]);

    /// Opaque color from red, green and blue channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// Opaque gray of the given level
    pub const fn gray(level: u8) -> Self {
        Self([level, level, level, 255])
    }

    /// Red channel
    pub const fn r(self) -> u8 {
        self.0[0]
    }

    /// Green channel
    pub const fn g(self) -> u8 {
        self.0[1]
    }

    /// Blue channel
    pub const fn b(self) -> u8 {
        self.0[2]
    }

    /// Alpha channel
    pub const fn a(self) -> u8 {
        self.0[3]
    }

    /// Alpha as a fraction in `[0, 1]`
    pub fn opacity(self) -> f64 {
        f64::from(self.a()) / 255.0
    }

    /// `#rrggbb` without the alpha channel
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a() == 255 {
            write!(f, "{}", self.to_hex_rgb())
        } else {
            write!(f, "{}{:02x}", self.to_hex_rgb(), self.a())
        }
    }
}

impl FromStr for Rgba {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(invalid_parameter(
                "color",
                &s,
                &"expected #rrggbb or #rrggbbaa",
            ));
        }

        let mut channels = [255u8; 4];
        for (channel, index) in channels.iter_mut().zip((0..digits.len()).step_by(2)) {
            let pair = digits
                .get(index..index + 2)
                .ok_or_else(|| invalid_parameter("color", &s, &"truncated channel"))?;
            *channel = u8::from_str_radix(pair, 16)
                .map_err(|error| invalid_parameter("color", &s, &error))?;
        }

        Ok(Self(channels))
    }
}

impl TryFrom<String> for Rgba {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

/// Primary waveform modulation of the boundary
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modulation {
    /// Cycles per full turn (or per unit progression in line modes)
    pub frequency: u32,
    /// Amplitude of the first instance
    pub amplitude_start: f64,
    /// Amplitude of the last instance
    pub amplitude_end: f64,
    /// Waveform shape
    pub waveform: Waveform,
    /// Square wave duty cycle, strictly inside `(0, 1)`
    pub duty: f64,
}

impl Default for Modulation {
    fn default() -> Self {
        Self {
            frequency: 8,
            amplitude_start: 30.0,
            amplitude_end: 0.0,
            waveform: Waveform::Sine,
            duty: 0.5,
        }
    }
}

/// Additive sample-and-hold offset layered over the waveform
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondaryModulation {
    /// Whether the offset is applied
    pub enabled: bool,
    /// Held segments per unit progression
    pub frequency: f64,
    /// Largest offset added, never subtracted
    pub amplitude: f64,
}

impl Default for SecondaryModulation {
    fn default() -> Self {
        Self {
            enabled: false,
            frequency: 8.0,
            amplitude: 20.0,
        }
    }
}

/// Noise masking of boundary points
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Erosion {
    /// Whether points are tested at all
    pub enabled: bool,
    /// Noise coordinate multiplier
    pub scale: f64,
    /// Minimum noise value a point needs at the center
    pub threshold: f64,
    /// How strongly the threshold rises toward the outer edge
    pub decay: f64,
}

impl Default for Erosion {
    fn default() -> Self {
        Self {
            enabled: false,
            scale: 2.0,
            threshold: 0.5,
            decay: 0.5,
        }
    }
}

/// Options of the Fibonacci spiral mode
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FibonacciOptions {
    /// Sweep clockwise instead of counter-clockwise
    pub reversed: bool,
    /// Full turns of each arm
    pub turns: u32,
}

impl Default for FibonacciOptions {
    fn default() -> Self {
        Self {
            reversed: false,
            turns: 4,
        }
    }
}

/// Options of the circular array mode
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircularArray {
    /// Replace concentric instances by an angular array of sub-shapes
    pub enabled: bool,
    /// Scale of the first instance in percent
    pub scale_start_percent: f64,
    /// Scale of the last instance in percent
    pub scale_end_percent: f64,
    /// Fraction of the radial range the instance origins travel
    pub radial_spread: f64,
}

impl Default for CircularArray {
    fn default() -> Self {
        Self {
            enabled: false,
            scale_start_percent: NEUTRAL_ARRAY_SCALE_PERCENT,
            scale_end_percent: NEUTRAL_ARRAY_SCALE_PERCENT,
            radial_spread: 0.0,
        }
    }
}

impl CircularArray {
    /// Start and end scale factors, with unset or invalid percentages read as 100%
    pub fn scale_factors(&self) -> (f64, f64) {
        (
            percent_or_neutral(self.scale_start_percent) / 100.0,
            percent_or_neutral(self.scale_end_percent) / 100.0,
        )
    }
}

/// Full parameter set of one layer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layer {
    /// Display label, unique within a document
    pub name: String,
    /// Stroke color
    pub stroke_color: Rgba,
    /// Fill color, used when `solid_fill` is set
    pub fill_color: Rgba,
    /// Fill closed shapes
    pub solid_fill: bool,
    /// Radius of the first instance
    pub start_radius: f64,
    /// Radius of the last instance, may be below `start_radius`
    pub end_radius: f64,
    /// Shape at the start of the morph
    pub start_shape: ShapeKind,
    /// Shape at the end of the morph
    pub end_shape: ShapeKind,
    /// Polygon sides at the start of the morph
    pub start_sides: u32,
    /// Polygon sides at the end of the morph
    pub end_sides: u32,
    /// Primary waveform modulation
    pub modulation: Modulation,
    /// Secondary sample-and-hold modulation
    pub secondary: SecondaryModulation,
    /// Repeated instances, lines or spiral arms
    pub count: u32,
    /// Incremental rotation per instance, in degrees
    pub rotation_offset_deg: f64,
    /// Rotation of the whole layer, in degrees
    pub global_rotation_deg: f64,
    /// Stroke width at the start of the progression
    pub line_width_start: f64,
    /// Stroke width at the end of the progression
    pub line_width_end: f64,
    /// Noise erosion
    pub erosion: Erosion,
    /// Fibonacci spiral options
    pub fibonacci: FibonacciOptions,
    /// Circular array options
    pub circular_array: CircularArray,
}

impl Default for Layer {
    fn default() -> Self {
        Self::new("Layer 1")
    }
}

impl Layer {
    /// Layer with default parameters and the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stroke_color: Rgba::WHITE,
            fill_color: Rgba::WHITE,
            solid_fill: false,
            start_radius: 60.0,
            end_radius: 220.0,
            start_shape: ShapeKind::Circle,
            end_shape: ShapeKind::Circle,
            start_sides: 6,
            end_sides: 6,
            modulation: Modulation::default(),
            secondary: SecondaryModulation::default(),
            count: 12,
            rotation_offset_deg: 0.0,
            global_rotation_deg: 0.0,
            line_width_start: 2.0,
            line_width_end: 2.0,
            erosion: Erosion::default(),
            fibonacci: FibonacciOptions::default(),
            circular_array: CircularArray::default(),
        }
    }

    /// Restore defaults while keeping the name and both colors
    pub fn reset_keeping_colors(&mut self) {
        let name = std::mem::take(&mut self.name);
        let stroke_color = self.stroke_color;
        let fill_color = self.fill_color;
        *self = Self {
            stroke_color,
            fill_color,
            ..Self::new(name)
        };
    }

    /// Larger of the two radii
    pub fn max_radius(&self) -> f64 {
        self.start_radius.max(self.end_radius)
    }

    /// Copy with every field clamped into its valid range
    ///
    /// Non-finite numbers fall back to the default value of the field.
    /// Radius order is preserved, so a reversed gradient stays reversed.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::new(self.name.clone());
        let modulation = &self.modulation;
        let secondary = &self.secondary;
        let erosion = &self.erosion;
        let array = &self.circular_array;

        Self {
            name: self.name.clone(),
            stroke_color: self.stroke_color,
            fill_color: self.fill_color,
            solid_fill: self.solid_fill,
            start_radius: finite_or(self.start_radius, defaults.start_radius).max(0.0),
            end_radius: finite_or(self.end_radius, defaults.end_radius).max(0.0),
            start_shape: self.start_shape,
            end_shape: self.end_shape,
            start_sides: self.start_sides.max(3),
            end_sides: self.end_sides.max(3),
            modulation: Modulation {
                frequency: modulation.frequency,
                amplitude_start: finite_or(
                    modulation.amplitude_start,
                    defaults.modulation.amplitude_start,
                )
                .max(0.0),
                amplitude_end: finite_or(
                    modulation.amplitude_end,
                    defaults.modulation.amplitude_end,
                )
                .max(0.0),
                waveform: modulation.waveform,
                duty: finite_or(modulation.duty, defaults.modulation.duty).clamp(0.01, 0.99),
            },
            secondary: SecondaryModulation {
                enabled: secondary.enabled,
                frequency: finite_or(secondary.frequency, defaults.secondary.frequency)
                    .max(0.0),
                amplitude: finite_or(secondary.amplitude, defaults.secondary.amplitude)
                    .max(0.0),
            },
            count: self.count.clamp(1, MAX_INSTANCE_COUNT),
            rotation_offset_deg: finite_or(self.rotation_offset_deg, 0.0),
            global_rotation_deg: finite_or(self.global_rotation_deg, 0.0),
            line_width_start: finite_or(self.line_width_start, defaults.line_width_start)
                .max(MIN_STROKE_WIDTH),
            line_width_end: finite_or(self.line_width_end, defaults.line_width_end)
                .max(MIN_STROKE_WIDTH),
            erosion: Erosion {
                enabled: erosion.enabled,
                scale: positive_or(erosion.scale, defaults.erosion.scale),
                threshold: finite_or(erosion.threshold, defaults.erosion.threshold)
                    .clamp(0.0, 1.0),
                decay: finite_or(erosion.decay, defaults.erosion.decay).clamp(0.0, 1.0),
            },
            fibonacci: FibonacciOptions {
                reversed: self.fibonacci.reversed,
                turns: self.fibonacci.turns.clamp(1, MAX_SPIRAL_TURNS),
            },
            circular_array: CircularArray {
                enabled: array.enabled,
                scale_start_percent: percent_or_neutral(array.scale_start_percent),
                scale_end_percent: percent_or_neutral(array.scale_end_percent),
                radial_spread: finite_or(array.radial_spread, 0.0).clamp(0.0, 1.0),
            },
        }
    }
}

/// Largest finite radius over `layers`, at least 1
pub fn composition_radius(layers: &[Layer]) -> f64 {
    layers
        .iter()
        .map(Layer::max_radius)
        .filter(|radius| radius.is_finite())
        .fold(1.0, f64::max)
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

fn percent_or_neutral(percent: f64) -> f64 {
    positive_or(percent, NEUTRAL_ARRAY_SCALE_PERCENT)
}
