//! Tuned constants and runtime configuration defaults

// Sampling resolution shared by raster and vector output
/// Angle step for swept shape outlines, in radians
pub const CURVE_STEP_ANGLE: f64 = 0.002;
/// Progression step along radiating lines
pub const LINE_STEP_T: f64 = 0.002;
/// Angular step used to derive the Fibonacci sample count
pub const FIBONACCI_ANGLE_STEP: f64 = 0.02;
/// Minimum number of samples along one Fibonacci arm
pub const MIN_FIBONACCI_SAMPLES: usize = 50;

// Numeric guards
/// Floor applied to exponential denominators
pub const DIVISION_FLOOR: f64 = 1e-12;
/// Floor applied to the polygon edge cosine magnitude
pub const COSINE_FLOOR: f64 = 1e-6;
/// Distribution parameters below this magnitude are treated as zero
pub const DISTRIBUTION_IDENTITY_EPSILON: f64 = 1e-6;
/// Lower bound of the distribution parameter
pub const DISTRIBUTION_MIN: f64 = -3.0;
/// Upper bound of the distribution parameter
pub const DISTRIBUTION_MAX: f64 = 3.0;

// Deterministic noise
/// Multiplier of the sine hash
pub const HASH_MULTIPLIER: f64 = 43_758.545_3;
/// Seed offset of the primary sample-and-hold waveform
pub const PRIMARY_SAMPLE_HOLD_OFFSET: f64 = 0.4321;
/// Seed offset of the secondary sample-and-hold modulation
pub const SECONDARY_SAMPLE_HOLD_OFFSET: f64 = 1.2345;
/// Fixed seed of the coherent noise field
pub const DEFAULT_NOISE_SEED: u32 = 42;
/// Octaves summed by the coherent noise field
pub const NOISE_OCTAVES: usize = 4;
/// Base frequency of the coherent noise field
pub const NOISE_FREQUENCY: f64 = 1.0;
/// Frequency multiplier between octaves
pub const NOISE_LACUNARITY: f64 = 2.0;
/// Amplitude falloff between octaves
pub const NOISE_PERSISTENCE: f64 = 0.5;
/// Per-layer offset into the erosion noise field
pub const EROSION_LAYER_OFFSET: f64 = 103.764;

// Shape constants
/// Spike height as a fraction of the base radius
pub const SPIKE_AMPLITUDE: f64 = 0.45;
/// Exponent sharpening the spike profile
pub const SPIKE_EXPONENT: f64 = 6.0;
/// Minimum number of spikes around the circle
pub const MIN_SPIKE_COUNT: usize = 6;
/// Most instances a layer may draw
pub const MAX_INSTANCE_COUNT: u32 = 120;
/// Most turns a Fibonacci spiral may sweep
pub const MAX_SPIRAL_TURNS: u32 = 12;
/// Blend of the shape deviation applied to radiating lines
pub const RADIAL_NUDGE: f64 = 0.2;
/// Logarithmic spiral growth per turn count
pub const SPIRAL_GROWTH: f64 = 0.55;
/// Thinnest stroke ever emitted
pub const MIN_STROKE_WIDTH: f64 = 0.1;
/// Lower bound on the circular array instance scale divisor
pub const MIN_INSTANCE_SCALE: f64 = 0.0001;
/// Neutral circular array scale in percent
pub const NEUTRAL_ARRAY_SCALE_PERCENT: f64 = 100.0;

// Canvas
/// Logical canvas width in pixels
pub const CANVAS_WIDTH: f64 = 700.0;
/// Logical canvas height in pixels
pub const CANVAS_HEIGHT: f64 = 830.0;
/// Smallest canvas scale factor
pub const MIN_CANVAS_SCALE: f64 = 0.5;
/// Largest canvas scale factor
pub const MAX_CANVAS_SCALE: f64 = 1.5;
/// Gray level of the background fill
pub const BACKGROUND_GRAY: u8 = 20;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Extension of pattern documents
pub const DOCUMENT_EXTENSION: &str = "json";
/// Decimal places written for SVG coordinates
pub const SVG_COORDINATE_PRECISION: usize = 3;
