//! Render context: composes a document into drawing commands
//!
//! The context owns everything a render needs besides the document itself:
//! the seeded noise field, the canvas size and the background color. A
//! render draws every layer in order into any [`DrawingSink`], each inside
//! its own transform scope centered on the canvas.

use crate::document::layer::Rgba;
use crate::document::state::DocumentState;
use crate::geometry::engine::{DrawMode, draw_layer};
use crate::geometry::erosion::ErosionField;
use crate::io::configuration::{
    BACKGROUND_GRAY, CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_NOISE_SEED, MAX_CANVAS_SCALE,
    MIN_CANVAS_SCALE,
};
use crate::io::error::Result;
use crate::math::noise::CoherentNoise;
use crate::render::command::{CommandStream, DrawingSink};
use crate::render::raster::RasterSink;
use crate::render::vector::SvgSink;
use image::RgbaImage;

/// Logical canvas dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    /// Width in logical units
    pub width: f64,
    /// Height in logical units
    pub height: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

impl CanvasSize {
    /// Default canvas scaled per axis, each factor clamped to `[0.5, 1.5]`
    pub fn scaled(scale_x: f64, scale_y: f64) -> Self {
        let clamp = |factor: f64| {
            if factor.is_finite() {
                factor.clamp(MIN_CANVAS_SCALE, MAX_CANVAS_SCALE)
            } else {
                1.0
            }
        };
        Self {
            width: CANVAS_WIDTH * clamp(scale_x),
            height: CANVAS_HEIGHT * clamp(scale_y),
        }
    }

    /// Center point every layer is drawn around
    pub const fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Pixel dimensions of the raster output
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        (
            self.width.round().max(1.0) as u32,
            self.height.round().max(1.0) as u32,
        )
    }
}

/// Shared state for rendering documents
#[derive(Clone, Debug)]
pub struct RenderContext {
    noise: CoherentNoise,
    canvas: CanvasSize,
    background: Rgba,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(DEFAULT_NOISE_SEED)
    }
}

impl RenderContext {
    /// Context on the default canvas with noise seeded by `seed`
    pub fn new(seed: u32) -> Self {
        Self {
            noise: CoherentNoise::new(seed),
            canvas: CanvasSize::default(),
            background: Rgba::gray(BACKGROUND_GRAY),
        }
    }

    /// Replace the canvas size
    #[must_use]
    pub const fn with_canvas(mut self, canvas: CanvasSize) -> Self {
        self.canvas = canvas;
        self
    }

    /// Scale the default canvas per axis
    #[must_use]
    pub fn with_canvas_scale(self, scale_x: f64, scale_y: f64) -> Self {
        self.with_canvas(CanvasSize::scaled(scale_x, scale_y))
    }

    /// Replace the background color
    #[must_use]
    pub const fn with_background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    /// Rebuild the noise field, reproducing any earlier render with `seed`
    pub fn reseed(&mut self, seed: u32) {
        self.noise.reseed(seed);
    }

    /// Current noise seed
    pub const fn seed(&self) -> u32 {
        self.noise.seed()
    }

    /// Noise field used for erosion
    pub const fn noise(&self) -> &CoherentNoise {
        &self.noise
    }

    /// Canvas size
    pub const fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Background color
    pub const fn background(&self) -> Rgba {
        self.background
    }

    /// Record the full composition of `document` as a command stream
    pub fn render(&self, document: &DocumentState) -> CommandStream {
        let mut stream = CommandStream::new();
        self.render_into(document, &mut stream);
        stream
    }

    /// Draw `document` directly into `sink`
    pub fn render_into<S: DrawingSink + ?Sized>(&self, document: &DocumentState, sink: &mut S) {
        self.render_into_with(document, sink, |_, _| {});
    }

    /// Draw `document` into `sink`, calling `on_layer` after each layer
    ///
    /// Layers are drawn from a sanitized copy of the document. The callback
    /// receives the layer index and the mode it was drawn in.
    pub fn render_into_with<S, F>(&self, document: &DocumentState, sink: &mut S, mut on_layer: F)
    where
        S: DrawingSink + ?Sized,
        F: FnMut(usize, DrawMode),
    {
        sink.background(self.background);

        let document = document.sanitized();
        let erosion = ErosionField::new(&self.noise, &document.layers);
        let distribution = document.distribution;
        let (center_x, center_y) = self.canvas.center();

        for (index, layer) in document.layers.iter().enumerate() {
            sink.push();
            sink.translate(center_x, center_y);
            sink.rotate(layer.global_rotation_deg.to_radians());
            let mode = draw_layer(sink, layer, index, distribution, &erosion);
            sink.pop();

            log::debug!("Drew layer {index} '{}' as {mode:?}", layer.name);
            on_layer(index, mode);
        }
    }

    /// Raster preview of a recorded stream on this context's canvas
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the canvas cannot be allocated
    pub fn rasterize(&self, stream: &CommandStream) -> Result<RgbaImage> {
        let (width, height) = self.canvas.pixel_dimensions();
        let mut sink = RasterSink::new(width, height)?;
        stream.replay(&mut sink);
        Ok(sink.into_image())
    }

    /// SVG export of a recorded stream on this context's canvas
    pub fn vectorize(&self, stream: &CommandStream) -> String {
        let mut sink = SvgSink::new(self.canvas.width, self.canvas.height);
        stream.replay(&mut sink);
        sink.finish()
    }
}
