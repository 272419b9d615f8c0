//! Anti-aliased raster sink over a `tiny-skia` pixmap
//!
//! Every path is stroked as one outline, so joints between its segments are
//! blended once. Consecutive line segments are joined into runs first, the
//! same way the vector export joins them. Closed paths with a fill color
//! are filled with the nonzero winding rule before their outline is
//! stroked. Coordinates are resolved to device space by the transform
//! stack, so the pixmap is always drawn with the identity transform.

use crate::document::layer::Rgba;
use crate::io::error::{Result, invalid_parameter};
use crate::render::command::{DrawingSink, LineRuns, TracedPath};
use crate::render::transform::TransformStack;
use image::RgbaImage;
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, Transform,
};

/// Immediate-mode sink drawing into a premultiplied RGBA pixmap
#[derive(Clone, Debug)]
pub struct RasterSink {
    pixmap: Pixmap,
    transform: TransformStack,
    stroke: Rgba,
    fill: Option<Rgba>,
    stroke_width: f64,
    path: Option<Vec<(f64, f64)>>,
    path_width: f64,
    runs: LineRuns,
}

impl RasterSink {
    /// Transparent canvas of `width` by `height` pixels
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or the pixmap
    /// cannot be allocated
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            invalid_parameter(
                "canvas",
                &format!("{width}x{height}"),
                &"raster dimensions must be non-zero and fit in memory",
            )
        })?;

        Ok(Self {
            pixmap,
            transform: TransformStack::new(),
            stroke: Rgba::WHITE,
            fill: None,
            stroke_width: 1.0,
            path: None,
            path_width: 1.0,
            runs: LineRuns::new(),
        })
    }

    /// Finish pending line runs and convert to straight-alpha RGBA
    pub fn into_image(mut self) -> RgbaImage {
        self.flush_run();
        let pixmap = &self.pixmap;
        RgbaImage::from_fn(pixmap.width(), pixmap.height(), |x, y| {
            let color = pixmap.pixel(x, y).map_or([0; 4], |pixel| {
                let straight = pixel.demultiply();
                [
                    straight.red(),
                    straight.green(),
                    straight.blue(),
                    straight.alpha(),
                ]
            });
            image::Rgba(color)
        })
    }

    fn flush_run(&mut self) {
        if let Some(run) = self.runs.take() {
            self.stroke_run(&run);
        }
    }

    fn stroke_run(&mut self, run: &TracedPath) {
        if let Some(path) = build_path(&run.points, false) {
            self.stroke_path(&path, run.width);
        }
    }

    fn stroke_path(&mut self, path: &Path, width: f64) {
        let stroke = Stroke {
            width: width as f32,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            path,
            &paint(self.stroke),
            &stroke,
            Transform::identity(),
            None,
        );
    }
}

fn paint(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r(), color.g(), color.b(), color.a());
    paint.anti_alias = true;
    paint
}

// None for fewer than two points or non-finite coordinates
fn build_path(points: &[(f64, f64)], closed: bool) -> Option<Path> {
    let (&(x, y), rest) = points.split_first()?;
    let mut builder = PathBuilder::with_capacity(points.len() + 1, points.len() + 1);
    builder.move_to(x as f32, y as f32);
    for &(x, y) in rest {
        builder.line_to(x as f32, y as f32);
    }
    if closed {
        builder.close();
    }
    builder.finish()
}

impl DrawingSink for RasterSink {
    fn background(&mut self, color: Rgba) {
        self.flush_run();
        self.pixmap
            .fill(Color::from_rgba8(color.r(), color.g(), color.b(), color.a()));
    }

    fn push(&mut self) {
        self.transform.push();
    }

    fn pop(&mut self) {
        self.transform.pop();
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.transform.translate(x, y);
    }

    fn rotate(&mut self, angle: f64) {
        self.transform.rotate(angle);
    }

    fn scale(&mut self, factor: f64) {
        self.transform.scale(factor);
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.flush_run();
        self.stroke = color;
    }

    fn set_fill_color(&mut self, color: Option<Rgba>) {
        self.flush_run();
        self.fill = color;
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }

    fn begin_path(&mut self) {
        self.flush_run();
        self.path = Some(Vec::new());
        self.path_width = self.transform.width(self.stroke_width);
    }

    fn vertex(&mut self, x: f64, y: f64) {
        let point = self.transform.apply(x, y);
        if let Some(path) = self.path.as_mut() {
            path.push(point);
        }
    }

    fn close_path(&mut self, closed: bool) {
        let Some(points) = self.path.take() else {
            return;
        };
        let Some(path) = build_path(&points, closed) else {
            return;
        };

        if closed && let Some(fill) = self.fill {
            self.pixmap.fill_path(
                &path,
                &paint(fill),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
        self.stroke_path(&path, self.path_width);
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let start = self.transform.apply(x1, y1);
        let end = self.transform.apply(x2, y2);
        let width = self.transform.width(self.stroke_width);
        if let Some(run) = self.runs.push(start, end, width) {
            self.stroke_run(&run);
        }
    }
}
