//! SVG export sink
//!
//! Writes every path in device coordinates, after the transform stack has
//! been applied, so exported coordinates match the raster preview exactly.
//! Consecutive line segments sharing an endpoint and a width are merged
//! into a single polyline element to keep the document compact.

use crate::document::layer::Rgba;
use crate::io::configuration::SVG_COORDINATE_PRECISION;
use crate::render::command::{DrawingSink, LineRuns, TracedPath};
use crate::render::transform::TransformStack;
use std::fmt::Write;

/// Retained vector sink producing an SVG document
#[derive(Clone, Debug)]
pub struct SvgSink {
    width: f64,
    height: f64,
    body: String,
    transform: TransformStack,
    stroke: Rgba,
    fill: Option<Rgba>,
    stroke_width: f64,
    path: Option<Vec<(f64, f64)>>,
    path_width: f64,
    runs: LineRuns,
}

impl SvgSink {
    /// Sink for a canvas of the given logical size
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            transform: TransformStack::new(),
            stroke: Rgba::WHITE,
            fill: None,
            stroke_width: 1.0,
            path: None,
            path_width: 1.0,
            runs: LineRuns::new(),
        }
    }

    /// Complete the document and return it as a string
    pub fn finish(mut self) -> String {
        self.flush_run();

        let mut document = String::with_capacity(self.body.len() + 256);
        let _ = writeln!(
            document,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = format_number(self.width),
            h = format_number(self.height),
        );
        let _ = writeln!(
            document,
            r#"<g stroke-linecap="round" stroke-linejoin="round">"#
        );
        document.push_str(&self.body);
        document.push_str("</g>\n</svg>\n");
        document
    }

    fn flush_run(&mut self) {
        if let Some(run) = self.runs.take() {
            self.write_run(&run);
        }
    }

    fn write_run(&mut self, run: &TracedPath) {
        self.write_path(&run.points, false, None, run.width);
    }

    fn write_path(&mut self, points: &[(f64, f64)], closed: bool, fill: Option<Rgba>, width: f64) {
        let mut data = String::with_capacity(points.len() * 20);
        for (index, &(x, y)) in points.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            let _ = write!(
                data,
                "{command}{} {} ",
                format_coordinate(x),
                format_coordinate(y)
            );
        }
        if closed {
            data.push('Z');
        }

        let _ = write!(
            self.body,
            r#"<path d="{}" fill="{}""#,
            data.trim_end(),
            fill.map_or_else(|| "none".to_string(), Rgba::to_hex_rgb),
        );
        if let Some(color) = fill.filter(|color| color.a() < 255) {
            let _ = write!(self.body, r#" fill-opacity="{}""#, format_number(color.opacity()));
        }
        let _ = write!(
            self.body,
            r#" stroke="{}" stroke-width="{}""#,
            self.stroke.to_hex_rgb(),
            format_coordinate(width),
        );
        if self.stroke.a() < 255 {
            let _ = write!(
                self.body,
                r#" stroke-opacity="{}""#,
                format_number(self.stroke.opacity())
            );
        }
        self.body.push_str("/>\n");
    }
}

impl DrawingSink for SvgSink {
    fn background(&mut self, color: Rgba) {
        self.flush_run();
        let _ = writeln!(
            self.body,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}" stroke="none"/>"#,
            format_number(self.width),
            format_number(self.height),
            color.to_hex_rgb(),
        );
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
        if points.is_empty() {
            return;
        }
        let fill = if closed { self.fill } else { None };
        self.write_path(&points, closed, fill, self.path_width);
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let start = self.transform.apply(x1, y1);
        let end = self.transform.apply(x2, y2);
        let width = self.transform.width(self.stroke_width);

        if let Some(run) = self.runs.push(start, end, width) {
            self.write_run(&run);
        }
    }
}

fn format_coordinate(value: f64) -> String {
    let formatted = format!("{value:.precision$}", precision = SVG_COORDINATE_PRECISION);
    // Avoid writing negative zero
    if formatted.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        formatted.trim_start_matches('-').to_string()
    } else {
        formatted
    }
}

fn format_number(value: f64) -> String {
    let formatted = format_coordinate(value);
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}
