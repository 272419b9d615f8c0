//! Drawing commands and the sink interface
//!
//! The geometry engine talks to a [`DrawingSink`]. A [`CommandStream`] is
//! itself a sink that records every call, so geometry can be computed once
//! and replayed into the raster preview and the vector export.

use crate::document::layer::Rgba;
use crate::render::transform::TransformStack;

/// Path-building target with a canvas-style transform stack
pub trait DrawingSink {
    /// Fill the whole canvas with `color`
    fn background(&mut self, color: Rgba);
    /// Save the current transform
    fn push(&mut self);
    /// Restore the last saved transform
    fn pop(&mut self);
    /// Translate the coordinate system
    fn translate(&mut self, x: f64, y: f64);
    /// Rotate the coordinate system by `angle` radians
    fn rotate(&mut self, angle: f64);
    /// Uniformly scale the coordinate system
    fn scale(&mut self, factor: f64);
    /// Color of subsequent strokes
    fn set_stroke_color(&mut self, color: Rgba);
    /// Fill color of subsequent closed paths, `None` for no fill
    fn set_fill_color(&mut self, color: Option<Rgba>);
    /// Width of subsequent strokes, in local units
    fn set_stroke_width(&mut self, width: f64);
    /// Start a new path
    fn begin_path(&mut self);
    /// Append a vertex to the current path
    fn vertex(&mut self, x: f64, y: f64);
    /// End the current path, joining its ends when `closed`
    fn close_path(&mut self, closed: bool);
    /// Stroke a single segment
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
}

/// One recorded sink call
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`DrawingSink::background`]
    Background(Rgba),
    /// [`DrawingSink::push`]
    Push,
    /// [`DrawingSink::pop`]
    Pop,
    /// [`DrawingSink::translate`]
    Translate {
        /// Horizontal offset
        x: f64,
        /// Vertical offset
        y: f64,
    },
    /// [`DrawingSink::rotate`]
    Rotate(f64),
    /// [`DrawingSink::scale`]
    Scale(f64),
    /// [`DrawingSink::set_stroke_color`]
    StrokeColor(Rgba),
    /// [`DrawingSink::set_fill_color`]
    FillColor(Option<Rgba>),
    /// [`DrawingSink::set_stroke_width`]
    StrokeWidth(f64),
    /// [`DrawingSink::begin_path`]
    BeginPath,
    /// [`DrawingSink::vertex`]
    Vertex {
        /// Horizontal coordinate
        x: f64,
        /// Vertical coordinate
        y: f64,
    },
    /// [`DrawingSink::close_path`]
    ClosePath {
        /// Whether the ends were joined
        closed: bool,
    },
    /// [`DrawingSink::line`]
    Line {
        /// Start, horizontal
        x1: f64,
        /// Start, vertical
        y1: f64,
        /// End, horizontal
        x2: f64,
        /// End, vertical
        y2: f64,
    },
}

impl DrawCommand {
    /// Forward this command to `sink`
    pub fn apply<S: DrawingSink + ?Sized>(&self, sink: &mut S) {
        match *self {
            Self::Background(color) => sink.background(color),
            Self::Push => sink.push(),
            Self::Pop => sink.pop(),
            Self::Translate { x, y } => sink.translate(x, y),
            Self::Rotate(angle) => sink.rotate(angle),
            Self::Scale(factor) => sink.scale(factor),
            Self::StrokeColor(color) => sink.set_stroke_color(color),
            Self::FillColor(color) => sink.set_fill_color(color),
            Self::StrokeWidth(width) => sink.set_stroke_width(width),
            Self::BeginPath => sink.begin_path(),
            Self::Vertex { x, y } => sink.vertex(x, y),
            Self::ClosePath { closed } => sink.close_path(closed),
            Self::Line { x1, y1, x2, y2 } => sink.line(x1, y1, x2, y2),
        }
    }
}

/// Device-space geometry of one stroked path or line run
#[derive(Clone, Debug, PartialEq)]
pub struct TracedPath {
    /// Vertices after all transforms
    pub points: Vec<(f64, f64)>,
    /// Whether the path was closed
    pub closed: bool,
    /// Stroke width after all transforms
    pub width: f64,
}

/// Recorded sequence of drawing commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandStream {
    commands: Vec<DrawCommand>,
}

impl CommandStream {
    /// Empty stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in emission order
    pub const fn commands(&self) -> &[DrawCommand] {
        self.commands.as_slice()
    }

    /// Number of recorded commands
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing was recorded
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replay every command into `sink`
    pub fn replay<S: DrawingSink + ?Sized>(&self, sink: &mut S) {
        for command in &self.commands {
            command.apply(sink);
        }
    }

    /// Resolve the stream into device-space paths
    ///
    /// Vertex paths come out one per `begin_path`/`close_path` pair. Line
    /// segments that continue from the previous segment's end with the same
    /// width are joined into one run, the same way the vector export
    /// writes them.
    pub fn traced_paths(&self) -> Vec<TracedPath> {
        let mut transform = TransformStack::new();
        let mut width = 1.0;
        let mut paths = Vec::new();
        let mut current: Option<TracedPath> = None;
        let mut runs = LineRuns::new();

        for command in &self.commands {
            match *command {
                DrawCommand::Push => transform.push(),
                DrawCommand::Pop => transform.pop(),
                DrawCommand::Translate { x, y } => transform.translate(x, y),
                DrawCommand::Rotate(angle) => transform.rotate(angle),
                DrawCommand::Scale(factor) => transform.scale(factor),
                DrawCommand::StrokeWidth(value) => width = value,
                DrawCommand::BeginPath => {
                    paths.extend(runs.take());
                    current = Some(TracedPath {
                        points: Vec::new(),
                        closed: false,
                        width: transform.width(width),
                    });
                }
                DrawCommand::Vertex { x, y } => {
                    if let Some(path) = current.as_mut() {
                        path.points.push(transform.apply(x, y));
                    }
                }
                DrawCommand::ClosePath { closed } => {
                    if let Some(mut path) = current.take().filter(|path| !path.points.is_empty()) {
                        path.closed = closed;
                        paths.push(path);
                    }
                }
                DrawCommand::Line { x1, y1, x2, y2 } => {
                    let start = transform.apply(x1, y1);
                    let end = transform.apply(x2, y2);
                    paths.extend(runs.push(start, end, transform.width(width)));
                }
                DrawCommand::Background(_)
                | DrawCommand::StrokeColor(_)
                | DrawCommand::FillColor(_) => {
                    paths.extend(runs.take());
                }
            }
        }

        paths.extend(runs.take());
        paths
    }
}

/// Joins consecutive line segments into open polyline runs
///
/// A segment extends the open run when it starts exactly where the run
/// ends and has the same device width. Sinks flush the open run on every
/// state change that would end a path.
#[derive(Clone, Debug, Default)]
pub struct LineRuns {
    open: Option<TracedPath>,
}

impl LineRuns {
    /// No open run
    pub const fn new() -> Self {
        Self { open: None }
    }

    /// Add a device-space segment, returning the run it ends, if any
    pub fn push(&mut self, start: (f64, f64), end: (f64, f64), width: f64) -> Option<TracedPath> {
        match self.open.as_mut() {
            Some(run) if continues_run(run, start, width) => {
                run.points.push(end);
                None
            }
            _ => self.open.replace(TracedPath {
                points: vec![start, end],
                closed: false,
                width,
            }),
        }
    }

    /// Close and return the open run
    pub fn take(&mut self) -> Option<TracedPath> {
        self.open.take()
    }
}

/// Whether a segment starting at `start` extends the open run
pub fn continues_run(run: &TracedPath, start: (f64, f64), width: f64) -> bool {
    run.points.last() == Some(&start) && (run.width - width).abs() <= f64::EPSILON
}

impl DrawingSink for CommandStream {
    fn background(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Background(color));
    }

    fn push(&mut self) {
        self.commands.push(DrawCommand::Push);
    }

    fn pop(&mut self) {
        self.commands.push(DrawCommand::Pop);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::Translate { x, y });
    }

    fn rotate(&mut self, angle: f64) {
        self.commands.push(DrawCommand::Rotate(angle));
    }

    fn scale(&mut self, factor: f64) {
        self.commands.push(DrawCommand::Scale(factor));
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Option<Rgba>) {
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::StrokeWidth(width));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn vertex(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::Vertex { x, y });
    }

    fn close_path(&mut self, closed: bool) {
        self.commands.push(DrawCommand::ClosePath { closed });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2 });
    }
}
