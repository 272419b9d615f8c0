//! Drawing command stream and its raster and vector consumers
//!
//! Geometry is computed once per render into a [`CommandStream`], then
//! replayed unchanged into every sink. Preview and export therefore see
//! the same coordinates and the same path breaks.

/// Drawing commands, the sink interface and the recording stream
pub mod command;
/// Render context and document composition
pub mod context;
/// Raster sink drawing into an RGBA image
pub mod raster;
/// Affine transform stack shared by the sinks
pub mod transform;
/// SVG sink for vector export
pub mod vector;

pub use command::{CommandStream, DrawCommand, DrawingSink};
pub use context::{CanvasSize, RenderContext};
pub use raster::RasterSink;
pub use transform::{Affine, TransformStack};
pub use vector::SvgSink;
