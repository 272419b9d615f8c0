//! Layered generative line-art renderer
//!
//! Each layer is a family of concentric, radiating, replicated or spiral
//! curves whose outlines morph between two base shapes and are modulated by
//! periodic waveforms, optionally eroded by coherent noise. A document of
//! layers renders once into a command stream that feeds both an
//! anti-aliased raster preview and an SVG export with identical geometry.

#![forbid(unsafe_code)]

/// Layer parameters and the ordered document state
pub mod document;
/// Shape sampling, erosion and the four drawing modes
pub mod geometry;
/// Input/output operations, configuration and error handling
pub mod io;
/// Noise sources, distribution remapping and interpolation
pub mod math;
/// Periodic waveforms and secondary modulation
pub mod modulation;
/// Command stream, transform stack and the raster and vector sinks
pub mod render;

pub use io::error::{PatternError, Result};
