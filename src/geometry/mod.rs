//! Geometry and modulation engine
//!
//! This module contains the per-angle radius sampling, the erosion test
//! and the four drawing modes that turn a layer into drawing commands.

/// Drawing modes and the per-sample pipeline
pub mod engine;
/// Noise-driven point rejection
pub mod erosion;
/// Undisturbed boundary radius of each shape kind
pub mod shape;

pub use engine::{DrawMode, draw_layer};
pub use erosion::ErosionField;
pub use shape::ShapeKind;
