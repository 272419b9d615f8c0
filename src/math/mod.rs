//! Mathematical utilities shared by the geometry engine

/// Exponential progression remapping and interpolation helpers
pub mod distribution;
/// Deterministic hash and coherent noise sources
pub mod noise;
