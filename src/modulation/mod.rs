//! Periodic and sample-and-hold boundary modulation

/// Waveform shapes and secondary sample-and-hold offsets
pub mod waveform;

pub use waveform::Waveform;
