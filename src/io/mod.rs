//! Document batches, artifact export and error handling

/// Command-line arguments and the batch driver
pub mod cli;
/// Tuned constants and defaults
pub mod configuration;
/// Error type and helpers
pub mod error;
/// PNG and SVG artifact writers
pub mod export;
/// Multi-document progress display
pub mod progress;
