//! Layer parameters and the ordered document they compose into

/// Per-layer parameter set and colors
pub mod layer;
/// Ordered layer sequence with document-level operations
pub mod state;

pub use layer::{Layer, Rgba};
pub use state::DocumentState;
