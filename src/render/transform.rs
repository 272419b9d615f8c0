//! Canvas-style transform stack over [`kurbo::Affine`]
//!
//! Each operation post-multiplies the current matrix, so the last
//! operation applied is the first one a point goes through. A layer
//! pushes translate, then rotate, then scale.

pub use kurbo::Affine;
use kurbo::Point;

/// Uniform length scale of `transform`, the square root of its area scale
pub fn length_scale(transform: &Affine) -> f64 {
    transform.determinant().abs().sqrt()
}

/// Current transform with a save/restore stack
#[derive(Clone, Debug, Default)]
pub struct TransformStack {
    current: Affine,
    saved: Vec<Affine>,
}

impl TransformStack {
    /// Stack starting from the identity
    pub fn new() -> Self {
        Self::default()
    }

    /// Current transform
    pub const fn current(&self) -> Affine {
        self.current
    }

    /// Nesting depth of saved transforms
    pub const fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Save the current transform
    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restore the last saved transform, ignoring unbalanced pops
    pub fn pop(&mut self) {
        if let Some(previous) = self.saved.pop() {
            self.current = previous;
        }
    }

    /// Apply a translation
    pub fn translate(&mut self, x: f64, y: f64) {
        self.current = self.current * Affine::translate((x, y));
    }

    /// Apply a rotation in radians
    pub fn rotate(&mut self, angle: f64) {
        self.current = self.current * Affine::rotate(angle);
    }

    /// Apply a uniform scale
    pub fn scale(&mut self, factor: f64) {
        self.current = self.current * Affine::scale(factor);
    }

    /// Map a point to device coordinates
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let point = self.current * Point::new(x, y);
        (point.x, point.y)
    }

    /// Map a stroke width to device units
    pub fn width(&self, width: f64) -> f64 {
        width * length_scale(&self.current)
    }
}
