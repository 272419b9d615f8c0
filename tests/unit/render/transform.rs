//! Tests for affine composition and the save/restore stack

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;
    use wavyshapes::render::transform::length_scale;
    use wavyshapes::render::{Affine, TransformStack};

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    // Tests a fresh stack is the identity
    // Verified by starting from a unit translation
    #[test]
    fn test_identity() {
        let stack = TransformStack::new();
        assert!(close(stack.apply(3.0, -4.0), (3.0, -4.0)));
        assert!((stack.width(2.5) - 2.5).abs() < 1e-12);
        assert_eq!(stack.current(), Affine::IDENTITY);
    }

    // Tests translate, rotate, scale compose like a canvas
    // Verified by pre-multiplying instead of post-multiplying
    #[test]
    fn test_canvas_order() {
        let mut stack = TransformStack::new();
        stack.translate(100.0, 50.0);
        stack.rotate(FRAC_PI_2);
        stack.scale(2.0);

        // (1, 0) scales to (2, 0), rotates to (0, 2), then moves
        assert!(close(stack.apply(1.0, 0.0), (100.0, 52.0)));
        assert!(close(stack.apply(0.0, 1.0), (98.0, 50.0)));
        assert!((length_scale(&stack.current()) - 2.0).abs() < 1e-9);
    }

    // Tests pop restores the transform saved by push
    // Verified by popping to identity
    #[test]
    fn test_push_pop() {
        let mut stack = TransformStack::new();
        stack.translate(10.0, 0.0);
        stack.push();
        stack.scale(3.0);
        assert_eq!(stack.depth(), 1);
        assert!(close(stack.apply(1.0, 1.0), (13.0, 3.0)));

        stack.pop();
        assert_eq!(stack.depth(), 0);
        assert!(close(stack.apply(1.0, 1.0), (11.0, 1.0)));
    }

    // Tests unbalanced pops are ignored
    // Verified by resetting to identity on an empty pop
    #[test]
    fn test_unbalanced_pop() {
        let mut stack = TransformStack::new();
        stack.translate(5.0, 5.0);
        stack.pop();
        assert!(close(stack.apply(0.0, 0.0), (5.0, 5.0)));
    }

    // Tests stroke widths follow the uniform scale through rotations
    // Verified by ignoring the scale in width
    #[test]
    fn test_width_scales() {
        let mut stack = TransformStack::new();
        stack.rotate(0.7);
        stack.scale(0.5);
        assert!((stack.width(4.0) - 2.0).abs() < 1e-9);
        assert!((length_scale(&(Affine::rotate(0.7) * Affine::scale(0.5))) - 0.5).abs() < 1e-12);
    }
}
