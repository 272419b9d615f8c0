//! Tests for tuned constants and defaults

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;
    use wavyshapes::io::configuration::{
        BACKGROUND_GRAY, CANVAS_HEIGHT, CANVAS_WIDTH, CURVE_STEP_ANGLE, DEFAULT_NOISE_SEED,
        DISTRIBUTION_MAX, DISTRIBUTION_MIN, FIBONACCI_ANGLE_STEP, LINE_STEP_T,
        MAX_CANVAS_SCALE, MAX_INDIVIDUAL_PROGRESS_BARS, MIN_CANVAS_SCALE, MIN_FIBONACCI_SAMPLES,
        MIN_STROKE_WIDTH, OUTPUT_SUFFIX, PROGRESS_BAR_WIDTH, SPIKE_AMPLITUDE,
    };

    // Tests sampling steps give dense outlines
    // Verified by coarsening the angle step
    #[test]
    fn test_sampling_resolution() {
        assert!(TAU / CURVE_STEP_ANGLE > 3000.0);
        assert!((1.0 / LINE_STEP_T - 500.0).abs() < 1e-9);
        assert!(TAU / FIBONACCI_ANGLE_STEP > MIN_FIBONACCI_SAMPLES as f64);
    }

    // Tests canvas defaults and scale bounds
    // Verified by swapping width and height
    #[test]
    fn test_canvas_defaults() {
        assert!((CANVAS_WIDTH - 700.0).abs() < f64::EPSILON);
        assert!((CANVAS_HEIGHT - 830.0).abs() < f64::EPSILON);
        assert!(MIN_CANVAS_SCALE < 1.0 && MAX_CANVAS_SCALE > 1.0);
        assert_eq!(BACKGROUND_GRAY, 20);
    }

    // Tests the distribution range is symmetric around the identity
    // Verified by shifting the lower bound
    #[test]
    fn test_distribution_range() {
        assert!((DISTRIBUTION_MIN + DISTRIBUTION_MAX).abs() < f64::EPSILON);
        assert!(DISTRIBUTION_MAX > 0.0);
    }

    // Tests shape and stroke guards
    // Verified by allowing zero-width strokes
    #[test]
    fn test_guards() {
        assert!(MIN_STROKE_WIDTH > 0.0);
        assert!(SPIKE_AMPLITUDE > 0.0 && SPIKE_AMPLITUDE < 1.0);
        assert_eq!(DEFAULT_NOISE_SEED, 42);
    }

    // Tests output and progress settings
    // Verified by clearing the output suffix
    #[test]
    fn test_output_settings() {
        assert_eq!(OUTPUT_SUFFIX, "_result");
        assert!(MAX_INDIVIDUAL_PROGRESS_BARS > 0);
        assert!(PROGRESS_BAR_WIDTH > 0);
    }
}
