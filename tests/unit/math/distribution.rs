//! Tests for progression remapping and interpolation helpers

#[cfg(test)]
mod tests {
    use wavyshapes::math::distribution::{apply_distribution, lerp, wrap};

    const SAMPLES: [f64; 11] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

    // Tests zero parameter leaves the progression untouched
    // Verified by removing the identity branch
    #[test]
    fn test_zero_parameter_is_identity() {
        for t in SAMPLES {
            assert!((apply_distribution(t, 0.0) - t).abs() < 1e-12);
            assert!((apply_distribution(t, 1e-9) - t).abs() < 1e-12);
        }
    }

    // Tests both endpoints are fixed for every parameter
    // Verified by dropping the 1 - x mirror for negative k
    #[test]
    fn test_endpoints_fixed() {
        for k in [-3.0, -1.5, -0.2, 0.2, 1.0, 3.0] {
            assert!(apply_distribution(0.0, k).abs() < 1e-9, "k = {k}");
            assert!((apply_distribution(1.0, k) - 1.0).abs() < 1e-9, "k = {k}");
        }
    }

    // Tests the remap is monotonic non-decreasing
    // Verified by swapping numerator and denominator
    #[test]
    fn test_monotonic() {
        for k in [-3.0, -0.5, 0.5, 3.0] {
            let mut previous = apply_distribution(0.0, k);
            for step in 1..=100 {
                let value = apply_distribution(f64::from(step) / 100.0, k);
                assert!(value >= previous - 1e-12, "k = {k}, step = {step}");
                previous = value;
            }
        }
    }

    // Tests positive k lags and negative k leads the identity
    // Verified by inverting the sign test
    #[test]
    fn test_skew_direction() {
        assert!(apply_distribution(0.5, 2.0) < 0.5);
        assert!(apply_distribution(0.5, -2.0) > 0.5);
    }

    // Tests non-finite parameters fall back to identity
    // Verified by removing the finiteness check
    #[test]
    fn test_non_finite_parameter() {
        assert!((apply_distribution(0.25, f64::NAN) - 0.25).abs() < 1e-12);
        assert!((apply_distribution(0.25, f64::INFINITY) - 0.25).abs() < 1e-12);
    }

    // Tests interpolation endpoints and midpoint
    // Verified by swapping a and b
    #[test]
    fn test_lerp() {
        assert!((lerp(60.0, 220.0, 0.0) - 60.0).abs() < 1e-12);
        assert!((lerp(60.0, 220.0, 1.0) - 220.0).abs() < 1e-12);
        assert!((lerp(60.0, 220.0, 0.5) - 140.0).abs() < 1e-12);
    }

    // Tests wrap always lands in [0, m)
    // Verified by using the plain remainder operator
    #[test]
    fn test_wrap_non_negative() {
        assert!((wrap(-1.0, 4.0) - 3.0).abs() < 1e-12);
        assert!((wrap(9.0, 4.0) - 1.0).abs() < 1e-12);
        for x in [-100.5, -0.1, 0.0, 3.9, 250.25] {
            let wrapped = wrap(x, 4.0);
            assert!((0.0..4.0).contains(&wrapped), "x = {x}");
        }
    }
}
