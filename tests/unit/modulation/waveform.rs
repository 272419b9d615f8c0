//! Tests for primary waveforms and the secondary sample-and-hold offset

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI, TAU};
    use wavyshapes::document::Layer;
    use wavyshapes::modulation::Waveform;
    use wavyshapes::modulation::waveform::{
        primary_sample_hold, secondary_modulation, waveform,
    };

    const ALL: [Waveform; 5] = [
        Waveform::Sine,
        Waveform::Cosine,
        Waveform::Square,
        Waveform::Triangle,
        Waveform::SampleHold,
    ];

    // Tests sine and cosine reference values
    // Verified by swapping the sine and cosine arms
    #[test]
    fn test_sine_cosine_values() {
        assert!(waveform(Waveform::Sine, 0.0, 0.5).abs() < 1e-12);
        assert!((waveform(Waveform::Sine, FRAC_PI_2, 0.5) - 1.0).abs() < 1e-12);
        assert!((waveform(Waveform::Cosine, 0.0, 0.5) - 1.0).abs() < 1e-12);
    }

    // Tests square only ever returns +1 or -1 and honors the duty cycle
    // Verified by comparing against a fixed 0.5 duty
    #[test]
    fn test_square_levels_and_duty() {
        for step in -100..100 {
            let value = waveform(Waveform::Square, f64::from(step) * 0.173, 0.3);
            assert!((value.abs() - 1.0).abs() < f64::EPSILON);
        }
        assert!((waveform(Waveform::Square, 0.2 * TAU, 0.3) - 1.0).abs() < 1e-12);
        assert!((waveform(Waveform::Square, 0.4 * TAU, 0.3) + 1.0).abs() < 1e-12);
        // Negative phases wrap into the same period
        assert!((waveform(Waveform::Square, -0.8 * TAU, 0.3) - 1.0).abs() < 1e-12);
    }

    // Tests triangle peaks and zero crossings
    // Verified by dropping the 2/pi scale
    #[test]
    fn test_triangle_shape() {
        assert!(waveform(Waveform::Triangle, 0.0, 0.5).abs() < 1e-12);
        assert!((waveform(Waveform::Triangle, FRAC_PI_2, 0.5) - 1.0).abs() < 1e-9);
        assert!((waveform(Waveform::Triangle, PI / 4.0, 0.5) - 0.5).abs() < 1e-9);
        assert!((waveform(Waveform::Triangle, -FRAC_PI_2, 0.5) + 1.0).abs() < 1e-9);
    }

    // Tests every waveform is bounded by 1 and the periodic ones repeat every 2pi
    // Verified by removing the 2/pi triangle scale
    #[test]
    fn test_period_and_bounds() {
        for kind in ALL {
            for step in 0..200 {
                let phase = f64::from(step).mul_add(0.0917, 0.013);
                let value = waveform(kind, phase, 0.5);
                assert!(value.abs() <= 1.0 + 1e-12, "{kind:?}");
                if kind != Waveform::SampleHold {
                    let shifted = waveform(kind, phase + TAU, 0.5);
                    assert!((value - shifted).abs() < 1e-6, "{kind:?} at {phase}");
                }
            }
        }
    }

    // Tests consecutive turns hold independent levels
    // Verified by hashing a constant seed
    #[test]
    fn test_sample_hold_changes_between_turns() {
        let levels: Vec<f64> = (0..8)
            .map(|turn| primary_sample_hold(f64::from(turn).mul_add(TAU, 0.5)))
            .collect();
        assert!(levels.windows(2).any(|pair| match pair {
            [a, b] => (a - b).abs() > 1e-9,
            _ => false,
        }));
    }

    // Tests sample-and-hold is constant within one turn
    // Verified by hashing the raw phase
    #[test]
    fn test_sample_hold_constant_within_turn() {
        let level = primary_sample_hold(0.1);
        assert!((primary_sample_hold(3.0) - level).abs() < 1e-12);
        assert!((primary_sample_hold(6.2) - level).abs() < 1e-12);
        assert!((-1.0..1.0).contains(&level));
    }

    // Tests disabled secondary modulation contributes nothing
    // Verified by ignoring the enabled flag
    #[test]
    fn test_secondary_disabled_is_zero() {
        let layer = Layer::default();
        for step in 0..=10 {
            assert!(secondary_modulation(f64::from(step) / 10.0, &layer).abs() < 1e-12);
        }
    }

    // Tests enabled secondary modulation is additive-only and binned
    // Verified by mapping the hash to [-1, 1]
    #[test]
    fn test_secondary_non_negative_and_binned() {
        let mut layer = Layer::default();
        layer.secondary.enabled = true;
        layer.secondary.frequency = 4.0;
        layer.secondary.amplitude = 20.0;

        for step in 0..=100 {
            let value = secondary_modulation(f64::from(step) / 100.0, &layer);
            assert!((0.0..=20.0).contains(&value));
        }
        let a = secondary_modulation(0.01, &layer);
        let b = secondary_modulation(0.24, &layer);
        assert!((a - b).abs() < 1e-12);
    }

    // Tests waveform names in documents, including UI aliases
    // Verified by removing the serde alias
    #[test]
    fn test_waveform_names() {
        let parsed: Waveform =
            serde_json::from_str("\"sample & hold\"").expect("alias should parse");
        assert_eq!(parsed, Waveform::SampleHold);
        let encoded = serde_json::to_string(&Waveform::Triangle).expect("should encode");
        assert_eq!(encoded, "\"triangle\"");
    }
}
