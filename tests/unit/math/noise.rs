//! Tests for the stateless hash and the seeded coherent noise field

#[cfg(test)]
mod tests {
    use wavyshapes::math::noise::{CoherentNoise, fract, pseudo_random_hash};

    // Tests the hash is deterministic and stays in [0, 1)
    // Verified by adding a call counter to the seed
    #[test]
    fn test_hash_deterministic_and_bounded() {
        for step in -200..200 {
            let seed = f64::from(step) * 0.731 + 0.4321;
            let first = pseudo_random_hash(seed);
            let second = pseudo_random_hash(seed);
            assert_eq!(first.to_bits(), second.to_bits());
            assert!((0.0..1.0).contains(&first), "seed = {seed}");
        }
    }

    // Tests the hash follows fract(sin(seed) * 43758.5453)
    // Verified by changing the multiplier
    #[test]
    fn test_hash_formula() {
        let seed = 3.0_f64;
        let expected = fract(seed.sin() * 43_758.545_3);
        assert!((pseudo_random_hash(seed) - expected).abs() < 1e-12);
    }

    // Tests fract for negative inputs
    // Verified by using truncation instead of floor
    #[test]
    fn test_fract_negative() {
        assert!((fract(-0.25) - 0.75).abs() < 1e-12);
        assert!((fract(2.5) - 0.5).abs() < 1e-12);
    }

    // Tests noise samples stay in [0, 1]
    // Verified by removing the output clamp
    #[test]
    fn test_noise_range() {
        let noise = CoherentNoise::new(42);
        for i in 0..50 {
            for j in 0..50 {
                let value = noise.sample(f64::from(i) * 0.37 - 9.0, f64::from(j) * 0.41 - 9.0);
                assert!((0.0..=1.0).contains(&value));
            }
        }
    }

    // Tests identical seeds reproduce identical fields
    // Verified by building the field from a time-based seed
    #[test]
    fn test_noise_seed_reproducible() {
        let first = CoherentNoise::new(7);
        let second = CoherentNoise::new(7);
        for i in 0..20 {
            let (x, y) = (f64::from(i) * 1.3, f64::from(i) * -0.7);
            assert_eq!(first.sample(x, y).to_bits(), second.sample(x, y).to_bits());
        }
    }

    // Tests reseeding restores the original field exactly
    // Verified by skipping the field rebuild in reseed
    #[test]
    fn test_reseed_restores_field() {
        let reference = CoherentNoise::new(42);
        let mut noise = CoherentNoise::new(42);
        noise.reseed(1234);
        assert_eq!(noise.seed(), 1234);
        noise.reseed(42);

        for i in 0..20 {
            let (x, y) = (f64::from(i) * 0.93 + 0.1, f64::from(i) * 0.57 + 0.2);
            assert_eq!(noise.sample(x, y).to_bits(), reference.sample(x, y).to_bits());
        }
    }

    // Tests different seeds give different fields
    // Verified by ignoring the seed when building the field
    #[test]
    fn test_seeds_differ() {
        let a = CoherentNoise::new(1);
        let b = CoherentNoise::new(2);
        let differs = (0..50).any(|i| {
            let (x, y) = (f64::from(i) * 0.77 + 0.3, f64::from(i) * 0.31 + 0.6);
            (a.sample(x, y) - b.sample(x, y)).abs() > 1e-9
        });
        assert!(differs);
    }
}
