//! Bounded numeric value generators.

use rand::Rng;

/// Generate a random integer in the given range (inclusive).
pub fn random_long<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.random_range(min..=max)
}

/// Generate a random float in `[min, max]`, rounded to `scale` fractional digits.
pub fn random_double<R: Rng + ?Sized>(rng: &mut R, scale: u8, min: i64, max: i64) -> f64 {
    let raw = rng.random_range(min as f64..=max as f64);
    let factor = 10f64.powi(scale as i32);
    (raw * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_long_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let v = random_long(&mut rng, 10, 20);
            assert!((10..=20).contains(&v));
        }
    }

    #[test]
    fn test_random_long_single_value_range() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(random_long(&mut rng, 7, 7), 7);
    }

    #[test]
    fn test_random_double_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let v = random_double(&mut rng, 2, 0, 100);
            assert!((0.0..=100.0).contains(&v));
        }
    }

    #[test]
    fn test_random_double_respects_scale() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let v = random_double(&mut rng, 3, 0, 10);
            // Rounded to 3 digits: scaling by 1000 must give an integer.
            let scaled = v * 1000.0;
            assert!((scaled - scaled.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(random_long(&mut rng1, 0, 1000), random_long(&mut rng2, 0, 1000));
        assert_eq!(
            random_double(&mut rng1, 2, 0, 1000),
            random_double(&mut rng2, 2, 0, 1000)
        );
    }
}
