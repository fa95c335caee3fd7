use rand::{Rng, RngExt};

pub struct IntegerUtils;

impl IntegerUtils {
    /// Uniform draw from the inclusive range `min..=max`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }

        rng.random_range(min..=max)
    }

    /// Uniform index into a collection of `len` items.
    pub fn random_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }

        rng.random_range(0..len)
    }
}

pub struct FloatUtils;

impl FloatUtils {
    /// Bernoulli trial; probabilities outside `0.0..=1.0` are clamped.
    pub fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
        if probability.is_nan() || probability <= 0.0 {
            return false;
        }

        rng.random_bool(probability.min(1.0))
    }

    pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
        rng.random_bool(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_stays_within_inclusive_bounds() {
        let mut rng = StdRng::seed_from_u64(7);

        let mut seen_min = false;
        let mut seen_max = false;

        for _ in 0..500 {
            let value = IntegerUtils::random(&mut rng, 2, 3);
            assert!((2..=3).contains(&value));

            seen_min |= value == 2;
            seen_max |= value == 3;
        }

        assert!(seen_min && seen_max);
    }

    #[test]
    fn random_with_collapsed_range_returns_min() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(IntegerUtils::random(&mut rng, 70, 70), 70);
        assert_eq!(IntegerUtils::random(&mut rng, 9, 3), 9);
    }

    #[test]
    fn chance_edges() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            assert!(!FloatUtils::chance(&mut rng, 0.0));
            assert!(!FloatUtils::chance(&mut rng, -1.0));
            assert!(FloatUtils::chance(&mut rng, 1.0));
            assert!(FloatUtils::chance(&mut rng, 4.2));
        }
    }
}
