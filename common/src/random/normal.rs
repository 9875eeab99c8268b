use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use tracing::warn;

use super::{RandomError, RandomResult};

pub const DEFAULT_MEAN: f64 = 0.5;
pub const DEFAULT_STD_DEV: f64 = 0.25;

/// Largest standard deviation accepted without a rejection cap. With the mean
/// inside `[0, 1]` this keeps more than a third of all draws.
pub const MAX_UNCAPPED_STD_DEV: f64 = 1.0;

/// A normal distribution truncated to `[0, 1]` by rejection sampling.
///
/// Draws outside `[0, 1]` are discarded and redrawn. With the default
/// parameters roughly 95% of draws are accepted, so the loop is short in
/// practice, but it has no upper bound unless `max_attempts` is set. Once the
/// cap is hit the last draw is clamped into `[0, 1]`.
///
/// The cap counts rejected draws only. It says nothing about how long the
/// generator takes to produce a single standard-normal draw, which a
/// degenerate generator can stretch indefinitely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncatedNormal {
    mean: f64,
    std_dev: f64,
    max_attempts: Option<u32>,
}

impl Default for TruncatedNormal {
    fn default() -> Self {
        Self::standard()
    }
}

impl TruncatedNormal {
    /// Mean 0.5, standard deviation 0.25, no rejection cap.
    pub const fn standard() -> Self {
        Self {
            mean: DEFAULT_MEAN,
            std_dev: DEFAULT_STD_DEV,
            max_attempts: None,
        }
    }

    /// Uncapped distribution. The mean must lie in `[0, 1]` and `std_dev` must
    /// not exceed [`MAX_UNCAPPED_STD_DEV`], otherwise the rejection loop could
    /// run for practically ever. Use [`TruncatedNormal::capped`] for anything
    /// else.
    pub fn new(mean: f64, std_dev: f64) -> RandomResult<Self> {
        let normal = Self::unchecked(mean, std_dev)?;
        if !(0.0..=1.0).contains(&mean) || std_dev > MAX_UNCAPPED_STD_DEV {
            return Err(RandomError::UnboundedRejection { mean, std_dev });
        }
        Ok(normal)
    }

    /// Distribution with a rejection cap. Any finite mean and positive finite
    /// `std_dev` is accepted since the cap bounds the loop.
    pub fn capped(mean: f64, std_dev: f64, max_attempts: u32) -> RandomResult<Self> {
        Self::unchecked(mean, std_dev)?.with_max_attempts(max_attempts)
    }

    fn unchecked(mean: f64, std_dev: f64) -> RandomResult<Self> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(RandomError::InvalidNormal { mean, std_dev });
        }
        Ok(Self {
            mean,
            std_dev,
            max_attempts: None,
        })
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> RandomResult<Self> {
        if max_attempts == 0 {
            return Err(RandomError::InvalidAttempts);
        }
        self.max_attempts = Some(max_attempts);
        Ok(self)
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    /// Draws a value in `[0, 1]`.
    pub fn sample_unit<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let mut rejected: u32 = 0;
        loop {
            let z: f64 = rng.sample(StandardNormal);
            let v = self.mean + self.std_dev * z;
            if (0.0..=1.0).contains(&v) {
                return v;
            }
            rejected += 1;
            if let Some(max_attempts) = self.max_attempts {
                if rejected >= max_attempts {
                    warn!(
                        "truncated normal rejected {} draws (mean={}, std_dev={}); clamping {}",
                        rejected, self.mean, self.std_dev, v
                    );
                    return v.clamp(0.0, 1.0);
                }
            }
        }
    }

    /// Draws an integer between `min_number` and `max_number`, inclusive.
    /// The bounds may be given in either order.
    ///
    /// The unit draw `v` maps to `a + round(v * (b - a))`, rounding half away
    /// from zero.
    pub fn sample_between<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        min_number: i32,
        max_number: i32,
    ) -> i32 {
        let (a, b) = if min_number <= max_number {
            (min_number, max_number)
        } else {
            (max_number, min_number)
        };
        let v = self.sample_unit(rng);
        let offset = (v * (b as i64 - a as i64) as f64).round() as i64;
        (a as i64 + offset) as i32
    }
}

impl Distribution<f64> for TruncatedNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sample_unit(rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use test_case::test_case;

    use super::*;

    #[test_case(0, 100 ; "percent")]
    #[test_case(100, 0 ; "reversed bounds")]
    #[test_case(-5, 5 ; "around zero")]
    #[test_case(7, 7 ; "single value")]
    #[test_case(i32::MIN, i32::MAX ; "full span")]
    fn test_sample_between_bounds(min_number: i32, max_number: i32) {
        let (a, b) = (min_number.min(max_number), min_number.max(max_number));
        let normal = TruncatedNormal::standard();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let v = normal.sample_between(&mut rng, min_number, max_number);
            assert!(v >= a && v <= b, "{v} outside [{a}, {b}]");
        }
    }

    #[test]
    fn test_sample_unit_in_range() {
        let normal = TruncatedNormal::default();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..10_000 {
            let v = normal.sample(&mut rng);
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_sample_between_centered() {
        let normal = TruncatedNormal::standard();
        let mut rng = StdRng::seed_from_u64(99);
        let n = 20_000;
        let total: i64 = (0..n)
            .map(|_| normal.sample_between(&mut rng, 0, 100) as i64)
            .sum();
        let mean = total as f64 / n as f64;
        assert!((mean - 50.0).abs() < 2.0, "mean {mean} too far from 50");
    }

    #[test]
    fn test_capped_rejection_clamps() {
        // virtually every draw lands near 5.0, far above the unit interval
        let normal = TruncatedNormal::capped(5.0, 0.01, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(normal.sample_unit(&mut rng), 1.0);
            assert_eq!(normal.sample_between(&mut rng, 0, 10), 10);
        }
    }

    #[test_case(f64::NAN, 0.25 ; "nan mean")]
    #[test_case(0.5, 0.0 ; "zero std_dev")]
    #[test_case(0.5, -1.0 ; "negative std_dev")]
    #[test_case(f64::INFINITY, 0.25 ; "infinite mean")]
    fn test_new_rejects(mean: f64, std_dev: f64) {
        assert!(matches!(
            TruncatedNormal::new(mean, std_dev),
            Err(RandomError::InvalidNormal { .. })
        ));
    }

    #[test_case(5.0, 0.01 ; "mean far above")]
    #[test_case(-0.5, 0.25 ; "mean below")]
    #[test_case(0.5, 50.0 ; "std_dev too wide")]
    fn test_uncapped_requires_reachable_interval(mean: f64, std_dev: f64) {
        assert_eq!(
            TruncatedNormal::new(mean, std_dev),
            Err(RandomError::UnboundedRejection { mean, std_dev })
        );
        let capped = TruncatedNormal::capped(mean, std_dev, 16).unwrap();
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..1000 {
            let v = capped.sample_between(&mut rng, 0, 10);
            assert!((0..=10).contains(&v));
        }
    }

    #[test_case(0.0, 1.0 ; "mean at lower edge")]
    #[test_case(1.0, 1.0 ; "mean at upper edge")]
    #[test_case(0.3, 0.05 ; "narrow")]
    fn test_uncapped_accepts_reachable_interval(mean: f64, std_dev: f64) {
        let normal = TruncatedNormal::new(mean, std_dev).unwrap();
        assert_eq!(normal.max_attempts(), None);
        let mut rng = StdRng::seed_from_u64(22);
        for _ in 0..1000 {
            assert!((0.0..=1.0).contains(&normal.sample_unit(&mut rng)));
        }
    }

    #[test]
    fn test_capped_rejects_invalid_parameters() {
        assert!(matches!(
            TruncatedNormal::capped(f64::NAN, 0.25, 4),
            Err(RandomError::InvalidNormal { .. })
        ));
        assert_eq!(
            TruncatedNormal::capped(5.0, 0.25, 0),
            Err(RandomError::InvalidAttempts)
        );
    }

    #[test]
    fn test_zero_attempts_rejected() {
        assert_eq!(
            TruncatedNormal::standard().with_max_attempts(0),
            Err(RandomError::InvalidAttempts)
        );
    }

    #[test]
    fn test_default_parameters() {
        let normal = TruncatedNormal::default();
        assert_eq!(normal.mean(), DEFAULT_MEAN);
        assert_eq!(normal.std_dev(), DEFAULT_STD_DEV);
        assert_eq!(normal.max_attempts(), None);
    }
}
