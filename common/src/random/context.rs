use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use super::uniform::{try_weighted_bool, weighted_bool};
use super::{RandomConfig, RandomResult, TruncatedNormal, UniformRange};

/// Owns a generator and the truncated-normal parameters, and exposes the same
/// operations as the process-wide functions in this module.
///
/// Use this instead of the process-wide generator when results have to be
/// reproducible, or when each thread should draw from its own generator.
///
/// ```
/// use stdext_common::random::RandomContext;
///
/// let mut a = RandomContext::seeded(1234);
/// let mut b = RandomContext::seeded(1234);
/// assert_eq!(a.range(0, 1000), b.range(0, 1000));
/// assert_eq!(a.normal_random(-50, 50), b.normal_random(-50, 50));
/// ```
#[derive(Debug, Clone)]
pub struct RandomContext<R = StdRng> {
    rng: R,
    normal: TruncatedNormal,
}

impl<R: Rng> RandomContext<R> {
    pub fn new(rng: R) -> Self {
        Self::with_normal(rng, TruncatedNormal::standard())
    }

    pub fn with_normal(rng: R, normal: TruncatedNormal) -> Self {
        Self { rng, normal }
    }

    /// Uniform draw between `min` and `max`. See [`UniformRange`].
    pub fn range<T: UniformRange>(&mut self, min: T, max: T) -> T {
        T::sample_range(&mut self.rng, min, max)
    }

    pub fn random_bool(&mut self, probability: f64) -> bool {
        weighted_bool(&mut self.rng, probability)
    }

    pub fn try_random_bool(&mut self, probability: f64) -> RandomResult<bool> {
        try_weighted_bool(&mut self.rng, probability)
    }

    pub fn normal_random(&mut self, min_number: i32, max_number: i32) -> i32 {
        self.normal
            .sample_between(&mut self.rng, min_number, max_number)
    }

    pub fn normal(&self) -> &TruncatedNormal {
        &self.normal
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandomContext<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &RandomConfig) -> RandomResult<Self> {
        let normal = config.normal.build()?;
        trace!(
            "random context: seed={:?}, mean={}, std_dev={}, max_attempts={:?}",
            config.seed,
            normal.mean(),
            normal.std_dev(),
            normal.max_attempts()
        );
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::with_normal(rng, normal))
    }
}

impl Default for RandomContext<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}
