use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use super::uniform::{try_weighted_bool, weighted_bool};
use super::{RandomResult, TruncatedNormal, UniformRange};

static GENERATOR: LazyLock<Mutex<StdRng>> = LazyLock::new(|| {
    debug!("seeding process-wide random generator from OS entropy");
    Mutex::new(StdRng::from_entropy())
});

static NORMAL: TruncatedNormal = TruncatedNormal::standard();

/// Exclusive access to the process-wide generator.
///
/// The generator is seeded once from OS entropy on first use and lives for
/// the rest of the process. Every function in this module locks it, so drop
/// the guard before calling any of them on the same thread.
pub fn random_gen() -> MutexGuard<'static, StdRng> {
    // generator state stays valid even if a holder panicked
    GENERATOR.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Uniform draw between `min` and `max` from the process-wide generator.
///
/// ```
/// use stdext_common::random::random_range;
///
/// let die = random_range(1, 6);
/// assert!((1..=6).contains(&die));
///
/// let x = random_range(0.0_f32, 10.0);
/// assert!(x >= 0.0 && x <= 10.0);
/// ```
pub fn random_range<T: UniformRange>(min: T, max: T) -> T {
    T::sample_range(&mut *random_gen(), min, max)
}

/// Returns `true` with the given probability.
pub fn random_bool(probability: f64) -> bool {
    weighted_bool(&mut *random_gen(), probability)
}

pub fn try_random_bool(probability: f64) -> RandomResult<bool> {
    try_weighted_bool(&mut *random_gen(), probability)
}

/// Integer between the two bounds (either order), normally distributed around
/// their midpoint. See [`TruncatedNormal::sample_between`].
pub fn normal_random(min_number: i32, max_number: i32) -> i32 {
    NORMAL.sample_between(&mut *random_gen(), min_number, max_number)
}
