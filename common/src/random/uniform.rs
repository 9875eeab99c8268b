use rand::Rng;
use rand_distr::{Bernoulli, Distribution};

use super::{RandomError, RandomResult};

/// Types that can be drawn uniformly between two bounds.
///
/// Implemented for `i32` and `f32`. Both may return either bound.
pub trait UniformRange: Copy + PartialOrd {
    fn sample_range<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self;
}

impl UniformRange for i32 {
    /// Draws from `[0, i32::MAX]` and folds the value into `[min, max]` with a
    /// modulo. The fold is slightly biased whenever the range size does not
    /// divide 2^31; that bias is kept so results match existing callers.
    ///
    /// Reversed bounds are swapped.
    fn sample_range<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let v = rng.gen_range(0..=i32::MAX) as i64;
        // the span can reach 2^32, so stay in i64
        let span = hi as i64 - lo as i64 + 1;
        (lo as i64 + v % span) as i32
    }
}

impl UniformRange for f32 {
    /// Maps a uniform draw from `[0, 1)` linearly onto `min..max`. The product
    /// is rounded in `f32`, so the top draw can come out as exactly `max`.
    fn sample_range<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
        let u: f32 = rng.gen();
        min + (max - min) * u
    }
}

/// Returns `true` with the given probability.
///
/// Probabilities below zero (and NaN) never succeed, probabilities above one
/// always do.
pub fn weighted_bool<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    match Bernoulli::new(probability) {
        Ok(dist) => dist.sample(rng),
        Err(_) => probability > 1.0,
    }
}

/// Like [`weighted_bool`], but rejects probabilities outside `[0, 1]`.
pub fn try_weighted_bool<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> RandomResult<bool> {
    let dist =
        Bernoulli::new(probability).map_err(|_| RandomError::InvalidProbability(probability))?;
    Ok(dist.sample(rng))
}
