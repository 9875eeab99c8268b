use serde::{Deserialize, Serialize};

use super::normal::{DEFAULT_MEAN, DEFAULT_STD_DEV};
use super::{RandomResult, TruncatedNormal};

/// Parameters of the truncated normal used by `normal_random`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalConfig {
    pub mean: f64,
    pub std_dev: f64,
    /// `None` keeps redrawing until a value lands in `[0, 1]`.
    pub max_attempts: Option<u32>,
}

impl Default for NormalConfig {
    fn default() -> Self {
        Self {
            mean: DEFAULT_MEAN,
            std_dev: DEFAULT_STD_DEV,
            max_attempts: None,
        }
    }
}

impl NormalConfig {
    /// Without `max_attempts` the parameters must keep the interval reachable,
    /// see [`TruncatedNormal::new`].
    pub fn build(&self) -> RandomResult<TruncatedNormal> {
        match self.max_attempts {
            Some(max_attempts) => TruncatedNormal::capped(self.mean, self.std_dev, max_attempts),
            None => TruncatedNormal::new(self.mean, self.std_dev),
        }
    }
}

/// Settings for building a [`RandomContext`](super::RandomContext).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Fixed seed for reproducible sequences. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub normal: NormalConfig,
}
