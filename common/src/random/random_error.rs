use thiserror::Error;

pub type RandomResult<T> = Result<T, RandomError>;

/// Errors raised by the checked random helpers and by configuration.
#[derive(Debug, PartialEq, Clone, Error)]
pub enum RandomError {
    #[error("Invalid probability {0}: expected a value within [0, 1]")]
    InvalidProbability(f64),
    #[error("Invalid normal distribution: mean={mean}, std_dev={std_dev}")]
    InvalidNormal { mean: f64, std_dev: f64 },
    #[error("Invalid rejection cap: max_attempts must be greater than zero")]
    InvalidAttempts,
    #[error("Normal distribution mean={mean}, std_dev={std_dev} rarely lands in [0, 1]; set max_attempts")]
    UnboundedRejection { mean: f64, std_dev: f64 },
}
