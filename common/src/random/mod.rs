//! Pseudo-random helpers.
//!
//! Two ways in:
//!
//! * process-wide functions ([`random_range`], [`random_bool`],
//!   [`normal_random`]) backed by one lazily seeded generator behind a mutex,
//! * [`RandomContext`], which owns its generator and can be seeded for
//!   reproducible runs.
//!
//! Both are thin wrappers over the same generic samplers, so they agree on
//! semantics. None of this is suitable for cryptographic use.

pub use config::*;
pub use context::*;
pub use global::*;
pub use normal::*;
pub use random_error::*;
pub use uniform::*;

mod config;
mod context;
mod global;
mod normal;
mod random_error;
mod uniform;
