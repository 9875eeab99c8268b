//! Small numeric helpers shared across the workspace: an Adler-32 checksum
//! and a handful of pseudo-random generators.
extern crate rand;
extern crate rand_distr;

pub mod hash;
pub mod random;

pub mod prelude {
    pub use crate::hash::*;
    pub use crate::random::*;
}
