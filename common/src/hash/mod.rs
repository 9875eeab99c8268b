pub use adler32::*;

mod adler32;
