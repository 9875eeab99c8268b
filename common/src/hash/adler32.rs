use std::hash::Hasher;

/// Largest prime smaller than 65536.
pub const ADLER_MOD: u32 = 65521;

/// Largest n such that 255n(n+1)/2 + (n+1)(ADLER_MOD-1) fits in a u32, i.e. the
/// most bytes that can be summed before the accumulators must be reduced.
pub const ADLER_BLOCK_LEN: usize = 5552;

/// Computes the Adler-32 checksum of `buffer`.
///
/// An empty buffer yields `1`.
///
/// ```
/// use stdext_common::hash::adler32;
///
/// assert_eq!(adler32(b""), 1);
/// assert_eq!(adler32(b"Wikipedia"), 0x11E6_0398);
/// ```
pub fn adler32(buffer: &[u8]) -> u32 {
    let mut hasher = Adler32::new();
    hasher.update(buffer);
    hasher.checksum()
}

/// Incremental Adler-32 state.
///
/// Feeding a buffer in any number of chunks gives the same result as
/// [`adler32`] over the whole buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Adler32 {
    a: u32,
    b: u32,
}

impl Default for Adler32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Adler32 {
    pub const fn new() -> Self {
        Self { a: 1, b: 0 }
    }

    /// Resumes from a checksum previously returned by [`Adler32::checksum`]
    /// (or [`adler32`]).
    pub const fn from_checksum(checksum: u32) -> Self {
        Self {
            a: checksum & 0xffff,
            b: checksum >> 16,
        }
    }

    pub fn update(&mut self, bytes: &[u8]) {
        let mut a = self.a;
        let mut b = self.b;
        for block in bytes.chunks(ADLER_BLOCK_LEN) {
            for &byte in block {
                a += byte as u32;
                b += a;
            }
            a %= ADLER_MOD;
            b %= ADLER_MOD;
        }
        self.a = a;
        self.b = b;
    }

    pub fn checksum(&self) -> u32 {
        (self.b << 16) | self.a
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Hasher for Adler32 {
    fn finish(&self) -> u64 {
        self.checksum() as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }
}

impl From<Adler32> for u32 {
    fn from(hasher: Adler32) -> Self {
        hasher.checksum()
    }
}
