//! Seedable XorShift128 generator.
//!
//! Palette generation shuffles the histogram before seeding clusters, so a
//! palette is only reproducible if the generator is. [`XorShift128`] wraps
//! `rand_xorshift`'s Marsaglia xorshift, seeded with four `u32` words.

use rand::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;

/// State used in place of an all-zero seed, which would make the generator
/// emit zeros forever.
const FALLBACK_STATE: [u32; 4] = [123_456_789, 362_436_069, 521_288_629, 88_675_123];

/// Marsaglia's xorshift128 generator.
///
/// # Example
///
/// ```
/// use palette_dither::XorShift128;
/// use rand::RngCore;
///
/// let mut a = XorShift128::new([1, 2, 3, 4]);
/// let mut b = XorShift128::new([1, 2, 3, 4]);
/// assert_eq!(a.next_u32(), b.next_u32());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift128(XorShiftRng);

impl XorShift128 {
    /// Create a generator from four seed words.
    ///
    /// An all-zero seed is replaced by Marsaglia's published default state.
    pub fn new(seed: [u32; 4]) -> Self {
        let words = if seed == [0; 4] { FALLBACK_STATE } else { seed };
        let mut bytes = [0u8; 16];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        Self(XorShiftRng::from_seed(bytes))
    }
}

impl RngCore for XorShift128 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl SeedableRng for XorShift128 {
    type Seed = [u8; 16];

    /// Seed bytes are read as four little-endian words.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut words = [0u32; 4];
        for (word, bytes) in words.iter_mut().zip(seed.chunks_exact(4)) {
            *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        Self::new(words)
    }
}
