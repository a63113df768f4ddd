//! 128-bit state word.
//!
//! A word is four 32-bit lanes. Lane 0 is the least significant when the
//! word is read as a 128-bit integer, and 64-bit lane `k` is made of 32-bit
//! lanes `2k` (low half) and `2k + 1` (high half). The 128-bit shifts carry
//! bits across lanes exactly as a single 128-bit shift would.

/// One 128-bit element of the SFMT state array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct W128 {
    pub(crate) u: [u32; 4],
}

impl W128 {
    pub(crate) const fn new(u: [u32; 4]) -> Self {
        W128 { u }
    }

    /// Word with every byte set to `byte`.
    pub(crate) const fn filled(byte: u8) -> Self {
        let lane = u32::from_ne_bytes([byte; 4]);
        W128 { u: [lane; 4] }
    }

    #[inline]
    pub(crate) fn lane(&self, i: usize) -> u32 {
        self.u[i]
    }

    #[inline]
    pub(crate) fn set_lane(&mut self, i: usize, value: u32) {
        self.u[i] = value;
    }

    /// Adds `value` into lane `i` with 32-bit wraparound.
    #[inline]
    pub(crate) fn add_lane(&mut self, i: usize, value: u32) {
        self.u[i] = self.u[i].wrapping_add(value);
    }

    #[inline]
    pub(crate) fn xor_lane(&mut self, i: usize, value: u32) {
        self.u[i] ^= value;
    }

    /// Reads 64-bit lane `i` (0 or 1).
    #[inline]
    pub(crate) fn lane64(&self, i: usize) -> u64 {
        (self.u[2 * i] as u64) | ((self.u[2 * i + 1] as u64) << 32)
    }

    #[inline]
    fn to_u128(self) -> u128 {
        (self.u[0] as u128)
            | ((self.u[1] as u128) << 32)
            | ((self.u[2] as u128) << 64)
            | ((self.u[3] as u128) << 96)
    }

    #[inline]
    fn from_u128(v: u128) -> Self {
        W128 {
            u: [v as u32, (v >> 32) as u32, (v >> 64) as u32, (v >> 96) as u32],
        }
    }

    /// 128-bit left shift by `bytes * 8` bits.
    #[inline]
    pub(crate) fn lshift(self, bytes: u32) -> Self {
        debug_assert!(bytes < 16, "128-bit shift of {} bytes", bytes);
        Self::from_u128(self.to_u128() << (bytes * 8))
    }

    /// 128-bit logical right shift by `bytes * 8` bits.
    #[inline]
    pub(crate) fn rshift(self, bytes: u32) -> Self {
        debug_assert!(bytes < 16, "128-bit shift of {} bytes", bytes);
        Self::from_u128(self.to_u128() >> (bytes * 8))
    }
}

/// Flat 32-bit view over a slice of 128-bit words.
///
/// Slot `i` is lane `i % 4` of word `i / 4`.
pub(crate) struct Flat32<'a>(pub(crate) &'a mut [W128]);

impl Flat32<'_> {
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.0.len() * 4
    }

    #[inline]
    pub(crate) fn get(&self, i: usize) -> u32 {
        self.0[i / 4].lane(i % 4)
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, value: u32) {
        self.0[i / 4].set_lane(i % 4, value);
    }

    #[inline]
    pub(crate) fn add(&mut self, i: usize, value: u32) {
        self.0[i / 4].add_lane(i % 4, value);
    }

    #[inline]
    pub(crate) fn xor(&mut self, i: usize, value: u32) {
        self.0[i / 4].xor_lane(i % 4, value);
    }
}
