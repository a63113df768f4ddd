//! `rand_core` integration.
//!
//! Lets an [`Sfmt`] drive anything written against `rand_core::RngCore`,
//! including the distributions of the `rand` crate.

use rand_core::{impls, Error, RngCore, SeedableRng};

use crate::params::ParameterSet;
use crate::sfmt::Sfmt;

impl RngCore for Sfmt {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Sfmt::next_u32(self)
    }

    /// Unlike [`Sfmt::next_u64`], never panics: at an odd cursor one 32-bit
    /// value is discarded to realign.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        if self.is_cursor_odd() {
            Sfmt::next_u32(self);
        }
        Sfmt::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Sfmt {
    /// Four little-endian 32-bit key words.
    type Seed = [u8; 16];

    /// Array-seeds an SFMT-19937 generator with the four words in `seed`.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut key = [0u32; 4];
        for (k, chunk) in key.iter_mut().zip(seed.chunks_exact(4)) {
            *k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Sfmt::with_key(ParameterSet::P19937, &key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rngcore_next_u32_matches_inherent() {
        let mut a = Sfmt::with_seed(ParameterSet::P19937, 1234);
        let mut b = Sfmt::with_seed(ParameterSet::P19937, 1234);
        for _ in 0..100 {
            assert_eq!(RngCore::next_u32(&mut a), b.next_u32());
        }
    }

    #[test]
    fn test_rngcore_next_u64_realigns() {
        let mut a = Sfmt::with_seed(ParameterSet::P19937, 4321);
        let mut b = Sfmt::with_seed(ParameterSet::P19937, 4321);
        RngCore::next_u32(&mut a);
        let v = RngCore::next_u64(&mut a);
        b.next_u64();
        assert_eq!(v, b.next_u64());
    }

    #[test]
    fn test_from_seed_uses_little_endian_key() {
        let seed = [
            0x34, 0x12, 0, 0, 0x78, 0x56, 0, 0, 0xbc, 0x9a, 0, 0, 0xf0, 0xde, 0, 0,
        ];
        let mut rng = Sfmt::from_seed(seed);
        assert_eq!(rng.id(), ParameterSet::P19937.id());
        assert_eq!(RngCore::next_u32(&mut rng), 2920711183);
    }

    #[test]
    fn test_fill_bytes_is_deterministic() {
        let mut a = Sfmt::seed_from_u64(99);
        let mut b = Sfmt::seed_from_u64(99);
        let mut x = [0u8; 37];
        let mut y = [0u8; 37];
        a.fill_bytes(&mut x);
        b.try_fill_bytes(&mut y).unwrap();
        assert_eq!(x, y);
        assert!(x.iter().any(|&v| v != 0));
    }
}
