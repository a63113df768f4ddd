//! SFMT generator: state ownership, cursor handling and output extraction.
//!
//! The state is consumed through a 32-bit cursor. Scalar calls read from the
//! state and refill it when the cursor runs out; bulk calls generate straight
//! into a caller buffer and are only allowed on a fresh state.

use std::fmt;

use crate::error::SfmtError;
use crate::params::ParameterSet;
use crate::recursion::{gen_rand_all, gen_rand_array};
use crate::seeding::{init_by_array, init_gen_rand};
use crate::utils::converter;
use crate::utils::w128::W128;

/// SIMD-oriented Fast Mersenne Twister.
///
/// Output is bit-exact with the SFMT 1.5.1 reference implementation for the
/// same parameter set and seed.
///
/// A generator is a single-owner value: every extraction takes `&mut self`.
/// Sharing one between threads requires external synchronization.
///
/// # Examples
///
/// ```
/// use sfmt::{ParameterSet, Sfmt};
///
/// let mut rng = Sfmt::with_seed(ParameterSet::P19937, 1234);
/// assert_eq!(rng.next_u32(), 3440181298);
/// ```
#[derive(Clone)]
pub struct Sfmt {
    params: ParameterSet,
    state: Vec<W128>,
    idx: usize,
}

impl Sfmt {
    /// Creates a generator seeded from the system clock.
    ///
    /// The output is not reproducible. Use [`with_seed`](Self::with_seed) or
    /// [`with_key`](Self::with_key) for deterministic sequences.
    ///
    /// # Parameters
    /// - `params`: The parameter set to run with.
    pub fn new(params: ParameterSet) -> Self {
        let millis = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u32)
            .unwrap_or(5489);
        Self::with_key(params, &[0, millis])
    }

    /// Creates a generator seeded with a 32-bit integer.
    ///
    /// # Parameters
    /// - `params`: The parameter set to run with.
    /// - `seed`: The integer seed. Equal seeds give equal sequences.
    pub fn with_seed(params: ParameterSet, seed: u32) -> Self {
        let mut sfmt = Self::unseeded(params);
        sfmt.seed(seed);
        sfmt
    }

    /// Creates a generator seeded with an array of 32-bit integers.
    ///
    /// # Parameters
    /// - `params`: The parameter set to run with.
    /// - `key`: The seed words. Any length is accepted, including zero.
    pub fn with_key(params: ParameterSet, key: &[u32]) -> Self {
        let mut sfmt = Self::unseeded(params);
        sfmt.seed_by_array(key);
        sfmt
    }

    fn unseeded(params: ParameterSet) -> Self {
        Sfmt {
            params,
            state: vec![W128::default(); params.n()],
            idx: params.n32(),
        }
    }

    /// Reinitializes the state from a 32-bit integer.
    ///
    /// Output drawn afterwards matches a fresh
    /// [`with_seed`](Self::with_seed) generator.
    ///
    /// # Parameters
    /// - `seed`: The integer seed.
    pub fn seed(&mut self, seed: u32) {
        init_gen_rand(self.params.params(), &mut self.state, seed);
        self.idx = self.params.n32();
    }

    /// Reinitializes the state from an array of 32-bit integers.
    ///
    /// # Parameters
    /// - `key`: The seed words. Any length is accepted, including zero.
    pub fn seed_by_array(&mut self, key: &[u32]) {
        init_by_array(self.params.params(), &mut self.state, key);
        self.idx = self.params.n32();
    }

    /// Parameter set this generator runs with.
    pub fn parameter_set(&self) -> ParameterSet {
        self.params
    }

    /// Identification string of the parameter set.
    pub fn id(&self) -> &'static str {
        self.params.id()
    }

    /// Minimum buffer length accepted by [`fill_u32`](Self::fill_u32).
    pub fn min_array_size32(&self) -> usize {
        self.params.n32()
    }

    /// Minimum buffer length accepted by [`fill_u64`](Self::fill_u64).
    pub fn min_array_size64(&self) -> usize {
        self.params.n64()
    }

    fn refill(&mut self) {
        gen_rand_all(self.params.params(), &mut self.state);
        self.idx = 0;
    }

    /// Returns the next 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if self.idx >= self.params.n32() {
            self.refill();
        }
        let r = self.state[self.idx / 4].lane(self.idx % 4);
        self.idx += 1;
        r
    }

    /// Returns the next 64-bit output.
    ///
    /// # Panics
    ///
    /// Panics if an odd number of 32-bit values has been drawn since the last
    /// seed or refill. Mixing the two widths must keep 32-bit draws paired.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        assert!(
            self.idx.is_multiple_of(2),
            "next_u64 called at odd 32-bit cursor {}",
            self.idx
        );
        if self.idx >= self.params.n32() {
            self.refill();
        }
        let r = self.state[self.idx / 4].lane64((self.idx % 4) / 2);
        self.idx += 2;
        r
    }

    fn check_fresh(&self) -> Result<(), SfmtError> {
        if self.idx != self.params.n32() {
            return Err(SfmtError::StateNotFresh {
                idx: self.idx,
                expected: self.params.n32(),
            });
        }
        Ok(())
    }

    /// Runs the recurrence for `words` 128-bit words and returns them.
    fn generate_words(&mut self, words: usize) -> Vec<W128> {
        let mut scratch = vec![W128::default(); words];
        gen_rand_array(self.params.params(), &mut self.state, &mut scratch);
        self.idx = self.params.n32();
        scratch
    }

    /// Fills `buf` with consecutive 32-bit outputs in one pass.
    ///
    /// The values equal those `buf.len()` calls to [`next_u32`](Self::next_u32)
    /// would return, and scalar calls made afterwards continue the same
    /// stream. The generator must be fresh: no scalar output may have been
    /// drawn since the last seed or bulk call.
    ///
    /// # Parameters
    /// - `buf`: The destination. Its length must be at least
    ///   [`min_array_size32`](Self::min_array_size32) and a multiple of 4.
    ///
    /// # Returns
    /// `Ok(())` once every element of `buf` holds a new output. On error
    /// neither `buf` nor the generator is modified.
    ///
    /// # Errors
    ///
    /// - [`SfmtError::StateNotFresh`] if scalar output was drawn since the
    ///   last seed or bulk call.
    /// - [`SfmtError::BufferTooSmall`] if `buf.len() < min_array_size32()`.
    /// - [`SfmtError::BufferMisaligned`] if `buf.len()` is not a multiple of 4.
    ///
    /// # Examples
    ///
    /// ```
    /// use sfmt::{ParameterSet, Sfmt};
    ///
    /// let mut rng = Sfmt::with_seed(ParameterSet::P19937, 1234);
    /// let mut buf = vec![0u32; rng.min_array_size32()];
    /// rng.fill_u32(&mut buf).unwrap();
    /// assert_eq!(buf[0], 3440181298);
    /// ```
    pub fn fill_u32(&mut self, buf: &mut [u32]) -> Result<(), SfmtError> {
        self.check_fresh()?;
        let min = self.params.n32();
        if buf.len() < min {
            return Err(SfmtError::BufferTooSmall { len: buf.len(), min });
        }
        if !buf.len().is_multiple_of(4) {
            return Err(SfmtError::BufferMisaligned {
                len: buf.len(),
                multiple: 4,
            });
        }

        let words = self.generate_words(buf.len() / 4);
        for (chunk, word) in buf.chunks_exact_mut(4).zip(&words) {
            chunk.copy_from_slice(&word.u);
        }
        Ok(())
    }

    /// Fills `buf` with consecutive 64-bit outputs in one pass.
    ///
    /// The 64-bit counterpart of [`fill_u32`](Self::fill_u32).
    ///
    /// # Parameters
    /// - `buf`: The destination. Its length must be at least
    ///   [`min_array_size64`](Self::min_array_size64) and even.
    ///
    /// # Returns
    /// `Ok(())` once every element of `buf` holds a new output. On error
    /// neither `buf` nor the generator is modified.
    ///
    /// # Errors
    ///
    /// - [`SfmtError::StateNotFresh`] if scalar output was drawn since the
    ///   last seed or bulk call.
    /// - [`SfmtError::BufferTooSmall`] if `buf.len() < min_array_size64()`.
    /// - [`SfmtError::BufferMisaligned`] if `buf.len()` is odd.
    pub fn fill_u64(&mut self, buf: &mut [u64]) -> Result<(), SfmtError> {
        self.check_fresh()?;
        let min = self.params.n64();
        if buf.len() < min {
            return Err(SfmtError::BufferTooSmall { len: buf.len(), min });
        }
        if !buf.len().is_multiple_of(2) {
            return Err(SfmtError::BufferMisaligned {
                len: buf.len(),
                multiple: 2,
            });
        }

        let words = self.generate_words(buf.len() / 2);
        for (chunk, word) in buf.chunks_exact_mut(2).zip(&words) {
            chunk[0] = word.lane64(0);
            chunk[1] = word.lane64(1);
        }
        Ok(())
    }

    /// Draws one 32-bit output and maps it with
    /// [`to_real1`](crate::utils::converter::to_real1).
    ///
    /// # Returns
    /// A real number in the closed interval [0, 1].
    pub fn next_real1(&mut self) -> f64 {
        converter::to_real1(self.next_u32())
    }

    /// Draws one 32-bit output and maps it with
    /// [`to_real2`](crate::utils::converter::to_real2).
    ///
    /// # Returns
    /// A real number in the half-open interval [0, 1).
    pub fn next_real2(&mut self) -> f64 {
        converter::to_real2(self.next_u32())
    }

    /// Draws one 32-bit output and maps it with
    /// [`to_real3`](crate::utils::converter::to_real3).
    ///
    /// # Returns
    /// A real number in the open interval (0, 1).
    pub fn next_real3(&mut self) -> f64 {
        converter::to_real3(self.next_u32())
    }

    /// Draws one 64-bit output and maps it with
    /// [`to_res53`](crate::utils::converter::to_res53).
    ///
    /// # Returns
    /// A real number in [0, 1) with 53-bit resolution.
    ///
    /// # Panics
    ///
    /// Same cursor requirement as [`next_u64`](Self::next_u64).
    pub fn next_res53(&mut self) -> f64 {
        converter::to_res53(self.next_u64())
    }

    /// Draws two 32-bit outputs and combines them with
    /// [`to_res53_mix`](crate::utils::converter::to_res53_mix), the first
    /// one as the low half.
    ///
    /// # Returns
    /// A real number in [0, 1) with 53-bit resolution.
    pub fn next_res53_mix(&mut self) -> f64 {
        let x = self.next_u32();
        let y = self.next_u32();
        converter::to_res53_mix(x, y)
    }

    #[cfg(feature = "rand_core")]
    pub(crate) fn is_cursor_odd(&self) -> bool {
        !self.idx.is_multiple_of(2)
    }

    /// Current position of the 32-bit cursor.
    #[cfg(test)]
    pub(crate) fn cursor(&self) -> usize {
        self.idx
    }
}

impl fmt::Debug for Sfmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sfmt")
            .field("params", &self.params)
            .field("idx", &self.idx)
            .finish_non_exhaustive()
    }
}
