//! SIMD-oriented Fast Mersenne Twister (SFMT) pseudo-random number generator.
//!
//! SFMT is a linear-feedback-shift-register generator operating on 128-bit
//! words. It improves on the classic Mersenne Twister in speed and
//! equidistribution while keeping a period of 2^MEXP - 1.
//!
//! This crate reproduces the SFMT 1.5.1 reference implementation bit for bit
//! for the 2^607 - 1 and 2^19937 - 1 parameter sets. It is a statistical
//! generator and offers no cryptographic guarantees.
//!
//! # Architecture
//!
//! ```text
//! ParameterSet  (constants for one period: shifts, masks, parity vector)
//!     ↓
//! W128          (128-bit state word: four u32 lanes, byte-wise 128-bit shifts)
//!     ↓
//! recursion     (state refill, bulk generation into caller buffers)
//! seeding       (integer seed, array seed, period certification)
//!     ↓
//! Sfmt          (cursor over the state: u32/u64/real extraction)
//! ```
//!
//! # Examples
//!
//! Draw integers and reals from a seeded generator:
//!
//! ```
//! use sfmt::{ParameterSet, Sfmt};
//!
//! let mut rng = Sfmt::with_seed(ParameterSet::P19937, 1234);
//! assert_eq!(rng.next_u32(), 3440181298);
//!
//! let x = rng.next_real2();
//! assert!((0.0..1.0).contains(&x));
//! ```
//!
//! Fill a buffer in one call (the generator must be freshly seeded):
//!
//! ```
//! use sfmt::{ParameterSet, Sfmt};
//!
//! let mut rng = Sfmt::with_key(ParameterSet::P19937, &[0x1234, 0x5678, 0x9abc, 0xdef0]);
//! let mut buf = vec![0u64; rng.min_array_size64()];
//! rng.fill_u64(&mut buf).unwrap();
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod params;
pub mod utils;

pub(crate) mod recursion;
#[cfg(feature = "rand_core")]
mod rng;
pub(crate) mod seeding;
mod sfmt;

pub use error::SfmtError;
pub use params::ParameterSet;
pub use sfmt::Sfmt;
