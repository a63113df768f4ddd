//! Low-level helpers: the 128-bit state word and real-number conversions.

pub mod converter;
pub(crate) mod w128;
