//! Integer-to-real conversion utilities.
//!
//! Maps raw generator output onto the unit interval with the same
//! arithmetic as the reference `sfmt_to_real*` and `sfmt_to_res53*`
//! functions. All conversions are pure.

/// 2^-32, as used by [`to_real2`] and [`to_real3`].
const TWO_POW_NEG_32: f64 = 1.0 / 4294967296.0;

/// 2^-53, as used by [`to_res53`].
const TWO_POW_NEG_53: f64 = 1.0 / 9007199254740992.0;

/// Converts a `u32` to a real number in the closed interval [0, 1].
///
/// The result is `v / (2^32 - 1)`, so both `0` and `u32::MAX` are reachable.
///
/// # Parameters
/// - `v`: A raw 32-bit generator output.
///
/// # Returns
/// A value in [0, 1].
///
/// # Examples
///
/// ```
/// use sfmt::utils::converter::to_real1;
///
/// assert_eq!(to_real1(0), 0.0);
/// assert_eq!(to_real1(u32::MAX), 1.0);
/// ```
#[inline]
pub fn to_real1(v: u32) -> f64 {
    v as f64 * (1.0 / 4294967295.0)
}

/// Converts a `u32` to a real number in the half-open interval [0, 1).
///
/// # Parameters
/// - `v`: A raw 32-bit generator output.
///
/// # Returns
/// `v * 2^-32`, which never reaches 1.
///
/// # Examples
///
/// ```
/// use sfmt::utils::converter::to_real2;
///
/// assert_eq!(to_real2(0x8000_0000), 0.5);
/// assert!(to_real2(u32::MAX) < 1.0);
/// ```
#[inline]
pub fn to_real2(v: u32) -> f64 {
    v as f64 * TWO_POW_NEG_32
}

/// Converts a `u32` to a real number in the open interval (0, 1).
///
/// # Parameters
/// - `v`: A raw 32-bit generator output.
///
/// # Returns
/// `(v + 0.5) * 2^-32`, which is never 0 nor 1.
///
/// # Examples
///
/// ```
/// use sfmt::utils::converter::to_real3;
///
/// assert!(to_real3(0) > 0.0);
/// assert!(to_real3(u32::MAX) < 1.0);
/// ```
#[inline]
pub fn to_real3(v: u32) -> f64 {
    (v as f64 + 0.5) * TWO_POW_NEG_32
}

/// Converts a `u64` to a real number in [0, 1) with 53-bit resolution.
///
/// Only the upper 53 bits of `v` contribute, which makes every result
/// exactly representable in an `f64`.
///
/// # Parameters
/// - `v`: A raw 64-bit generator output.
///
/// # Returns
/// `(v >> 11) * 2^-53`.
#[inline]
pub fn to_res53(v: u64) -> f64 {
    (v >> 11) as f64 * TWO_POW_NEG_53
}

/// Combines two 32-bit values into one 53-bit resolution real in [0, 1).
///
/// # Parameters
/// - `x`: The low half of the 64-bit intermediate.
/// - `y`: The high half of the 64-bit intermediate.
///
/// # Returns
/// [`to_res53`] of `x | y << 32`.
#[inline]
pub fn to_res53_mix(x: u32, y: u32) -> f64 {
    to_res53(x as u64 | ((y as u64) << 32))
}
