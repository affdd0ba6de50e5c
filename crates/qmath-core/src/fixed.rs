// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-point reciprocal helpers for the span rasterizer.
//!
//! Two encodings are involved:
//! - 8.24: `real_value = raw / 2^24` (signed `i32`),
//! - 16.16: `real_value = raw / 2^16` (stored as `u32`).

/// Number of fractional bits in the 8.24 encoding.
pub const FRAC_BITS_24: u32 = 24;

/// Number of fractional bits in the 16.16 encoding.
pub const FRAC_BITS_16: u32 = 16;

/// Inputs below this raw 8.24 value saturate in [`invert_24_to_16`].
pub const INVERT_SATURATION_THRESHOLD: i32 = 256;

/// Inverts an 8.24 value into a 16.16 reciprocal.
///
/// Computes `round(2^16 * 2^24 / val)`. Values below
/// [`INVERT_SATURATION_THRESHOLD`] (including zero and negatives) return
/// `0xFFFF_FFFF` instead of dividing by a near-zero value. Results that do
/// not fit in 32 bits saturate to the same value.
///
/// # Examples
/// ```
/// use qmath_core::invert_24_to_16;
/// // 1.0 in 8.24 inverts to 1.0 in 16.16.
/// assert_eq!(invert_24_to_16(1 << 24), 1 << 16);
/// assert_eq!(invert_24_to_16(0), u32::MAX);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn invert_24_to_16(val: i32) -> u32 {
    if val < INVERT_SATURATION_THRESHOLD {
        return u32::MAX;
    }
    let one_16 = f64::from(1_u32 << FRAC_BITS_16);
    let one_24 = f64::from(1_u32 << FRAC_BITS_24);
    // Float->int casts saturate, so 2^32 and above clamp to u32::MAX.
    (one_16 * one_24 / f64::from(val) + 0.5) as u32
}
