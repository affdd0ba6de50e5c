// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar helpers: angle quantization, floor division, integer utilities,
//! and platform-stable trig.
//!
//! Transcendentals go through `libm` rather than the platform `f32::sin`
//! family so that identical inputs give identical bits on every target.

use std::f32::consts::TAU;

use crate::MathError;

/// Number of discrete steps in one full turn used by [`angle_mod`].
pub const ANGLE_STEPS: i32 = 65536;

/// Converts degrees to radians.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

/// Returns `(sin, cos)` of `radians` using `libm`.
pub fn sin_cos(radians: f32) -> (f32, f32) {
    libm::sincosf(radians)
}

/// Reciprocal square root `1 / sqrt(x)`.
///
/// `rsqrt(0.0)` is `+inf`; negative inputs give NaN.
pub fn rsqrt(x: f32) -> f32 {
    1.0 / libm::sqrtf(x)
}

/// Wraps an angle in degrees into `[0, 360)`.
///
/// The angle is snapped to one of [`ANGLE_STEPS`] equal steps per turn
/// before being converted back, so the result is always a multiple of
/// `360 / 65536` degrees. The arithmetic runs in `f64` and truncates toward
/// zero before masking to 16 bits; negative angles therefore wrap through
/// the two's-complement mask rather than through a floor.
///
/// Applying `angle_mod` to its own output returns the same value.
#[allow(clippy::cast_possible_truncation)]
pub fn angle_mod(a: f32) -> f32 {
    let steps_per_degree = f64::from(ANGLE_STEPS) / 360.0;
    let degrees_per_step = 360.0 / f64::from(ANGLE_STEPS);
    // Saturating float->int cast; out-of-range inputs clamp before masking.
    let step = (f64::from(a) * steps_per_degree) as i32 & (ANGLE_STEPS - 1);
    (degrees_per_step * f64::from(step)) as f32
}

/// Floor-based quotient and remainder of `numer / denom`.
///
/// Both inputs are expected to be integral. The result satisfies
/// `numer == quotient * denom + remainder` with `0 <= remainder < denom`,
/// rounding the quotient toward negative infinity.
///
/// Negative numerators are divided as positive values and then corrected:
/// when the positive remainder is non-zero the quotient is decremented and
/// the remainder becomes `denom - remainder`.
///
/// # Errors
/// Returns [`MathError::BadDenominator`] when `denom <= 0` or NaN, and
/// [`MathError::BadNumerator`] when `numer` is NaN or infinite.
///
/// # Examples
/// ```
/// use qmath_core::floor_div_mod;
/// assert_eq!(floor_div_mod(7.0, 2.0).ok(), Some((3, 1)));
/// assert_eq!(floor_div_mod(-7.0, 2.0).ok(), Some((-4, 1)));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn floor_div_mod(numer: f64, denom: f64) -> Result<(i32, i32), MathError> {
    // `!(denom > 0.0)` also rejects NaN.
    if !(denom > 0.0) {
        return Err(MathError::BadDenominator(denom));
    }
    if !numer.is_finite() {
        return Err(MathError::BadNumerator(numer));
    }

    if numer >= 0.0 {
        let x = (numer / denom).floor();
        let q = x as i32;
        let r = (numer - x * denom).floor() as i32;
        return Ok((q, r));
    }

    let x = (-numer / denom).floor();
    let mut q = -(x as i32);
    let mut r = (-numer - x * denom).floor() as i32;
    if r != 0 {
        q -= 1;
        r = denom as i32 - r;
    }
    Ok((q, r))
}

/// Greatest common divisor by Euclid's algorithm.
///
/// `greatest_common_divisor(0, n) == n` and vice versa. Intended for
/// non-negative inputs; negative ones give a divisor of unspecified sign
/// but never panic (`i32::MIN % -1` wraps to `0`).
pub fn greatest_common_divisor(a: i32, b: i32) -> i32 {
    let (mut hi, mut lo) = if a > b { (a, b) } else { (b, a) };
    while lo != 0 {
        let r = hi.wrapping_rem(lo);
        hi = lo;
        lo = r;
    }
    hi
}

/// Integer floor of `log2(val)`; `0` for `val <= 1`.
pub fn q_log2(val: i32) -> i32 {
    if val <= 1 {
        return 0;
    }
    let mut v = val;
    let mut answer = 0;
    loop {
        v >>= 1;
        if v == 0 {
            break;
        }
        answer += 1;
    }
    answer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_mod_wraps_negative_angles() {
        let out = angle_mod(-90.0);
        assert!((out - 270.0).abs() < 1e-3, "got {out}");
        assert_eq!(angle_mod(360.0), 0.0);
        assert_eq!(angle_mod(720.0 + 45.0), 45.0);
    }

    #[test]
    fn angle_mod_snaps_to_step_grid() {
        let step = 360.0 / 65536.0_f32;
        let out = angle_mod(step * 0.5);
        assert_eq!(out, 0.0);
        assert_eq!(angle_mod(step * 3.0), step * 3.0);
    }

    #[test]
    fn q_log2_matches_bit_length() {
        assert_eq!(q_log2(0), 0);
        assert_eq!(q_log2(1), 0);
        assert_eq!(q_log2(2), 1);
        assert_eq!(q_log2(255), 7);
        assert_eq!(q_log2(256), 8);
    }

    #[test]
    fn gcd_handles_either_order() {
        assert_eq!(greatest_common_divisor(18, 48), 6);
        assert_eq!(greatest_common_divisor(5, 0), 5);
        assert_eq!(greatest_common_divisor(0, 0), 0);
        assert_eq!(greatest_common_divisor(17, 5), 1);
    }
}
