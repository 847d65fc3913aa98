//! Saturating Q15 primitives.
//!
//! Every narrowing from a wide intermediate back to a 16-bit sample goes
//! through this module. [`shift_right`] is the plain arithmetic shift and
//! truncates toward negative infinity; [`round_shift_right`] rounds to
//! nearest, ties to even, and is what the transforms narrow with.

use num_complex::Complex;

/// Signed 1.15 fractional sample: the stored integer divided by 32768.
pub type Q15 = i16;

/// Fractional bits of a [`Q15`] sample.
pub const Q15_FRAC_BITS: u32 = 15;
pub const Q15_MAX: Q15 = i16::MAX;
pub const Q15_MIN: Q15 = i16::MIN;

#[inline]
pub fn saturating_add(a: Q15, b: Q15) -> Q15 {
    a.saturating_add(b)
}

#[inline]
pub fn saturating_sub(a: Q15, b: Q15) -> Q15 {
    a.saturating_sub(b)
}

/// Full-precision product of two Q15 values, in 2.30 format.
#[inline]
pub fn mul_wide(a: Q15, b: Q15) -> i32 {
    a as i32 * b as i32
}

/// Arithmetic right shift. Truncates, does not round.
#[inline]
pub fn shift_right(x: i64, n: u32) -> i64 {
    x >> n
}

/// Right shift rounding to nearest, ties to even.
///
/// Ties to even keeps the rounding error zero-mean, so repeated narrowing
/// over `log2(N)` stages does not drift.
#[inline]
pub fn round_shift_right(x: i64, n: u32) -> i64 {
    if n == 0 {
        return x;
    }
    let q = shift_right(x, n);
    let rem = x - (q << n);
    let half = 1i64 << (n - 1);
    if rem > half || (rem == half && q & 1 == 1) {
        q + 1
    } else {
        q
    }
}

/// Clamps `x` to the range of a signed `bits`-wide integer.
#[inline]
pub fn saturate(x: i32, bits: u32) -> i32 {
    debug_assert!((1..=32).contains(&bits));
    if bits >= 32 {
        return x;
    }
    let max = (1i32 << (bits - 1)) - 1;
    let min = -(1i32 << (bits - 1));
    x.clamp(min, max)
}

#[inline]
pub fn saturate_q15(x: i32) -> Q15 {
    saturate(x, 16) as Q15
}

/// Clamps a 64-bit accumulator to Q15.
#[inline]
pub fn saturate_wide_q15(x: i64) -> Q15 {
    x.clamp(Q15_MIN as i64, Q15_MAX as i64) as Q15
}

/// Narrows a wide accumulator to Q15: `x >> n`, rounded, then saturated.
#[inline]
pub fn narrow_q15(x: i64, n: u32) -> Q15 {
    saturate_wide_q15(round_shift_right(x, n))
}

#[inline]
pub fn shift_left_saturating(x: Q15, n: u32) -> Q15 {
    saturate_q15((x as i32) << n)
}

/// Exact `z * w` for a wide `z` and a Q15 twiddle; the result carries 15
/// more fractional bits than `z`.
#[inline]
pub fn complex_mul_wide(z: Complex<i64>, w: Complex<Q15>) -> Complex<i64> {
    let (wr, wi) = (w.re as i64, w.im as i64);
    Complex::new(z.re * wr - z.im * wi, z.re * wi + z.im * wr)
}

/// Exact `z * conj(w)`, see [`complex_mul_wide`].
#[inline]
pub fn complex_mul_conj_wide(z: Complex<i64>, w: Complex<Q15>) -> Complex<i64> {
    let (wr, wi) = (w.re as i64, w.im as i64);
    Complex::new(z.re * wr + z.im * wi, z.im * wr - z.re * wi)
}

/// [`narrow_q15`] on both parts.
#[inline]
pub fn complex_narrow(z: Complex<i64>, n: u32) -> Complex<Q15> {
    Complex::new(narrow_q15(z.re, n), narrow_q15(z.im, n))
}

#[cfg(test)]
#[path = "arith_tests.rs"]
mod tests;
