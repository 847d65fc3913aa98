//! In-place decimation-in-frequency butterflies over Q15 data.
//!
//! A butterfly loads its four samples, forms every sum and twiddle product
//! exactly in `i64`, and narrows each output once, rounding to nearest. The
//! narrowing shift carries the stage scaling:
//! - first stage: 1/8
//! - middle stages: 1/4
//! - last stage (trivial twiddles): 1/2
//!
//! Twiddled outputs are shifted 15 bits further to drop the Q15 fraction of
//! the twiddle. The product over all stages is 1/N, so a forward transform
//! yields `DFT / N` and an inverse transform yields the unnormalized inverse
//! DFT divided by N. Every intermediate is a scaled partial DFT no larger than
//! the final bins, so narrowing saturates only when a bin of `DFT / N` itself
//! leaves the Q15 range.
//!
//! Each radix-4 group writes X0, X2, X1, X3 to its four slots, which makes the
//! overall output order a plain binary bit reversal of the natural order.

use super::arith::{Q15, Q15_FRAC_BITS, complex_mul_conj_wide, complex_mul_wide, complex_narrow};
use super::twiddle::TwiddleTable;
use crate::common::Direction;
use num_complex::Complex;

type Wide = Complex<i64>;

const FIRST_SHIFT: u32 = 3;
const MIDDLE_SHIFT: u32 = 2;
const LAST_SHIFT: u32 = 1;

/// Scaling of the radix-2 pre-pass in [`radix4_by2`].
const PREPASS_SHIFT: u32 = 2;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Stage {
    First,
    Middle,
    Last,
}

#[inline]
fn widen(z: Complex<Q15>) -> Wide {
    Complex::new(z.re as i64, z.im as i64)
}

#[inline]
fn apply_twiddle(z: Wide, w: Complex<Q15>, direction: Direction) -> Wide {
    match direction {
        Direction::Forward => complex_mul_wide(z, w),
        Direction::Inverse => complex_mul_conj_wide(z, w),
    }
}

/// Odd-index outputs of a radix-4 butterfly, `s -/+ j*u`, as (X1, X3).
#[inline]
fn odd_outputs(s: Wide, u: Wide, direction: Direction) -> (Wide, Wide) {
    // s - j*u
    let minus_j = Complex::new(s.re + u.im, s.im - u.re);
    // s + j*u
    let plus_j = Complex::new(s.re - u.im, s.im + u.re);

    match direction {
        Direction::Forward => (minus_j, plus_j),
        Direction::Inverse => (plus_j, minus_j),
    }
}

/// One radix-4 butterfly on slots `i0`, `i0 + quarter`, `i0 + 2*quarter`, `i0 + 3*quarter`.
#[inline]
fn butterfly4(
    buffer: &mut [Complex<Q15>],
    i0: usize,
    quarter: usize,
    w: &[Complex<Q15>; 3],
    stage: Stage,
    shift: u32,
    direction: Direction,
) {
    let i1 = i0 + quarter;
    let i2 = i1 + quarter;
    let i3 = i2 + quarter;

    let a = widen(buffer[i0]);
    let b = widen(buffer[i1]);
    let c = widen(buffer[i2]);
    let d = widen(buffer[i3]);

    let r = a + c;
    let s = a - c;
    let t = b + d;
    let u = b - d;

    let x0 = r + t;
    let x2 = r - t;
    let (x1, x3) = odd_outputs(s, u, direction);

    // X2 goes to the second slot and X1 to the third
    if stage == Stage::Last {
        buffer[i0] = complex_narrow(x0, shift);
        buffer[i1] = complex_narrow(x2, shift);
        buffer[i2] = complex_narrow(x1, shift);
        buffer[i3] = complex_narrow(x3, shift);
    } else {
        let product_shift = shift + Q15_FRAC_BITS;
        buffer[i0] = complex_narrow(x0, shift);
        buffer[i1] = complex_narrow(apply_twiddle(x2, w[1], direction), product_shift);
        buffer[i2] = complex_narrow(apply_twiddle(x1, w[0], direction), product_shift);
        buffer[i3] = complex_narrow(apply_twiddle(x3, w[2], direction), product_shift);
    }
}

/// Radix-4 DIF transform, in place, for a power-of-4 `buffer.len()` of at least 16.
///
/// `modifier` is the stride into `twiddles` on the first stage; it is 1 when
/// the table was built for `buffer.len()` and 2 when a radix-4-by-2 pass runs
/// each half against the table of the full length.
pub fn radix4(
    buffer: &mut [Complex<Q15>],
    twiddles: &TwiddleTable,
    modifier: usize,
    direction: Direction,
) {
    radix4_stages(buffer, twiddles, modifier, FIRST_SHIFT, direction);
}

fn radix4_stages(
    buffer: &mut [Complex<Q15>],
    twiddles: &TwiddleTable,
    modifier: usize,
    first_shift: u32,
    direction: Direction,
) {
    let fft_len = buffer.len();
    debug_assert!(fft_len >= 16 && fft_len.is_power_of_two() && fft_len.trailing_zeros() % 2 == 0);

    let coefs = twiddles.as_slice();
    let mut quarter = fft_len >> 2;
    let mut modifier = modifier;
    let mut stage = Stage::First;

    loop {
        if quarter == 1 {
            stage = Stage::Last;
        }
        let shift = match stage {
            Stage::First => first_shift,
            Stage::Middle => MIDDLE_SHIFT,
            Stage::Last => LAST_SHIFT,
        };
        let span = quarter << 2;

        for j in 0..quarter {
            let w = if stage == Stage::Last {
                [Complex::new(0, 0); 3]
            } else {
                let ic = j * modifier;
                [coefs[ic], coefs[2 * ic], coefs[3 * ic]]
            };

            for i0 in (j..fft_len).step_by(span) {
                butterfly4(buffer, i0, quarter, &w, stage, shift, direction);
            }
        }

        if stage == Stage::Last {
            break;
        }
        quarter >>= 2;
        modifier <<= 2;
        stage = Stage::Middle;
    }
}

/// Radix-4-by-2 transform, in place, for `buffer.len()` = 2 * 4^k (at least 32).
///
/// A radix-2 pass splits the data into a sum half and a rotated difference
/// half, each scaled by 1/4, and both halves run through the radix-4 stages
/// with twiddle modifier 2. The pre-pass takes one bit more than a radix-2
/// step needs; the first radix-4 stage of each half scales by 1/4 instead of
/// 1/8 to give it back, so the net scaling stays `1 / N`.
pub fn radix4_by2(buffer: &mut [Complex<Q15>], twiddles: &TwiddleTable, direction: Direction) {
    let fft_len = buffer.len();
    debug_assert!(fft_len >= 32 && fft_len.is_power_of_two() && fft_len.trailing_zeros() % 2 == 1);

    let half = fft_len >> 1;
    let coefs = twiddles.as_slice();

    for i in 0..half {
        let a = widen(buffer[i]);
        let b = widen(buffer[i + half]);

        buffer[i] = complex_narrow(a + b, PREPASS_SHIFT);
        buffer[i + half] = complex_narrow(
            apply_twiddle(a - b, coefs[i], direction),
            PREPASS_SHIFT + Q15_FRAC_BITS,
        );
    }

    let first_shift = FIRST_SHIFT - 1;
    let (top, bottom) = buffer.split_at_mut(half);
    radix4_stages(top, twiddles, 2, first_shift, direction);
    radix4_stages(bottom, twiddles, 2, first_shift, direction);
}

#[cfg(test)]
#[path = "butterfly_tests.rs"]
mod tests;
