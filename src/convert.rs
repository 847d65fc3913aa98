//! Conversions between Q15 samples and `f32`.

use crate::fixed::arith::{Q15, Q15_MAX, Q15_MIN};

const SCALE: f32 = 32768.0;

/// Exact: every Q15 value is representable in `f32`.
#[inline]
pub fn q15_to_f32(x: Q15) -> f32 {
    x as f32 / SCALE
}

/// Rounds half away from zero and saturates to `[-1, 1 - 2^-15]`. NaN maps to 0.
#[inline]
pub fn f32_to_q15(x: f32) -> Q15 {
    if x.is_nan() {
        return 0;
    }
    let scaled = libm::roundf(x * SCALE);
    scaled.clamp(Q15_MIN as f32, Q15_MAX as f32) as Q15
}

/// Converts `input` into `output` element by element; extra elements of the longer slice are left alone.
pub fn q15_slice_to_f32(input: &[Q15], output: &mut [f32]) {
    for (dst, &src) in output.iter_mut().zip(input) {
        *dst = q15_to_f32(src);
    }
}

/// Converts `input` into `output` element by element; extra elements of the longer slice are left alone.
pub fn f32_slice_to_q15(input: &[f32], output: &mut [Q15]) {
    for (dst, &src) in output.iter_mut().zip(input) {
        *dst = f32_to_q15(src);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_q15_to_f32() {
        assert_eq!(q15_to_f32(0), 0.0);
        assert_eq!(q15_to_f32(16384), 0.5);
        assert_eq!(q15_to_f32(i16::MIN), -1.0);
        assert_eq!(q15_to_f32(i16::MAX), 32767.0 / 32768.0);
    }

    #[test]
    fn test_f32_to_q15_rounding_and_saturation() {
        assert_eq!(f32_to_q15(0.5), 16384);
        assert_eq!(f32_to_q15(-0.5), -16384);
        assert_eq!(f32_to_q15(1.0), i16::MAX);
        assert_eq!(f32_to_q15(7.5), i16::MAX);
        assert_eq!(f32_to_q15(-1.0), i16::MIN);
        assert_eq!(f32_to_q15(-3.0), i16::MIN);
        assert_eq!(f32_to_q15(f32::NAN), 0);
        // Half an LSB rounds away from zero
        assert_eq!(f32_to_q15(1.5 / 32768.0), 2);
        assert_eq!(f32_to_q15(-1.5 / 32768.0), -2);
    }

    #[test]
    fn test_slices() {
        let q = [i16::MIN, -8192, 0, 8192, i16::MAX];
        let mut f = [0.0f32; 5];
        q15_slice_to_f32(&q, &mut f);
        assert_eq!(f[1], -0.25);

        let mut back = [1i16; 5];
        f32_slice_to_q15(&f, &mut back);
        assert_eq!(back, q);
    }
}
