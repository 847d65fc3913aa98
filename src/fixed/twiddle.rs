use super::arith::{Q15, Q15_MAX, Q15_MIN};
use super::tables;
use crate::common::FftError;
use alloc::vec::Vec;
use core::f64::consts::PI;
use num_complex::Complex;

/// Complex transform lengths with a twiddle table.
pub const SUPPORTED_COMPLEX_LENGTHS: [usize; 9] = [16, 32, 64, 128, 256, 512, 1024, 2048, 4096];

/// Real transform lengths; each one runs a complex transform of half its size.
pub const SUPPORTED_REAL_LENGTHS: [usize; 9] = [32, 64, 128, 256, 512, 1024, 2048, 4096, 8192];

/// Length the shared split-pass coefficients are generated for.
pub const MAX_REAL_LENGTH: usize = 8192;

/// Quantizes a value in [-1, 1] to Q15, rounding to nearest.
/// 1.0 is not representable and saturates to 32767.
pub(crate) fn quantize_q15(value: f64) -> Q15 {
    let scaled = libm::round(value * 32768.0);
    scaled.clamp(Q15_MIN as f64, Q15_MAX as f64) as Q15
}

fn sin_cos(angle: f64) -> (f64, f64) {
    (libm::sin(angle), libm::cos(angle))
}

/// Twiddle factors `W[i] = cos(2*pi*i/L) - j*sin(2*pi*i/L)` for one complex length `L`.
///
/// A radix-4 stage reads `W[i]`, `W[2i]` and `W[3i]`, so the table stores
/// `3L/4` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct TwiddleTable {
    fft_len: usize,
    coefs: Vec<Complex<Q15>>,
}

impl TwiddleTable {
    pub fn new(fft_len: usize) -> Result<Self, FftError> {
        if !SUPPORTED_COMPLEX_LENGTHS.contains(&fft_len) {
            return Err(FftError::UnsupportedLength);
        }
        Ok(Self::build(fft_len))
    }

    /// Generates the table without checking `fft_len` against the supported set.
    pub(crate) fn build(fft_len: usize) -> Self {
        let coefs = (0..3 * fft_len / 4)
            .map(|i| {
                let angle = 2.0 * PI * (i as f64) / (fft_len as f64);
                let (sin, cos) = sin_cos(angle);
                // sin is quantized first, then negated: -sin(pi/2) is -32767, not -32768
                Complex::new(quantize_q15(cos), quantize_q15(sin).saturating_neg())
            })
            .collect();

        Self { fft_len, coefs }
    }

    #[inline]
    pub fn fft_len(&self) -> usize {
        self.fft_len
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coefs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coefs.is_empty()
    }

    /// Returns `W[index]`, or `None` past the stored three quarters of the circle.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Complex<Q15>> {
        self.coefs.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Complex<Q15>] {
        &self.coefs
    }
}

/// Looks up `(cos, -sin)` of `2*pi*index/length` in the shared table for `length`.
pub fn twiddle_at(length: usize, index: usize) -> Result<(Q15, Q15), FftError> {
    let table = tables::complex_twiddles(length)?;
    let w = table.get(index).ok_or(FftError::IndexOutOfRange)?;
    Ok((w.re, w.im))
}

/// Coefficient pair (A, B) for the real-transform split passes.
///
/// Generated once for [`MAX_REAL_LENGTH`]; a real transform of length `N`
/// reads every `MAX_REAL_LENGTH / N`-th entry.
///
/// `A[i] = 0.5 * (1 - sin t) - j * 0.5 * cos t`,
/// `B[i] = 0.5 * (1 + sin t) + j * 0.5 * cos t`, with `t = 2*pi*i / MAX_REAL_LENGTH`.
#[derive(Debug, Clone, PartialEq)]
pub struct RealCoefficients {
    a: Vec<Complex<Q15>>,
    b: Vec<Complex<Q15>>,
}

impl RealCoefficients {
    pub fn new() -> Self {
        let n = MAX_REAL_LENGTH / 2;
        let mut a = Vec::with_capacity(n);
        let mut b = Vec::with_capacity(n);

        for i in 0..n {
            let angle = 2.0 * PI * (i as f64) / (MAX_REAL_LENGTH as f64);
            let (sin, cos) = sin_cos(angle);
            a.push(Complex::new(
                quantize_q15(0.5 * (1.0 - sin)),
                quantize_q15(-0.5 * cos),
            ));
            b.push(Complex::new(
                quantize_q15(0.5 * (1.0 + sin)),
                quantize_q15(0.5 * cos),
            ));
        }

        Self { a, b }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.a.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// `A[index]`, or `None` past the stored half of the circle.
    #[inline]
    pub fn a(&self, index: usize) -> Option<Complex<Q15>> {
        self.a.get(index).copied()
    }

    /// `B[index]`, or `None` past the stored half of the circle.
    #[inline]
    pub fn b(&self, index: usize) -> Option<Complex<Q15>> {
        self.b.get(index).copied()
    }
}

impl Default for RealCoefficients {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "twiddle_tests.rs"]
mod tests;
