//! Real-input transforms on top of the complex engine.
//!
//! `N` real samples are read as `N/2` complex ones, transformed, and a split
//! pass recombines the half-size spectrum into bins `0..=N/2` of the real
//! spectrum:
//!
//! `X[k] = A[k] * Z[k] + B[k] * conj(Z[N/2 - k])`
//!
//! The inverse runs the conjugate pass first and the complex inverse second.

use super::arith::{
    Q15, complex_mul_conj_wide, complex_mul_wide, complex_narrow, narrow_q15, saturating_sub,
    shift_left_saturating,
};
use super::complex::{CfftDescriptor, cfft};
use super::tables;
use super::twiddle::{MAX_REAL_LENGTH, RealCoefficients, SUPPORTED_REAL_LENGTHS};
use crate::common::{Direction, FftError};
use num_complex::Complex;

/// Precomputed state for one real transform length.
#[derive(Debug, Clone, Copy)]
pub struct RfftDescriptor {
    fft_len_real: usize,
    cfft: CfftDescriptor,
    coefs: &'static RealCoefficients,
    /// Stride into the split-pass coefficients.
    modifier: usize,
    direction: Direction,
    bit_reverse: bool,
}

impl RfftDescriptor {
    pub fn new(
        fft_len_real: usize,
        direction: Direction,
        bit_reverse: bool,
    ) -> Result<Self, FftError> {
        if !SUPPORTED_REAL_LENGTHS.contains(&fft_len_real) {
            return Err(FftError::UnsupportedLength);
        }

        Ok(Self {
            fft_len_real,
            cfft: CfftDescriptor::new(fft_len_real / 2)?,
            coefs: tables::real_coefficients(),
            modifier: MAX_REAL_LENGTH / fft_len_real,
            direction,
            bit_reverse,
        })
    }

    #[inline]
    pub fn fft_len_real(&self) -> usize {
        self.fft_len_real
    }

    /// Descriptor of the half-length complex transform.
    #[inline]
    pub fn complex(&self) -> &CfftDescriptor {
        &self.cfft
    }

    #[inline]
    pub fn modifier(&self) -> usize {
        self.modifier
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn bit_reverse(&self) -> bool {
        self.bit_reverse
    }

    /// Runs [`rfft`] or [`rifft`] depending on the descriptor's direction.
    ///
    /// For the forward direction `input` is clobbered.
    pub fn process(&self, input: &mut [Q15], output: &mut [Q15]) -> Result<(), FftError> {
        match self.direction {
            Direction::Forward => rfft(self, input, output),
            Direction::Inverse => rifft(self, input, output),
        }
    }

    /// Spectrum buffer sizes accepted: bins `0..=N/2`, or the full mirrored spectrum.
    fn spectrum_len_ok(&self, len: usize) -> bool {
        len == self.fft_len_real + 2 || len == 2 * self.fft_len_real
    }
}

/// Creates the descriptor for a real transform of `fft_len_real` samples.
pub fn init_real_descriptor(
    fft_len_real: usize,
    direction: Direction,
    bit_reverse: bool,
) -> Result<RfftDescriptor, FftError> {
    RfftDescriptor::new(fft_len_real, direction, bit_reverse)
}

/// Split-pass products are Q15 x Q15; the extra bit halves the data.
const SPLIT_SHIFT: u32 = 16;

#[inline]
fn widen(z: Complex<Q15>) -> Complex<i64> {
    Complex::new(z.re as i64, z.im as i64)
}

/// Split-pass coefficients for bin `k`.
#[inline]
fn split_coefs(
    descriptor: &RfftDescriptor,
    k: usize,
) -> Result<(Complex<Q15>, Complex<Q15>), FftError> {
    let index = k * descriptor.modifier;
    let a = descriptor.coefs.a(index).ok_or(FftError::IndexOutOfRange)?;
    let b = descriptor.coefs.b(index).ok_or(FftError::IndexOutOfRange)?;
    Ok((a, b))
}

#[inline]
fn sample(buffer: &[Q15], index: usize) -> Complex<Q15> {
    Complex::new(buffer[2 * index], buffer[2 * index + 1])
}

#[inline]
fn store(buffer: &mut [Q15], index: usize, z: Complex<Q15>) {
    buffer[2 * index] = z.re;
    buffer[2 * index + 1] = z.im;
}

/// Forward real FFT of `input` (`N` samples) into `output`.
///
/// `output` holds interleaved bins and is either `N + 2` samples long (bins
/// `0..=N/2`) or `2N` (bins `N/2+1..N` filled in as conjugates). Bins are
/// `DFT / N`. `input` is used as scratch for the complex transform.
pub fn rfft(
    descriptor: &RfftDescriptor,
    input: &mut [Q15],
    output: &mut [Q15],
) -> Result<(), FftError> {
    let n = descriptor.fft_len_real;
    if input.len() != n || !descriptor.spectrum_len_ok(output.len()) {
        return Err(FftError::SizeMismatch);
    }

    cfft(&descriptor.cfft, input, Direction::Forward, descriptor.bit_reverse)?;

    let half = n / 2;
    let full = output.len() == 2 * n;

    for k in 1..half {
        let z1 = widen(sample(input, k));
        let z2 = widen(sample(input, half - k));
        let (a, b) = split_coefs(descriptor, k)?;

        // A * Z[k] + B * conj(Z[N/2 - k])
        let acc = complex_mul_wide(z1, a) + complex_mul_conj_wide(z2, b).conj();
        let bin = complex_narrow(acc, SPLIT_SHIFT);
        store(output, k, bin);
        if full {
            store(output, n - k, Complex::new(bin.re, saturating_sub(0, bin.im)));
        }
    }

    // DC and Nyquist both come out of the first complex bin
    let z0 = widen(sample(input, 0));
    store(output, 0, Complex::new(narrow_q15(z0.re + z0.im, 1), 0));
    store(output, half, Complex::new(narrow_q15(z0.re - z0.im, 1), 0));

    Ok(())
}

/// Inverse real FFT of a half spectrum into `output` (`N` samples).
///
/// `input` is laid out like the output of [`rfft`] and only bins `0..=N/2`
/// are read. The result is the normalized inverse DFT, so a forward and
/// inverse round trip returns the input divided by `N`.
pub fn rifft(
    descriptor: &RfftDescriptor,
    input: &[Q15],
    output: &mut [Q15],
) -> Result<(), FftError> {
    let n = descriptor.fft_len_real;
    if !descriptor.spectrum_len_ok(input.len()) || output.len() != n {
        return Err(FftError::SizeMismatch);
    }

    let half = n / 2;

    for k in 0..half {
        let y1 = widen(sample(input, k));
        let y2 = widen(sample(input, half - k));
        let (a, b) = split_coefs(descriptor, k)?;

        // conj(A) * Y[k] + conj(B * Y[N/2 - k])
        let acc = complex_mul_conj_wide(y1, a) + complex_mul_wide(y2, b).conj();
        store(output, k, complex_narrow(acc, SPLIT_SHIFT));
    }

    cfft(&descriptor.cfft, output, Direction::Inverse, descriptor.bit_reverse)?;

    // The split pass halves the data
    for x in output.iter_mut() {
        *x = shift_left_saturating(*x, 1);
    }

    Ok(())
}

#[cfg(test)]
#[path = "real_tests.rs"]
mod tests;
