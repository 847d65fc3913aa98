use super::core::{precompute_bitrev, precompute_twiddles, radix_2_dit_fft_core};
use crate::common::{Direction, FftError, FftProcess};
use alloc::vec::Vec;
use num_complex::Complex32;

/// Single-precision complex FFT of any power-of-two length.
///
/// Holds its own twiddle and bit-reverse tables. Forward output is the plain
/// DFT; inverse output is normalized by `1/N`.
#[derive(Debug, Clone)]
pub struct CplxFft {
    twiddles: Vec<Complex32>,
    bitrev: Vec<usize>,
    n: usize,
}

impl CplxFft {
    pub fn new(n: usize) -> Result<Self, FftError> {
        if !n.is_power_of_two() {
            return Err(FftError::UnsupportedLength);
        }

        Ok(Self {
            twiddles: precompute_twiddles(n),
            bitrev: precompute_bitrev(n),
            n,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Transforms `buffer` in place; it must hold exactly `n` values.
    pub fn process(&self, buffer: &mut [Complex32], direction: Direction) -> Result<(), FftError> {
        if buffer.len() != self.n {
            return Err(FftError::SizeMismatch);
        }

        if direction.is_inverse() {
            radix_2_dit_fft_core::<true>(buffer, &self.twiddles, &self.bitrev);
        } else {
            radix_2_dit_fft_core::<false>(buffer, &self.twiddles, &self.bitrev);
        }

        Ok(())
    }
}

impl FftProcess<Complex32> for CplxFft {
    fn process(&self, buffer: &mut [Complex32], inverse: bool) -> Result<(), FftError> {
        CplxFft::process(self, buffer, Direction::from_inverse_flag(inverse))
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
