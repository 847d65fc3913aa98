use super::arith::Q15;
use crate::common::FftError;
use alloc::vec::Vec;
use num_complex::Complex;

/// Swap list that turns bit-reversed order into natural order for one length.
///
/// Each pair `(i, j)` has `i < j` and `j = reverse_bits(i)`; fixed points of
/// the permutation are left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitReversalTable {
    fft_len: usize,
    pairs: Vec<(u16, u16)>,
}

impl BitReversalTable {
    /// Largest length whose indices fit the `u16` pairs.
    pub const MAX_FFT_LEN: usize = 1 << 16;

    /// Builds the table for a power-of-two `fft_len` up to [`Self::MAX_FFT_LEN`].
    pub fn new(fft_len: usize) -> Result<Self, FftError> {
        if !fft_len.is_power_of_two() || fft_len > Self::MAX_FFT_LEN {
            return Err(FftError::UnsupportedLength);
        }
        Ok(Self::build(fft_len))
    }

    /// Builds without validation, for lengths already known to be supported.
    pub(crate) fn build(fft_len: usize) -> Self {
        let bits = fft_len.trailing_zeros();
        let mut pairs = Vec::new();
        if bits > 0 {
            for i in 0..fft_len {
                let j = i.reverse_bits() >> (usize::BITS - bits);
                if i < j {
                    pairs.push((i as u16, j as u16));
                }
            }
        }

        Self { fft_len, pairs }
    }

    #[inline]
    pub fn fft_len(&self) -> usize {
        self.fft_len
    }

    #[inline]
    pub fn pairs(&self) -> &[(u16, u16)] {
        &self.pairs
    }

    /// Number of index entries in the table, two per swap.
    #[inline]
    pub fn bit_rev_length(&self) -> usize {
        2 * self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Swaps the complex slots named by `table`. Applying it twice is the identity.
///
/// `buffer` must hold exactly `table.fft_len()` values.
pub fn permute(buffer: &mut [Complex<Q15>], table: &BitReversalTable) -> Result<(), FftError> {
    if buffer.len() != table.fft_len() {
        return Err(FftError::SizeMismatch);
    }

    for &(a, b) in table.pairs() {
        buffer.swap(a as usize, b as usize);
    }
    Ok(())
}

/// [`permute`] over an interleaved `(re, im)` buffer of `2 * table.fft_len()` samples.
pub fn permute_interleaved(buffer: &mut [Q15], table: &BitReversalTable) -> Result<(), FftError> {
    if buffer.len() != 2 * table.fft_len() {
        return Err(FftError::SizeMismatch);
    }

    for &(a, b) in table.pairs() {
        let (a, b) = (2 * a as usize, 2 * b as usize);
        buffer.swap(a, b);
        buffer.swap(a + 1, b + 1);
    }
    Ok(())
}

#[cfg(test)]
#[path = "bitrev_tests.rs"]
mod tests;
