use super::arith::Q15;
use super::bitrev::{BitReversalTable, permute};
use super::dispatch::dispatch;
use super::tables;
use super::twiddle::TwiddleTable;
use crate::common::{Direction, FftError, FftProcess};
use num_complex::Complex;

/// Precomputed state for one complex transform length.
///
/// The tables are shared process-wide, so a descriptor is cheap to copy and
/// can be used from any number of threads at once.
#[derive(Debug, Clone, Copy)]
pub struct CfftDescriptor {
    fft_len: usize,
    twiddles: &'static TwiddleTable,
    bit_rev: &'static BitReversalTable,
}

impl CfftDescriptor {
    /// Binds the shared tables for `fft_len`, building them on first use.
    pub fn new(fft_len: usize) -> Result<Self, FftError> {
        Ok(Self {
            fft_len,
            twiddles: tables::complex_twiddles(fft_len)?,
            bit_rev: tables::bit_reversal(fft_len)?,
        })
    }

    #[inline]
    pub fn fft_len(&self) -> usize {
        self.fft_len
    }

    #[inline]
    pub fn twiddles(&self) -> &'static TwiddleTable {
        self.twiddles
    }

    #[inline]
    pub fn bit_reversal(&self) -> &'static BitReversalTable {
        self.bit_rev
    }

    /// Same as [`cfft`] with this descriptor.
    pub fn process(
        &self,
        buffer: &mut [Q15],
        direction: Direction,
        bit_reverse: bool,
    ) -> Result<(), FftError> {
        cfft(self, buffer, direction, bit_reverse)
    }
}

/// Creates the descriptor for a complex transform of `fft_len` points.
pub fn init_complex_descriptor(fft_len: usize) -> Result<CfftDescriptor, FftError> {
    CfftDescriptor::new(fft_len)
}

/// Complex FFT in place over an interleaved `(re, im)` buffer of `2 * fft_len` samples.
///
/// The forward transform yields `DFT / N`; the inverse yields the inverse
/// DFT without the `1/N` normalization, divided by `N`. With `bit_reverse`
/// off the bins are left in bit-reversed order.
pub fn cfft(
    descriptor: &CfftDescriptor,
    buffer: &mut [Q15],
    direction: Direction,
    bit_reverse: bool,
) -> Result<(), FftError> {
    if buffer.len() != 2 * descriptor.fft_len {
        return Err(FftError::SizeMismatch);
    }

    let data: &mut [Complex<Q15>] =
        bytemuck::try_cast_slice_mut(buffer).map_err(|_| FftError::SizeMismatch)?;

    let plan = dispatch(descriptor.fft_len, direction)?;
    plan.execute(data, descriptor.twiddles)?;

    if bit_reverse {
        permute(data, descriptor.bit_rev)?;
    }

    Ok(())
}

impl FftProcess<Q15> for CfftDescriptor {
    /// Natural-order transform of an interleaved buffer.
    fn process(&self, buffer: &mut [Q15], inverse: bool) -> Result<(), FftError> {
        cfft(self, buffer, Direction::from_inverse_flag(inverse), true)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
