use super::arith::Q15;
use super::butterfly::{radix4, radix4_by2};
use super::twiddle::{SUPPORTED_COMPLEX_LENGTHS, TwiddleTable};
use crate::common::{Direction, FftError};
use num_complex::Complex;

/// Butterfly topology for one complex length.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ButterflyVariant {
    /// Lengths that are a power of 4
    Radix4,
    /// Lengths that are twice a power of 4: one radix-2 pass, then two radix-4 halves
    Radix4By2,
}

/// Selected butterfly variant together with its parameters.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ButterflyPlan {
    pub variant: ButterflyVariant,
    pub fft_len: usize,
    pub direction: Direction,
    /// Stride into the length's twiddle table for the radix-4 passes.
    pub twiddle_modifier: usize,
}

/// Picks the butterfly variant for `fft_len`. Pure; touches no data.
pub fn dispatch(fft_len: usize, direction: Direction) -> Result<ButterflyPlan, FftError> {
    if !SUPPORTED_COMPLEX_LENGTHS.contains(&fft_len) {
        return Err(FftError::UnsupportedLength);
    }

    let (variant, twiddle_modifier) = if fft_len.trailing_zeros() % 2 == 0 {
        (ButterflyVariant::Radix4, 1)
    } else {
        (ButterflyVariant::Radix4By2, 2)
    };

    Ok(ButterflyPlan {
        variant,
        fft_len,
        direction,
        twiddle_modifier,
    })
}

impl ButterflyPlan {
    /// Runs the planned butterflies in place. Output is bit-reversed.
    pub fn execute(
        &self,
        buffer: &mut [Complex<Q15>],
        twiddles: &TwiddleTable,
    ) -> Result<(), FftError> {
        if buffer.len() != self.fft_len {
            return Err(FftError::SizeMismatch);
        }
        if twiddles.fft_len() != self.fft_len {
            return Err(FftError::UnsupportedLength);
        }

        match self.variant {
            ButterflyVariant::Radix4 => {
                radix4(buffer, twiddles, self.twiddle_modifier, self.direction)
            }
            ButterflyVariant::Radix4By2 => radix4_by2(buffer, twiddles, self.direction),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec;

    #[test]
    fn test_dispatch_variants() {
        for len in [16, 64, 256, 1024, 4096] {
            let plan = dispatch(len, Direction::Forward).unwrap();
            assert_eq!(plan.variant, ButterflyVariant::Radix4, "length {}", len);
            assert_eq!(plan.twiddle_modifier, 1);
            assert_eq!(plan.fft_len, len);
        }
        for len in [32, 128, 512, 2048] {
            let plan = dispatch(len, Direction::Inverse).unwrap();
            assert_eq!(plan.variant, ButterflyVariant::Radix4By2, "length {}", len);
            assert_eq!(plan.twiddle_modifier, 2);
            assert_eq!(plan.direction, Direction::Inverse);
        }
    }

    #[test]
    fn test_dispatch_rejects_other_lengths() {
        for len in [0, 1, 2, 4, 8, 24, 100, 8192] {
            assert_eq!(
                dispatch(len, Direction::Forward),
                Err(FftError::UnsupportedLength),
                "length {}",
                len
            );
        }
    }

    #[test]
    fn test_execute_checks_sizes() {
        let plan = dispatch(16, Direction::Forward).unwrap();
        let twiddles = TwiddleTable::new(16).unwrap();
        let mut short = vec![Complex::new(0, 0); 15];
        assert_eq!(plan.execute(&mut short, &twiddles), Err(FftError::SizeMismatch));

        let mut buffer = vec![Complex::new(0, 0); 16];
        let other = TwiddleTable::new(64).unwrap();
        assert_eq!(plan.execute(&mut buffer, &other), Err(FftError::UnsupportedLength));

        assert_eq!(plan.execute(&mut buffer, &twiddles), Ok(()));
    }
}
