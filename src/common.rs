// src/common.rs

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    /// The requested transform length is not one of the supported powers of two.
    UnsupportedLength,
    /// A buffer handed to a transform does not have the size the descriptor requires.
    SizeMismatch,
    /// A table lookup went past the stored coefficients.
    IndexOutOfRange,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::UnsupportedLength => write!(f, "Transform length is not supported"),
            FftError::SizeMismatch => write!(f, "Data buffer size does not match FFT size"),
            FftError::IndexOutOfRange => write!(f, "Twiddle index is outside the table"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Transform direction.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    /// Forward transform, twiddles `e^(-j*2*pi*k/N)`
    Forward,
    /// Inverse transform, conjugated twiddles
    Inverse,
}

impl Direction {
    #[inline]
    pub fn is_inverse(self) -> bool {
        matches!(self, Direction::Inverse)
    }

    /// Maps an `inverse` flag, as taken by [`FftProcess::process`], onto a direction.
    #[inline]
    pub fn from_inverse_flag(inverse: bool) -> Self {
        if inverse {
            Direction::Inverse
        } else {
            Direction::Forward
        }
    }
}

pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T], inverse: bool) -> Result<(), FftError>;
}
