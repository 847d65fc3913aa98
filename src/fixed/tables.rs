//! Process-lifetime coefficient tables.
//!
//! Every table is built at most once and never mutated afterwards, so the
//! `&'static` references handed out can be shared by any number of threads.
//! With the `std` feature the cells block concurrent initializers; without it
//! a racing initializer may build a table that is then dropped, and exactly
//! one value is ever published.

use super::bitrev::BitReversalTable;
use super::twiddle::{RealCoefficients, SUPPORTED_COMPLEX_LENGTHS, TwiddleTable};
use crate::common::FftError;

#[cfg(feature = "std")]
type TableCell<T> = once_cell::sync::OnceCell<T>;

#[cfg(not(feature = "std"))]
type TableCell<T> = once_cell::race::OnceBox<T>;

const TABLE_COUNT: usize = SUPPORTED_COMPLEX_LENGTHS.len();

static TWIDDLES: [TableCell<TwiddleTable>; TABLE_COUNT] = [const { TableCell::new() }; TABLE_COUNT];
static BIT_REVERSAL: [TableCell<BitReversalTable>; TABLE_COUNT] =
    [const { TableCell::new() }; TABLE_COUNT];
static REAL_COEFFICIENTS: TableCell<RealCoefficients> = TableCell::new();

#[cfg(feature = "std")]
fn get_or_build<T>(cell: &'static TableCell<T>, build: impl FnOnce() -> T) -> &'static T {
    cell.get_or_init(build)
}

#[cfg(not(feature = "std"))]
fn get_or_build<T>(cell: &'static TableCell<T>, build: impl FnOnce() -> T) -> &'static T {
    cell.get_or_init(|| alloc::boxed::Box::new(build()))
}

fn slot(fft_len: usize) -> Result<usize, FftError> {
    SUPPORTED_COMPLEX_LENGTHS
        .iter()
        .position(|&len| len == fft_len)
        .ok_or(FftError::UnsupportedLength)
}

/// Shared twiddle table for a supported complex length.
pub fn complex_twiddles(fft_len: usize) -> Result<&'static TwiddleTable, FftError> {
    let slot = slot(fft_len)?;
    Ok(get_or_build(&TWIDDLES[slot], || TwiddleTable::build(fft_len)))
}

/// Shared bit-reversal table for a supported complex length.
pub fn bit_reversal(fft_len: usize) -> Result<&'static BitReversalTable, FftError> {
    let slot = slot(fft_len)?;
    Ok(get_or_build(&BIT_REVERSAL[slot], || BitReversalTable::build(fft_len)))
}

/// Shared split-pass coefficients for every real length.
pub fn real_coefficients() -> &'static RealCoefficients {
    get_or_build(&REAL_COEFFICIENTS, RealCoefficients::new)
}

/// Builds every table up front so no transform ever pays for initialization.
pub fn preload() {
    for (slot, &len) in SUPPORTED_COMPLEX_LENGTHS.iter().enumerate() {
        get_or_build(&TWIDDLES[slot], || TwiddleTable::build(len));
        get_or_build(&BIT_REVERSAL[slot], || BitReversalTable::build(len));
    }
    real_coefficients();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_shared() {
        let a = complex_twiddles(256).unwrap();
        let b = complex_twiddles(256).unwrap();
        assert!(core::ptr::eq(a, b));
        assert_eq!(a.fft_len(), 256);

        let a = bit_reversal(64).unwrap();
        let b = bit_reversal(64).unwrap();
        assert!(core::ptr::eq(a, b));
        assert_eq!(a.bit_rev_length(), 56);

        assert!(core::ptr::eq(real_coefficients(), real_coefficients()));
    }

    #[test]
    fn test_unsupported_lengths() {
        assert_eq!(complex_twiddles(8).err(), Some(FftError::UnsupportedLength));
        assert_eq!(complex_twiddles(8192).err(), Some(FftError::UnsupportedLength));
        assert_eq!(bit_reversal(100).err(), Some(FftError::UnsupportedLength));
    }

    #[test]
    fn test_preload_fills_every_cell() {
        preload();

        assert!(TWIDDLES.iter().all(|cell| cell.get().is_some()));
        assert!(BIT_REVERSAL.iter().all(|cell| cell.get().is_some()));
        assert!(REAL_COEFFICIENTS.get().is_some());
        for (slot, &len) in SUPPORTED_COMPLEX_LENGTHS.iter().enumerate() {
            assert!(core::ptr::eq(complex_twiddles(len).unwrap(), TWIDDLES[slot].get().unwrap()));
            assert_eq!(BIT_REVERSAL[slot].get().map(|t| t.fft_len()), Some(len));
        }
    }

    #[test]
    fn test_preload_then_concurrent_readers() {
        preload();

        let handles: std::vec::Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| complex_twiddles(4096).unwrap() as *const TwiddleTable as usize))
            .collect();
        let first = complex_twiddles(4096).unwrap() as *const TwiddleTable as usize;
        for handle in handles {
            assert_eq!(handle.join().unwrap(), first);
        }
    }
}
