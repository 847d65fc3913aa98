//! Fixed-point (Q15) FFT engine.
//!
//! The complex transform runs radix-4 or radix-4-by-2 decimation-in-frequency
//! butterflies with a right shift at every stage, so a forward transform
//! returns `DFT / N` and never relies on saturation to stay in range. The
//! real transform packs `N` real samples into `N/2` complex ones and
//! recovers the spectrum with a split pass.
//!
//! ```
//! use q15_fft::{Direction, fixed::{cfft, init_complex_descriptor}};
//!
//! let desc = init_complex_descriptor(16).unwrap();
//! let mut buffer = [0i16; 32];
//! buffer[0] = i16::MAX;
//! cfft(&desc, &mut buffer, Direction::Forward, true).unwrap();
//! assert!(buffer.chunks(2).all(|bin| bin == [2048, 0]));
//! ```
#![no_std]

extern crate alloc;

// The standard library backs the `std::error::Error` impl and the blocking
// table cells; tests always get it so 'cargo test' runs on a PC normally.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod convert;
pub mod fixed;
pub mod float;

pub use common::{Direction, FftError, FftProcess};
pub use fixed::arith::Q15;
