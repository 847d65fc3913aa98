//! Single-precision reference transform.
//!
//! Used to check the Q15 engine; not tuned for speed.

mod core;
pub mod complex;

pub use complex::CplxFft;
