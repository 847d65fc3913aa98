//! Q15 transform engine.

pub mod arith;
pub mod bitrev;
pub mod butterfly;
pub mod complex;
pub mod dispatch;
pub mod real;
pub mod tables;
pub mod twiddle;

pub use complex::{CfftDescriptor, cfft, init_complex_descriptor};
pub use dispatch::{ButterflyPlan, ButterflyVariant, dispatch};
pub use real::{RfftDescriptor, init_real_descriptor, rfft, rifft};
pub use tables::preload;
pub use twiddle::{SUPPORTED_COMPLEX_LENGTHS, SUPPORTED_REAL_LENGTHS, twiddle_at};
