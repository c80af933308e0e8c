#![no_std]

// The standard library is linked for tests and for the `std` feature,
// so you can run 'cargo test' on your PC normally.
#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod common;
pub mod float;

pub use common::{FftError, FftProcess};
pub use float::{CplxFft, FftFloat, bit_reverse_permute, fft_transform, fill_twiddle_table};
#[cfg(feature = "alloc")]
pub use float::generate_twiddle_table;
pub use num_complex::{Complex, Complex32, Complex64};
