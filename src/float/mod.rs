pub mod complex;
mod core;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use num_complex::Complex;

pub use self::core::FftFloat;
pub use crate::common::{FftError, FftProcess};
pub use complex::CplxFft;

use self::core::{bit_reverse_in_place, precompute_twiddles, radix_2_fft_core, validate};

/// Fills a caller owned twiddle table for a transform of length `table.len()`.
///
/// Entry `i` holds `exp(-j*2*pi*i/N)`. Any positive length is accepted here,
/// but [`fft_transform`] only takes tables whose length is a power of two.
pub fn fill_twiddle_table<T: FftFloat>(table: &mut [Complex<T>]) -> Result<(), FftError> {
    precompute_twiddles(table)
}

/// Allocates and computes the twiddle table for a transform of length `n`.
///
/// The table depends only on `n` and can be reused for any number of transforms.
#[cfg(feature = "alloc")]
pub fn generate_twiddle_table<T: FftFloat>(n: usize) -> Result<Vec<Complex<T>>, FftError> {
    if n == 0 {
        return Err(FftError::EmptyLength);
    }
    let mut table = alloc::vec![Complex::new(T::zero(), T::zero()); n];
    precompute_twiddles(&mut table)?;
    Ok(table)
}

/// Computes the DFT of `sequence` in place.
///
/// `n` must be a power of two and both `sequence` and `table` must hold exactly `n`
/// elements; otherwise an error is returned and `sequence` is left untouched.
/// Rounding error grows with log2(n) stages, which matters mostly for `f32`.
pub fn fft_transform<T: FftFloat>(
    n: usize,
    sequence: &mut [Complex<T>],
    table: &[Complex<T>],
) -> Result<(), FftError> {
    validate(n, sequence.len(), table.len())?;
    radix_2_fft_core(sequence, table);
    Ok(())
}

/// Reorders `buffer` into bit-reversed index order. The permutation is its own inverse.
pub fn bit_reverse_permute<E>(buffer: &mut [E]) -> Result<(), FftError> {
    if !buffer.len().is_power_of_two() {
        return Err(FftError::NotPowerOfTwo);
    }
    bit_reverse_in_place(buffer);
    Ok(())
}
