use crate::common::{FftError, FftProcess};
use num_complex::Complex;
use super::core::{FftFloat, precompute_twiddles, radix_2_fft_core, validate};

/// Forward radix-2 FFT bound to one precomputed twiddle table.
///
/// The table is only borrowed for reading, so any number of handles (and
/// threads) can share it while each transform mutates its own buffer.
#[derive(Debug, Clone, Copy)]
pub struct CplxFft<'a, T> {
    twiddles: &'a [Complex<T>],
    n: usize,
}

impl<'a, T: FftFloat> CplxFft<'a, T> {
    /// Fills `twiddles` for a transform of length `n` and binds to it.
    ///
    /// No allocation takes place; the caller provides storage for exactly `n` factors.
    pub fn new(twiddles: &'a mut [Complex<T>], n: usize) -> Result<Self, FftError> {
        if !n.is_power_of_two() {
            return Err(FftError::NotPowerOfTwo);
        }
        if twiddles.len() != n {
            return Err(FftError::TableSizeMismatch);
        }

        precompute_twiddles(twiddles)?;
        log::trace!("created fft of length {n}");
        Ok(Self { twiddles, n })
    }

    /// Binds to a table that was already generated, e.g. by
    /// [`generate_twiddle_table`](crate::generate_twiddle_table).
    pub fn with_table(twiddles: &'a [Complex<T>]) -> Result<Self, FftError> {
        let n = twiddles.len();
        validate(n, n, n)?;
        Ok(Self { twiddles, n })
    }

    /// Transform length N.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: a handle is never built for N = 0.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// The twiddle table this handle reads from.
    pub fn twiddles(&self) -> &'a [Complex<T>] {
        self.twiddles
    }

    /// Executes the FFT in place.
    pub fn process(&self, buffer: &mut [Complex<T>]) -> Result<(), FftError> {
        validate(self.n, buffer.len(), self.twiddles.len())?;
        radix_2_fft_core(buffer, self.twiddles);
        Ok(())
    }
}

impl<'a, T: FftFloat> FftProcess<Complex<T>> for CplxFft<'a, T> {
    fn process(&self, buffer: &mut [Complex<T>]) -> Result<(), FftError> {
        CplxFft::process(self, buffer)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
