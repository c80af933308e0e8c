// src/float/core.rs

use num_complex::Complex;
use num_traits::{Float, FloatConst, NumCast};

use crate::common::FftError;

/// Floating-point component type accepted by the engine (`f32`, `f64`).
pub trait FftFloat: Float + FloatConst {}

impl<T: Float + FloatConst> FftFloat for T {}

/// Casts a length or index into the component type.
///
/// Infallible for the primitive floats; the error path exists for custom `Float` types.
fn to_float<T: FftFloat>(value: usize) -> Result<T, FftError> {
    <T as NumCast>::from(value).ok_or(FftError::UnrepresentableLength)
}

/// Fills `twiddles` with the N roots of unity `exp(-j*2*pi*i/N)`, N = `twiddles.len()`.
///
/// The angle step `2*pi/N` is rounded to `T` once and then scaled by `-i`,
/// so single-precision tables carry single-precision angles.
pub(crate) fn precompute_twiddles<T: FftFloat>(twiddles: &mut [Complex<T>]) -> Result<(), FftError> {
    let n = twiddles.len();
    if n == 0 {
        log::debug!("rejected empty twiddle table");
        return Err(FftError::EmptyLength);
    }

    let step = T::TAU() / to_float::<T>(n)?;
    for (i, w) in twiddles.iter_mut().enumerate() {
        let angle = -to_float::<T>(i)? * step;
        let (sin, cos) = angle.sin_cos();
        *w = Complex::new(cos, sin);
    }

    log::trace!("computed {n} twiddle factors");
    Ok(())
}

/// Checks the transform preconditions before anything is touched.
pub(crate) fn validate(n: usize, buffer_len: usize, table_len: usize) -> Result<(), FftError> {
    let result = if !n.is_power_of_two() {
        Err(FftError::NotPowerOfTwo)
    } else if buffer_len != n {
        Err(FftError::SizeMismatch)
    } else if table_len != n {
        Err(FftError::TableSizeMismatch)
    } else {
        Ok(())
    };

    if let Err(err) = result {
        log::debug!("rejected fft of length {n} (buffer {buffer_len}, table {table_len}): {err}");
    }
    result
}

/// Butterfly network over decreasing block sizes.
///
/// Reads the input in natural order and leaves the spectrum in bit-reversed order.
/// Stage `s` uses every `2^s`-th twiddle factor, so only the first N/2 entries are read.
pub(crate) fn radix_2_butterflies<T: FftFloat>(buffer: &mut [Complex<T>], twiddles: &[Complex<T>]) {
    let n = buffer.len();
    let mut stride = 1;
    let mut len = n >> 1;

    while len > 0 {
        for j in 0..len {
            let w = twiddles[j * stride];

            for i in (j..n).step_by(len << 1) {
                let a = buffer[i];
                let b = buffer[i + len];

                buffer[i] = a + b;
                buffer[i + len] = (a - b) * w;
            }
        }
        stride <<= 1;
        len >>= 1;
    }
}

/// Moves every element to the bit-reversed position of its index.
///
/// Uses the incremental reversed counter; `buffer.len()` must be a power of two.
pub(crate) fn bit_reverse_in_place<E>(buffer: &mut [E]) {
    let n = buffer.len();
    let mut j = 0;

    for i in 1..n.saturating_sub(1) {
        let mut k = n >> 1;
        while k <= j {
            j -= k;
            k >>= 1;
        }
        j += k;

        // i == j is a fixed point, i > j was already swapped
        if i < j {
            buffer.swap(i, j);
        }
    }
}

/// Full in-place transform. Callers validate lengths first.
pub(crate) fn radix_2_fft_core<T: FftFloat>(buffer: &mut [Complex<T>], twiddles: &[Complex<T>]) {
    // Butterflies must run before the reorder.
    radix_2_butterflies(buffer, twiddles);
    bit_reverse_in_place(buffer);
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
