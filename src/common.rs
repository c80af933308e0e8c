// src/common.rs

use core::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    /// The transform length is zero or not a power of two.
    NotPowerOfTwo,
    /// The sample buffer does not hold exactly N elements.
    SizeMismatch,
    /// The twiddle table does not hold exactly N elements.
    TableSizeMismatch,
    /// A twiddle table of length zero was requested.
    EmptyLength,
    /// The length cannot be represented in the chosen float type.
    ///
    /// Never produced for `f32` or `f64`; only custom `Float` types whose
    /// `NumCast` can fail for a `usize` reach it.
    UnrepresentableLength,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::NotPowerOfTwo => write!(f, "Size must be a power of 2"),
            FftError::SizeMismatch => write!(f, "Data buffer size does not match FFT size"),
            FftError::TableSizeMismatch => write!(f, "Twiddle table size does not match FFT size"),
            FftError::EmptyLength => write!(f, "Twiddle table length must be positive"),
            FftError::UnrepresentableLength => {
                write!(f, "Length is not representable in the sample type")
            }
        }
    }
}

/// In-place forward transform over a caller owned buffer.
pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T]) -> Result<(), FftError>;
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}
