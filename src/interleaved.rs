//! The interleaved sample format used at the boundary.
//!
//! A sequence of `N` complex samples is exchanged as `2N` reals laid out
//! `[re0, im0, re1, im1, ..., re(N-1), im(N-1)]`.  This is exactly the memory layout of
//! `[Complex<T>]`: `Complex<T>` is `#[repr(C)]` with the real part first, and is `Pod` for
//! `f32` and `f64`, so views are checked casts rather than layout assumptions.

use crate::error::{Error, Result};
use crate::float::FftFloat;
use num_complex::Complex;

/// An odd interleaved length has no whole number of complex samples.  The reported `expected`
/// length is the next even length, not a plan length.
fn cast_error(len: usize) -> Error {
    Error::LengthMismatch {
        expected: len + len % 2,
        actual: len,
    }
}

/// Views interleaved samples as complex samples.
///
/// Fails with [`Error::LengthMismatch`] if `samples` has odd length, reporting the next even
/// length as `expected`.
pub fn as_complex<T: FftFloat>(samples: &[T]) -> Result<&[Complex<T>]> {
    bytemuck::try_cast_slice(samples).map_err(|_| cast_error(samples.len()))
}

/// Mutably views interleaved samples as complex samples.
///
/// Fails with [`Error::LengthMismatch`] if `samples` has odd length, reporting the next even
/// length as `expected`.
pub fn as_complex_mut<T: FftFloat>(samples: &mut [T]) -> Result<&mut [Complex<T>]> {
    let len = samples.len();
    bytemuck::try_cast_slice_mut(samples).map_err(|_| cast_error(len))
}

/// Views complex samples as interleaved samples.
pub fn as_interleaved<T: FftFloat>(samples: &[Complex<T>]) -> &[T] {
    bytemuck::cast_slice(samples)
}

/// Copies interleaved samples into owned complex samples.
pub fn to_complex<T: FftFloat>(samples: &[T]) -> Result<Vec<Complex<T>>> {
    as_complex(samples).map(|samples| samples.to_vec())
}

/// Copies complex samples into an owned interleaved buffer.
pub fn to_interleaved<T: FftFloat>(samples: &[Complex<T>]) -> Vec<T> {
    as_interleaved(samples).to_vec()
}
