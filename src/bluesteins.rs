//! Bluestein's algorithm for large prime radices.
//!
//! A length-`p` DFT is rewritten as a circular convolution with a chirp, which is evaluated with
//! a power-of-two transform of length `L >= 2p - 1`.  With `a[n] = W_2p^(n^2)`:
//!
//! `X[q] = a[q] * sum_j (x[j] * a[j]) * conj(a[q - j])`

use crate::configuration::Configuration;
use crate::executor;
use crate::fft::Direction;
use crate::float::FftFloat;
use crate::plan::Plan;
use crate::twiddle::compute_twiddle;
use num_complex::Complex;

/// The inner power-of-two transform length for a DFT of length `size`.
pub(crate) fn inner_size(size: usize) -> usize {
    (2 * size - 1).next_power_of_two()
}

/// The work samples needed to apply Bluestein's algorithm to a DFT of length `size`.
pub(crate) fn work_len(size: usize) -> usize {
    2 * inner_size(size)
}

/// Computes `W_2size^(index^2)`.
fn chirp<T: FftFloat>(index: usize, size: usize, direction: Direction) -> Complex<T> {
    let period = 2 * size as u128;
    let index = (index as u128 * index as u128 % period) as usize;
    compute_twiddle(index, 2 * size, direction)
}

#[derive(Clone)]
pub(crate) struct Bluesteins<T> {
    size: usize,
    inner: Plan<T>,
    /// The chirp `a`, one per input sample.
    x: Box<[Complex<T>]>,
    /// Spectrum of the convolution kernel `conj(a)`, scaled by `1 / L`.
    w: Box<[Complex<T>]>,
}

impl<T: FftFloat> Bluesteins<T> {
    pub(crate) fn new(size: usize, inner: Configuration, direction: Direction) -> Self {
        debug_assert_eq!(inner.size(), inner_size(size));
        let inner = Plan::from_configuration(inner, Direction::Forward);
        let inner_len = inner.size();

        let x = (0..size)
            .map(|i| chirp(i, size, direction))
            .collect::<Box<[_]>>();

        // the kernel is indexed circularly, so negative offsets wrap to the end
        let mut kernel = vec![Complex::default(); inner_len];
        for (i, a) in x.iter().enumerate() {
            kernel[i] = a.conj();
            if i > 0 {
                kernel[inner_len - i] = a.conj();
            }
        }
        let mut w = vec![Complex::default(); inner_len];
        let mut scratch = vec![Complex::default(); inner.scratch_len()];
        executor::transform(&inner, &kernel, &mut w, &mut scratch);
        let scale = T::one() / T::from_usize(inner_len).unwrap_or_else(T::one);
        for w in w.iter_mut() {
            *w = *w * scale;
        }

        Self {
            size,
            inner,
            x,
            w: w.into_boxed_slice(),
        }
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    /// Replaces `buffer` with its DFT.
    ///
    /// `work` must hold at least [`work_len`] samples plus the scratch of the inner plan.
    pub(crate) fn apply(&self, buffer: &mut [Complex<T>], work: &mut [Complex<T>]) {
        debug_assert_eq!(buffer.len(), self.size);
        let inner_len = self.w.len();
        let (signal, rest) = work.split_at_mut(inner_len);
        let (spectrum, scratch) = rest.split_at_mut(inner_len);

        for (s, (x, a)) in signal.iter_mut().zip(buffer.iter().zip(self.x.iter())) {
            *s = x * a;
        }
        for s in signal[self.size..].iter_mut() {
            *s = Complex::default();
        }
        executor::transform(&self.inner, signal, spectrum, scratch);

        // inverse transform of the product, by conjugation
        for (s, w) in spectrum.iter_mut().zip(self.w.iter()) {
            *s = (*s * w).conj();
        }
        executor::transform(&self.inner, spectrum, signal, scratch);

        for (x, (s, a)) in buffer.iter_mut().zip(signal.iter().zip(self.x.iter())) {
            *x = s.conj() * a;
        }
    }
}
