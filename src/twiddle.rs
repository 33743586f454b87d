use crate::fft::Direction;
use crate::float::FftFloat;
use num_complex::Complex;

/// Computes `e^(∓2πi·index/size)`, with the sign selected by `direction`.
///
/// The angle is evaluated in `f64` and converted, so `f32` and `f64` plans share the same
/// roots up to rounding.
#[inline]
pub(crate) fn compute_twiddle<T: FftFloat>(
    index: usize,
    size: usize,
    direction: Direction,
) -> Complex<T> {
    let index = index % size;
    let theta = (index * 2) as f64 * core::f64::consts::PI / size as f64;
    let twiddle = Complex::new(
        T::from_f64(theta.cos()).unwrap_or_else(T::zero),
        T::from_f64(-theta.sin()).unwrap_or_else(T::zero),
    );
    if direction.is_forward() {
        twiddle
    } else {
        twiddle.conj()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn quarter_turns() {
        let w: Complex<f64> = compute_twiddle(1, 4, Direction::Forward);
        assert!((w - Complex::new(0.0, -1.0)).norm() < 1e-15);
        let w: Complex<f64> = compute_twiddle(1, 4, Direction::Inverse);
        assert!((w - Complex::new(0.0, 1.0)).norm() < 1e-15);
    }

    #[test]
    fn index_wraps() {
        let a: Complex<f64> = compute_twiddle(3, 5, Direction::Forward);
        let b: Complex<f64> = compute_twiddle(13, 5, Direction::Forward);
        assert_eq!(a, b);
    }
}
