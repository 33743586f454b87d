//! Radix butterflies combining subsequence transforms.
//!
//! Each butterfly operates on an output slice holding `radix` consecutive subtransforms of
//! length `m`.  For every `k < m` it twiddles element `k` of each subtransform and replaces
//! them with their length-`radix` DFT, leaving the combined transform in the same slice.

use crate::bluesteins::Bluesteins;
use crate::float::FftFloat;
use crate::plan::{Plan, Stage};
use num_complex::Complex;

pub(crate) trait Butterfly<T> {
    type Buffer: AsRef<[Complex<T>]> + AsMut<[Complex<T>]>;

    fn radix(&self) -> usize;

    fn make_buffer(&self) -> Self::Buffer;

    fn apply(&self, input: Self::Buffer) -> Self::Buffer;
}

/// Multiplies by `-i` for forward transforms and by `i` for inverse transforms.
#[inline(always)]
fn rotate<T: FftFloat>(x: Complex<T>, forward: bool) -> Complex<T> {
    if forward {
        Complex::new(x.im, -x.re)
    } else {
        Complex::new(-x.im, x.re)
    }
}

/// Multiplies by `i`.
#[inline(always)]
fn mul_i<T: FftFloat>(x: Complex<T>) -> Complex<T> {
    Complex::new(-x.im, x.re)
}

pub(crate) struct Butterfly2;

impl<T: FftFloat> Butterfly<T> for Butterfly2 {
    type Buffer = [Complex<T>; 2];

    #[inline(always)]
    fn radix(&self) -> usize {
        2
    }

    #[inline(always)]
    fn make_buffer(&self) -> Self::Buffer {
        [Complex::default(); 2]
    }

    #[inline(always)]
    fn apply(&self, input: Self::Buffer) -> Self::Buffer {
        [input[0] + input[1], input[0] - input[1]]
    }
}

pub(crate) struct Butterfly3<T> {
    twiddle: Complex<T>,
}

impl<T: FftFloat> Butterfly<T> for Butterfly3<T> {
    type Buffer = [Complex<T>; 3];

    #[inline(always)]
    fn radix(&self) -> usize {
        3
    }

    #[inline(always)]
    fn make_buffer(&self) -> Self::Buffer {
        [Complex::default(); 3]
    }

    #[inline(always)]
    fn apply(&self, input: Self::Buffer) -> Self::Buffer {
        let sum = input[1] + input[2];
        let difference = mul_i(input[1] - input[2]) * self.twiddle.im;
        let a = input[0] + sum * self.twiddle.re;
        [input[0] + sum, a + difference, a - difference]
    }
}

pub(crate) struct Butterfly4 {
    forward: bool,
}

impl<T: FftFloat> Butterfly<T> for Butterfly4 {
    type Buffer = [Complex<T>; 4];

    #[inline(always)]
    fn radix(&self) -> usize {
        4
    }

    #[inline(always)]
    fn make_buffer(&self) -> Self::Buffer {
        [Complex::default(); 4]
    }

    #[inline(always)]
    fn apply(&self, input: Self::Buffer) -> Self::Buffer {
        let butterfly2 = |x| <Butterfly2 as Butterfly<T>>::apply(&Butterfly2, x);
        let a = butterfly2([input[0], input[2]]);
        let mut b = butterfly2([input[1], input[3]]);
        b[1] = rotate(b[1], self.forward);
        let c = butterfly2([a[0], b[0]]);
        let d = butterfly2([a[1], b[1]]);
        [c[0], d[0], c[1], d[1]]
    }
}

pub(crate) struct Butterfly5<T> {
    twiddle1: Complex<T>,
    twiddle2: Complex<T>,
}

impl<T: FftFloat> Butterfly<T> for Butterfly5<T> {
    type Buffer = [Complex<T>; 5];

    #[inline(always)]
    fn radix(&self) -> usize {
        5
    }

    #[inline(always)]
    fn make_buffer(&self) -> Self::Buffer {
        [Complex::default(); 5]
    }

    #[inline(always)]
    fn apply(&self, input: Self::Buffer) -> Self::Buffer {
        let (w1, w2) = (self.twiddle1, self.twiddle2);
        let sum14 = input[1] + input[4];
        let sum23 = input[2] + input[3];
        let difference14 = mul_i(input[1] - input[4]);
        let difference23 = mul_i(input[2] - input[3]);

        let a1 = input[0] + sum14 * w1.re + sum23 * w2.re;
        let b1 = difference14 * w1.im + difference23 * w2.im;
        let a2 = input[0] + sum14 * w2.re + sum23 * w1.re;
        let b2 = difference14 * w2.im - difference23 * w1.im;
        [input[0] + sum14 + sum23, a1 + b1, a2 + b2, a2 - b2, a1 - b1]
    }
}

#[inline(always)]
fn apply_butterfly<T, B>(butterfly: B, output: &mut [Complex<T>], m: usize, twiddles: &[Complex<T>])
where
    T: FftFloat,
    B: Butterfly<T>,
{
    let radix = butterfly.radix();
    debug_assert_eq!(output.len(), radix * m);
    debug_assert_eq!(twiddles.len(), (radix - 1) * m);
    for k in 0..m {
        let twiddles = &twiddles[k * (radix - 1)..(k + 1) * (radix - 1)];
        let mut buffer = butterfly.make_buffer();
        {
            let scratch = buffer.as_mut();
            scratch[0] = output[k];
            for j in 1..radix {
                scratch[j] = output[k + j * m] * twiddles[j - 1];
            }
        }
        let buffer = butterfly.apply(buffer);
        for (q, x) in buffer.as_ref().iter().enumerate() {
            output[k + q * m] = *x;
        }
    }
}

/// Copies twiddled element `k` of each subtransform into `buffer`.
#[inline(always)]
fn gather<T: FftFloat>(
    output: &[Complex<T>],
    k: usize,
    m: usize,
    twiddles: &[Complex<T>],
    buffer: &mut [Complex<T>],
) {
    let radix = buffer.len();
    let twiddles = &twiddles[k * (radix - 1)..(k + 1) * (radix - 1)];
    buffer[0] = output[k];
    for j in 1..radix {
        buffer[j] = output[k + j * m] * twiddles[j - 1];
    }
}

/// Direct DFT of length `radix`, for small radices without a specialized butterfly.
fn apply_generic<T: FftFloat>(
    output: &mut [Complex<T>],
    radix: usize,
    m: usize,
    twiddles: &[Complex<T>],
    roots: &[Complex<T>],
    scratch: &mut [Complex<T>],
) {
    debug_assert_eq!(output.len(), radix * m);
    debug_assert_eq!(roots.len(), radix);
    let scratch = &mut scratch[..radix];
    for k in 0..m {
        gather(output, k, m, twiddles, scratch);
        for q in 0..radix {
            let mut sum = scratch[0];
            let mut index = 0;
            for x in scratch.iter().skip(1) {
                index += q;
                if index >= radix {
                    index -= radix;
                }
                sum += x * roots[index];
            }
            output[k + q * m] = sum;
        }
    }
}

/// DFT of length `radix` by Bluestein's algorithm, for large prime radices.
fn apply_bluesteins<T: FftFloat>(
    output: &mut [Complex<T>],
    bluesteins: &Bluesteins<T>,
    m: usize,
    twiddles: &[Complex<T>],
    scratch: &mut [Complex<T>],
) {
    let radix = bluesteins.size();
    debug_assert_eq!(output.len(), radix * m);
    let (buffer, work) = scratch.split_at_mut(radix);
    for k in 0..m {
        gather(output, k, m, twiddles, buffer);
        bluesteins.apply(buffer, work);
        for (q, x) in buffer.iter().enumerate() {
            output[k + q * m] = *x;
        }
    }
}

/// Applies the butterfly for `stage` of `plan` to `output`.
#[inline]
pub(crate) fn combine<T: FftFloat>(
    plan: &Plan<T>,
    stage: &Stage,
    output: &mut [Complex<T>],
    scratch: &mut [Complex<T>],
) {
    let twiddles = plan.twiddles();
    let stage_twiddles = &twiddles[stage.twiddle_offset..stage.root_offset];
    let roots = &twiddles[stage.root_offset..stage.root_offset + stage.radix];
    if let Some(index) = stage.bluesteins {
        let bluesteins = &plan.bluesteins()[index];
        return apply_bluesteins(output, bluesteins, stage.m, stage_twiddles, scratch);
    }
    match stage.radix {
        2 => apply_butterfly(Butterfly2, output, stage.m, stage_twiddles),
        3 => apply_butterfly(
            Butterfly3 { twiddle: roots[1] },
            output,
            stage.m,
            stage_twiddles,
        ),
        4 => apply_butterfly(
            Butterfly4 {
                forward: plan.direction().is_forward(),
            },
            output,
            stage.m,
            stage_twiddles,
        ),
        5 => apply_butterfly(
            Butterfly5 {
                twiddle1: roots[1],
                twiddle2: roots[2],
            },
            output,
            stage.m,
            stage_twiddles,
        ),
        radix => apply_generic(output, radix, stage.m, stage_twiddles, roots, scratch),
    }
}
