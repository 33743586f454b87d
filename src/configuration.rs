//! Factorization of transform sizes into radix stages.

use crate::bluesteins;

/// Radices with dedicated butterflies, in the order they are factored out.
const PREFERRED_RADICES: [usize; 4] = [4, 2, 3, 5];

/// Prime radices above this are computed with Bluestein's algorithm instead of a direct DFT.
const BLUESTEINS_THRESHOLD: usize = 31;

/// Returns true if `radix` has a specialized butterfly.
#[inline]
pub(crate) fn is_specialized(radix: usize) -> bool {
    PREFERRED_RADICES.contains(&radix)
}

/// Returns true if `radix` is transformed with Bluestein's algorithm.
#[inline]
pub(crate) fn uses_bluesteins(radix: usize) -> bool {
    radix > BLUESTEINS_THRESHOLD
}

/// Factors `size` into an ordered list of radices.
///
/// Factors of 4 are removed first, then 2, 3 and 5, then increasing odd candidates.  When a
/// candidate exceeds the square root of what remains, the remainder is prime and becomes the
/// final radix.  A size of 1 has no factors.
pub fn factorize(size: usize) -> Vec<usize> {
    let mut radices = Vec::new();
    let mut remaining = size;
    if remaining <= 1 {
        return radices;
    }

    for radix in PREFERRED_RADICES.iter().copied() {
        while remaining % radix == 0 {
            radices.push(radix);
            remaining /= radix;
        }
    }

    let mut candidate = 7;
    while remaining > 1 {
        if candidate * candidate > remaining {
            radices.push(remaining);
            break;
        }
        while remaining % candidate == 0 {
            radices.push(candidate);
            remaining /= candidate;
        }
        candidate += 2;
    }
    radices
}

/// Configuration for constructing plans.
///
/// Describes the stage layout of a transform size independently of direction and precision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Configuration {
    size: usize,
    radices: Vec<usize>,
    twiddles: usize,
    scratch: usize,
    bluesteins: Vec<Configuration>,
}

impl Configuration {
    /// Construct a new configuration with the FFT size.
    ///
    /// Returns `None` if `size` is 0.
    pub fn new(size: usize) -> Option<Self> {
        if size == 0 {
            return None;
        }
        let radices = factorize(size);
        let mut twiddles = 0;
        let mut scratch = 0;
        let mut inner = Vec::new();
        let mut current_size = size;
        for radix in radices.iter().copied() {
            let m = current_size / radix;
            // stage twiddles for j in 1..radix, followed by the radix roots
            twiddles += (radix - 1) * m + radix;
            if uses_bluesteins(radix) {
                let configuration = Self::new(bluesteins::inner_size(radix))?;
                let work = bluesteins::work_len(radix) + configuration.scratch();
                scratch = scratch.max(radix + work);
                inner.push(configuration);
            } else if !is_specialized(radix) {
                scratch = scratch.max(radix);
            }
            current_size = m;
        }
        Some(Self {
            size,
            radices,
            twiddles,
            scratch,
            bluesteins: inner,
        })
    }

    /// The FFT size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The radix of each stage, outermost first.
    pub fn radices(&self) -> &[usize] {
        &self.radices
    }

    /// The number of precomputed twiddle factors a plan requires.
    pub fn twiddles(&self) -> usize {
        self.twiddles
    }

    /// The number of scratch samples an execution requires for generic butterflies and
    /// Bluestein stages.
    pub fn scratch(&self) -> usize {
        self.scratch
    }

    /// The power-of-two configurations used by the Bluestein stages, outermost first.
    pub fn bluesteins(&self) -> &[Configuration] {
        &self.bluesteins
    }
}
