//! Immutable transform plans.

use crate::bluesteins::Bluesteins;
use crate::configuration::{uses_bluesteins, Configuration};
use crate::error::{Error, Result};
use crate::executor;
use crate::fft::Direction;
use crate::float::FftFloat;
use crate::twiddle::compute_twiddle;
use num_complex::Complex;

/// Represents the parameters of a single decimation stage.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Stage {
    /// Number of subsequences combined by this stage.
    pub radix: usize,
    /// Length of each subsequence.
    pub m: usize,
    /// Offset of the `(radix - 1) * m` stage twiddles.
    pub twiddle_offset: usize,
    /// Offset of the `radix` roots of unity.
    pub root_offset: usize,
    /// Index of the Bluestein transform for large prime radices.
    pub bluesteins: Option<usize>,
}

impl Stage {
    fn initialize_twiddles<T: FftFloat>(&self, twiddles: &mut Vec<Complex<T>>, direction: Direction) {
        debug_assert_eq!(twiddles.len(), self.twiddle_offset);
        let size = self.radix * self.m;
        for k in 0..self.m {
            for j in 1..self.radix {
                twiddles.push(compute_twiddle(j * k, size, direction));
            }
        }
        debug_assert_eq!(twiddles.len(), self.root_offset);
        for t in 0..self.radix {
            twiddles.push(compute_twiddle(t, self.radix, direction));
        }
    }
}

/// A precomputed, reusable description of how to transform sequences of one length in one
/// direction.
///
/// Plans are immutable once built, so a single plan may be shared between threads and used by
/// any number of concurrent executions.
///
/// Inverse plans compute the unnormalized inverse DFT: applying a forward plan followed by an
/// inverse plan multiplies the input by `N`.  Callers that want a normalized inverse must scale
/// the output by `1 / N` themselves.
#[derive(Clone)]
pub struct Plan<T> {
    configuration: Configuration,
    direction: Direction,
    stages: Vec<Stage>,
    twiddles: Box<[Complex<T>]>,
    bluesteins: Vec<Bluesteins<T>>,
}

impl<T> core::fmt::Debug for Plan<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error> {
        f.debug_struct("Plan")
            .field("size", &self.configuration.size())
            .field("direction", &self.direction)
            .field("radices", &self.configuration.radices())
            .finish()
    }
}

impl<T: FftFloat> Plan<T> {
    /// Builds a plan for transforms of length `size`.
    ///
    /// Fails with [`Error::InvalidLength`] if `size` is 0.
    pub fn new(size: usize, direction: Direction) -> Result<Self> {
        let configuration = Configuration::new(size).ok_or(Error::InvalidLength(size))?;
        Ok(Self::from_configuration(configuration, direction))
    }

    /// Builds a plan from a configuration.
    pub fn from_configuration(configuration: Configuration, direction: Direction) -> Self {
        let bluesteins = configuration
            .radices()
            .iter()
            .copied()
            .filter(|radix| uses_bluesteins(*radix))
            .zip(configuration.bluesteins())
            .map(|(radix, inner)| Bluesteins::new(radix, inner.clone(), direction))
            .collect::<Vec<_>>();

        let mut stages = Vec::with_capacity(configuration.radices().len());
        let mut twiddles = Vec::with_capacity(configuration.twiddles());
        let mut bluesteins_index = 0;
        let mut current_size = configuration.size();
        for radix in configuration.radices().iter().copied() {
            let m = current_size / radix;
            let stage_bluesteins = if uses_bluesteins(radix) {
                bluesteins_index += 1;
                Some(bluesteins_index - 1)
            } else {
                None
            };
            let stage = Stage {
                radix,
                m,
                twiddle_offset: twiddles.len(),
                root_offset: twiddles.len() + (radix - 1) * m,
                bluesteins: stage_bluesteins,
            };
            stage.initialize_twiddles(&mut twiddles, direction);
            stages.push(stage);
            current_size = m;
        }
        debug_assert_eq!(twiddles.len(), configuration.twiddles());
        log::trace!(
            "built {} plan for size {} with radices {:?}",
            direction,
            configuration.size(),
            configuration.radices()
        );
        Self {
            configuration,
            direction,
            stages,
            twiddles: twiddles.into_boxed_slice(),
            bluesteins,
        }
    }

    /// Transforms `input` into a newly allocated buffer.
    pub fn execute(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
        executor::execute(Some(self), input)
    }

    /// Transforms `input` into `output`, overwriting all of `output`.
    pub fn execute_in_place(&self, input: &[Complex<T>], output: &mut [Complex<T>]) -> Result<()> {
        executor::execute_in_place(Some(self), input, output)
    }

    /// Transforms `buffer`, replacing its contents with the result.
    pub fn execute_aliased(&self, buffer: &mut [Complex<T>]) -> Result<()> {
        executor::execute_aliased(Some(self), buffer)
    }
}

impl<T> Plan<T> {
    /// The transform length.
    pub fn size(&self) -> usize {
        self.configuration.size()
    }

    /// The transform direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The radix of each stage, outermost first.
    pub fn radices(&self) -> &[usize] {
        self.configuration.radices()
    }

    /// The number of precomputed twiddle factors.
    pub fn twiddle_count(&self) -> usize {
        self.twiddles.len()
    }

    /// The number of scratch samples each execution needs for generic butterflies and Bluestein
    /// stages.
    pub fn scratch_len(&self) -> usize {
        self.configuration.scratch()
    }

    /// The configuration this plan was built from.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub(crate) fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub(crate) fn twiddles(&self) -> &[Complex<T>] {
        &self.twiddles
    }

    pub(crate) fn bluesteins(&self) -> &[Bluesteins<T>] {
        &self.bluesteins
    }
}
