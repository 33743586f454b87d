//! A caller-owned handle caching one forward and one inverse plan.

use crate::error::{check_length, Error, Result};
use crate::executor;
use crate::fft::Direction;
use crate::float::FftFloat;
use crate::interleaved::{as_complex, as_complex_mut, to_interleaved};
use crate::plan::Plan;
use std::sync::Arc;

#[derive(Debug)]
struct PlanPair<T> {
    size: usize,
    forward: Arc<Plan<T>>,
    inverse: Arc<Plan<T>>,
}

/// Transform engine over interleaved `[re, im, ...]` buffers.
///
/// An engine is either uninitialized or holds a forward and an inverse plan for a single length
/// `N`.  Initializing for a new length replaces both plans.  Transforms take `&self`, so an
/// initialized engine may be shared for concurrent transforms; replacing or releasing plans
/// takes `&mut self`.
///
/// Inverse transforms are unnormalized, see [`Plan`].
#[derive(Debug)]
pub struct Engine<T> {
    plans: Option<PlanPair<T>>,
}

impl<T> Default for Engine<T> {
    fn default() -> Self {
        Self { plans: None }
    }
}

impl<T: FftFloat> Engine<T> {
    /// Creates an uninitialized engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine initialized for transforms of `size` complex samples.
    pub fn with_size(size: usize) -> Result<Self> {
        let mut engine = Self::new();
        engine.initialize(size)?;
        Ok(engine)
    }

    /// Builds and caches forward and inverse plans for `size` complex samples.
    ///
    /// The length is validated before anything is discarded: if `size` is 0 this fails with
    /// [`Error::InvalidLength`] and any previously cached plans remain usable.
    pub fn initialize(&mut self, size: usize) -> Result<()> {
        if size < 1 {
            log::error!("cannot initialize FFT: n cannot be less than 1");
            return Err(Error::InvalidLength(size));
        }
        log::debug!("init FFT for n = {}", size);
        let forward = Plan::new(size, Direction::Forward)?;
        let inverse = Plan::new(size, Direction::Inverse)?;
        self.plans = Some(PlanPair {
            size,
            forward: Arc::new(forward),
            inverse: Arc::new(inverse),
        });
        Ok(())
    }

    /// Discards the cached plans.
    ///
    /// Releasing an uninitialized engine does nothing beyond logging a warning.
    pub fn release(&mut self) {
        match self.plans.take() {
            Some(plans) => log::debug!("free FFT for n = {}", plans.size),
            None => log::warn!("cannot free FFT: FFT was already freed"),
        }
    }

    /// Transforms interleaved `input` into a newly allocated interleaved buffer.
    ///
    /// Fails with [`Error::NotInitialized`] before [`initialize`](Self::initialize), and with
    /// [`Error::LengthMismatch`] unless `input.len() == 2 * N`.
    pub fn transform(&self, input: &[T], inverse: bool) -> Result<Vec<T>> {
        let plan = self.checked_plan(input.len(), inverse)?;
        let output = executor::execute(Some(plan), as_complex(input)?)?;
        Ok(to_interleaved(&output))
    }

    /// Transforms interleaved `input` into interleaved `output`.
    ///
    /// `output` is fully overwritten on success and untouched on failure.  Fails with
    /// [`Error::NotInitialized`] before [`initialize`](Self::initialize), and with
    /// [`Error::LengthMismatch`] unless both buffers have length `2 * N`.
    pub fn transform_in_place(&self, input: &[T], output: &mut [T], inverse: bool) -> Result<()> {
        if !self.is_initialized() {
            return Err(self.contract_violation(Error::NotInitialized));
        }
        check_length(input.len(), output.len()).map_err(|e| self.contract_violation(e))?;
        let plan = self.checked_plan(input.len(), inverse)?;
        executor::execute_in_place(Some(plan), as_complex(input)?, as_complex_mut(output)?)
    }

    /// Transforms interleaved `buffer`, replacing its contents with the result.
    ///
    /// Use this when the input and output are the same storage.
    pub fn transform_buffer(&self, buffer: &mut [T], inverse: bool) -> Result<()> {
        let plan = self.checked_plan(buffer.len(), inverse)?;
        executor::execute_aliased(Some(plan), as_complex_mut(buffer)?)
    }

    fn checked_plan(&self, interleaved_len: usize, inverse: bool) -> Result<&Plan<T>> {
        let plans = self
            .plans
            .as_ref()
            .ok_or_else(|| self.contract_violation(Error::NotInitialized))?;
        check_length(plans.size * 2, interleaved_len).map_err(|e| self.contract_violation(e))?;
        let plan = if inverse {
            &plans.inverse
        } else {
            &plans.forward
        };
        Ok(&**plan)
    }

    fn contract_violation(&self, error: Error) -> Error {
        log::error!("FFT rejected: {}", error);
        error
    }
}

impl<T> Engine<T> {
    /// The number of complex samples the engine is initialized for.
    pub fn size(&self) -> Option<usize> {
        self.plans.as_ref().map(|plans| plans.size)
    }

    /// Returns true if plans are cached.
    pub fn is_initialized(&self) -> bool {
        self.plans.is_some()
    }

    /// The cached plan for `direction`, if initialized.
    pub fn plan(&self, direction: Direction) -> Option<&Arc<Plan<T>>> {
        self.plans.as_ref().map(|plans| match direction {
            Direction::Forward => &plans.forward,
            Direction::Inverse => &plans.inverse,
        })
    }
}

impl<T> Drop for Engine<T> {
    fn drop(&mut self) {
        if let Some(plans) = self.plans.take() {
            log::debug!("free FFT for n = {}", plans.size);
        }
    }
}
