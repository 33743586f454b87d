//! Execution of plans by recursive mixed-radix decimation in time.
//!
//! All validation happens before any sample is written.  Executions never share state: each
//! call allocates its own scratch, so one plan may be executed from many threads at once.

use crate::butterfly::combine;
use crate::error::{check_length, Error, Result};
use crate::float::FftFloat;
use crate::plan::{Plan, Stage};
use num_complex::Complex;

/// Transforms `input` into a newly allocated buffer.
///
/// Fails with [`Error::InvalidPlan`] if `plan` is `None` and with [`Error::LengthMismatch`] if
/// `input` does not have the planned length.
pub fn execute<T: FftFloat>(plan: Option<&Plan<T>>, input: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
    let plan = plan.ok_or(Error::InvalidPlan)?;
    check_length(plan.size(), input.len())?;
    let mut output = vec![Complex::default(); input.len()];
    apply(plan, input, &mut output);
    Ok(output)
}

/// Transforms `input` into `output`.
///
/// `output` may hold anything beforehand; it is fully overwritten.  Fails with
/// [`Error::LengthMismatch`] if the buffers differ in length or do not have the planned length.
pub fn execute_in_place<T: FftFloat>(
    plan: Option<&Plan<T>>,
    input: &[Complex<T>],
    output: &mut [Complex<T>],
) -> Result<()> {
    let plan = plan.ok_or(Error::InvalidPlan)?;
    check_length(input.len(), output.len())?;
    check_length(plan.size(), input.len())?;
    apply(plan, input, output);
    Ok(())
}

/// Transforms `buffer`, which serves as both input and output.
///
/// The input is first copied to scratch storage.
pub fn execute_aliased<T: FftFloat>(plan: Option<&Plan<T>>, buffer: &mut [Complex<T>]) -> Result<()> {
    let plan = plan.ok_or(Error::InvalidPlan)?;
    check_length(plan.size(), buffer.len())?;
    let input = buffer.to_vec();
    apply(plan, &input, buffer);
    Ok(())
}

fn apply<T: FftFloat>(plan: &Plan<T>, input: &[Complex<T>], output: &mut [Complex<T>]) {
    let mut scratch = vec![Complex::default(); plan.scratch_len()];
    transform(plan, input, output, &mut scratch);
}

/// Transforms `input` into `output` without validation.
///
/// `scratch` must hold at least `plan.scratch_len()` samples.
pub(crate) fn transform<T: FftFloat>(
    plan: &Plan<T>,
    input: &[Complex<T>],
    output: &mut [Complex<T>],
    scratch: &mut [Complex<T>],
) {
    debug_assert_eq!(input.len(), plan.size());
    debug_assert_eq!(output.len(), plan.size());
    decimate(plan, output, input, 0, 1, plan.stages(), scratch);
}

/// Transforms the subsequence `input[offset + i * stride]` into `output`.
///
/// `output.len()` is the subsequence length, which equals the product of the remaining radices.
fn decimate<T: FftFloat>(
    plan: &Plan<T>,
    output: &mut [Complex<T>],
    input: &[Complex<T>],
    offset: usize,
    stride: usize,
    stages: &[Stage],
    scratch: &mut [Complex<T>],
) {
    let (stage, remaining) = match stages.split_first() {
        Some(split) => split,
        None => {
            // length 1
            output[0] = input[offset];
            return;
        }
    };

    let radix = stage.radix;
    if remaining.is_empty() {
        for (q, x) in output.iter_mut().enumerate() {
            *x = input[offset + q * stride];
        }
    } else {
        for (q, chunk) in output.chunks_exact_mut(stage.m).enumerate() {
            decimate(
                plan,
                chunk,
                input,
                offset + q * stride,
                stride * radix,
                remaining,
                scratch,
            );
        }
    }

    combine(plan, stage, output, scratch);
}
