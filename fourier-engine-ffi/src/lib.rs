//! C interface to [`fourier_engine::Engine`].
//!
//! Each engine lives behind an opaque handle owned by the caller: create it, initialize it for
//! a length, run transforms, and destroy it.  Handles are independent, so a host may keep one
//! per pipeline.  Initializing and releasing take a write lock on the handle while transforms
//! take a read lock, so a handle may be shared between threads.
//!
//! Sample buffers use the interleaved layout `[re0, im0, re1, im1, ...]` and hold `2 * N`
//! values.  Every function reports a [`FourierStatus`] and never writes output on failure.

use fourier_engine::{Engine, Error, FftFloat};
use libc::{c_int, size_t};
use std::sync::{PoisonError, RwLock};

/// Status codes returned across the C boundary.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FourierStatus {
    Ok = 0,
    InvalidLength = 1,
    NotInitialized = 2,
    LengthMismatch = 3,
    InvalidPlan = 4,
    NullPointer = 5,
}

impl From<Error> for FourierStatus {
    fn from(error: Error) -> Self {
        match error {
            Error::InvalidLength(_) => Self::InvalidLength,
            Error::NotInitialized => Self::NotInitialized,
            Error::LengthMismatch { .. } => Self::LengthMismatch,
            Error::InvalidPlan => Self::InvalidPlan,
        }
    }
}

impl From<Result<(), FourierStatus>> for FourierStatus {
    fn from(result: Result<(), FourierStatus>) -> Self {
        match result {
            Ok(()) => Self::Ok,
            Err(status) => status,
        }
    }
}

/// Opaque engine handle.
pub struct Handle<T> {
    engine: RwLock<Engine<T>>,
}

impl<T: FftFloat> Handle<T> {
    fn new() -> Self {
        Self {
            engine: RwLock::new(Engine::new()),
        }
    }
}

fn null_pointer(name: &str) -> FourierStatus {
    log::error!("{} is a null pointer", name);
    FourierStatus::NullPointer
}

/// Borrows the handle behind `state`.
///
/// # Safety
/// `state` must be null or a live handle returned by the matching `create` function.
unsafe fn acquire_handle<'a, T>(state: *const Handle<T>) -> Result<&'a Handle<T>, FourierStatus> {
    state.as_ref().ok_or_else(|| null_pointer("engine handle"))
}

/// Borrows `len` samples at `ptr` for the duration of a call.
///
/// # Safety
/// `ptr` must be null or valid for reads of `len` values.
unsafe fn acquire_input<'a, T>(ptr: *const T, len: size_t) -> Result<&'a [T], FourierStatus> {
    if ptr.is_null() {
        Err(null_pointer("input array"))
    } else {
        Ok(std::slice::from_raw_parts(ptr, len))
    }
}

/// Mutably borrows `len` samples at `ptr` for the duration of a call.
///
/// # Safety
/// `ptr` must be null or valid for reads and writes of `len` values, not aliased by any other
/// live reference.
unsafe fn acquire_output<'a, T>(ptr: *mut T, len: size_t) -> Result<&'a mut [T], FourierStatus> {
    if ptr.is_null() {
        Err(null_pointer("output array"))
    } else {
        Ok(std::slice::from_raw_parts_mut(ptr, len))
    }
}

/// Returns true if the two ranges share memory.  Ranges that do not fit in the address space
/// count as overlapping.
fn overlaps<T>(a: *const T, a_len: usize, b: *const T, b_len: usize) -> bool {
    let size = std::mem::size_of::<T>();
    let end = |start: usize, len: usize| {
        len.checked_mul(size).and_then(|bytes| start.checked_add(bytes))
    };
    let (a_start, b_start) = (a as usize, b as usize);
    match (end(a_start, a_len), end(b_start, b_len)) {
        (Some(a_end), Some(b_end)) => a_start < b_end && b_start < a_end,
        _ => true,
    }
}

unsafe fn initialize<T: FftFloat>(state: *mut Handle<T>, size: c_int) -> Result<(), FourierStatus> {
    let handle = acquire_handle(state)?;
    let size = if size < 0 { 0 } else { size as usize };
    let mut engine = handle.engine.write().unwrap_or_else(PoisonError::into_inner);
    engine.initialize(size)?;
    Ok(())
}

unsafe fn release<T: FftFloat>(state: *mut Handle<T>) -> Result<(), FourierStatus> {
    let handle = acquire_handle(state)?;
    let mut engine = handle.engine.write().unwrap_or_else(PoisonError::into_inner);
    engine.release();
    Ok(())
}

unsafe fn size<T: FftFloat>(state: *const Handle<T>) -> c_int {
    match acquire_handle(state) {
        Ok(handle) => {
            let engine = handle.engine.read().unwrap_or_else(PoisonError::into_inner);
            engine.size().map_or(-1, |size| size as c_int)
        }
        Err(_) => -1,
    }
}

unsafe fn transform<T: FftFloat>(
    state: *const Handle<T>,
    input: *const T,
    input_len: size_t,
    inverse: c_int,
    output: *mut *mut T,
    output_len: *mut size_t,
) -> Result<(), FourierStatus> {
    let handle = acquire_handle(state)?;
    let input = acquire_input(input, input_len)?;
    if output.is_null() {
        return Err(null_pointer("output array pointer"));
    }
    if output_len.is_null() {
        return Err(null_pointer("output length"));
    }
    let engine = handle.engine.read().unwrap_or_else(PoisonError::into_inner);
    let samples = engine.transform(input, inverse != 0)?.into_boxed_slice();
    *output_len = samples.len();
    *output = Box::into_raw(samples) as *mut T;
    Ok(())
}

unsafe fn transform_in_place<T: FftFloat>(
    state: *const Handle<T>,
    input: *const T,
    input_len: size_t,
    output: *mut T,
    output_len: size_t,
    inverse: c_int,
) -> Result<(), FourierStatus> {
    let handle = acquire_handle(state)?;
    if input.is_null() {
        return Err(null_pointer("input array"));
    }
    let engine = handle.engine.read().unwrap_or_else(PoisonError::into_inner);
    let inverse = inverse != 0;
    if input == output as *const T && input_len == output_len {
        engine.transform_buffer(acquire_output(output, output_len)?, inverse)?;
    } else if overlaps(input, input_len, output, output_len) {
        let input = acquire_input(input, input_len)?.to_vec();
        engine.transform_in_place(&input, acquire_output(output, output_len)?, inverse)?;
    } else {
        let input = acquire_input(input, input_len)?;
        engine.transform_in_place(input, acquire_output(output, output_len)?, inverse)?;
    }
    Ok(())
}

unsafe fn free_samples<T>(samples: *mut T, len: size_t) {
    if !samples.is_null() {
        drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(samples, len)));
    }
}

macro_rules! implement {
    {
        $type:ty, $suffix:ident
    } => {
        paste::paste! {
            /// Creates an uninitialized engine handle.
            #[no_mangle]
            pub extern "C" fn [<fourier_engine_create_ $suffix>]() -> *mut Handle<$type> {
                Box::into_raw(Box::new(Handle::new()))
            }

            /// Destroys an engine handle, releasing its plans.
            ///
            /// # Safety
            /// `state` must be null or a handle from the matching create function, not used
            /// afterwards.
            #[no_mangle]
            pub unsafe extern "C" fn [<fourier_engine_destroy_ $suffix>](state: *mut Handle<$type>) {
                if !state.is_null() {
                    drop(Box::from_raw(state));
                }
            }

            /// Builds forward and inverse plans for `size` complex samples.
            ///
            /// On failure any previously built plans are kept.
            ///
            /// # Safety
            /// `state` must be null or a live handle.
            #[no_mangle]
            pub unsafe extern "C" fn [<fourier_engine_initialize_ $suffix>](
                state: *mut Handle<$type>,
                size: c_int,
            ) -> FourierStatus {
                initialize(state, size).into()
            }

            /// Discards the plans of an engine.
            ///
            /// # Safety
            /// `state` must be null or a live handle.
            #[no_mangle]
            pub unsafe extern "C" fn [<fourier_engine_release_ $suffix>](
                state: *mut Handle<$type>,
            ) -> FourierStatus {
                release(state).into()
            }

            /// The number of complex samples the engine is initialized for, or -1.
            ///
            /// # Safety
            /// `state` must be null or a live handle.
            #[no_mangle]
            pub unsafe extern "C" fn [<fourier_engine_size_ $suffix>](
                state: *const Handle<$type>,
            ) -> c_int {
                size(state)
            }

            /// Transforms `input` into a newly allocated buffer stored in `*output`, with its
            /// length in `*output_len`.  The buffer must be freed with the matching
            /// `free_samples` function.
            ///
            /// # Safety
            /// `state` must be null or a live handle, `input` must be null or valid for
            /// `input_len` reads, and `output`/`output_len` must be null or writable.
            #[no_mangle]
            pub unsafe extern "C" fn [<fourier_engine_transform_ $suffix>](
                state: *const Handle<$type>,
                input: *const $type,
                input_len: size_t,
                inverse: c_int,
                output: *mut *mut $type,
                output_len: *mut size_t,
            ) -> FourierStatus {
                transform(state, input, input_len, inverse, output, output_len).into()
            }

            /// Transforms `input` into `output`.  The buffers may be the same or overlap.
            ///
            /// # Safety
            /// `state` must be null or a live handle, `input` must be null or valid for
            /// `input_len` reads, and `output` must be null or valid for `output_len` reads and
            /// writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fourier_engine_transform_in_place_ $suffix>](
                state: *const Handle<$type>,
                input: *const $type,
                input_len: size_t,
                output: *mut $type,
                output_len: size_t,
                inverse: c_int,
            ) -> FourierStatus {
                transform_in_place(state, input, input_len, output, output_len, inverse).into()
            }

            /// Frees a buffer returned by the matching transform function.
            ///
            /// # Safety
            /// `samples` and `len` must come from the same successful transform call.
            #[no_mangle]
            pub unsafe extern "C" fn [<fourier_engine_free_samples_ $suffix>](
                samples: *mut $type,
                len: size_t,
            ) {
                free_samples(samples, len)
            }
        }
    }
}

implement! { f32, float }
implement! { f64, double }
