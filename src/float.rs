use bytemuck::Pod;
use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};

/// Floating-point types used for performing fast Fourier transforms.
///
/// `Pod` is required so that interleaved `[re, im, ...]` buffers can be viewed as complex samples.
pub trait FftFloat:
    Float + FloatConst + FromPrimitive + NumAssign + Pod + Default + core::fmt::Debug + Send + Sync
{
}

impl<T> FftFloat for T where
    T: Float
        + FloatConst
        + FromPrimitive
        + NumAssign
        + Pod
        + Default
        + core::fmt::Debug
        + Send
        + Sync
{
}
