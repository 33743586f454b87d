//! This crate provides mixed-radix fast Fourier transforms (FFT) with reusable plans, and a
//! small engine handle for exchanging interleaved sample buffers with a host environment.
//!
//! # Implementation
//! Transform sizes are factored into radices 4, 2, 3 and 5 where possible.  Remaining small
//! prime factors are handled by a direct DFT butterfly and large ones by Bluestein's algorithm,
//! so every size `N >= 1` is supported in `O(N log N)` time.  A [`Plan`] precomputes the
//! factorization and all twiddle factors for one size and direction; executing it is a recursive
//! decimation-in-time Cooley-Tukey transform.
//!
//! Inverse transforms are *not* scaled by `1 / N`: `inverse(forward(x)) == N * x`.
//!
//! # Example
//! ```
//! use fourier_engine::{Direction, Plan};
//! use num_complex::Complex;
//!
//! let forward = Plan::<f64>::new(4, Direction::Forward).unwrap();
//! let mut impulse = vec![Complex::new(0.0, 0.0); 4];
//! impulse[0] = Complex::new(1.0, 0.0);
//! let spectrum = forward.execute(&impulse).unwrap();
//! assert!(spectrum.iter().all(|x| *x == Complex::new(1.0, 0.0)));
//! ```
//!
//! # Optional features
//! -  **`serde`** - Enables serialization of [`num_complex::Complex`] samples.

mod bluesteins;
mod butterfly;
mod configuration;
mod engine;
mod error;
pub mod executor;
mod fft;
mod float;
pub mod interleaved;
mod plan;
mod twiddle;

pub use configuration::*;
pub use engine::*;
pub use error::*;
pub use fft::*;
pub use float::*;
pub use plan::Plan;

#[doc(hidden)]
pub use num_complex;
