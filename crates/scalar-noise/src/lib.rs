//! Tileable 2D value noise.
//!
//! A [`ScalarGrid`] holds a `width × height` lattice of random scalars drawn once
//! at construction. Sampling wraps coordinates toroidally, smooths the fractional
//! cell offsets with a [`SmoothingCurve`] and bilinearly blends the four corner
//! values, so the field is continuous everywhere and tiles seamlessly.

pub mod config;
pub mod curve;
pub mod error;
pub mod grid;
pub mod math;
pub mod sampler;

pub use config::NoiseConfig;
pub use curve::SmoothingCurve;
pub use error::NoiseError;
pub use grid::ScalarGrid;
pub use sampler::sample;
