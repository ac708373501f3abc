//! The random lattice behind the noise field.
//!
//! Values are stored column-major, `values[x][y]`, with `0 <= x < width` and
//! `0 <= y < height`. Every constructor either returns a fully populated
//! rectangular lattice or an error; there is no partially filled state.

use log::debug;
use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::curve::SmoothingCurve;
use crate::error::{NoiseError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct ScalarGrid {
    width: usize,
    height: usize,
    values: Vec<Vec<f64>>,
    curve: SmoothingCurve,
}

impl ScalarGrid {
    /// Build a `width × height` lattice of uniform `[0, 1)` values from the thread-local RNG.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_rng(width, height, &mut rand::thread_rng())
    }

    /// Square lattice, `height = width`.
    pub fn square(size: usize) -> Result<Self> {
        Self::new(size, size)
    }

    /// Deterministic lattice: the same `seed` always yields the same values.
    pub fn seeded(width: usize, height: usize, seed: u64) -> Result<Self> {
        Self::with_rng(width, height, &mut StdRng::seed_from_u64(seed))
    }

    pub fn with_rng<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<Self> {
        Self::with_distribution(width, height, &Standard, rng)
    }

    /// Draw every cell from `dist` instead of the uniform `[0, 1)` default.
    pub fn with_distribution<D, R>(width: usize, height: usize, dist: &D, rng: &mut R) -> Result<Self>
    where
        D: Distribution<f64> + ?Sized,
        R: Rng + ?Sized,
    {
        Self::generate(width, height, || dist.sample(&mut *rng))
    }

    /// Fill the lattice by calling `draw` exactly once per cell, `width * height` calls
    /// in total, column by column.
    pub fn generate<F>(width: usize, height: usize, mut draw: F) -> Result<Self>
    where
        F: FnMut() -> f64,
    {
        if width == 0 || height == 0 {
            return Err(NoiseError::invalid_dimension(width, height));
        }
        let values: Vec<Vec<f64>> = (0..width)
            .map(|_| (0..height).map(|_| draw()).collect::<Vec<f64>>())
            .collect();
        let curve = SmoothingCurve::default();
        debug!("generated {width}x{height} noise lattice, {curve:?} smoothing");
        Ok(Self { width, height, values, curve })
    }

    /// Wrap precomputed lattice values (test fixtures, previously generated noise).
    ///
    /// `values` must hold at least one column, every column must be non-empty and
    /// all columns must have the same length.
    pub fn from_values(values: Vec<Vec<f64>>) -> Result<Self> {
        let (width, height) = check_rectangular(&values)?;
        let curve = SmoothingCurve::default();
        debug!("loaded {width}x{height} noise lattice, {curve:?} smoothing");
        Ok(Self { width, height, values, curve })
    }

    /// Replace the whole lattice. The replacement must match the current dimensions.
    pub fn set_values(&mut self, values: Vec<Vec<f64>>) -> Result<()> {
        let got = check_rectangular(&values)?;
        if got != (self.width, self.height) {
            return Err(NoiseError::ShapeMismatch { expected: (self.width, self.height), got });
        }
        self.values = values;
        debug!(
            "replaced {}x{} noise lattice, {:?} smoothing",
            self.width, self.height, self.curve
        );
        Ok(())
    }

    pub fn with_curve(mut self, curve: SmoothingCurve) -> Self {
        self.set_curve(curve);
        self
    }

    pub fn set_curve(&mut self, curve: SmoothingCurve) {
        debug!("{}x{} noise lattice now uses {curve:?} smoothing", self.width, self.height);
        self.curve = curve;
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn curve(&self) -> SmoothingCurve {
        self.curve
    }

    /// The raw lattice, `values()[x][y]`.
    #[inline]
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Give up the lattice, e.g. to persist it and reload it later with [`Self::from_values`].
    pub fn into_values(self) -> Vec<Vec<f64>> {
        self.values
    }

    /// # Panics
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.values[x][y]
    }

    /// # Panics
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, val: f64) {
        self.values[x][y] = val;
    }
}

fn check_rectangular(values: &[Vec<f64>]) -> Result<(usize, usize)> {
    let width = values.len();
    let height = values.first().map_or(0, Vec::len);
    if width == 0 || height == 0 {
        return Err(NoiseError::invalid_dimension(width, height));
    }
    if let Some((column, col)) = values.iter().enumerate().find(|(_, c)| c.len() != height) {
        return Err(NoiseError::RaggedLattice { column, expected: height, got: col.len() });
    }
    Ok((width, height))
}
