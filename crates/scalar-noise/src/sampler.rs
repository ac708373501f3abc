//! Continuous sampling of a [`ScalarGrid`].
//!
//! For a coordinate `(x, y)`:
//!   1. Wrap `x` into `[0, width)` and `y` into `[0, height)` with floored modulo,
//!      so the field is periodic and negative coordinates re-enter from the far edge.
//!   2. Locate the cell: lower corner `(xf, yf) = floor(x, y)`, upper corner
//!      `((xf + 1) mod width, (yf + 1) mod height)`. The last column and row blend
//!      back into the first, which makes the field tile seamlessly.
//!   3. Smooth the fractional offsets with the grid's curve.
//!   4. Blend along y within each column, then along x between the two columns.
//!
//! Sampling reads the lattice through `&self` on every call and never mutates it,
//! so any number of threads may sample one grid at once.

use log::trace;
use noise::NoiseFn;
#[cfg(feature = "threading")]
use rayon::prelude::*;

use crate::error::{NoiseError, Result};
use crate::grid::ScalarGrid;
use crate::math::{floor, lerp, wrap};

/// Free-function form of [`ScalarGrid::sample`].
#[inline]
pub fn sample(grid: &ScalarGrid, x: f64, y: f64) -> f64 {
    grid.sample(x, y)
}

impl ScalarGrid {
    /// Sample the noise field at `(x, y)` using the grid's smoothing curve.
    ///
    /// Total over all reals: out-of-range and negative coordinates wrap. Exact
    /// lattice coordinates return the stored value verbatim. Non-finite input yields NaN.
    #[inline]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let curve = self.curve();
        self.sample_with(x, y, |t| curve.apply(t))
    }

    /// Sample with an arbitrary smoothing curve in place of the grid's own.
    pub fn sample_with<C>(&self, x: f64, y: f64, smooth: C) -> f64
    where
        C: Fn(f64) -> f64,
    {
        let (w, h) = (self.width(), self.height());
        let x = wrap(x, w as f64);
        let y = wrap(y, h as f64);

        let (xf, yf) = (floor(x), floor(y));
        // NaN casts to 0, which keeps the indices in range.
        let (x0, y0) = (xf as usize, yf as usize);
        let (x1, y1) = ((x0 + 1) % w, (y0 + 1) % h);

        let sx = smooth(x - xf);
        let sy = smooth(y - yf);

        let g = self.values();
        let a = lerp(g[x0][y0], g[x0][y1], sy);
        let b = lerp(g[x1][y0], g[x1][y1], sy);
        lerp(a, b, sx)
    }

    /// Render one period of the field onto an `out_width × out_height` canvas.
    ///
    /// Pixel `(px, py)` samples `(px / kx, py / ky)` with `kx = out_width / width`
    /// and `ky = out_height / height`. The result is column-major, `[px][py]`.
    pub fn raster(&self, out_width: usize, out_height: usize) -> Vec<Vec<f64>> {
        let kx = out_width as f64 / self.width() as f64;
        let ky = out_height as f64 / self.height() as f64;
        self.raster_scaled(out_width, out_height, kx, ky)
    }

    /// Like [`Self::raster`], but the canvas spans `x_tiles × y_tiles` periods.
    pub fn raster_tiled(
        &self,
        out_width: usize,
        out_height: usize,
        x_tiles: usize,
        y_tiles: usize,
    ) -> Result<Vec<Vec<f64>>> {
        if x_tiles == 0 || y_tiles == 0 {
            return Err(NoiseError::InvalidTileCount { x_tiles, y_tiles });
        }
        let kx = out_width as f64 / (self.width() * x_tiles) as f64;
        let ky = out_height as f64 / (self.height() * y_tiles) as f64;
        Ok(self.raster_scaled(out_width, out_height, kx, ky))
    }

    fn raster_scaled(&self, out_width: usize, out_height: usize, kx: f64, ky: f64) -> Vec<Vec<f64>> {
        trace!(
            "rastering {}x{} lattice onto {out_width}x{out_height} canvas",
            self.width(),
            self.height()
        );
        let column = |px: usize| -> Vec<f64> {
            let x = px as f64 / kx;
            (0..out_height).map(|py| self.sample(x, py as f64 / ky)).collect()
        };

        #[cfg(feature = "threading")]
        let columns = (0..out_width).into_par_iter().map(column).collect();
        #[cfg(not(feature = "threading"))]
        let columns = (0..out_width).map(column).collect();

        columns
    }
}

impl NoiseFn<f64, 2> for ScalarGrid {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.sample(point[0], point[1])
    }
}
