use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::curve::SmoothingCurve;
use crate::error::{NoiseError, Result};
use crate::grid::ScalarGrid;

/// Construction parameters for a [`ScalarGrid`], typically read from JSON.
///
/// Dimensions are signed so that zero, negative and missing widths all surface
/// as [`NoiseError::InvalidDimension`] rather than as parse errors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Lattice columns. Required.
    pub width: Option<i64>,
    /// Lattice rows. Defaults to `width`.
    pub height: Option<i64>,
    pub curve: SmoothingCurve,
    /// Fixed seed for a reproducible lattice; `None` draws from the thread-local RNG.
    pub seed: Option<u64>,
}

impl NoiseConfig {
    pub fn new(width: i64) -> Self {
        Self { width: Some(width), ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validated `(width, height)`, with `height` falling back to `width`.
    pub fn dimensions(&self) -> Result<(usize, usize)> {
        let width = self.width.unwrap_or(0);
        let height = self.height.unwrap_or(width);
        let invalid = || NoiseError::InvalidDimension { width, height };
        if width <= 0 || height <= 0 {
            return Err(invalid());
        }
        let w = usize::try_from(width).map_err(|_| invalid())?;
        let h = usize::try_from(height).map_err(|_| invalid())?;
        Ok((w, h))
    }

    pub fn build(&self) -> Result<ScalarGrid> {
        let (width, height) = self.dimensions()?;
        let grid = match self.seed {
            Some(seed) => ScalarGrid::with_rng(width, height, &mut StdRng::seed_from_u64(seed))?,
            None => ScalarGrid::with_rng(width, height, &mut rand::thread_rng())?,
        };
        Ok(grid.with_curve(self.curve))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_width_is_invalid_dimension() {
        let err = NoiseConfig::default().build().unwrap_err();
        assert!(matches!(err, NoiseError::InvalidDimension { width: 0, height: 0 }));
    }

    #[test]
    fn non_positive_width_is_invalid_dimension() {
        for w in [0, -1, -64] {
            assert!(
                matches!(NoiseConfig::new(w).build(), Err(NoiseError::InvalidDimension { .. })),
                "width {w} should be rejected"
            );
        }
    }

    #[test]
    fn negative_height_is_invalid_dimension() {
        let cfg = NoiseConfig { height: Some(-2), ..NoiseConfig::new(4) };
        assert!(matches!(cfg.dimensions(), Err(NoiseError::InvalidDimension { width: 4, height: -2 })));
    }

    #[test]
    fn height_defaults_to_width() {
        let grid = NoiseConfig::new(10).build().unwrap();
        assert_eq!((grid.width(), grid.height()), (10, 10));
    }

    #[test]
    fn parses_json_with_defaults() {
        let cfg = NoiseConfig::from_json(r#"{ "width": 5, "height": 10 }"#).unwrap();
        assert_eq!(cfg.dimensions().unwrap(), (5, 10));
        assert_eq!(cfg.curve, SmoothingCurve::Cubic);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn parses_curve_and_seed() {
        let cfg = NoiseConfig::from_json(r#"{ "width": 3, "curve": "quintic", "seed": 42 }"#).unwrap();
        let grid = cfg.build().unwrap();
        assert_eq!(grid.curve(), SmoothingCurve::Quintic);
        assert_eq!(grid.values(), ScalarGrid::seeded(3, 3, 42).unwrap().values());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = NoiseConfig::from_json(r#"{ "width": "wide" }"#).unwrap_err();
        assert!(matches!(err, NoiseError::Config(_)));
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let cfg = NoiseConfig { seed: Some(7), ..NoiseConfig::new(6) };
        assert_eq!(cfg.build().unwrap(), cfg.build().unwrap());
    }
}
