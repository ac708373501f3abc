//! Smoothing curves applied to fractional cell offsets before blending.
//!
//! Every curve maps `[0, 1]` onto `[0, 1]`, is monotonic, passes through
//! `(0, 0)`, `(0.5, 0.5)` and `(1, 1)`, and satisfies `s(1 - t) = 1 - s(t)`.
//! Raw linear weights would leave visible creases along lattice lines.

use serde::{Deserialize, Serialize};

/// Hermite smoothstep: `3t² − 2t³`. First derivative is zero at both ends.
#[inline]
pub fn cubic(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Perlin's improved fade: `6t⁵ − 15t⁴ + 10t³`. First and second derivatives are zero at both ends.
#[inline]
pub fn quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingCurve {
    #[default]
    Cubic,
    Quintic,
}

impl SmoothingCurve {
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            SmoothingCurve::Cubic => cubic(t),
            SmoothingCurve::Quintic => quintic(t),
        }
    }
}
