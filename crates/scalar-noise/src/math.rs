//! Scalar helpers shared by the sampler.

/// Linear interpolation: `p + t * (q - p)`.
#[inline]
pub fn lerp(p: f64, q: f64, t: f64) -> f64 {
    p + t * (q - p)
}

#[inline]
pub fn floor(v: f64) -> f64 {
    v.floor()
}

/// Floored modulo of `v` into `[0, period)`.
///
/// Unlike `%`, negative inputs wrap to positive results. A tiny negative `v`
/// can round up to exactly `period` in `rem_euclid`; that case maps to 0 so the
/// result always indexes the lattice. Non-finite input yields NaN.
#[inline]
pub fn wrap(v: f64, period: f64) -> f64 {
    let r = v.rem_euclid(period);
    if r >= period { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_interpolates_between_heights() {
        assert_eq!(lerp(5.0, 10.0, 0.5), 7.5);
        assert_eq!(lerp(5.0, 10.0, 0.0), 5.0);
        assert_eq!(lerp(5.0, 10.0, 1.0), 10.0);
    }

    #[test]
    fn floor_rounds_toward_negative_infinity() {
        assert_eq!(floor(3.0), 3.0);
        assert_eq!(floor(3.7), 3.0);
        assert_eq!(floor(-0.25), -1.0);
    }

    #[test]
    fn wrap_is_floored_modulo() {
        assert_eq!(wrap(0.0, 4.0), 0.0);
        assert_eq!(wrap(3.5, 4.0), 3.5);
        assert_eq!(wrap(4.0, 4.0), 0.0);
        assert_eq!(wrap(9.25, 4.0), 1.25);
        assert_eq!(wrap(-0.5, 4.0), 3.5);
        assert_eq!(wrap(-4.0, 4.0), 0.0);
        assert_eq!(wrap(-13.0, 4.0), 3.0);
    }

    #[test]
    fn wrap_never_returns_the_period() {
        let r = wrap(-1e-20, 4.0);
        assert!((0.0..4.0).contains(&r), "wrap(-1e-20, 4) = {r}");
    }

    #[test]
    fn wrap_non_finite_is_nan() {
        assert!(wrap(f64::NAN, 4.0).is_nan());
        assert!(wrap(f64::INFINITY, 4.0).is_nan());
    }
}
