use crate::MtError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, MtError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(MtError::NonFinite { what, value: v })
    }
}

/// Ensure a value is finite and strictly positive.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, MtError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(MtError::InvalidArg {
            what: format!("{what} must be positive (got {v})"),
        })
    }
}

/// Pull `v` back into `[lo, hi]` when it overshoots by no more than `slack`.
///
/// Returns `None` for larger excursions so callers can report a domain error.
pub fn clamp_within(v: Real, lo: Real, hi: Real, slack: Real) -> Option<Real> {
    if v.is_nan() || v < lo - slack || v > hi + slack {
        None
    } else {
        Some(v.clamp(lo, hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero() {
        assert!(ensure_positive(1.0, "x").is_ok());
        assert!(matches!(
            ensure_positive(0.0, "x"),
            Err(MtError::InvalidArg { .. })
        ));
        assert!(matches!(
            ensure_positive(f64::INFINITY, "x"),
            Err(MtError::NonFinite { .. })
        ));
    }

    #[test]
    fn clamp_within_slack() {
        assert_eq!(clamp_within(1.0 + 1e-12, -1.0, 1.0, 1e-9), Some(1.0));
        assert_eq!(clamp_within(-1.0 - 1e-12, -1.0, 1.0, 1e-9), Some(-1.0));
        assert_eq!(clamp_within(0.5, -1.0, 1.0, 1e-9), Some(0.5));
        assert_eq!(clamp_within(1.1, -1.0, 1.0, 1e-9), None);
        assert_eq!(clamp_within(f64::NAN, -1.0, 1.0, 1e-9), None);
    }

    proptest! {
        #[test]
        fn clamp_within_stays_in_bounds(v in -2.0_f64..2.0) {
            if let Some(c) = clamp_within(v, -1.0, 1.0, 1e-9) {
                prop_assert!((-1.0..=1.0).contains(&c));
            }
        }
    }
}
