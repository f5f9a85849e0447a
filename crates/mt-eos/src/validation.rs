//! Validation helpers for solver inputs and outputs.

use crate::error::{FluidError, FluidResult};
use mt_core::ensure_positive;

/// Ensure temperature [K] is positive and finite.
pub fn validate_temperature(t: f64) -> FluidResult<f64> {
    Ok(ensure_positive(t, "temperature")?)
}

/// Ensure pressure [bar] is positive and finite.
pub fn validate_pressure(p: f64) -> FluidResult<f64> {
    Ok(ensure_positive(p, "pressure")?)
}

/// Ensure molar volume [L/mol] is positive and finite.
pub fn validate_molar_volume(v: f64) -> FluidResult<f64> {
    Ok(ensure_positive(v, "molar volume")?)
}

/// Ensure a derived property came out finite.
pub fn validate_finite(v: f64, what: &'static str) -> FluidResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FluidError::NonPhysical { what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_positive_temperature() {
        assert!(validate_temperature(300.0).is_ok());
        assert!(validate_temperature(-10.0).is_err());
        assert!(validate_temperature(0.0).is_err());
        assert!(validate_temperature(f64::NAN).is_err());
    }

    #[test]
    fn validate_positive_pressure() {
        assert!(validate_pressure(1.0).is_ok());
        assert!(matches!(
            validate_pressure(0.0),
            Err(FluidError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn non_finite_output_is_non_physical() {
        assert_eq!(
            validate_finite(f64::NAN, "fugacity coefficient"),
            Err(FluidError::NonPhysical {
                what: "fugacity coefficient"
            })
        );
        assert_eq!(validate_finite(-3.5, "entropy"), Ok(-3.5));
    }
}
