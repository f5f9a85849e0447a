//! Residual (departure) properties of a compressibility-factor root.
//!
//! For the generalised cubic the attraction denominator factors as
//! `V^2 + u b V + w b^2 = (V + eps b)(V + sig b)`, which gives
//!
//! ```text
//! I    = ln((Z + sig B) / (Z + eps B)) / (sig - eps)
//! H/RT = Z - 1 - (A/B) I (1 - dln(a)/dln(T))
//! S/R  = ln(Z - B) + (A/B) I dln(a)/dln(T)
//! ```
//!
//! van der Waals keeps its closed form `Z - 1 - A/Z`, `ln(Z - B)`.

use crate::error::{FluidError, FluidResult};
use crate::params::{EosParameters, PressureTerms};
use crate::validation::validate_finite;
use crate::variant::EosVariant;

/// Dimensionless residual properties at one root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Departure {
    pub z: f64,
    /// `H^R / (R T)`
    pub enthalpy: f64,
    /// `S^R / R`
    pub entropy: f64,
    /// `G^R / (R T) = ln(phi)`
    pub gibbs: f64,
    pub fugacity_coefficient: f64,
}

/// Logarithmic temperature derivative of the attraction term, `dln(a k)/dln(T)`.
pub fn attraction_slope(params: &EosParameters) -> FluidResult<f64> {
    match params.variant {
        EosVariant::VanDerWaals => Ok(0.0),
        EosVariant::RedlichKwong => Ok(-0.5),
        EosVariant::RedlichKwongSoave | EosVariant::PengRobinson => {
            let s = params.s.ok_or(FluidError::NonPhysical {
                what: "acentric function",
            })?;
            Ok(-s * (params.tr / params.k).sqrt())
        }
    }
}

/// `I = ln((Z + sig B) / (Z + eps B)) / (sig - eps)`.
fn attraction_integral(u: f64, w: f64, z: f64, b_dim: f64) -> f64 {
    let disc = (u * u - 4.0 * w).sqrt();
    let sig = (u + disc) / 2.0;
    let eps = (u - disc) / 2.0;
    ((z + sig * b_dim) / (z + eps * b_dim)).ln() / (sig - eps)
}

pub fn departure(params: &EosParameters, terms: &PressureTerms, z: f64) -> FluidResult<Departure> {
    let (a, b) = (terms.a_dim, terms.b_dim);
    if z.is_nan() || z <= b {
        return Err(FluidError::NonPhysical {
            what: "compressibility factor (Z <= B)",
        });
    }

    let (enthalpy, entropy) = match params.variant {
        EosVariant::VanDerWaals => (z - 1.0 - a / z, (z - b).ln()),
        EosVariant::RedlichKwong
        | EosVariant::RedlichKwongSoave
        | EosVariant::PengRobinson => {
            let slope = attraction_slope(params)?;
            let q = a / b * attraction_integral(params.u, params.w, z, b);
            (z - 1.0 - q * (1.0 - slope), (z - b).ln() + q * slope)
        }
    };

    let enthalpy = validate_finite(enthalpy, "residual enthalpy")?;
    let entropy = validate_finite(entropy, "residual entropy")?;
    let gibbs = enthalpy - entropy;
    let fugacity_coefficient = validate_finite(gibbs.exp(), "fugacity coefficient")?;

    Ok(Departure {
        z,
        enthalpy,
        entropy,
        gibbs,
        fugacity_coefficient,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluid::FluidCriticalProperties;
    use crate::species::Species;
    use mt_core::{Tolerances, nearly_equal};
    use std::f64::consts::SQRT_2;

    fn setup(variant: EosVariant, t: f64, p: f64) -> (EosParameters, PressureTerms) {
        let fluid = FluidCriticalProperties::from_species(Species::Methane);
        let ep = EosParameters::build(&fluid, t, variant).unwrap();
        let terms = ep.at_pressure(p);
        (ep, terms)
    }

    #[test]
    fn peng_robinson_matches_closed_form() {
        let (ep, terms) = setup(EosVariant::PengRobinson, 298.0, 100.0);
        let z = terms.cubic.solve().unwrap().largest();
        let (a, b) = (terms.a_dim, terms.b_dim);

        let e = ep.s.unwrap() * (ep.tr / ep.k).sqrt();
        let c1 = a / (2.0 * SQRT_2 * b);
        let c2 = ((z + b * (1.0 + SQRT_2)) / (z + b * (1.0 - SQRT_2))).ln();
        let hr = z - 1.0 - c1 * (1.0 + e) * c2;
        let sr = (z - b).ln() - c1 * e * c2;

        let d = departure(&ep, &terms, z).unwrap();
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(d.enthalpy, hr, tol));
        assert!(nearly_equal(d.entropy, sr, tol));
        assert!(nearly_equal(d.gibbs, hr - sr, tol));
    }

    #[test]
    fn van_der_waals_closed_form() {
        let (ep, terms) = setup(EosVariant::VanDerWaals, 298.0, 50.0);
        let z = terms.cubic.solve().unwrap().largest();
        let d = departure(&ep, &terms, z).unwrap();
        assert_eq!(d.enthalpy, z - 1.0 - terms.a_dim / z);
        assert_eq!(d.entropy, (z - terms.b_dim).ln());
    }

    #[test]
    fn redlich_kwong_uses_half_power_slope() {
        let (ep, terms) = setup(EosVariant::RedlichKwong, 298.0, 50.0);
        let z = terms.cubic.solve().unwrap().largest();
        let (a, b) = (terms.a_dim, terms.b_dim);
        let i = (1.0 + b / z).ln();
        let d = departure(&ep, &terms, z).unwrap();
        let tol = Tolerances::default();
        assert!(nearly_equal(d.enthalpy, z - 1.0 - 1.5 * a / b * i, tol));
        assert!(nearly_equal(d.entropy, (z - b).ln() - 0.5 * a / b * i, tol));
    }

    #[test]
    fn soave_departure_is_finite_and_attractive() {
        let (ep, terms) = setup(EosVariant::RedlichKwongSoave, 298.0, 100.0);
        let z = terms.cubic.solve().unwrap().largest();
        let d = departure(&ep, &terms, z).unwrap();
        // Compressed methane above Tc: residual enthalpy is negative.
        assert!(d.enthalpy < 0.0);
        assert!(d.fugacity_coefficient > 0.0 && d.fugacity_coefficient < 1.0);
    }

    #[test]
    fn ideal_gas_limit_has_vanishing_departure() {
        for variant in EosVariant::ALL {
            let (ep, terms) = setup(variant, 600.0, 1e-4);
            let z = terms.cubic.solve().unwrap().largest();
            let d = departure(&ep, &terms, z).unwrap();
            assert!(d.enthalpy.abs() < 1e-5, "{variant}: {}", d.enthalpy);
            assert!(d.entropy.abs() < 1e-5, "{variant}: {}", d.entropy);
            assert!((d.fugacity_coefficient - 1.0).abs() < 1e-5, "{variant}");
        }
    }

    #[test]
    fn root_below_covolume_is_non_physical() {
        let (ep, terms) = setup(EosVariant::PengRobinson, 298.0, 100.0);
        let err = departure(&ep, &terms, terms.b_dim * 0.5).unwrap_err();
        assert!(matches!(err, FluidError::NonPhysical { .. }));
    }
}
