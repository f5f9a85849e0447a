//! Temperature- and variant-dependent EOS parameters.

use crate::cubic::{CubicCoefficients, DepressedCubic};
use crate::error::{FluidError, FluidResult};
use crate::fluid::FluidCriticalProperties;
use crate::validation::{validate_molar_volume, validate_temperature};
use crate::variant::EosVariant;
use mt_core::{GAS_CONSTANT as R, L_PER_M3, ensure_positive};

/// Parameters that depend only on the fluid, the temperature and the variant.
///
/// Units: `a` [m^6·bar/mol^2], `b` [m^3/mol].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EosParameters {
    pub variant: EosVariant,
    /// Temperature [K]
    pub t: f64,
    /// Reduced temperature `T / Tc`
    pub tr: f64,
    pub a: f64,
    pub b: f64,
    /// Acentric function `S(ω)`; `None` for vdW and RK.
    pub s: Option<f64>,
    /// Temperature correction of the attraction term (1 for vdW and RK).
    pub k: f64,
    pub u: f64,
    pub w: f64,
}

/// Quantities that additionally need a pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureTerms {
    /// Pressure [bar]
    pub p: f64,
    /// Dimensionless attraction `A = a k P / (R T)^2`
    pub a_dim: f64,
    /// Dimensionless covolume `B = b P / (R T)`
    pub b_dim: f64,
    pub cubic: CubicCoefficients,
    pub depressed: DepressedCubic,
}

impl EosParameters {
    pub fn build(
        fluid: &FluidCriticalProperties,
        t: f64,
        variant: EosVariant,
    ) -> FluidResult<Self> {
        let t = validate_temperature(t)?;
        let tc = ensure_positive(fluid.tc(), "critical temperature")?;
        let pc = ensure_positive(fluid.pc(), "critical pressure")?;

        let c = variant.constants();
        let tr = t / tc;
        let mut a = c.omega_a * R * R * tc * tc / pc;
        let b = c.omega_b * R * tc / pc;
        if variant == EosVariant::RedlichKwong {
            a /= tr.sqrt();
        }

        let s = c.acentric.map(|poly| poly.eval(fluid.omega()));
        let k = match s {
            Some(s) => (1.0 + s * (1.0 - tr.sqrt())).powi(2),
            None => 1.0,
        };

        Ok(Self {
            variant,
            t,
            tr,
            a,
            b,
            s,
            k,
            u: c.u,
            w: c.w,
        })
    }

    /// Temperature-corrected attraction `a k`.
    pub fn attraction(&self) -> f64 {
        self.a * self.k
    }

    /// Explicit pressure [bar] at molar volume `v` [L/mol].
    ///
    /// May be negative inside the van der Waals loop. Fails when `v`
    /// coincides with the covolume or zeroes the attraction denominator.
    pub fn pressure(&self, v: f64) -> FluidResult<f64> {
        let v = validate_molar_volume(v)? / L_PER_M3;
        let (b, u, w) = (self.b, self.u, self.w);

        let repulsive = v - b;
        if repulsive == 0.0 {
            return Err(FluidError::domain(format!(
                "molar volume equals the covolume b = {:.6e} L/mol",
                b * L_PER_M3
            )));
        }
        let attractive = v * v + u * b * v + w * b * b;
        if attractive == 0.0 {
            return Err(FluidError::domain(
                "molar volume zeroes the attraction denominator",
            ));
        }

        Ok(R * self.t / repulsive - self.attraction() / attractive)
    }

    /// Build `A`, `B`, the cubic in `Z` and its depressed form at pressure `p` [bar].
    pub fn at_pressure(&self, p: f64) -> PressureTerms {
        let rt = R * self.t;
        let a_dim = self.attraction() * p / (rt * rt);
        let b_dim = self.b * p / rt;
        let cubic = CubicCoefficients::from_dimensionless(a_dim, b_dim, self.u, self.w);
        let depressed = cubic.depressed();
        PressureTerms {
            p,
            a_dim,
            b_dim,
            cubic,
            depressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::Species;
    use mt_core::{Tolerances, nearly_equal};

    fn methane() -> FluidCriticalProperties {
        FluidCriticalProperties::from_species(Species::Methane)
    }

    #[test]
    fn vdw_structural_constants() {
        let ep = EosParameters::build(&methane(), 298.0, EosVariant::VanDerWaals).unwrap();
        assert_eq!(ep.u, 1.0);
        assert_eq!(ep.w, 0.0);
        assert_eq!(ep.k, 1.0);
        assert!(ep.s.is_none());
    }

    #[test]
    fn pr_coefficients_match_table() {
        let fluid = methane();
        let ep = EosParameters::build(&fluid, 298.0, EosVariant::PengRobinson).unwrap();
        let tol = Tolerances::default();
        assert!(nearly_equal(ep.tr, 298.0 / 190.6, tol));
        assert!(nearly_equal(ep.a, 0.45724 * R * R * 190.6 * 190.6 / 46.0, tol));
        assert!(nearly_equal(ep.b, 0.07780 * R * 190.6 / 46.0, tol));
        let s = 0.37464 + 1.54226 * 0.011 - 0.26992 * 0.011 * 0.011;
        assert!(nearly_equal(ep.s.unwrap(), s, tol));
        assert!(nearly_equal(ep.k, (1.0 + s * (1.0 - ep.tr.sqrt())).powi(2), tol));
        assert_eq!((ep.u, ep.w), (2.0, -1.0));
    }

    #[test]
    fn rk_attraction_scales_with_reduced_temperature() {
        let fluid = methane();
        let at_tc = EosParameters::build(&fluid, 190.6, EosVariant::RedlichKwong).unwrap();
        let at_4tc = EosParameters::build(&fluid, 4.0 * 190.6, EosVariant::RedlichKwong).unwrap();
        assert!(nearly_equal(at_tc.a, 2.0 * at_4tc.a, Tolerances::default()));
        assert_eq!(at_tc.b, at_4tc.b);
    }

    #[test]
    fn soave_correction_is_unity_at_critical_temperature() {
        let ep = EosParameters::build(&methane(), 190.6, EosVariant::RedlichKwongSoave).unwrap();
        assert!(nearly_equal(ep.k, 1.0, Tolerances::default()));
    }

    #[test]
    fn non_positive_temperature_rejected() {
        for t in [0.0, -5.0, f64::NAN] {
            let err = EosParameters::build(&methane(), t, EosVariant::PengRobinson).unwrap_err();
            assert!(matches!(err, FluidError::InvalidArgument { .. }), "{t}");
        }
    }

    #[test]
    fn pressure_at_covolume_is_domain_error() {
        let ep = EosParameters::build(&methane(), 298.0, EosVariant::VanDerWaals).unwrap();
        let err = ep.pressure(ep.b * L_PER_M3).unwrap_err();
        assert!(matches!(err, FluidError::Domain { .. }));
    }

    #[test]
    fn dilute_pressure_approaches_ideal_gas() {
        let ep = EosParameters::build(&methane(), 298.0, EosVariant::PengRobinson).unwrap();
        let v = 1.0e4; // L/mol
        let ideal = R * 298.0 / (v / L_PER_M3);
        let tol = Tolerances {
            abs: 0.0,
            rel: 1e-3,
        };
        assert!(nearly_equal(ep.pressure(v).unwrap(), ideal, tol));
    }

    #[test]
    fn cubic_coefficients_follow_generalised_form() {
        let ep = EosParameters::build(&methane(), 298.0, EosVariant::PengRobinson).unwrap();
        let terms = ep.at_pressure(100.0);
        let (a, b) = (terms.a_dim, terms.b_dim);
        let tol = Tolerances::default();
        assert!(nearly_equal(terms.cubic.alpha, -1.0 - b + 2.0 * b, tol));
        assert!(nearly_equal(
            terms.cubic.beta,
            a - b * b - 2.0 * b - 2.0 * b * b,
            tol
        ));
        assert!(nearly_equal(terms.cubic.gamma, -a * b + b * b + b * b * b, tol));
    }
}
