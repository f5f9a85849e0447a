//! Cubic EOS solver: root selection, derived properties, phase label.

use crate::cubic::CubicRoots;
use crate::error::{FluidError, FluidResult};
use crate::fluid::{FluidCriticalProperties, SharedFluid};
use crate::params::EosParameters;
use crate::residual::{Departure, departure};
use crate::result::{EosResult, Phase, UnitValue};
use crate::validation::{validate_molar_volume, validate_pressure};
use crate::variant::EosVariant;
use mt_core::units::{
    DENSITY_UNIT, DIMENSIONLESS, GAS_CONSTANT as R, L_PER_M3, MOLAR_DENSITY_UNIT,
    MOLAR_ENERGY_UNIT, MOLAR_ENTROPY_UNIT, MOLAR_VOLUME_UNIT, PRESSURE_UNIT, TEMPERATURE_UNIT,
};
use tracing::debug;

/// kJ per m^3·bar.
const KJ_PER_M3_BAR: f64 = 100.0;

/// The state variable supplied alongside temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Given {
    Pressure(f64),
    Volume(f64),
}

impl Given {
    fn from_options(p: Option<f64>, v: Option<f64>) -> FluidResult<Self> {
        match (p, v) {
            (Some(_), Some(_)) => Err(FluidError::invalid(
                "both pressure and volume are specified: specify only one",
            )),
            (None, None) => Err(FluidError::invalid(
                "neither pressure nor volume is specified: specify one",
            )),
            (Some(p), None) => Ok(Given::Pressure(validate_pressure(p)?)),
            (None, Some(v)) => Ok(Given::Volume(validate_molar_volume(v)?)),
        }
    }
}

/// Properties of one retained root.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    departure: Departure,
    /// [mol/L]
    molar_density: f64,
}

/// Index of the stable root among the retained ones.
///
/// With two roots the one with the lower fugacity coefficient wins; ties go
/// to the liquid-like root (index 0).
pub fn select_root(fugacity_coefficients: &[f64]) -> usize {
    match fugacity_coefficients {
        [phi_liquid, phi_gas] if phi_gas < phi_liquid => 1,
        _ => 0,
    }
}

/// Phase label from critical constants and the cached critical volume.
pub fn classify_phase(fluid: &FluidCriticalProperties, t: f64, p: f64, v: f64) -> Phase {
    if t > fluid.tc() && p > fluid.pc() {
        Phase::Supercritical
    } else {
        match fluid.vc() {
            None => Phase::Unknown,
            Some(vc) if v > vc => Phase::Gas,
            Some(_) => Phase::Liquid,
        }
    }
}

/// Explicit EOS pressure [bar] at temperature `t` [K] and molar volume `v` [L/mol].
pub fn pressure_from_volume(
    fluid: &FluidCriticalProperties,
    t: f64,
    v: f64,
    variant: EosVariant,
) -> FluidResult<f64> {
    EosParameters::build(fluid, t, variant)?.pressure(v)
}

/// Retained compressibility roots at `(t, p)`, before phase selection.
pub fn compressibility_roots(
    fluid: &FluidCriticalProperties,
    t: f64,
    p: f64,
    variant: EosVariant,
) -> FluidResult<CubicRoots> {
    let p = validate_pressure(p)?;
    EosParameters::build(fluid, t, variant)?
        .at_pressure(p)
        .depressed
        .solve()
}

/// Evaluate the EOS at temperature `t` [K] and exactly one of pressure `p`
/// [bar] or molar volume `v` [L/mol].
///
/// Does not touch the fluid's critical-volume cache; the phase label uses
/// whatever volume is cached (see [`compute_eos`]).
pub fn solve(
    fluid: &FluidCriticalProperties,
    t: f64,
    p: Option<f64>,
    v: Option<f64>,
    variant: EosVariant,
) -> FluidResult<EosResult> {
    let given = Given::from_options(p, v)?;
    let params = EosParameters::build(fluid, t, variant)?;

    let p = match given {
        Given::Pressure(p) => p,
        Given::Volume(v) => {
            let p = params.pressure(v)?;
            if p.is_nan() || p <= 0.0 {
                return Err(FluidError::domain(format!(
                    "molar volume {v} L/mol gives non-positive pressure {p} bar"
                )));
            }
            p
        }
    };

    let terms = params.at_pressure(p);
    let roots = terms.depressed.solve()?;
    debug!(
        fluid = fluid.name(),
        %variant,
        t,
        p,
        delta = terms.depressed.delta,
        roots = roots.len(),
        "cubic solved"
    );

    let mut candidates = Vec::with_capacity(roots.len());
    for z in roots.to_vec() {
        match departure(&params, &terms, z) {
            Ok(departure) => candidates.push(Candidate {
                departure,
                molar_density: p / (R * L_PER_M3 * t * z),
            }),
            Err(FluidError::NonPhysical { what }) if roots.len() > 1 => {
                debug!(z, what, "root discarded");
            }
            Err(err) => return Err(err),
        }
    }
    if candidates.is_empty() {
        return Err(FluidError::NonPhysical {
            what: "compressibility factor (no physical root)",
        });
    }

    let phis: Vec<f64> = candidates
        .iter()
        .map(|c| c.departure.fugacity_coefficient)
        .collect();
    let index = select_root(&phis);
    let chosen = candidates[index];
    debug!(index, z = chosen.departure.z, ?phis, "root selected");

    let v = match given {
        Given::Volume(v) => v,
        Given::Pressure(_) => 1.0 / chosen.molar_density,
    };
    let phase = classify_phase(fluid, t, p, v);

    let d = chosen.departure;
    Ok(EosResult {
        phase,
        variant,
        temperature: UnitValue::new(t, TEMPERATURE_UNIT),
        temperature_reduced: UnitValue::new(params.tr, DIMENSIONLESS),
        pressure: UnitValue::new(p, PRESSURE_UNIT),
        pressure_reduced: UnitValue::new(p / fluid.pc(), DIMENSIONLESS),
        molar_density: UnitValue::new(chosen.molar_density, MOLAR_DENSITY_UNIT),
        density: UnitValue::new(
            chosen.molar_density * fluid.molar_mass() / 1000.0,
            DENSITY_UNIT,
        ),
        fugacity_coefficient: UnitValue::new(d.fugacity_coefficient, DIMENSIONLESS),
        compressibility_factor: UnitValue::new(d.z, DIMENSIONLESS),
        fugacity: UnitValue::new(d.fugacity_coefficient * p, PRESSURE_UNIT),
        molar_volume: UnitValue::new(v, MOLAR_VOLUME_UNIT),
        enthalpy_residual: UnitValue::new(d.enthalpy * R * KJ_PER_M3_BAR * t, MOLAR_ENERGY_UNIT),
        entropy_residual: UnitValue::new(d.entropy * R * KJ_PER_M3_BAR, MOLAR_ENTROPY_UNIT),
        gibbs_residual: UnitValue::new(d.gibbs * R * KJ_PER_M3_BAR * t, MOLAR_ENERGY_UNIT),
    })
}

/// Critical molar volume [L/mol]: the molar volume at `(Tc, Pc)`.
pub fn critical_molar_volume(
    fluid: &FluidCriticalProperties,
    variant: EosVariant,
) -> FluidResult<f64> {
    let at_critical = solve(fluid, fluid.tc(), Some(fluid.pc()), None, variant)?;
    Ok(at_critical.molar_volume.value)
}

/// Refresh the critical-volume cache for `variant`, then [`solve`].
pub fn compute_eos(
    fluid: &mut FluidCriticalProperties,
    t: f64,
    p: Option<f64>,
    v: Option<f64>,
    variant: EosVariant,
) -> FluidResult<EosResult> {
    fluid.ensure_critical_volume(variant)?;
    solve(fluid, t, p, v, variant)
}

/// [`compute_eos`] on a shared record, holding its lock for the whole call.
pub fn compute_eos_shared(
    fluid: &SharedFluid,
    t: f64,
    p: Option<f64>,
    v: Option<f64>,
    variant: EosVariant,
) -> FluidResult<EosResult> {
    fluid.with(|record| compute_eos(record, t, p, v, variant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::Species;

    #[test]
    fn select_root_prefers_lower_fugacity_coefficient() {
        assert_eq!(select_root(&[0.9]), 0);
        assert_eq!(select_root(&[2.5, 0.97]), 1);
        assert_eq!(select_root(&[0.4, 0.8]), 0);
        assert_eq!(select_root(&[0.8, 0.8]), 0);
    }

    #[test]
    fn classify_without_critical_volume() {
        let fluid = FluidCriticalProperties::from_species(Species::Methane);
        assert_eq!(classify_phase(&fluid, 298.0, 100.0, 0.2), Phase::Supercritical);
        assert_eq!(classify_phase(&fluid, 150.0, 1.0, 10.0), Phase::Unknown);
        // Above Tc but below Pc is not supercritical.
        assert_eq!(classify_phase(&fluid, 298.0, 10.0, 2.0), Phase::Unknown);
    }

    #[test]
    fn classify_against_critical_volume() {
        let fluid = FluidCriticalProperties::from_species(Species::Methane)
            .with_critical_volume(EosVariant::PengRobinson)
            .unwrap();
        let vc = fluid.vc().unwrap();
        assert_eq!(classify_phase(&fluid, 150.0, 1.0, vc * 10.0), Phase::Gas);
        assert_eq!(classify_phase(&fluid, 150.0, 30.0, vc * 0.5), Phase::Liquid);
    }

    #[test]
    fn both_or_neither_state_variable_rejected() {
        let fluid = FluidCriticalProperties::from_species(Species::Methane);
        let both = solve(&fluid, 298.0, Some(100.0), Some(0.2), EosVariant::PengRobinson);
        assert!(matches!(both, Err(FluidError::InvalidArgument { .. })));
        let neither = solve(&fluid, 298.0, None, None, EosVariant::PengRobinson);
        assert!(matches!(neither, Err(FluidError::InvalidArgument { .. })));
    }

    #[test]
    fn solve_does_not_fill_cache() {
        let fluid = FluidCriticalProperties::from_species(Species::Methane);
        let r = solve(&fluid, 298.0, Some(100.0), None, EosVariant::PengRobinson).unwrap();
        assert!(fluid.vc().is_none());
        assert_eq!(r.phase, Phase::Supercritical);
    }

    #[test]
    fn critical_volume_is_a_root_at_critical_point() {
        // The tabulated constants are rounded, so (Tc, Pc) is only close to a
        // triple root and Zc sits near 0.321 rather than 0.307.
        let fluid = FluidCriticalProperties::from_species(Species::Methane);
        let variant = EosVariant::PengRobinson;
        let vc = critical_molar_volume(&fluid, variant).unwrap();
        let zc = 46.0 * (vc / L_PER_M3) / (R * 190.6);

        let terms = EosParameters::build(&fluid, 190.6, variant)
            .unwrap()
            .at_pressure(46.0);
        assert!(terms.cubic.evaluate(zc).abs() < 1e-12, "f(Zc) at Zc = {zc}");
        assert!((zc - 0.3214).abs() < 1e-3, "Zc = {zc}");
    }

    #[test]
    fn volume_inside_covolume_is_domain_error() {
        let fluid = FluidCriticalProperties::from_species(Species::Methane);
        let ep = EosParameters::build(&fluid, 298.0, EosVariant::VanDerWaals).unwrap();
        let err = solve(
            &fluid,
            298.0,
            None,
            Some(ep.b * L_PER_M3),
            EosVariant::VanDerWaals,
        )
        .unwrap_err();
        assert!(matches!(err, FluidError::Domain { .. }));
    }
}
