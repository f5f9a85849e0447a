//! Isotherm evaluation over a molar-volume sweep.
//!
//! Connects the sweep definition with the explicit EOS pressure to produce
//! P(V) series suitable for plotting and comparison between variants.

use crate::error::{FluidError, FluidResult};
use crate::fluid::FluidCriticalProperties;
use crate::params::EosParameters;
use crate::sweeps::SweepDefinition;
use crate::validation::validate_temperature;
use crate::variant::EosVariant;
use mt_core::L_PER_M3;
use serde::Serialize;
use tracing::debug;

/// One point of an isotherm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IsothermPoint {
    /// Molar volume [L/mol]
    pub molar_volume: f64,
    /// Pressure [bar]; `None` where the EOS is undefined (V <= b).
    pub pressure: Option<f64>,
}

/// P(V) along one temperature for one variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Isotherm {
    pub variant: EosVariant,
    /// Temperature [K]
    pub temperature: f64,
    pub points: Vec<IsothermPoint>,
    /// Number of successful evaluations
    pub num_successful: usize,
    /// Number of failed evaluations
    pub num_failed: usize,
}

impl Isotherm {
    /// `(V, P)` pairs, excluding failed points.
    pub fn valid_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter_map(|pt| pt.pressure.map(|p| (pt.molar_volume, p)))
            .collect()
    }
}

/// Evaluate the EOS pressure at every volume of `sweep`.
///
/// Volumes at or below the covolume are recorded as failed points rather
/// than aborting the sweep.
pub fn isotherm(
    fluid: &FluidCriticalProperties,
    t: f64,
    sweep: &SweepDefinition,
    variant: EosVariant,
) -> FluidResult<Isotherm> {
    let t = validate_temperature(t)?;
    let params = EosParameters::build(fluid, t, variant)?;
    let covolume = params.b * L_PER_M3;

    let mut points = Vec::with_capacity(sweep.num_points);
    let mut num_failed = 0;
    for v in sweep.generate_points() {
        let pressure = if v <= covolume {
            None
        } else {
            match params.pressure(v) {
                Ok(p) => Some(p),
                Err(FluidError::Domain { what }) => {
                    debug!(v, what, "isotherm point skipped");
                    None
                }
                Err(err) => return Err(err),
            }
        };
        if pressure.is_none() {
            num_failed += 1;
        }
        points.push(IsothermPoint {
            molar_volume: v,
            pressure,
        });
    }

    Ok(Isotherm {
        variant,
        temperature: t,
        num_successful: points.len() - num_failed,
        num_failed,
        points,
    })
}

/// [`isotherm`] for all four variants at the same temperature.
pub fn isotherm_all_variants(
    fluid: &FluidCriticalProperties,
    t: f64,
    sweep: &SweepDefinition,
) -> FluidResult<Vec<Isotherm>> {
    EosVariant::ALL
        .iter()
        .map(|&variant| isotherm(fluid, t, sweep, variant))
        .collect()
}
