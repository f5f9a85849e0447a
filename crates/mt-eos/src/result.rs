//! Result record of a cubic EOS evaluation.

use crate::variant::EosVariant;
use mt_core::units::{Density, Pressure, Temperature, bar, g_per_cm3, k};
use serde::Serialize;

/// Phase label of the evaluated state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Above both critical temperature and critical pressure.
    Supercritical,
    Gas,
    /// Liquid (or solid; a cubic EOS cannot tell them apart).
    Liquid,
    /// No critical volume available to compare against.
    Unknown,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Supercritical => "supercritical",
            Phase::Gas => "gas",
            Phase::Liquid => "liquid",
            Phase::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A number paired with its unit string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitValue {
    pub value: f64,
    pub unit: &'static str,
}

impl UnitValue {
    pub const fn new(value: f64, unit: &'static str) -> Self {
        Self { value, unit }
    }
}

impl std::fmt::Display for UnitValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6} {}", self.value, self.unit)
    }
}

/// Thermodynamic state computed from the selected compressibility root.
///
/// | Field                  | Unit      |
/// |------------------------|-----------|
/// | temperature            | K         |
/// | pressure, fugacity     | bar       |
/// | molar_density          | mol/L     |
/// | density                | g/cm^3    |
/// | molar_volume           | L/mol     |
/// | enthalpy/gibbs_residual| kJ/mol    |
/// | entropy_residual       | kJ/mol/K  |
///
/// Reduced quantities, the compressibility factor and the fugacity
/// coefficient are dimensionless (`"-"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EosResult {
    pub phase: Phase,
    pub variant: EosVariant,
    pub temperature: UnitValue,
    pub temperature_reduced: UnitValue,
    pub pressure: UnitValue,
    pub pressure_reduced: UnitValue,
    pub molar_density: UnitValue,
    pub density: UnitValue,
    pub fugacity_coefficient: UnitValue,
    pub compressibility_factor: UnitValue,
    pub fugacity: UnitValue,
    pub molar_volume: UnitValue,
    pub enthalpy_residual: UnitValue,
    pub entropy_residual: UnitValue,
    pub gibbs_residual: UnitValue,
}

impl EosResult {
    pub fn temperature_quantity(&self) -> Temperature {
        k(self.temperature.value)
    }

    pub fn pressure_quantity(&self) -> Pressure {
        bar(self.pressure.value)
    }

    pub fn density_quantity(&self) -> Density {
        g_per_cm3(self.density.value)
    }

    /// Field name / value pairs in declaration order (phase excluded).
    pub fn entries(&self) -> [(&'static str, UnitValue); 13] {
        [
            ("temperature", self.temperature),
            ("temperature_reduced", self.temperature_reduced),
            ("pressure", self.pressure),
            ("pressure_reduced", self.pressure_reduced),
            ("molar_density", self.molar_density),
            ("density", self.density),
            ("fugacity_coefficient", self.fugacity_coefficient),
            ("compressibility_factor", self.compressibility_factor),
            ("fugacity", self.fugacity),
            ("molar_volume", self.molar_volume),
            ("enthalpy_residual", self.enthalpy_residual),
            ("entropy_residual", self.entropy_residual),
            ("gibbs_residual", self.gibbs_residual),
        ]
    }
}

impl std::fmt::Display for EosResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:<24} {}", "eos", self.variant.label())?;
        write!(f, "{:<24} {}", "phase", self.phase)?;
        for (name, value) in self.entries() {
            write!(f, "\n{name:<24} {value}")?;
        }
        Ok(())
    }
}
