//! Typed state inputs and a per-variant model handle.

use crate::error::FluidResult;
use crate::fluid::{FluidCriticalProperties, SharedFluid};
use crate::params::EosParameters;
use crate::result::EosResult;
use crate::solver::{compute_eos, compute_eos_shared, pressure_from_volume};
use crate::variant::EosVariant;
use mt_core::units::{Pressure, Temperature, bar, to_bar, to_kelvin};

/// Input specification for evaluating a state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateInput {
    /// Temperature and pressure.
    TP { t: Temperature, p: Pressure },
    /// Temperature and molar volume [L/mol].
    TV { t: Temperature, v: f64 },
}

impl StateInput {
    /// `(T [K], P [bar], V [L/mol])` in the solver's unit system.
    pub fn to_fixed_units(self) -> (f64, Option<f64>, Option<f64>) {
        match self {
            StateInput::TP { t, p } => (to_kelvin(t), Some(to_bar(p)), None),
            StateInput::TV { t, v } => (to_kelvin(t), None, Some(v)),
        }
    }
}

/// One cubic equation of state, ready to evaluate fluids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CubicEos {
    variant: EosVariant,
}

impl CubicEos {
    pub fn new(variant: EosVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> EosVariant {
        self.variant
    }

    /// Model name (for logging and reports).
    pub fn name(&self) -> &'static str {
        self.variant.label()
    }

    pub fn parameters(
        &self,
        fluid: &FluidCriticalProperties,
        t: Temperature,
    ) -> FluidResult<EosParameters> {
        EosParameters::build(fluid, to_kelvin(t), self.variant)
    }

    /// Evaluate `input`, refreshing the fluid's critical volume when needed.
    pub fn state(
        &self,
        fluid: &mut FluidCriticalProperties,
        input: StateInput,
    ) -> FluidResult<EosResult> {
        let (t, p, v) = input.to_fixed_units();
        compute_eos(fluid, t, p, v, self.variant)
    }

    pub fn state_shared(&self, fluid: &SharedFluid, input: StateInput) -> FluidResult<EosResult> {
        let (t, p, v) = input.to_fixed_units();
        compute_eos_shared(fluid, t, p, v, self.variant)
    }

    /// Explicit EOS pressure at temperature `t` and molar volume `v` [L/mol].
    pub fn pressure(
        &self,
        fluid: &FluidCriticalProperties,
        t: Temperature,
        v: f64,
    ) -> FluidResult<Pressure> {
        pressure_from_volume(fluid, to_kelvin(t), v, self.variant).map(bar)
    }
}
