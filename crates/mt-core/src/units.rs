// mt-core/src/units.rs

//! Fixed unit system of the cubic equations of state.
//!
//! Solver inputs and outputs are plain `f64` in the units below. The `uom`
//! aliases and constructors are the typed boundary for callers that carry
//! quantities around.

use uom::si::f64::{
    MassDensity as UomMassDensity, Pressure as UomPressure, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;

/// Universal gas constant [m^3·bar/(K·mol)].
pub const GAS_CONSTANT: f64 = 8.314e-5;
pub const GAS_CONSTANT_UNIT: &str = "m^3*bar/K/mol";

/// Litres per cubic metre.
pub const L_PER_M3: f64 = 1000.0;

pub const TEMPERATURE_UNIT: &str = "K";
pub const PRESSURE_UNIT: &str = "bar";
pub const MOLAR_VOLUME_UNIT: &str = "L/mol";
pub const MOLAR_DENSITY_UNIT: &str = "mol/L";
pub const DENSITY_UNIT: &str = "g/cm^3";
pub const MOLAR_ENERGY_UNIT: &str = "kJ/mol";
pub const MOLAR_ENTROPY_UNIT: &str = "kJ/mol/K";
pub const MOLAR_MASS_UNIT: &str = "g/mol";
pub const DIMENSIONLESS: &str = "-";

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn g_per_cm3(v: f64) -> Density {
    use uom::si::mass_density::gram_per_cubic_centimeter;
    Density::new::<gram_per_cubic_centimeter>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Temperature in kelvin.
#[inline]
pub fn to_kelvin(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

/// Pressure in bar.
#[inline]
pub fn to_bar(p: Pressure) -> f64 {
    use uom::si::pressure::bar;
    p.get::<bar>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _t = k(300.0);
        let _p = bar(1.0);
        let _rho = g_per_cm3(0.4);
        let _r = unitless(0.5);
    }

    #[test]
    fn bar_and_pascal_agree() {
        assert!((to_bar(pa(101_325.0)) - 1.01325).abs() < 1e-12);
        assert!((to_kelvin(k(298.0)) - 298.0).abs() < 1e-12);
    }
}
