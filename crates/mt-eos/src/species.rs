//! Chemical species with compiled-in critical constants.

use crate::catalog::species_catalog;
use crate::error::FluidError;
use serde::{Deserialize, Serialize};

/// Pure fluids with tabulated critical properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    /// Methane (CH₄)
    Methane,
    /// Ethane (C₂H₆)
    Ethane,
    /// Propane (C₃H₈)
    Propane,
    /// n-Butane
    NButane,
    /// Isobutane
    Isobutane,
    /// n-Pentane
    NPentane,
    /// n-Hexane
    NHexane,
    /// Ethylene (C₂H₄)
    Ethylene,
    /// Propylene (C₃H₆)
    Propylene,
    /// Nitrogen (N₂)
    Nitrogen,
    /// Oxygen (O₂)
    Oxygen,
    /// Hydrogen (H₂)
    Hydrogen,
    /// Helium (He)
    Helium,
    /// Argon (Ar)
    Argon,
    /// Carbon dioxide (CO₂)
    CarbonDioxide,
    /// Carbon monoxide (CO)
    CarbonMonoxide,
    /// Water (H₂O)
    Water,
    /// Ammonia (NH₃)
    Ammonia,
    /// Sulfur dioxide (SO₂)
    SulfurDioxide,
    /// Nitrous oxide (N₂O)
    NitrousOxide,
    /// Refrigerant R134a
    R134a,
}

/// Critical constants of a species.
///
/// Units: `tc` [K], `pc` [bar], `omega` [-], `molar_mass` [g/mol].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesData {
    pub formula: &'static str,
    pub tc: f64,
    pub pc: f64,
    pub omega: f64,
    pub molar_mass: f64,
}

impl Species {
    pub const ALL: [Species; 21] = [
        Species::Methane,
        Species::Ethane,
        Species::Propane,
        Species::NButane,
        Species::Isobutane,
        Species::NPentane,
        Species::NHexane,
        Species::Ethylene,
        Species::Propylene,
        Species::Nitrogen,
        Species::Oxygen,
        Species::Hydrogen,
        Species::Helium,
        Species::Argon,
        Species::CarbonDioxide,
        Species::CarbonMonoxide,
        Species::Water,
        Species::Ammonia,
        Species::SulfurDioxide,
        Species::NitrousOxide,
        Species::R134a,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Species::Methane => "methane",
            Species::Ethane => "ethane",
            Species::Propane => "propane",
            Species::NButane => "n-butane",
            Species::Isobutane => "isobutane",
            Species::NPentane => "n-pentane",
            Species::NHexane => "n-hexane",
            Species::Ethylene => "ethylene",
            Species::Propylene => "propylene",
            Species::Nitrogen => "nitrogen",
            Species::Oxygen => "oxygen",
            Species::Hydrogen => "hydrogen",
            Species::Helium => "helium",
            Species::Argon => "argon",
            Species::CarbonDioxide => "carbon dioxide",
            Species::CarbonMonoxide => "carbon monoxide",
            Species::Water => "water",
            Species::Ammonia => "ammonia",
            Species::SulfurDioxide => "sulfur dioxide",
            Species::NitrousOxide => "nitrous oxide",
            Species::R134a => "r134a",
        }
    }

    /// Critical temperature, critical pressure, acentric factor and molar mass.
    pub fn data(&self) -> SpeciesData {
        let (formula, tc, pc, omega, molar_mass) = match self {
            Species::Methane => ("CH4", 190.6, 46.00, 0.011, 16.043),
            Species::Ethane => ("C2H6", 305.3, 48.72, 0.100, 30.070),
            Species::Propane => ("C3H8", 369.8, 42.48, 0.152, 44.097),
            Species::NButane => ("C4H10", 425.1, 37.96, 0.200, 58.123),
            Species::Isobutane => ("C4H10", 408.1, 36.48, 0.181, 58.123),
            Species::NPentane => ("C5H12", 469.7, 33.70, 0.252, 72.150),
            Species::NHexane => ("C6H14", 507.6, 30.25, 0.301, 86.177),
            Species::Ethylene => ("C2H4", 282.3, 50.40, 0.087, 28.054),
            Species::Propylene => ("C3H6", 365.6, 46.65, 0.140, 42.081),
            Species::Nitrogen => ("N2", 126.2, 34.00, 0.038, 28.014),
            Species::Oxygen => ("O2", 154.6, 50.43, 0.022, 31.999),
            Species::Hydrogen => ("H2", 33.19, 13.13, -0.216, 2.016),
            Species::Helium => ("He", 5.2, 2.28, -0.390, 4.003),
            Species::Argon => ("Ar", 150.9, 48.98, 0.000, 39.948),
            Species::CarbonDioxide => ("CO2", 304.2, 73.83, 0.224, 44.010),
            Species::CarbonMonoxide => ("CO", 132.9, 34.99, 0.048, 28.010),
            Species::Water => ("H2O", 647.1, 220.55, 0.345, 18.015),
            Species::Ammonia => ("NH3", 405.7, 112.80, 0.253, 17.031),
            Species::SulfurDioxide => ("SO2", 430.8, 78.84, 0.245, 64.065),
            Species::NitrousOxide => ("N2O", 309.6, 72.45, 0.141, 44.013),
            Species::R134a => ("C2H2F4", 374.2, 40.59, 0.327, 102.030),
        };
        SpeciesData {
            formula,
            tc,
            pc,
            omega,
            molar_mass,
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Species {
    type Err = FluidError;

    /// Case-insensitive lookup by key, display name, formula or alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        species_catalog()
            .iter()
            .find(|entry| entry.is_named(&wanted))
            .map(|entry| entry.species)
            .ok_or_else(|| FluidError::UnknownSpecies {
                name: s.trim().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!("methane".parse::<Species>(), Ok(Species::Methane));
        assert_eq!("  METHANE ".parse::<Species>(), Ok(Species::Methane));
        assert_eq!("CH4".parse::<Species>(), Ok(Species::Methane));
        assert_eq!("co2".parse::<Species>(), Ok(Species::CarbonDioxide));
        assert_eq!("butane".parse::<Species>(), Ok(Species::NButane));
        assert_eq!("R134A".parse::<Species>(), Ok(Species::R134a));
    }

    #[test]
    fn unknown_species_is_reported() {
        let err = "unobtainium".parse::<Species>().unwrap_err();
        assert_eq!(
            err,
            FluidError::UnknownSpecies {
                name: "unobtainium".into()
            }
        );
    }

    #[test]
    fn methane_constants() {
        let d = Species::Methane.data();
        assert_eq!(d.tc, 190.6);
        assert_eq!(d.pc, 46.0);
        assert_eq!(d.omega, 0.011);
        assert_eq!(d.formula, "CH4");
    }

    #[test]
    fn every_species_has_physical_constants() {
        for s in Species::ALL {
            let d = s.data();
            assert!(d.tc > 0.0, "{s}");
            assert!(d.pc > 0.0, "{s}");
            assert!(d.molar_mass > 0.0, "{s}");
            assert!(d.omega.abs() < 1.0, "{s}");
        }
    }

    #[test]
    fn key_round_trips_through_from_str() {
        for s in Species::ALL {
            assert_eq!(s.key().parse::<Species>(), Ok(s));
        }
    }
}
