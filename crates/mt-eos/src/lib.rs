//! mt-eos: cubic equations of state for pure fluids.
//!
//! Provides:
//! - Species catalog with critical constants
//! - Fluid records with a variant-tagged critical-volume cache
//! - Parameter builder for van der Waals, Redlich-Kwong, Soave and Peng-Robinson
//! - Analytic cubic solver with liquid/gas root selection
//! - Residual enthalpy, entropy, Gibbs energy and fugacity
//! - Isotherm sweeps (P against V)
//!
//! # Example
//!
//! ```
//! use mt_eos::{EosVariant, FluidCriticalProperties, compute_eos};
//!
//! let mut ch4 = FluidCriticalProperties::lookup("methane")?;
//! let state = compute_eos(&mut ch4, 298.0, Some(100.0), None, EosVariant::PengRobinson)?;
//! assert_eq!(state.temperature.value, 298.0);
//! println!("Z = {}", state.compressibility_factor.value);
//! # Ok::<(), mt_eos::FluidError>(())
//! ```

pub mod catalog;
pub mod cubic;
pub mod error;
pub mod fluid;
pub mod params;
pub mod residual;
pub mod result;
pub mod solver;
pub mod species;
pub mod state;
pub mod sweep_executor;
pub mod sweeps;
pub mod variant;

pub(crate) mod validation;

// Re-exports for ergonomics
pub use catalog::{FluidCatalogEntry, filter_species_catalog, species_catalog};
pub use cubic::{CubicCoefficients, CubicRoots, DepressedCubic};
pub use error::{FluidError, FluidResult};
pub use fluid::{CriticalVolume, DataSource, FluidCriticalProperties, FluidDefinition, SharedFluid};
pub use params::{EosParameters, PressureTerms};
pub use residual::Departure;
pub use result::{EosResult, Phase, UnitValue};
pub use solver::{
    classify_phase, compressibility_roots, compute_eos, compute_eos_shared,
    critical_molar_volume, pressure_from_volume, select_root, solve,
};
pub use species::{Species, SpeciesData};
pub use state::{CubicEos, StateInput};
pub use sweep_executor::{Isotherm, IsothermPoint, isotherm, isotherm_all_variants};
pub use sweeps::{SweepDefinition, SweepType};
pub use variant::EosVariant;
