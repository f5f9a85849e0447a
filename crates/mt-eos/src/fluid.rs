//! Pure-fluid critical properties and the critical-volume cache.

use crate::error::{FluidError, FluidResult};
use crate::solver::critical_molar_volume;
use crate::species::Species;
use crate::variant::EosVariant;
use mt_core::ensure_positive;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Where a fluid's constants came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Built-in species catalog.
    Catalog,
    /// Supplied by the caller.
    #[default]
    Manual,
}

/// Critical molar volume [L/mol] together with the variant that produced it.
///
/// Both values live in one struct so the cache can never hold a volume
/// tagged with the wrong variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalVolume {
    pub volume: f64,
    pub variant: EosVariant,
}

/// Serialisable description of a fluid, as found in fluid definition files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluidDefinition {
    pub name: String,
    #[serde(default)]
    pub formula: Option<String>,
    /// Critical temperature [K]
    pub tc: f64,
    /// Critical pressure [bar]
    pub pc: f64,
    /// Acentric factor [-]
    pub omega: f64,
    /// Molar mass [g/mol]
    pub molar_mass: f64,
}

/// Critical properties of a pure fluid.
///
/// Fields are validated on construction: `tc`, `pc` and `molar_mass` are
/// positive and finite, `omega` is finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredFluid")]
pub struct FluidCriticalProperties {
    name: String,
    formula: Option<String>,
    tc: f64,
    pc: f64,
    omega: f64,
    molar_mass: f64,
    source: DataSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    critical_volume: Option<CriticalVolume>,
}

impl FluidCriticalProperties {
    /// Create a manually specified fluid.
    pub fn new(
        name: impl Into<String>,
        tc: f64,
        pc: f64,
        omega: f64,
        molar_mass: f64,
    ) -> FluidResult<Self> {
        let tc = ensure_positive(tc, "critical temperature")?;
        let pc = ensure_positive(pc, "critical pressure")?;
        let molar_mass = ensure_positive(molar_mass, "molar mass")?;
        if !omega.is_finite() {
            return Err(FluidError::invalid("acentric factor must be finite"));
        }

        Ok(Self {
            name: name.into(),
            formula: None,
            tc,
            pc,
            omega,
            molar_mass,
            source: DataSource::Manual,
            critical_volume: None,
        })
    }

    /// Build a fluid from the species catalog.
    pub fn from_species(species: Species) -> Self {
        let d = species.data();
        Self {
            name: species.key().to_string(),
            formula: Some(d.formula.to_string()),
            tc: d.tc,
            pc: d.pc,
            omega: d.omega,
            molar_mass: d.molar_mass,
            source: DataSource::Catalog,
            critical_volume: None,
        }
    }

    /// Look a fluid up in the species catalog by name, formula or alias.
    pub fn lookup(name: &str) -> FluidResult<Self> {
        Ok(Self::from_species(name.parse()?))
    }

    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn formula(&self) -> Option<&str> {
        self.formula.as_deref()
    }

    /// Critical temperature [K].
    pub fn tc(&self) -> f64 {
        self.tc
    }

    /// Critical pressure [bar].
    pub fn pc(&self) -> f64 {
        self.pc
    }

    /// Acentric factor [-].
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Molar mass [g/mol].
    pub fn molar_mass(&self) -> f64 {
        self.molar_mass
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    pub fn critical_volume(&self) -> Option<CriticalVolume> {
        self.critical_volume
    }

    /// Cached critical volume [L/mol], whichever variant produced it.
    pub fn vc(&self) -> Option<f64> {
        self.critical_volume.map(|c| c.volume)
    }

    /// True when the cache is empty or was filled by a different variant.
    pub fn needs_critical_volume(&self, variant: EosVariant) -> bool {
        self.critical_volume.is_none_or(|c| c.variant != variant)
    }

    /// Copy of this fluid whose critical volume matches `variant`.
    ///
    /// Returns an unchanged clone when the cache already matches.
    pub fn with_critical_volume(&self, variant: EosVariant) -> FluidResult<Self> {
        let mut updated = self.clone();
        updated.ensure_critical_volume(variant)?;
        Ok(updated)
    }

    /// Recompute the cached critical volume iff `variant` differs from the
    /// cached one (or nothing is cached yet).
    pub fn ensure_critical_volume(&mut self, variant: EosVariant) -> FluidResult<f64> {
        if let Some(cached) = self.critical_volume.filter(|c| c.variant == variant) {
            return Ok(cached.volume);
        }
        let volume = critical_molar_volume(self, variant)?;
        debug!(fluid = %self.name, %variant, vc = volume, "critical volume recomputed");
        self.critical_volume = Some(CriticalVolume { volume, variant });
        Ok(volume)
    }

    /// Drop the cached critical volume.
    pub fn clear_critical_volume(&mut self) {
        self.critical_volume = None;
    }

    pub fn definition(&self) -> FluidDefinition {
        FluidDefinition {
            name: self.name.clone(),
            formula: self.formula.clone(),
            tc: self.tc,
            pc: self.pc,
            omega: self.omega,
            molar_mass: self.molar_mass,
        }
    }
}

impl TryFrom<FluidDefinition> for FluidCriticalProperties {
    type Error = FluidError;

    fn try_from(def: FluidDefinition) -> Result<Self, Self::Error> {
        let fluid = Self::new(def.name, def.tc, def.pc, def.omega, def.molar_mass)?;
        Ok(match def.formula {
            Some(formula) => fluid.with_formula(formula),
            None => fluid,
        })
    }
}

/// Serialised form of a full record; a bare [`FluidDefinition`] also parses.
#[derive(Deserialize)]
struct StoredFluid {
    name: String,
    #[serde(default)]
    formula: Option<String>,
    tc: f64,
    pc: f64,
    omega: f64,
    molar_mass: f64,
    #[serde(default)]
    source: DataSource,
    #[serde(default)]
    critical_volume: Option<CriticalVolume>,
}

impl TryFrom<StoredFluid> for FluidCriticalProperties {
    type Error = FluidError;

    fn try_from(stored: StoredFluid) -> Result<Self, Self::Error> {
        let mut fluid = Self::try_from(FluidDefinition {
            name: stored.name,
            formula: stored.formula,
            tc: stored.tc,
            pc: stored.pc,
            omega: stored.omega,
            molar_mass: stored.molar_mass,
        })?;
        fluid.source = stored.source;
        if let Some(cached) = stored.critical_volume {
            ensure_positive(cached.volume, "cached critical volume")?;
            fluid.critical_volume = Some(cached);
        }
        Ok(fluid)
    }
}

impl std::fmt::Display for FluidCriticalProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fluid: {}", self.name)?;
        if let Some(formula) = &self.formula {
            writeln!(f, "\tChemical formula: {formula}")?;
        }
        writeln!(f, "\tMolar mass: {:.1} g/mol", self.molar_mass)?;
        writeln!(f, "\tCritical temperature: {:.2} K", self.tc)?;
        writeln!(f, "\tCritical pressure: {:.2} bar", self.pc)?;
        write!(f, "\tAcentric factor: {:.3}", self.omega)
    }
}

/// Fluid record shared between threads.
///
/// The lock covers the critical-volume bootstrap and the solve that follows,
/// so concurrent callers never observe a half-updated cache.
#[derive(Debug, Clone)]
pub struct SharedFluid(Arc<Mutex<FluidCriticalProperties>>);

impl SharedFluid {
    pub fn new(fluid: FluidCriticalProperties) -> Self {
        Self(Arc::new(Mutex::new(fluid)))
    }

    /// Run `f` with exclusive access to the record.
    pub fn with<R>(&self, f: impl FnOnce(&mut FluidCriticalProperties) -> R) -> R {
        // The record is plain data; a panic elsewhere cannot leave it torn.
        let mut guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Copy of the current record.
    pub fn snapshot(&self) -> FluidCriticalProperties {
        self.with(|fluid| fluid.clone())
    }
}

impl From<FluidCriticalProperties> for SharedFluid {
    fn from(fluid: FluidCriticalProperties) -> Self {
        Self::new(fluid)
    }
}
