//! Equation-of-state errors.

use mt_core::MtError;
use thiserror::Error;

/// Result type for fluid and equation-of-state operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur while building parameters or solving a cubic EOS.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Caller supplied an invalid combination or value.
    #[error("Invalid argument: {what}")]
    InvalidArgument { what: String },

    /// Evaluation left the mathematical domain (division by zero, arccos range).
    #[error("Domain error: {what}")]
    Domain { what: String },

    /// A root or derived property is not physical (log of non-positive, NaN).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Name not present in the built-in species catalog.
    #[error("Unknown species: {name}")]
    UnknownSpecies { name: String },
}

impl FluidError {
    pub(crate) fn invalid(what: impl Into<String>) -> Self {
        Self::InvalidArgument { what: what.into() }
    }

    pub(crate) fn domain(what: impl Into<String>) -> Self {
        Self::Domain { what: what.into() }
    }
}

impl From<MtError> for FluidError {
    fn from(err: MtError) -> Self {
        match err {
            MtError::NonFinite { what, value } => FluidError::InvalidArgument {
                what: format!("{what} must be finite (got {value})"),
            },
            MtError::InvalidArg { what } => FluidError::InvalidArgument { what },
            MtError::Domain { what } => FluidError::Domain { what },
            MtError::Invariant { what } => FluidError::Domain { what },
        }
    }
}

impl From<FluidError> for MtError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::InvalidArgument { what } => MtError::InvalidArg { what },
            FluidError::Domain { what } => MtError::Domain { what },
            FluidError::NonPhysical { what } => MtError::Invariant {
                what: format!("Non-physical fluid value: {what}"),
            },
            FluidError::UnknownSpecies { name } => MtError::InvalidArg {
                what: format!("Unknown species: {name}"),
            },
        }
    }
}
