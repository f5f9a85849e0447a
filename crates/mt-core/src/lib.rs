//! mt-core: shared foundation for moltherm.
//!
//! Contains:
//! - units (fixed unit system, gas constant, uom constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{MtError, MtResult};
pub use numeric::*;
pub use units::*;
