//! Supported cubic equations of state.
//!
//! All four forms share the generalised cubic
//!
//! ```text
//! P = R T / (V - b) - a k / (V^2 + u b V + w b^2)
//! ```
//!
//! and differ only in the constants below.

use crate::error::FluidError;
use serde::{Deserialize, Serialize};

/// Cubic equation-of-state family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EosVariant {
    /// van der Waals
    #[serde(rename = "vdw")]
    VanDerWaals,
    /// Redlich-Kwong
    #[serde(rename = "rk")]
    RedlichKwong,
    /// Redlich-Kwong-Soave
    #[serde(rename = "rks")]
    RedlichKwongSoave,
    /// Peng-Robinson
    #[default]
    #[serde(rename = "pr")]
    PengRobinson,
}

/// Polynomial in the acentric factor, `S(ω) = c0 + c1 ω + c2 ω²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcentricPolynomial {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
}

impl AcentricPolynomial {
    pub fn eval(&self, omega: f64) -> f64 {
        self.c0 + self.c1 * omega + self.c2 * omega * omega
    }
}

/// Per-variant constants of the generalised cubic.
///
/// `a = omega_a R² Tc² / Pc`, `b = omega_b R Tc / Pc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantConstants {
    pub omega_a: f64,
    pub omega_b: f64,
    /// `None` for the two-parameter forms (no acentric correction).
    pub acentric: Option<AcentricPolynomial>,
    pub u: f64,
    pub w: f64,
}

const VDW: VariantConstants = VariantConstants {
    omega_a: 0.421875,
    omega_b: 0.125,
    acentric: None,
    u: 1.0,
    w: 0.0,
};

const RK: VariantConstants = VariantConstants {
    omega_a: 0.42748,
    omega_b: 0.08664,
    acentric: None,
    u: 1.0,
    w: 0.0,
};

const RKS: VariantConstants = VariantConstants {
    omega_a: 0.42748,
    omega_b: 0.08664,
    acentric: Some(AcentricPolynomial {
        c0: 0.48,
        c1: 1.574,
        c2: -0.176,
    }),
    u: 1.0,
    w: 0.0,
};

const PR: VariantConstants = VariantConstants {
    omega_a: 0.45724,
    omega_b: 0.07780,
    acentric: Some(AcentricPolynomial {
        c0: 0.37464,
        c1: 1.54226,
        c2: -0.26992,
    }),
    u: 2.0,
    w: -1.0,
};

impl EosVariant {
    pub const ALL: [EosVariant; 4] = [
        EosVariant::VanDerWaals,
        EosVariant::RedlichKwong,
        EosVariant::RedlichKwongSoave,
        EosVariant::PengRobinson,
    ];

    pub fn constants(self) -> &'static VariantConstants {
        match self {
            EosVariant::VanDerWaals => &VDW,
            EosVariant::RedlichKwong => &RK,
            EosVariant::RedlichKwongSoave => &RKS,
            EosVariant::PengRobinson => &PR,
        }
    }

    /// Short tag (`vdw`, `rk`, `rks`, `pr`).
    pub fn tag(self) -> &'static str {
        match self {
            EosVariant::VanDerWaals => "vdw",
            EosVariant::RedlichKwong => "rk",
            EosVariant::RedlichKwongSoave => "rks",
            EosVariant::PengRobinson => "pr",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EosVariant::VanDerWaals => "van der Waals",
            EosVariant::RedlichKwong => "Redlich-Kwong",
            EosVariant::RedlichKwongSoave => "Redlich-Kwong-Soave",
            EosVariant::PengRobinson => "Peng-Robinson",
        }
    }
}

impl std::fmt::Display for EosVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for EosVariant {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vdw" | "van der waals" | "vanderwaals" => Ok(EosVariant::VanDerWaals),
            "rk" | "redlich-kwong" => Ok(EosVariant::RedlichKwong),
            "rks" | "srk" | "soave" | "redlich-kwong-soave" => Ok(EosVariant::RedlichKwongSoave),
            "pr" | "peng-robinson" => Ok(EosVariant::PengRobinson),
            other => Err(FluidError::invalid(format!(
                "unknown equation of state '{other}' (expected vdw, rk, rks or pr)"
            ))),
        }
    }
}
