//! Analytic solution of the cubic in the compressibility factor.
//!
//! `Z^3 + alpha Z^2 + beta Z + gamma = 0` is shifted with `x = Z + alpha/3`
//! into the depressed form `x^3 + p x + q = 0`. The sign of the discriminant
//! `Delta = q^2/4 + p^3/27` selects Cardano's formula (one real root) or the
//! trigonometric form (three real roots).

use crate::error::{FluidError, FluidResult};
use mt_core::clamp_within;
use std::f64::consts::PI;
use tracing::{trace, warn};

/// Largest overshoot of the arccos argument that is treated as roundoff.
pub const ARCCOS_SLACK: f64 = 1e-9;

/// Coefficients of `Z^3 + alpha Z^2 + beta Z + gamma`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCoefficients {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

/// Depressed cubic `x^3 + p x + q` with `x = Z + alpha/3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepressedCubic {
    pub p: f64,
    pub q: f64,
    pub delta: f64,
    /// `alpha / 3`, subtracted from `x` to recover `Z`.
    pub shift: f64,
}

/// Physically retained roots, ascending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CubicRoots {
    /// `Delta > 0`: one real root.
    Single(f64),
    /// `Delta <= 0`: smallest and largest of three real roots; the middle
    /// one has no physical meaning and is dropped.
    Pair { liquid: f64, gas: f64 },
}

impl CubicCoefficients {
    /// Generalised cubic for dimensionless `A`, `B` and structural constants `u`, `w`.
    pub fn from_dimensionless(a: f64, b: f64, u: f64, w: f64) -> Self {
        Self {
            alpha: -1.0 - b + u * b,
            beta: a + w * b * b - u * b - u * b * b,
            gamma: -a * b - w * b * b - w * b * b * b,
        }
    }

    /// `f(Z)`; zero at every root.
    pub fn evaluate(&self, z: f64) -> f64 {
        ((z + self.alpha) * z + self.beta) * z + self.gamma
    }

    pub fn depressed(&self) -> DepressedCubic {
        let (alpha, beta, gamma) = (self.alpha, self.beta, self.gamma);
        let p = beta - alpha * alpha / 3.0;
        let q = 2.0 * alpha.powi(3) / 27.0 - alpha * beta / 3.0 + gamma;
        DepressedCubic {
            p,
            q,
            delta: q * q / 4.0 + p.powi(3) / 27.0,
            shift: alpha / 3.0,
        }
    }

    pub fn solve(&self) -> FluidResult<CubicRoots> {
        self.depressed().solve()
    }
}

impl DepressedCubic {
    pub fn solve(&self) -> FluidResult<CubicRoots> {
        let DepressedCubic { p, q, delta, shift } = *self;
        trace!(p, q, delta, "depressed cubic");

        if delta.is_nan() {
            return Err(FluidError::domain("cubic discriminant is NaN"));
        }

        if delta > 0.0 {
            let sq = delta.sqrt();
            let x = (-q / 2.0 + sq).cbrt() + (-q / 2.0 - sq).cbrt();
            return Ok(CubicRoots::Single(x - shift));
        }

        if p == 0.0 {
            return Err(FluidError::domain(
                "depressed cubic coefficient p is zero in the trigonometric branch",
            ));
        }

        let arg = 3.0 * q / (2.0 * p) * (-3.0 / p).sqrt();
        let arg = match clamp_within(arg, -1.0, 1.0, ARCCOS_SLACK) {
            Some(clamped) => {
                if clamped != arg {
                    warn!(arg, "arccos argument clamped into [-1, 1]");
                }
                clamped
            }
            None => {
                return Err(FluidError::domain(format!(
                    "arccos argument {arg} outside [-1, 1]"
                )));
            }
        };

        let theta = arg.acos();
        let radius = 2.0 * (-p / 3.0).sqrt();
        let mut z = [0.0_f64, 1.0, 2.0].map(|offset| {
            radius * (theta / 3.0 - 2.0 * PI * offset / 3.0).cos() - shift
        });
        z.sort_by(f64::total_cmp);

        Ok(CubicRoots::Pair {
            liquid: z[0],
            gas: z[2],
        })
    }
}

impl CubicRoots {
    pub fn len(&self) -> usize {
        match self {
            CubicRoots::Single(_) => 1,
            CubicRoots::Pair { .. } => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Roots in ascending order.
    pub fn to_vec(self) -> Vec<f64> {
        match self {
            CubicRoots::Single(z) => vec![z],
            CubicRoots::Pair { liquid, gas } => vec![liquid, gas],
        }
    }

    pub fn smallest(&self) -> f64 {
        match *self {
            CubicRoots::Single(z) => z,
            CubicRoots::Pair { liquid, .. } => liquid,
        }
    }

    pub fn largest(&self) -> f64 {
        match *self {
            CubicRoots::Single(z) => z,
            CubicRoots::Pair { gas, .. } => gas,
        }
    }
}
