//! Problem formulation for the lower-branch root find.
//!
//! On `w ≤ -1` the map `w ↦ ln(-w) + w` is strictly increasing, so solving
//! `ln(-w) + w = ln(-z)` there is equivalent to `w·e^w = z` and stays well
//! scaled even when `z` underflows toward zero.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};

/// Model evaluating `ln(-w) + w` for a candidate `w`.
pub(super) struct LogBranchModel;

impl Model for LogBranchModel {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, w: &f64) -> Result<f64, Self::Error> {
        Ok((-w).ln() + w)
    }
}

/// Residual `ln(-w) + w - ln(-z)` for a fixed argument `z`.
pub(super) struct LowerBranchProblem {
    log_neg_z: f64,
}

impl LowerBranchProblem {
    pub(super) fn new(z: f64) -> Self {
        Self {
            log_neg_z: (-z).ln(),
        }
    }

    /// Lower end of a bracket on which the residual is negative.
    ///
    /// With `L = -ln(-z) ≥ 1`, the residual at `-(2L + 1)` is
    /// `ln(1 + 2L) - L - 1 < 0`.
    pub(super) fn lower_bound(&self) -> f64 {
        2. * self.log_neg_z - 1.
    }
}

impl EquationProblem<1> for LowerBranchProblem {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([output - self.log_neg_z])
    }
}
