//! Real lower branch of the Lambert W function.
//!
//! The Lambert W function inverts `w·e^w = z`. For `z ∈ [-1/e, 0)` there are
//! two real solutions: the principal branch `W₀(z) ≥ -1` and the lower branch
//! `W₋₁(z) ≤ -1`. This module evaluates the lower branch only.
//!
//! # Example
//!
//! ```
//! use twine_hx_sizing::support::lambert_w::lambert_w_lower;
//!
//! let w = lambert_w_lower(-0.1).unwrap();
//! assert!((w * w.exp() + 0.1).abs() < 1e-12);
//! assert!(w < -1.0);
//! ```

mod config;
mod error;
mod problem;

pub use config::LambertWConfig;
pub use error::LambertWError;

use twine_solvers::equation::bisection;

use problem::{LogBranchModel, LowerBranchProblem};

/// The branch point `-1/e`, where both real branches meet at `w = -1`.
pub const BRANCH_POINT: f64 = -0.367_879_441_171_442_33;

/// Arguments this close to [`BRANCH_POINT`] are treated as the branch point.
///
/// Near `-1/e` the branch behaves like `-1 - sqrt(2(1 + e·z))`, so the error of
/// snapping is below `1e-7` in `w`.
const BRANCH_POINT_TOL: f64 = 8. * f64::EPSILON;

/// Evaluates `W₋₁(z)` with the default [`LambertWConfig`].
///
/// # Errors
///
/// Returns [`LambertWError::OutOfDomain`] if `z` is outside `[-1/e, 0)` and
/// a solver error if the root find fails.
pub fn lambert_w_lower(z: f64) -> Result<f64, LambertWError> {
    lambert_w_lower_with(z, &LambertWConfig::default())
}

/// Evaluates `W₋₁(z)` with an explicit solver configuration.
///
/// # Errors
///
/// Returns [`LambertWError::OutOfDomain`] if `z` is outside `[-1/e, 0)`,
/// [`LambertWError::Bisection`] if the solver rejects the setup, or
/// [`LambertWError::MaxIters`] if it fails to converge.
pub fn lambert_w_lower_with(z: f64, config: &LambertWConfig) -> Result<f64, LambertWError> {
    if !(z.is_finite() && z < 0. && z >= BRANCH_POINT - BRANCH_POINT_TOL) {
        return Err(LambertWError::OutOfDomain { z });
    }
    if z <= BRANCH_POINT + BRANCH_POINT_TOL {
        return Ok(-1.);
    }

    let problem = LowerBranchProblem::new(z);

    let solution = bisection::solve(
        &LogBranchModel,
        &problem,
        [problem.lower_bound(), -1.],
        &config.bisection(),
        (),
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(LambertWError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    tracing::trace!(z, w = solution.x, iters = solution.iters, "lower branch converged");
    Ok(solution.x)
}
