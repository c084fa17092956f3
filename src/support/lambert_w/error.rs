use thiserror::Error;
use twine_solvers::equation::bisection;

/// Errors that can occur while evaluating the lower Lambert W branch.
#[derive(Debug, Error)]
pub enum LambertWError {
    /// The argument lies outside `[-1/e, 0)`, where `W₋₁` has no real value.
    #[error("argument {z} is outside the lower branch domain [-1/e, 0)")]
    OutOfDomain {
        /// The rejected argument.
        z: f64,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best log-space residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
