use twine_solvers::equation::bisection;

/// Solver configuration for the lower-branch Lambert W root find.
#[derive(Debug, Clone, Copy)]
pub struct LambertWConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on `w`.
    pub w_tol: f64,

    /// Absolute tolerance on the log-space residual `ln(-w) + w - ln(-z)`.
    pub residual_tol: f64,
}

impl Default for LambertWConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            w_tol: 1e-12,
            residual_tol: 1e-15,
        }
    }
}

impl LambertWConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.w_tol,
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol,
        }
    }
}
