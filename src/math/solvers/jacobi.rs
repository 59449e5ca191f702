//! Jacobi iteration for linear systems.

use super::splitting::{distance, DiagonalSplit, LinearSolution};
use super::SolverConfig;
use crate::types::SolverError;

/// Jacobi fixed-point solver for `Ax = b`.
///
/// Splits `A = D + M` (diagonal and remainder) and iterates
/// `x_next = D⁻¹·(b − M·x_prev)`. Every component of `x_next` is computed
/// from the *previous* iterate only: one synchronous sweep, never reusing
/// partially updated components. That is the defining contrast with
/// [`GaussSeidelSolver`](super::GaussSeidelSolver), which typically
/// converges in fewer sweeps on the same system.
///
/// # Convergence
///
/// Iteration stops when the Euclidean norm of the change between successive
/// sweeps drops below the configured tolerance. Diagonal dominance of `A` is
/// a common sufficient condition for convergence; it is not checked.
/// Reaching the iteration cap returns the last iterate with
/// `converged: false` rather than an error.
///
/// # Example
///
/// ```
/// use numiter::math::solvers::JacobiSolver;
///
/// let a = vec![
///     vec![5.0, 2.0, 1.0, 1.0],
///     vec![2.0, 6.0, 2.0, 1.0],
///     vec![1.0, 2.0, 7.0, 1.0],
///     vec![1.0, 1.0, 2.0, 8.0],
/// ];
/// let b = [29.0, 31.0, 26.0, 19.0];
///
/// let solution = JacobiSolver::with_defaults().solve(&a, &b, &[0.0; 4]).unwrap();
/// assert!(solution.converged);
/// assert!(solution.residual_norm(&a, &b) < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct JacobiSolver {
    /// Solver configuration
    config: SolverConfig<f64>,
}

impl JacobiSolver {
    /// Create a Jacobi solver with the given configuration.
    pub fn new(config: SolverConfig<f64>) -> Self {
        Self { config }
    }

    /// Create a solver with the linear-system defaults
    /// (tolerance 1e-10, 500 sweeps).
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::linear_system(),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<f64> {
        &self.config
    }

    /// Solve `Ax = b` starting from `x_start`.
    ///
    /// # Arguments
    ///
    /// * `a` - Square coefficient matrix with non-zero diagonal, row-major
    /// * `b` - Right-hand side, one entry per row of `a`
    /// * `x_start` - Starting guess, same length as `b`
    ///
    /// # Returns
    ///
    /// * `Ok(LinearSolution)` - the final iterate, sweep count, and whether
    ///   the tolerance was met
    /// * `Err(SolverError::InvalidInput)` - empty or non-square matrix,
    ///   mismatched lengths, or a zero diagonal entry
    pub fn solve(
        &self,
        a: &[Vec<f64>],
        b: &[f64],
        x_start: &[f64],
    ) -> Result<LinearSolution, SolverError> {
        let split = DiagonalSplit::new(a, b, x_start)?;
        let n = split.len();

        let mut x = x_start.to_vec();
        for iteration in 0..self.config.max_iterations {
            // Synchronous sweep: read x, write x_next.
            let mut x_next = vec![0.0; n];
            for j in 0..n {
                let coupled: f64 = split.d_inv_m[j].iter().zip(&x).map(|(m, xi)| m * xi).sum();
                x_next[j] = split.d_inv_b[j] - coupled;
            }

            if distance(&x, &x_next) < self.config.tolerance {
                return Ok(LinearSolution {
                    x: x_next,
                    iterations: iteration + 1,
                    converged: true,
                });
            }
            x = x_next;
        }

        Ok(LinearSolution {
            x,
            iterations: self.config.max_iterations,
            converged: false,
        })
    }
}
