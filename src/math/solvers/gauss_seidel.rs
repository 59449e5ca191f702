//! Gauss-Seidel iteration for linear systems.

use super::splitting::{distance, DiagonalSplit, LinearSolution};
use super::SolverConfig;
use crate::types::SolverError;

/// Gauss-Seidel fixed-point solver for `Ax = b`.
///
/// Uses the same diagonal splitting `A = D + M` as
/// [`JacobiSolver`](super::JacobiSolver), but updates in place within a
/// sweep: component `j` of `x_next` is computed as
/// `(D⁻¹b)[j] − (D⁻¹M)[j,:]·x_next`, where components `0..j−1` already hold
/// the values updated earlier in the *same* sweep. That reuse is the
/// defining difference from Jacobi and is why Gauss-Seidel typically needs
/// fewer sweeps on diagonally dominant systems.
///
/// # Convergence
///
/// Identical policy to Jacobi: stop when the Euclidean norm of the change
/// between successive sweeps drops below the tolerance; reaching the cap
/// returns the last iterate with `converged: false`, never an error. No
/// divergence detection.
///
/// # Example
///
/// ```
/// use numiter::math::solvers::GaussSeidelSolver;
///
/// let a = vec![
///     vec![5.0, 2.0, 1.0, 1.0],
///     vec![2.0, 6.0, 2.0, 1.0],
///     vec![1.0, 2.0, 7.0, 1.0],
///     vec![1.0, 1.0, 2.0, 8.0],
/// ];
/// let b = [29.0, 31.0, 26.0, 19.0];
///
/// let solution = GaussSeidelSolver::with_defaults().solve(&a, &b, &[0.0; 4]).unwrap();
/// assert!(solution.converged);
/// assert!(solution.residual_norm(&a, &b) < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct GaussSeidelSolver {
    /// Solver configuration
    config: SolverConfig<f64>,
}

impl GaussSeidelSolver {
    /// Create a Gauss-Seidel solver with the given configuration.
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
            // In-place sweep: components 0..j of x_next are already updated
            // when component j is computed.
            let mut x_next = x.clone();
            for j in 0..n {
                let coupled: f64 = split.d_inv_m[j]
                    .iter()
                    .zip(&x_next)
                    .map(|(m, xi)| m * xi)
                    .sum();
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn wikipedia_system() -> (Vec<Vec<f64>>, Vec<f64>) {
        (
            vec![
                vec![5.0, 2.0, 1.0, 1.0],
                vec![2.0, 6.0, 2.0, 1.0],
                vec![1.0, 2.0, 7.0, 1.0],
                vec![1.0, 1.0, 2.0, 8.0],
            ],
            vec![29.0, 31.0, 26.0, 19.0],
        )
    }

    #[test]
    fn test_converges_on_diagonally_dominant_system() {
        let (a, b) = wikipedia_system();
        let solution = GaussSeidelSolver::with_defaults()
            .solve(&a, &b, &[0.0; 4])
            .unwrap();

        assert!(solution.converged);
        let expected = [
            3.992753623188406,
            2.9541062801932365,
            2.1618357487922704,
            0.9661835748792271,
        ];
        for (computed, want) in solution.x.iter().zip(expected) {
            assert_relative_eq!(*computed, want, epsilon = 1e-8);
        }
        // Known sweep count for this system at the default tolerance.
        assert_eq!(solution.iterations, 14);
    }

    #[test]
    fn test_residual_is_small_after_convergence() {
        let (a, b) = wikipedia_system();
        let solution = GaussSeidelSolver::with_defaults()
            .solve(&a, &b, &[0.0; 4])
            .unwrap();
        assert!(solution.residual_norm(&a, &b) < 1e-8);
    }

    #[test]
    fn test_in_place_sweep_differs_from_jacobi_first_sweep() {
        // After one sweep from zero, component 1 already feels component 0's
        // update; a Jacobi sweep from zero would give exactly D⁻¹b.
        let (a, b) = wikipedia_system();
        let solver = GaussSeidelSolver::new(SolverConfig::new(1e-10, 1));
        let solution = solver.solve(&a, &b, &[0.0; 4]).unwrap();

        let d_inv_b_1 = b[1] / a[1][1];
        assert!((solution.x[1] - d_inv_b_1).abs() > 1e-3);
    }

    #[test]
    fn test_cap_reached_returns_last_iterate() {
        let (a, b) = wikipedia_system();
        let solver = GaussSeidelSolver::new(SolverConfig::new(1e-10, 2));
        let solution = solver.solve(&a, &b, &[0.0; 4]).unwrap();
        assert!(!solution.converged);
        assert_eq!(solution.iterations, 2);
    }

    #[test]
    fn test_zero_diagonal_fails_fast() {
        let a = vec![vec![1.0, 2.0], vec![3.0, 0.0]];
        let result = GaussSeidelSolver::with_defaults().solve(&a, &[1.0, 2.0], &[0.0, 0.0]);
        assert!(matches!(result, Err(SolverError::InvalidInput(_))));
    }

    #[test]
    fn test_does_not_mutate_inputs() {
        let (a, b) = wikipedia_system();
        let x_start = vec![1.0, 1.0, 1.0, 1.0];
        let _ = GaussSeidelSolver::with_defaults().solve(&a, &b, &x_start);
        assert_eq!(x_start, vec![1.0, 1.0, 1.0, 1.0]);
    }
}
