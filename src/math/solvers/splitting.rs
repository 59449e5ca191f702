//! Diagonal splitting shared by the Jacobi and Gauss-Seidel solvers.
//!
//! Both solvers rewrite `Ax = b` via the splitting `A = D + M`, where `D` is
//! the diagonal of `A` and `M` the remainder, and iterate on the rescaled
//! form `x = D⁻¹b − D⁻¹M·x`. [`DiagonalSplit`] performs that rescaling once,
//! up front, so each sweep is a plain matrix-vector pass with no division.

use crate::types::SolverError;

/// Division guard: diagonal entries below this magnitude are rejected.
const DIAGONAL_GUARD: f64 = 1e-30;

/// The precomputed, diagonally rescaled system `x = d_inv_b − d_inv_m · x`.
///
/// Construction validates the system shape and the non-zero-diagonal
/// precondition eagerly, so the sweep loops can run unguarded.
#[derive(Debug, Clone)]
pub(crate) struct DiagonalSplit {
    /// `D⁻¹ · b`
    pub d_inv_b: Vec<f64>,
    /// `D⁻¹ · M`, with an explicit zero diagonal.
    pub d_inv_m: Vec<Vec<f64>>,
}

impl DiagonalSplit {
    /// Split and rescale `Ax = b`.
    ///
    /// Fails with `SolverError::InvalidInput` on an empty system, a
    /// non-square `A`, a `b` or `x_start` whose length does not match, or a
    /// (near-)zero diagonal entry.
    pub fn new(a: &[Vec<f64>], b: &[f64], x_start: &[f64]) -> Result<Self, SolverError> {
        let n = a.len();
        if n == 0 {
            return Err(SolverError::InvalidInput(
                "coefficient matrix must not be empty".to_string(),
            ));
        }
        for (i, row) in a.iter().enumerate() {
            if row.len() != n {
                return Err(SolverError::InvalidInput(format!(
                    "matrix must be square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
        }
        if b.len() != n {
            return Err(SolverError::InvalidInput(format!(
                "right-hand side length {} does not match matrix size {}",
                b.len(),
                n
            )));
        }
        if x_start.len() != n {
            return Err(SolverError::InvalidInput(format!(
                "starting guess length {} does not match matrix size {}",
                x_start.len(),
                n
            )));
        }

        let mut d_inv_b = vec![0.0; n];
        let mut d_inv_m = vec![vec![0.0; n]; n];
        for i in 0..n {
            let diag = a[i][i];
            if diag.abs() < DIAGONAL_GUARD {
                return Err(SolverError::InvalidInput(format!(
                    "zero diagonal entry at row {}: diagonal splitting requires 1/a[i][i]",
                    i
                )));
            }
            d_inv_b[i] = b[i] / diag;
            for j in 0..n {
                if j != i {
                    d_inv_m[i][j] = a[i][j] / diag;
                }
            }
        }

        Ok(Self { d_inv_b, d_inv_m })
    }

    /// System dimension.
    pub fn len(&self) -> usize {
        self.d_inv_b.len()
    }
}

/// Euclidean norm of the difference of two equal-length vectors.
pub(crate) fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Outcome of a linear fixed-point iteration.
///
/// Hitting the iteration cap is not an error for the linear solvers: the
/// last iterate is returned as a usable approximation with `converged` set
/// to `false`. There is no divergence detection; a diverging sequence runs
/// to the cap, and callers needing certainty should inspect
/// [`residual_norm`](Self::residual_norm).
///
/// # Example
///
/// ```
/// use numiter::math::solvers::JacobiSolver;
///
/// let a = vec![vec![4.0, 1.0], vec![1.0, 3.0]];
/// let b = [5.0, 4.0];
/// let solution = JacobiSolver::with_defaults().solve(&a, &b, &[0.0, 0.0]).unwrap();
/// assert!(solution.converged);
/// assert!(solution.residual_norm(&a, &b) < 1e-8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSolution {
    /// The final iterate.
    pub x: Vec<f64>,
    /// Number of full sweeps performed.
    pub iterations: usize,
    /// Whether the tolerance was met before the iteration cap.
    pub converged: bool,
}

impl LinearSolution {
    /// Euclidean norm of the residual `A·x − b` for this solution.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` do not match the solution's dimension.
    pub fn residual_norm(&self, a: &[Vec<f64>], b: &[f64]) -> f64 {
        assert_eq!(a.len(), self.x.len(), "matrix size mismatch");
        assert_eq!(b.len(), self.x.len(), "right-hand side size mismatch");
        let ax: Vec<f64> = a
            .iter()
            .map(|row| row.iter().zip(&self.x).map(|(m, x)| m * x).sum())
            .collect();
        distance(&ax, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_system() -> (Vec<Vec<f64>>, Vec<f64>) {
        (
            vec![vec![4.0, 1.0], vec![2.0, 5.0]],
            vec![6.0, 9.0],
        )
    }

    #[test]
    fn test_split_rescales() {
        let (a, b) = sample_system();
        let split = DiagonalSplit::new(&a, &b, &[0.0, 0.0]).unwrap();
        assert_eq!(split.len(), 2);
        assert_eq!(split.d_inv_b, vec![1.5, 1.8]);
        assert_eq!(split.d_inv_m[0], vec![0.0, 0.25]);
        assert_eq!(split.d_inv_m[1], vec![0.4, 0.0]);
    }

    #[test]
    fn test_zero_diagonal_rejected() {
        let a = vec![vec![0.0, 1.0], vec![2.0, 5.0]];
        let result = DiagonalSplit::new(&a, &[1.0, 2.0], &[0.0, 0.0]);
        match result {
            Err(SolverError::InvalidInput(msg)) => assert!(msg.contains("diagonal")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_non_square_rejected() {
        let a = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]];
        assert!(DiagonalSplit::new(&a, &[1.0, 2.0], &[0.0, 0.0]).is_err());
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let (a, b) = sample_system();
        assert!(DiagonalSplit::new(&a, &b[..1], &[0.0, 0.0]).is_err());
        assert!(DiagonalSplit::new(&a, &b, &[0.0]).is_err());
    }

    #[test]
    fn test_empty_system_rejected() {
        assert!(DiagonalSplit::new(&[], &[], &[]).is_err());
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(&[0.0, 3.0], &[4.0, 0.0]), 5.0);
        assert_eq!(distance(&[1.0, 1.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_residual_norm_of_exact_solution() {
        let (a, b) = sample_system();
        // Exact solution of the 2x2 sample system.
        let solution = LinearSolution {
            x: vec![21.0 / 18.0, 24.0 / 18.0],
            iterations: 0,
            converged: true,
        };
        assert!(solution.residual_norm(&a, &b) < 1e-12);
    }
}
