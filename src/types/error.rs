//! Error types for structured error handling.
//!
//! This module provides `SolverError`, the single error taxonomy shared by
//! the finite-difference dispatch, the iterative linear solvers, and the
//! Newton-Raphson root finder.

use thiserror::Error;

/// Categorised solver errors.
///
/// Precondition violations are detected eagerly and reported as
/// `InvalidInput` rather than allowed to propagate NaN/Inf through the
/// iteration. Hitting the iteration cap is an error only for Newton-Raphson;
/// the linear solvers report it through
/// [`LinearSolution::converged`](crate::math::solvers::LinearSolution)
/// instead, since an unconverged iterate is still a usable approximation.
///
/// # Variants
/// - `InvalidInput`: zero diagonal, dimension mismatch, bad step size
/// - `MaxIterationsExceeded`: Newton-Raphson failed to terminate
/// - `DerivativeNearZero`: Newton update would divide by (near) zero
/// - `NumericalInstability`: iteration produced a non-finite value
///
/// # Examples
/// ```
/// use numiter::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Derivative near zero (division by zero risk in Newton-Raphson).
    #[error("Derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// The x value where the derivative was near zero
        x: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = SolverError::InvalidInput("matrix must be square".to_string());
        assert_eq!(format!("{}", err), "Invalid input: matrix must be square");
    }

    #[test]
    fn test_max_iterations_display() {
        let err = SolverError::MaxIterationsExceeded { iterations: 500 };
        assert_eq!(format!("{}", err), "Failed to converge after 500 iterations");
    }

    #[test]
    fn test_derivative_near_zero_display() {
        let err = SolverError::DerivativeNearZero { x: 0.5 };
        assert!(format!("{}", err).contains("x = 0.5"));
    }

    #[test]
    fn test_error_equality() {
        let a = SolverError::MaxIterationsExceeded { iterations: 10 };
        let b = SolverError::MaxIterationsExceeded { iterations: 10 };
        assert_eq!(a, b);
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<SolverError>();
    }
}
