//! Iterative solvers for linear systems and scalar root finding.
//!
//! ## Available Solvers
//!
//! ### Linear Systems
//!
//! - [`JacobiSolver`]: synchronous diagonal-splitting sweeps
//! - [`GaussSeidelSolver`]: in-place sweeps, typically fewer iterations on
//!   diagonally dominant systems
//!
//! ### Root-Finding
//!
//! - [`NewtonRaphsonSolver`]: Newton's method with a pluggable
//!   [`Derivative`] strategy (finite difference or caller-supplied)
//!
//! ## Configuration
//!
//! All solvers share [`SolverConfig`], pairing a `tolerance` with a
//! `max_iterations` cap:
//! - Newton-Raphson tests `|f(x)| < tolerance` and treats the cap as an
//!   error.
//! - The linear solvers test the Euclidean norm of the change between
//!   sweeps and treat the cap as a normal return, reported through
//!   [`LinearSolution::converged`].
//!
//! ## Examples
//!
//! ### Linear System
//!
//! ```
//! use numiter::math::solvers::{GaussSeidelSolver, JacobiSolver};
//!
//! let a = vec![
//!     vec![5.0, 2.0, 1.0, 1.0],
//!     vec![2.0, 6.0, 2.0, 1.0],
//!     vec![1.0, 2.0, 7.0, 1.0],
//!     vec![1.0, 1.0, 2.0, 8.0],
//! ];
//! let b = [29.0, 31.0, 26.0, 19.0];
//!
//! let jacobi = JacobiSolver::with_defaults().solve(&a, &b, &[0.0; 4]).unwrap();
//! let seidel = GaussSeidelSolver::with_defaults().solve(&a, &b, &[0.0; 4]).unwrap();
//!
//! assert!(jacobi.converged && seidel.converged);
//! // In-place reuse pays off on this diagonally dominant system.
//! assert!(seidel.iterations < jacobi.iterations);
//! ```
//!
//! ### Root-Finding
//!
//! ```
//! use numiter::math::solvers::{Derivative, NewtonRaphsonSolver};
//!
//! let solver = NewtonRaphsonSolver::with_defaults();
//! let result = solver
//!     .find_root(|x: f64| x * x - 2.0, 1.0, 1e-6, Derivative::Central)
//!     .unwrap();
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-8);
//! ```

mod config;
mod gauss_seidel;
mod jacobi;
mod newton_raphson;
mod splitting;

// Re-export public types at module level
pub use config::SolverConfig;
pub use gauss_seidel::GaussSeidelSolver;
pub use jacobi::JacobiSolver;
pub use newton_raphson::{Derivative, NewtonRaphsonSolver, RootResult};
pub use splitting::LinearSolution;
