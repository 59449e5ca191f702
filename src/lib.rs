//! # numiter: Iterative Numerical Methods Toolkit
//!
//! numiter provides three composable numerical building blocks:
//!
//! - Finite-difference derivative estimators (`math::finite_difference`)
//! - Iterative linear-system solvers, Jacobi and Gauss-Seidel
//!   (`math::solvers`)
//! - A Newton-Raphson root finder that consumes the estimators as a
//!   pluggable derivative strategy (`math::solvers`)
//!
//! All iterative procedures share a single convergence policy,
//! [`math::solvers::SolverConfig`], pairing a tolerance with an iteration
//! cap.
//!
//! ## Scope
//!
//! This is deliberately not a general linear-algebra library: there is no
//! pivoting and no matrix decomposition beyond the diagonal splitting the
//! iterative solvers are built on. There is no automatic differentiation
//! and no parallel execution. Matrices are plain nested `Vec<f64>` rows and
//! vectors are slices; callers bring their own data layout.
//!
//! ## Usage Examples
//!
//! ```rust
//! use numiter::math::finite_difference::FiniteDifference;
//! use numiter::math::solvers::{Derivative, NewtonRaphsonSolver, SolverConfig};
//!
//! // Estimate f'(4) for f(x) = x² with a coarse step.
//! let square = |x: f64| x * x;
//! let slope = FiniteDifference::Central.estimate(square, 4.0, 1.0);
//! assert!((slope - 8.0).abs() < 1e-12);
//!
//! // Find the positive root of x² - 4.
//! let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-4, 100));
//! let result = solver
//!     .find_root(|x: f64| x * x - 4.0, 3.0, 0.01, Derivative::Central)
//!     .unwrap();
//! assert!((result.root - 2.0).abs() < 1e-2);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error and configuration types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
