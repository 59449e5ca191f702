//! Numerical building blocks.
//!
//! - [`finite_difference`]: derivative estimation via difference quotients
//! - [`solvers`]: iterative linear solvers and Newton-Raphson root finding

pub mod finite_difference;
pub mod solvers;
