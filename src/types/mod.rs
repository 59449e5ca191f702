//! Core types for the toolkit.
//!
//! Currently this holds the error types shared by every solver. Re-exported
//! at module level so callers write `numiter::types::SolverError`.

pub mod error;

pub use error::SolverError;
