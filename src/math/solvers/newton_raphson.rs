//! Newton-Raphson root-finding solver.

use std::collections::HashSet;

use super::SolverConfig;
use crate::math::finite_difference::{central_diff, FiniteDifference};
use crate::types::SolverError;

/// Derivative values below this magnitude abort the Newton update.
const DERIVATIVE_GUARD: f64 = 1e-30;

/// Derivative strategy for the Newton-Raphson solver.
///
/// Either one of the named finite-difference schemes, evaluated with the
/// step size passed to [`NewtonRaphsonSolver::find_root`], or a
/// caller-supplied derivative function.
///
/// # First-step asymmetry
///
/// The selected strategy is consulted for the *first* Newton step only.
/// Every subsequent step estimates the derivative with the central
/// difference, regardless of what was requested, including when a custom
/// derivative function is supplied. The central difference is the O(h²)
/// scheme, so later steps never lose accuracy by the switch.
#[derive(Clone, Copy)]
pub enum Derivative<'a> {
    /// Central difference on the first step (and all later ones).
    Central,
    /// Backward difference on the first step.
    Backward,
    /// Forward difference on the first step.
    Forward,
    /// Caller-supplied derivative function, evaluated on the first step.
    Custom(&'a dyn Fn(f64) -> f64),
}

impl<'a> Derivative<'a> {
    /// Evaluate this strategy at `x` with step size `h`.
    fn slope<F: Fn(f64) -> f64>(&self, f: F, x: f64, h: f64) -> f64 {
        match self {
            Derivative::Central => FiniteDifference::Central.estimate(f, x, h),
            Derivative::Backward => FiniteDifference::Backward.estimate(f, x, h),
            Derivative::Forward => FiniteDifference::Forward.estimate(f, x, h),
            Derivative::Custom(g) => g(x),
        }
    }
}

impl std::fmt::Debug for Derivative<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Derivative::Central => write!(f, "Central"),
            Derivative::Backward => write!(f, "Backward"),
            Derivative::Forward => write!(f, "Forward"),
            Derivative::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Outcome of a successful root search.
///
/// # Example
///
/// ```
/// use numiter::math::solvers::{Derivative, NewtonRaphsonSolver};
///
/// let solver = NewtonRaphsonSolver::with_defaults();
/// let result = solver
///     .find_root(|x: f64| x * x - 4.0, 3.0, 0.01, Derivative::Central)
///     .unwrap();
/// assert!((result.root - 2.0).abs() < 1e-8);
/// assert!(!result.stagnated);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult {
    /// The accepted root.
    pub root: f64,
    /// Number of Newton updates performed before termination.
    pub iterations: usize,
    /// `true` if the search terminated because an iterate recurred exactly
    /// (a stagnated fixed point) rather than because `|f(root)|` fell below
    /// the tolerance.
    pub stagnated: bool,
}

/// Newton-Raphson root finder with pluggable derivative estimation.
///
/// Applies Newton's update `x_{n+1} = x_n − f(x_n)/f'(x_n)` in a bounded
/// loop, where `f'` comes from a [`Derivative`] strategy, by default a
/// finite-difference estimate, so no explicit derivative is required.
///
/// # Termination
///
/// The search accepts `x` as a root when `|f(x)|` drops below the
/// configured tolerance, or when an iterate recurs exactly within the call
/// (a stagnated fixed point, reported via [`RootResult::stagnated`]). The
/// set of previously produced iterates is owned by the call and dropped on
/// return; concurrent or repeated calls share nothing.
///
/// Exceeding the iteration cap is an error (`MaxIterationsExceeded`), as is
/// a near-zero derivative or a non-finite update.
///
/// # Example
///
/// ```
/// use numiter::math::solvers::{Derivative, NewtonRaphsonSolver, SolverConfig};
///
/// let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-4, 100));
///
/// // Solve x² - 4 = 0 from a start of 3 with step size 0.01.
/// let result = solver
///     .find_root(|x: f64| x * x - 4.0, 3.0, 0.01, Derivative::Central)
///     .unwrap();
/// assert!((result.root - 2.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver {
    /// Solver configuration
    config: SolverConfig<f64>,
}

impl NewtonRaphsonSolver {
    /// Create a Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<f64>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration
    /// (tolerance 1e-10, 100 iterations).
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<f64> {
        &self.config
    }

    /// Find `x` with `|f(x)|` below the tolerance, starting from `x0`.
    ///
    /// The `derivative` strategy supplies `f'` for the first step; later
    /// steps use the central difference with the same `h` (see
    /// [`Derivative`]). `h` is always consumed by those later steps, so it
    /// must be finite and non-zero even when a custom derivative is given.
    ///
    /// # Arguments
    ///
    /// * `f` - Function whose root is sought
    /// * `x0` - Starting guess
    /// * `h` - Finite-difference step size
    /// * `derivative` - Derivative strategy for the first step
    ///
    /// # Returns
    ///
    /// * `Ok(RootResult)` - accepted root, update count, stagnation flag
    /// * `Err(SolverError::InvalidInput)` - non-finite `x0`, or zero or
    ///   non-finite `h`
    /// * `Err(SolverError::DerivativeNearZero)` - Newton update would
    ///   divide by (near) zero
    /// * `Err(SolverError::NumericalInstability)` - update produced a
    ///   non-finite iterate
    /// * `Err(SolverError::MaxIterationsExceeded)` - iteration cap hit
    ///
    /// # Example
    ///
    /// ```
    /// use numiter::math::solvers::{Derivative, NewtonRaphsonSolver};
    ///
    /// let solver = NewtonRaphsonSolver::with_defaults();
    ///
    /// // Explicit derivative for the first step.
    /// let two_x = |x: f64| 2.0 * x;
    /// let result = solver
    ///     .find_root(|x: f64| x * x - 2.0, 1.0, 1e-6, Derivative::Custom(&two_x))
    ///     .unwrap();
    /// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-8);
    /// ```
    pub fn find_root<F>(
        &self,
        f: F,
        x0: f64,
        h: f64,
        derivative: Derivative<'_>,
    ) -> Result<RootResult, SolverError>
    where
        F: Fn(f64) -> f64,
    {
        if !x0.is_finite() {
            return Err(SolverError::InvalidInput(format!(
                "starting guess must be finite, got {}",
                x0
            )));
        }
        if !h.is_finite() || h == 0.0 {
            return Err(SolverError::InvalidInput(format!(
                "step size must be finite and non-zero, got {}",
                h
            )));
        }

        // Iterates already produced in this call. Owned here and dropped on
        // return; nothing persists across calls.
        let mut visited: HashSet<u64> = HashSet::new();

        let mut x = x0;
        for iteration in 0..self.config.max_iterations {
            let f_val = f(x);
            if f_val.abs() < self.config.tolerance {
                return Ok(RootResult {
                    root: x,
                    iterations: iteration,
                    stagnated: false,
                });
            }
            if !visited.insert(x.to_bits()) {
                // Exact repeat of an earlier iterate: the update is cycling,
                // so accept the guess rather than loop forever.
                return Ok(RootResult {
                    root: x,
                    iterations: iteration,
                    stagnated: true,
                });
            }

            // Requested strategy on the first step, central difference on
            // every later one.
            let slope = if iteration == 0 {
                derivative.slope(&f, x, h)
            } else {
                central_diff(&f, x, h)
            };
            if slope.abs() < DERIVATIVE_GUARD {
                return Err(SolverError::DerivativeNearZero { x });
            }

            x -= f_val / slope;
            if !x.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }
}
