//! Finite-difference derivative estimators.
//!
//! Three difference quotients approximate `f'(x)` from nearby function
//! values:
//!
//! ```text
//! central:  (f(x + h/2) - f(x - h/2)) / h     O(h²)
//! backward: (f(x) - f(x - h)) / h             O(h)
//! forward:  (f(x + h) - f(x)) / h             O(h)
//! ```
//!
//! The central quotient is second-order accurate, which is why the
//! Newton-Raphson solver defaults to it. All estimators are pure functions
//! of their inputs: no state, no side effects, identical inputs give
//! identical output.
//!
//! # Step-size boundary
//!
//! The formulas are evaluated as written for whatever `h` the caller
//! supplies. A pathological step (too small, causing cancellation, or too
//! large, dominating with truncation error) degrades accuracy silently;
//! choosing `h` is the caller's responsibility. Solver entry points that
//! accept a step size validate that it is finite and non-zero, nothing more.
//!
//! # Example
//!
//! ```
//! use numiter::math::finite_difference::{central_diff, backward_diff, forward_diff};
//!
//! // f(x) = x² at x = 4 with the deliberately coarse step h = 1.
//! let f = |x: f64| x * x;
//! assert!((central_diff(f, 4.0, 1.0) - 8.0).abs() < 1e-12); // exact for quadratics
//! assert!((backward_diff(f, 4.0, 1.0) - 7.0).abs() < 1e-12); // first-order bias
//! assert!((forward_diff(f, 4.0, 1.0) - 9.0).abs() < 1e-12);
//! ```

use num_traits::Float;

/// Central difference quotient: `(f(x + h/2) - f(x - h/2)) / h`.
///
/// Second-order accurate: the error shrinks as O(h²), and the estimate is
/// exact for polynomials up to degree two.
pub fn central_diff<T, F>(f: F, x: T, h: T) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let half = h / T::from(2.0).unwrap();
    (f(x + half) - f(x - half)) / h
}

/// Backward difference quotient: `(f(x) - f(x - h)) / h`.
///
/// First-order accurate, O(h). Underestimates the slope of convex functions.
pub fn backward_diff<T, F>(f: F, x: T, h: T) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    (f(x) - f(x - h)) / h
}

/// Forward difference quotient: `(f(x + h) - f(x)) / h`.
///
/// First-order accurate, O(h). Overestimates the slope of convex functions.
pub fn forward_diff<T, F>(f: F, x: T, h: T) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    (f(x + h) - f(x)) / h
}

/// Named finite-difference schemes.
///
/// A closed tag over the three difference quotients, used wherever a scheme
/// is selected at runtime (most notably as the named half of
/// [`Derivative`](crate::math::solvers::Derivative)).
///
/// # Example
///
/// ```
/// use numiter::math::finite_difference::FiniteDifference;
///
/// let f = |x: f64| x * x;
/// let slope = FiniteDifference::Central.estimate(f, 4.0, 1.0);
/// assert!((slope - 8.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FiniteDifference {
    /// Central difference, O(h²).
    Central,
    /// Backward difference, O(h).
    Backward,
    /// Forward difference, O(h).
    Forward,
}

impl FiniteDifference {
    /// Estimate `f'(x)` with this scheme and step size `h`.
    pub fn estimate<T, F>(&self, f: F, x: T, h: T) -> T
    where
        T: Float,
        F: Fn(T) -> T,
    {
        match self {
            FiniteDifference::Central => central_diff(f, x, h),
            FiniteDifference::Backward => backward_diff(f, x, h),
            FiniteDifference::Forward => forward_diff(f, x, h),
        }
    }

    /// Estimate the derivative elementwise over a slice of points.
    ///
    /// Equivalent to calling [`estimate`](Self::estimate) at each `xs[i]`
    /// with the same `f` and `h`.
    ///
    /// # Example
    ///
    /// ```
    /// use numiter::math::finite_difference::FiniteDifference;
    ///
    /// let slopes = FiniteDifference::Central.estimate_each(|x: f64| x * x, &[0.0, 1.0, 2.0], 0.5);
    /// assert!((slopes[2] - 4.0).abs() < 1e-12);
    /// ```
    pub fn estimate_each<T, F>(&self, f: F, xs: &[T], h: T) -> Vec<T>
    where
        T: Float,
        F: Fn(T) -> T,
    {
        xs.iter().map(|&x| self.estimate(&f, x, h)).collect()
    }

    /// Truncation order of the scheme: 2 for central, 1 otherwise.
    pub fn order(&self) -> usize {
        match self {
            FiniteDifference::Central => 2,
            FiniteDifference::Backward | FiniteDifference::Forward => 1,
        }
    }
}
