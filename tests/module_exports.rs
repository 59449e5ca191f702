//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

/// Test that finite-difference estimators are accessible via absolute path.
#[test]
fn test_finite_difference_module_exports() {
    use numiter::math::finite_difference::backward_diff;
    use numiter::math::finite_difference::central_diff;
    use numiter::math::finite_difference::forward_diff;
    use numiter::math::finite_difference::FiniteDifference;

    let f = |x: f64| x * x;
    let _ = central_diff(f, 1.0_f64, 1e-3);
    let _ = backward_diff(f, 1.0_f64, 1e-3);
    let _ = forward_diff(f, 1.0_f64, 1e-3);
    let _ = FiniteDifference::Central.estimate(f, 1.0, 1e-3);
    let _ = FiniteDifference::Forward.estimate_each(f, &[0.0, 1.0], 1e-3);
}

/// Test that solver types are accessible via absolute path.
#[test]
fn test_solvers_module_exports() {
    use numiter::math::solvers::Derivative;
    use numiter::math::solvers::GaussSeidelSolver;
    use numiter::math::solvers::JacobiSolver;
    use numiter::math::solvers::LinearSolution;
    use numiter::math::solvers::NewtonRaphsonSolver;
    use numiter::math::solvers::RootResult;
    use numiter::math::solvers::SolverConfig;

    let config: SolverConfig<f64> = SolverConfig::default();
    let _jacobi = JacobiSolver::new(config);
    let _seidel = GaussSeidelSolver::new(config);
    let newton = NewtonRaphsonSolver::new(config);

    let result: RootResult = newton
        .find_root(|x: f64| x - 1.0, 0.0, 1e-6, Derivative::Central)
        .unwrap();
    assert!((result.root - 1.0).abs() < 1e-8);

    let solution: LinearSolution = JacobiSolver::with_defaults()
        .solve(&[vec![2.0]], &[4.0], &[0.0])
        .unwrap();
    assert!(solution.converged);
}

/// Test that error types are accessible via both paths.
#[test]
fn test_types_module_exports() {
    use numiter::types::error::SolverError as ViaModule;
    use numiter::types::SolverError;

    let err: SolverError = SolverError::InvalidInput("bad".to_string());
    let same: ViaModule = err.clone();
    assert_eq!(err, same);
}
