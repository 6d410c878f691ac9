//! Integration tests: dynamics module + solver module
//!
//! These tests verify that the model and solver modules
//! work correctly together.

use vaxsim_rs::dynamics::Compartment;
use vaxsim_rs::solver::{
    DormandPrince45Solver, EulerSolver, RK4Solver, Scenario, Solver, SolverConfiguration, TimeGrid,
};

mod common;
use common::test_helpers::{assert_states_close, compute_l2_error, relative_error};
use common::{ConstantGrowth, ExponentialDecay};

// =================================================================================================
// Basic Integration Tests
// =================================================================================================

#[test]
fn test_euler_with_exponential_decay() {
    // Setup
    let model = ExponentialDecay::new(0.1, 1.0);
    let expected = model.analytical_solution(10.0);
    let scenario = Scenario::new(Box::new(model));

    // Solve: 100 output intervals, 10 sub-steps each -> dt = 0.01
    let grid = TimeGrid::uniform(0.0, 10.0, 101);
    let config = SolverConfiguration::fixed_step(grid, 10);
    let solver = EulerSolver::new();
    let result = solver.solve(&scenario, &config).unwrap();

    // Verify the output grid
    assert_eq!(result.time_points.len(), 101);
    assert!(result.time_points[0].abs() < 1e-10);
    assert!((result.time_points.last().unwrap() - 10.0).abs() < 1e-10);

    // Check final value against y(10) = exp(-1)
    let final_value = result.final_state.get(Compartment::Susceptible);
    let error: f64 = relative_error(final_value, expected);

    // Euler with dt=0.01 should have well under 1% error
    assert!(error < 0.02, "Error {} too large", error);
}

#[test]
fn test_rk4_with_exponential_decay() {
    // Setup
    let model = ExponentialDecay::new(0.1, 1.0);
    let expected = model.analytical_solution(10.0);
    let scenario = Scenario::new(Box::new(model));

    // Solve with a coarser step: dt = 0.1
    let grid = TimeGrid::uniform(0.0, 10.0, 101);
    let config = SolverConfiguration::fixed_step(grid, 1);
    let solver = RK4Solver::new();
    let result = solver.solve(&scenario, &config).unwrap();

    // Check final value
    let final_value = result.final_state.get(Compartment::Susceptible);
    let error = relative_error(final_value, expected);

    // RK4 should be very accurate even with dt=0.1
    assert!(error < 1e-5, "Error {} too large for RK4", error);
}

#[test]
fn test_adaptive_with_exponential_decay() {
    // Setup
    let model = ExponentialDecay::new(0.1, 1.0);
    let expected = model.analytical_solution(10.0);
    let scenario = Scenario::new(Box::new(model));

    // Solve with default tolerances
    let grid = TimeGrid::uniform(0.0, 10.0, 11);
    let config = SolverConfiguration::adaptive(grid);
    let solver = DormandPrince45Solver::new();
    let result = solver.solve(&scenario, &config).unwrap();

    // The adaptive solver must still report exactly the requested grid
    assert_eq!(result.time_points.len(), 11);
    for (i, &t) in result.time_points.iter().enumerate() {
        assert!((t - i as f64).abs() < 1e-12, "Output time {} drifted", t);
    }

    let final_value = result.final_state.get(Compartment::Susceptible);
    let error = relative_error(final_value, expected);
    assert!(error < 1e-5, "Error {} too large for adaptive solver", error);
}

#[test]
fn test_euler_is_exact_for_constant_growth() {
    // Setup
    let model = ConstantGrowth::new(2.0);
    let expected = model.analytical_solution(5.0, 0.0);
    let scenario = Scenario::new(Box::new(model));

    // Solve
    let grid = TimeGrid::uniform(0.0, 5.0, 11);
    let config = SolverConfiguration::fixed_step(grid, 1);
    let solver = EulerSolver::new();
    let result = solver.solve(&scenario, &config).unwrap();

    // Euler should be exact for constant dy/dt: y(5) = 0 + 2*5 = 10
    let final_value = result.final_state.get(Compartment::Susceptible);
    assert!((final_value - expected).abs() < 1e-10);
}

// =================================================================================================
// Cross-Solver Comparison Tests
// =================================================================================================

#[test]
fn test_euler_vs_rk4_same_problem() {
    // Setup same problem for both solvers
    let decay_rate: f64 = 0.5;
    let total_time = 5.0;
    let exact = (-decay_rate * total_time).exp();

    let grid = TimeGrid::uniform(0.0, total_time, 51);
    let config = SolverConfiguration::fixed_step(grid, 10);

    // Euler
    let scenario1 = Scenario::new(Box::new(ExponentialDecay::new(decay_rate, 1.0)));
    let euler = EulerSolver::new();
    let result_euler = euler.solve(&scenario1, &config).unwrap();

    // RK4
    let scenario2 = Scenario::new(Box::new(ExponentialDecay::new(decay_rate, 1.0)));
    let rk4 = RK4Solver::new();
    let result_rk4 = rk4.solve(&scenario2, &config).unwrap();

    // Compare errors
    let euler_final = result_euler.final_state.get(Compartment::Susceptible);
    let euler_error = relative_error(euler_final, exact);

    let rk4_final = result_rk4.final_state.get(Compartment::Susceptible);
    let rk4_error = relative_error(rk4_final, exact);

    // RK4 should be significantly more accurate
    assert!(
        rk4_error < euler_error / 10.0,
        "RK4 error {} not much better than Euler error {}",
        rk4_error,
        euler_error
    );

    // The RMS distance between the two final states is dominated by
    // Euler's truncation error and stays small at dt = 0.01
    let gap = compute_l2_error(&result_euler.final_state, &result_rk4.final_state);
    assert!(gap < 1e-2, "Euler drifted {} from RK4", gap);
}

#[test]
fn test_rk4_vs_adaptive_same_problem() {
    let decay_rate: f64 = 0.3;
    let total_time = 10.0;
    let exact = (-decay_rate * total_time).exp();

    let grid = TimeGrid::uniform(0.0, total_time, 21);

    let scenario1 = Scenario::new(Box::new(ExponentialDecay::new(decay_rate, 1.0)));
    let config1 = SolverConfiguration::fixed_step(grid.clone(), 20);
    let result_rk4 = RK4Solver::new().solve(&scenario1, &config1).unwrap();

    let scenario2 = Scenario::new(Box::new(ExponentialDecay::new(decay_rate, 1.0)));
    let config2 = SolverConfiguration::adaptive(grid);
    let result_dp = DormandPrince45Solver::new()
        .solve(&scenario2, &config2)
        .unwrap();

    // Both should land within a few tolerances of the analytical value
    let rk4_error = relative_error(result_rk4.final_state.get(Compartment::Susceptible), exact);
    let dp_error = relative_error(result_dp.final_state.get(Compartment::Susceptible), exact);

    assert!(rk4_error < 1e-6, "RK4 error {} too large", rk4_error);
    assert!(dp_error < 1e-5, "Adaptive error {} too large", dp_error);

    // Both high-order methods should agree on the whole final state, not
    // just the decaying compartment
    assert_states_close(
        &result_rk4.final_state,
        &result_dp.final_state,
        1e-6,
        "RK4 vs adaptive final state",
    );
}

// =================================================================================================
// Error Detection Tests
// =================================================================================================

#[test]
fn test_fixed_step_solver_rejects_adaptive_config() {
    let scenario = Scenario::new(Box::new(ConstantGrowth::new(1.0)));

    // Invalid: adaptive config handed to a fixed-step solver
    let grid = TimeGrid::uniform(0.0, 1.0, 2);
    let config = SolverConfiguration::adaptive(grid);

    let euler = EulerSolver::new();
    let result = euler.solve(&scenario, &config);

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("FixedStep"));
}

#[test]
fn test_adaptive_solver_rejects_fixed_step_config() {
    let scenario = Scenario::new(Box::new(ConstantGrowth::new(1.0)));

    let grid = TimeGrid::uniform(0.0, 1.0, 2);
    let config = SolverConfiguration::fixed_step(grid, 1);

    let solver = DormandPrince45Solver::new();
    let result = solver.solve(&scenario, &config);

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("AdaptiveStep"));
}
