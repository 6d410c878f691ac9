//! Numerical solvers
//!
//! This module provides traits and implementations for numerical solvers.
//! A numerical solver applies a numerical method to integrate the equations
//! provided by an epidemic model within a specific scenario.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! The solver architecture separates concerns into three layers:
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Epidemic model (equations)
//!    - Initial state
//!
//! 2. **Configuration** (`SolverConfiguration`) - HOW to solve
//!    - Solver type (fixed-step, adaptive)
//!    - Numerical parameters (substeps, tolerances, step budget)
//!    - Output grid
//!
//! 3. **Solver** (`Solver` trait) - The numerical method
//!    - Applies the numerical scheme
//!    - Returns the solution on the output grid
//!    - Independent of the model
//!
//! This separation allows:
//! - Same solver for different models
//! - Different solvers for the same scenario
//! - Easy benchmarking and method comparison
//!
//! # Module Organization
//!
//! - **`traits`**: Core trait definitions and types
//!   - `Solver` trait: stable interface for all solvers
//!   - `SolverType` / `SolverConfiguration`: method selection and parameters
//!   - `SimulationResult`: trajectory plus metadata
//!
//! - **`grid`**: the output [`TimeGrid`]
//!
//! - **`scenario`**: problem definition (`Scenario` = model + initial state)
//!
//! - **`methods`**: solver implementations
//!   - `EulerSolver`: Forward Euler
//!   - `RK4Solver`: classical fourth-order Runge-Kutta
//!   - `DormandPrince45Solver`: adaptive Dormand–Prince 4(5)
//!
//! # Quick Start Example
//!
//! ```rust
//! use vaxsim_rs::models::VaccinationModel;
//! use vaxsim_rs::solver::{
//!     RK4Solver, Scenario, Solver, SolverConfiguration, TimeGrid,
//! };
//!
//! // 1. Create scenario (WHAT to solve)
//! let scenario = Scenario::new(Box::new(VaccinationModel::reference()));
//!
//! // 2. Create configuration (HOW to solve): 365 output samples over one
//! //    year, 4 internal sub-steps per interval
//! let grid = TimeGrid::uniform(0.0, 365.0, 365);
//! let config = SolverConfiguration::fixed_step(grid, 4);
//!
//! // 3. Solve
//! let result = RK4Solver::new().solve(&scenario, &config).unwrap();
//! assert_eq!(result.len(), 365);
//! ```
//!
//! # Failure Policy
//!
//! All solver methods return `Result<SimulationResult, String>`. A run that
//! produces a NaN or infinite component fails with an error naming the first
//! offending compartment and the time; the adaptive solver additionally
//! fails when its step budget is exhausted before the horizon. There are no
//! partial results: a returned trajectory always covers the whole grid.
//!
//! Common errors:
//! - Invalid configuration (zero substeps, non-positive tolerances)
//! - Invalid scenario (non-finite initial state)
//! - Numerical divergence (NaN / infinity during integration)
//! - Step budget exhaustion (adaptive solver)

// =================================================================================================
// Module Declarations
// =================================================================================================

mod grid;
mod methods;
mod scenario;
mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use grid::TimeGrid;
pub use scenario::Scenario;
pub use traits::{
    SimulationResult, Solver, SolverConfiguration, SolverType, DEFAULT_ATOL, DEFAULT_MAX_STEPS,
    DEFAULT_RTOL,
};

pub use methods::{DormandPrince45Solver, EulerSolver, RK4Solver};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::dynamics::StateVector;

/// Validate a state for numerical issues
///
/// Checks that the state does not contain NaN or Inf values, which would
/// indicate numerical instability. Called by every solver after each stored
/// step.
///
/// # Arguments
///
/// * `state` - State to validate
/// * `t` - Simulation time of the state (for error reporting)
///
/// # Returns
///
/// `Ok(())` if the state is finite, `Err(msg)` naming the first offending
/// compartment otherwise.
pub(crate) fn validate_state(state: &StateVector, t: f64) -> Result<(), String> {
    match state.first_non_finite() {
        None => Ok(()),
        Some(compartment) => {
            let value = state.get(compartment);
            Err(format!(
                "Simulation diverged: non-finite value ({}) in compartment {} at t = {}. \
                 Reduce the step size or loosen the scenario parameters.",
                value, compartment, t
            ))
        }
    }
}

// =================================================================================================
// Batch Solving
// =================================================================================================

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Solve many scenarios with one solver and configuration
///
/// Runs are fully independent; with the `parallel` feature enabled they are
/// distributed over the rayon thread pool, otherwise they run sequentially.
/// The result order matches the scenario order either way, and one failed
/// run does not abort the others.
///
/// # Example
///
/// ```rust
/// use vaxsim_rs::models::{InitialConditions, ModelParameters, VaccinationModel};
/// use vaxsim_rs::solver::{solve_batch, RK4Solver, Scenario, SolverConfiguration, TimeGrid};
///
/// // Sweep the transmission rate
/// let scenarios: Vec<Scenario> = [0.2, 0.3, 0.4]
///     .iter()
///     .map(|&beta| {
///         let params = ModelParameters { beta, ..Default::default() };
///         let model = VaccinationModel::new(params, InitialConditions::default());
///         Scenario::new(Box::new(model))
///     })
///     .collect();
///
/// let config = SolverConfiguration::fixed_step(TimeGrid::uniform(0.0, 30.0, 31), 10);
/// let results = solve_batch(&RK4Solver::new(), &scenarios, &config);
///
/// assert_eq!(results.len(), 3);
/// assert!(results.iter().all(|r| r.is_ok()));
/// ```
pub fn solve_batch<S: Solver + Sync>(
    solver: &S,
    scenarios: &[Scenario],
    config: &SolverConfiguration,
) -> Vec<Result<SimulationResult, String>> {
    #[cfg(feature = "parallel")]
    {
        scenarios
            .par_iter()
            .map(|scenario| solver.solve(scenario, config))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        scenarios
            .iter()
            .map(|scenario| solver.solve(scenario, config))
            .collect()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
