//! Forward Euler numerical solver
//!
//! # Mathematical Background
//!
//! The Forward Euler method is the simplest explicit time-stepping scheme
//! for solving ordinary differential equations (ODEs):
//!
//! ```text
//! dy/dt = f(t, y)
//! ```
//!
//! The scheme approximates the solution at time t_{n+1} = t_n + dt using:
//!
//! ```text
//! y_{n+1} = y_n + dt * f(t_n, y_n)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (error ~ O(dt))
//! - **Stability**: Conditionally stable (requires small sub-steps)
//! - **Complexity**: 1 function evaluation per sub-step
//! - **Memory**: O(1) beyond trajectory storage
//!
//! # When to Use
//!
//! - Prototyping and testing architecture
//! - Convergence baselines against higher-order methods
//! - Quick exploratory simulations
//!
//! # When NOT to Use
//!
//! - Production runs → use [`RK4Solver`](super::RK4Solver) or
//!   [`DormandPrince45Solver`](super::DormandPrince45Solver)
//! - Tight accuracy requirements at coarse grids
//!
//! # Example
//!
//! ```rust,ignore
//! use vaxsim_rs::solver::{EulerSolver, Solver, SolverConfiguration, TimeGrid};
//!
//! let solver = EulerSolver::new();
//! let grid = TimeGrid::uniform(0.0, 365.0, 365);
//! let config = SolverConfiguration::fixed_step(grid, 20);
//!
//! let result = solver.solve(&scenario, &config)?;
//! ```

use crate::solver::{
    validate_state, Scenario, SimulationResult, Solver, SolverConfiguration, SolverType,
};

// =================================================================================================
// Euler Solver
// =================================================================================================

/// Forward Euler solver
///
/// Takes `substeps` equal Euler steps inside each output interval and
/// records the state at each grid point. Only the grid points appear in the
/// result; sub-step states are transient.
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSolver;

impl EulerSolver {
    /// Create a new Euler solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use vaxsim_rs::solver::{EulerSolver, Solver};
    ///
    /// let solver = EulerSolver::new();
    /// assert_eq!(solver.name(), "Forward Euler");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for EulerSolver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, String> {
        // ====== Step 1: Validation ======

        config.validate()?;
        scenario.validate()?;

        let (grid, substeps) = match &config.solver_type {
            SolverType::FixedStep { grid, substeps } => (grid, *substeps),
            other => {
                return Err(format!(
                    "EulerSolver only supports FixedStep configuration, got {}",
                    other.name()
                ));
            }
        };

        // ====== Step 2: Setup ======

        let mut state = scenario.initial.clone();

        let mut time_points = Vec::with_capacity(grid.len());
        let mut trajectory = Vec::with_capacity(grid.len());

        // Row 0 is the initial state, untouched by any integration step.
        time_points.push(grid.start());
        trajectory.push(state.clone());

        let mut evaluations: usize = 0;

        // ====== Step 3: Time Integration ======

        for (t_start, t_end) in grid.intervals() {
            let dt = (t_end - t_start) / (substeps as f64);

            for sub in 0..substeps {
                // Sub-step time computed from the index, not accumulated,
                // so rounding does not drift across long intervals.
                let t = t_start + (sub as f64) * dt;

                let slope = scenario.model.derivatives(t, &state);
                evaluations += 1;

                state = state + slope * dt;
            }

            trajectory.push(state.clone());
            time_points.push(t_end);

            validate_state(&state, t_end)?;
        }

        // ====== Step 4: Build Result ======

        let final_state = state;

        let mut result = SimulationResult::new(time_points, trajectory, final_state);

        result.add_metadata("solver", "Forward Euler");
        result.add_metadata("model", scenario.model_name());
        result.add_metadata("grid points", &grid.len().to_string());
        result.add_metadata("substeps per interval", &substeps.to_string());
        result.add_metadata("function evaluations", &evaluations.to_string());

        Ok(result)
    }

    fn name(&self) -> &str {
        "Forward Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
