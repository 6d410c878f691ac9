//! Numerical solver traits and types
//!
//! # Design Philosophy
//!
//! This module follows the same pattern as `Compartment`:
//! - Central enum `SolverType` defines the kind of time integration
//! - `SolverConfiguration` adapts its parameters based on `SolverType`
//! - `SimulationResult` carries the trajectory plus string metadata
//!
//! # Stability Guarantee
//!
//! - `Solver` trait: STABLE since v0.1.0
//! - `SolverType` enum: EXTENSIBLE (new variants can be added)
//! - Core structures: STABLE (fields won't be removed)

use nalgebra::DMatrix;
use std::collections::HashMap;

use crate::dynamics::{Compartment, StateVector, COMPARTMENT_COUNT};
use crate::solver::grid::TimeGrid;
use crate::solver::scenario::Scenario;

// =================================================================================================
// Solver Trait
// =================================================================================================

/// Trait for all numerical solvers
///
/// A solver applies one numerical method to the equations of a
/// [`Scenario`], driven by a [`SolverConfiguration`], and returns the
/// trajectory sampled on the configuration's output grid.
///
/// # Errors
///
/// `solve` returns `Err(String)` when:
/// - the configuration or scenario fails validation
/// - the configuration variant is not supported by this method
/// - the integration produces a NaN or infinite component (the message
///   names the first offending compartment and the time)
/// - an adaptive method exhausts its step budget before the horizon
pub trait Solver {
    /// Integrate the scenario under the given configuration
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, String>;

    /// Solver name (recorded in result metadata)
    fn name(&self) -> &str;
}

// =================================================================================================
// Solver Type
// =================================================================================================

/// Kind of time integration to perform
///
/// Both variants carry the output [`TimeGrid`]; the trajectory is reported
/// exactly at its points regardless of how the method steps internally.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverType {
    /// Fixed-step integration (Euler, RK4)
    ///
    /// Each grid interval is divided into `substeps` equal internal steps.
    /// The internal sub-steps are not observable in the output.
    FixedStep {
        /// Output times
        grid: TimeGrid,
        /// Internal steps per grid interval (>= 1)
        substeps: usize,
    },

    /// Adaptive-step integration (Dormand–Prince 4(5))
    ///
    /// Step size is controlled to the given tolerances; steps are clipped
    /// to land exactly on each output time, so no interpolation error is
    /// introduced at the grid points.
    AdaptiveStep {
        /// Output times
        grid: TimeGrid,
        /// Relative error tolerance
        rtol: f64,
        /// Absolute error tolerance
        atol: f64,
        /// Budget of accepted + rejected internal steps
        max_steps: usize,
    },
}

impl SolverType {
    /// Variant name for error messages
    pub fn name(&self) -> &'static str {
        match self {
            SolverType::FixedStep { .. } => "FixedStep",
            SolverType::AdaptiveStep { .. } => "AdaptiveStep",
        }
    }

    /// The output grid
    pub fn grid(&self) -> &TimeGrid {
        match self {
            SolverType::FixedStep { grid, .. } => grid,
            SolverType::AdaptiveStep { grid, .. } => grid,
        }
    }

    /// Check parameters for validity
    pub fn validate(&self) -> Result<(), String> {
        match self {
            SolverType::FixedStep { substeps, .. } => {
                if *substeps == 0 {
                    return Err("FixedStep requires at least 1 substep per interval".to_string());
                }
                Ok(())
            }
            SolverType::AdaptiveStep {
                rtol,
                atol,
                max_steps,
                ..
            } => {
                if !(*rtol > 0.0) || !rtol.is_finite() {
                    return Err(format!("AdaptiveStep rtol must be positive, got {}", rtol));
                }
                if !(*atol > 0.0) || !atol.is_finite() {
                    return Err(format!("AdaptiveStep atol must be positive, got {}", atol));
                }
                if *max_steps == 0 {
                    return Err("AdaptiveStep max_steps must be at least 1".to_string());
                }
                Ok(())
            }
        }
    }
}

// =================================================================================================
// Solver Configuration
// =================================================================================================

/// HOW to solve: method parameters, independent of the model
///
/// # Example
///
/// ```rust
/// use vaxsim_rs::solver::{SolverConfiguration, TimeGrid};
///
/// let grid = TimeGrid::uniform(0.0, 365.0, 365);
///
/// // 10 internal sub-steps per daily interval
/// let fixed = SolverConfiguration::fixed_step(grid.clone(), 10);
///
/// // Adaptive with default tolerances
/// let adaptive = SolverConfiguration::adaptive(grid);
///
/// fixed.validate().unwrap();
/// adaptive.validate().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfiguration {
    /// The integration kind and its parameters
    pub solver_type: SolverType,
}

/// Default relative tolerance for adaptive integration
pub const DEFAULT_RTOL: f64 = 1e-6;

/// Default absolute tolerance for adaptive integration
///
/// State components span persons (1e8) and dimensionless indices (1e-2);
/// the scaled error norm mixes atol with rtol·|y| per component, so a small
/// absolute floor works across both scales.
pub const DEFAULT_ATOL: f64 = 1e-9;

/// Default internal step budget for adaptive integration
pub const DEFAULT_MAX_STEPS: usize = 100_000;

impl SolverConfiguration {
    /// Fixed-step configuration
    pub fn fixed_step(grid: TimeGrid, substeps: usize) -> Self {
        Self {
            solver_type: SolverType::FixedStep { grid, substeps },
        }
    }

    /// Adaptive configuration with default tolerances
    pub fn adaptive(grid: TimeGrid) -> Self {
        Self::adaptive_with_tolerances(grid, DEFAULT_RTOL, DEFAULT_ATOL, DEFAULT_MAX_STEPS)
    }

    /// Adaptive configuration with explicit tolerances and step budget
    pub fn adaptive_with_tolerances(
        grid: TimeGrid,
        rtol: f64,
        atol: f64,
        max_steps: usize,
    ) -> Self {
        Self {
            solver_type: SolverType::AdaptiveStep {
                grid,
                rtol,
                atol,
                max_steps,
            },
        }
    }

    /// The output grid
    pub fn grid(&self) -> &TimeGrid {
        self.solver_type.grid()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        self.solver_type.validate()
    }
}

// =================================================================================================
// Simulation Result
// =================================================================================================

/// The solution: trajectory on the output grid plus solver metadata
///
/// Row 0 of the trajectory is the initial state, exactly as supplied (no
/// integration step is applied to it). `time_points` and `trajectory`
/// always have the same length.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Output times (the configuration's grid)
    pub time_points: Vec<f64>,

    /// State at each output time; row 0 == Y0
    pub trajectory: Vec<StateVector>,

    /// State at the last output time (copy of the last trajectory row)
    pub final_state: StateVector,

    /// Solver diagnostics: method name, step counts, evaluations
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Build a result from a computed trajectory
    ///
    /// # Panics
    ///
    /// Panics when `time_points` and `trajectory` lengths differ, or when
    /// the trajectory is empty.
    pub fn new(time_points: Vec<f64>, trajectory: Vec<StateVector>, final_state: StateVector) -> Self {
        assert!(!trajectory.is_empty(), "Trajectory cannot be empty");
        assert_eq!(
            time_points.len(),
            trajectory.len(),
            "Time points ({}) and trajectory ({}) must have equal length",
            time_points.len(),
            trajectory.len()
        );

        Self {
            time_points,
            trajectory,
            final_state,
            metadata: HashMap::new(),
        }
    }

    /// Attach a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Number of output times
    pub fn len(&self) -> usize {
        self.time_points.len()
    }

    /// True when the result holds no samples (never for a constructed result)
    pub fn is_empty(&self) -> bool {
        self.time_points.is_empty()
    }

    /// Time series of one compartment across the whole trajectory
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let infected = result.series(Compartment::Infected);
    /// assert_eq!(infected.len(), result.len());
    /// ```
    pub fn series(&self, compartment: Compartment) -> Vec<f64> {
        self.trajectory.iter().map(|s| s.get(compartment)).collect()
    }

    /// Full trajectory as a T×9 matrix, columns in [`Compartment::ALL`] order
    pub fn to_matrix(&self) -> DMatrix<f64> {
        let rows = self.trajectory.len();
        DMatrix::from_fn(rows, COMPARTMENT_COUNT, |r, c| {
            self.trajectory[r].as_slice()[c]
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================
