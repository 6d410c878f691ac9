//! Runge-Kutta 4 (RK4) numerical solver
//!
//! # Mathematical Background
//!
//! The classical fourth-order Runge-Kutta method (RK4) is one of the most
//! widely used numerical integrators for ordinary differential equations:
//!
//! ```text
//! dy/dt = f(t, y)
//! ```
//!
//! The RK4 scheme uses a weighted average of four slope estimates:
//!
//! ```text
//! k₁ = f(tₙ, yₙ)
//! k₂ = f(tₙ + dt/2, yₙ + dt/2 · k₁)
//! k₃ = f(tₙ + dt/2, yₙ + dt/2 · k₂)
//! k₄ = f(tₙ + dt,   yₙ + dt · k₃)
//!
//! yₙ₊₁ = yₙ + dt/6 · (k₁ + 2k₂ + 2k₃ + k₄)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: Fourth-order accurate (global error ~ O(dt⁴))
//! - **Stability**: larger stability region than Euler, fine for this
//!   non-stiff system
//! - **Complexity**: 4 function evaluations per sub-step
//!
//! # When to Use
//!
//! - Production runs at a fixed, known-sufficient resolution
//! - Non-stiff problems where tolerance-driven stepping is unnecessary
//!
//! # When NOT to Use
//!
//! - Error control needed → use
//!   [`DormandPrince45Solver`](super::DormandPrince45Solver)
//! - Very stiff problems → explicit methods in general are a poor fit
//!
//! # Example
//!
//! ```rust,ignore
//! use vaxsim_rs::solver::{RK4Solver, Solver, SolverConfiguration, TimeGrid};
//!
//! let solver = RK4Solver::new();
//! let grid = TimeGrid::uniform(0.0, 365.0, 365);
//! let config = SolverConfiguration::fixed_step(grid, 4);
//!
//! let result = solver.solve(&scenario, &config)?;
//! ```

use crate::solver::{
    validate_state, Scenario, SimulationResult, Solver, SolverConfiguration, SolverType,
};

// =================================================================================================
// RK4 Solver
// =================================================================================================

/// Classical fourth-order Runge-Kutta solver
///
/// Takes `substeps` RK4 steps inside each output interval, four stages per
/// step, and records the state at each grid point.
///
/// # Error Analysis
///
/// - **Local truncation error**: O(dt⁵) per step
/// - **Global error**: O(dt⁴) over the horizon
/// - Halving dt reduces the error by a factor of ~16
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4Solver;

impl RK4Solver {
    /// Create a new RK4 solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use vaxsim_rs::solver::{RK4Solver, Solver};
    ///
    /// let solver = RK4Solver::new();
    /// assert_eq!(solver.name(), "Runge-Kutta 4");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for RK4Solver {
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
                    "RK4Solver only supports FixedStep configuration, got {}",
                    other.name()
                ));
            }
        };

        // ====== Step 2: Setup ======

        let mut state = scenario.initial.clone();

        let mut time_points = Vec::with_capacity(grid.len());
        let mut trajectory = Vec::with_capacity(grid.len());

        time_points.push(grid.start());
        trajectory.push(state.clone());

        let mut evaluations: usize = 0;

        // ====== Step 3: Time Integration ======

        for (t_start, t_end) in grid.intervals() {
            let dt = (t_end - t_start) / (substeps as f64);

            for sub in 0..substeps {
                let t = t_start + (sub as f64) * dt;

                // ====== RK4 Stages ======

                // Stage 1: slope at the beginning of the interval
                let k1 = scenario.model.derivatives(t, &state);

                // Stage 2: slope at the midpoint, Euler prediction with k₁
                let state_k2 = state.clone() + k1.clone() * (dt / 2.0);
                let k2 = scenario.model.derivatives(t + dt / 2.0, &state_k2);

                // Stage 3: slope at the midpoint, Euler prediction with k₂
                let state_k3 = state.clone() + k2.clone() * (dt / 2.0);
                let k3 = scenario.model.derivatives(t + dt / 2.0, &state_k3);

                // Stage 4: slope at the end, Euler prediction with k₃
                let state_k4 = state.clone() + k3.clone() * dt;
                let k4 = scenario.model.derivatives(t + dt, &state_k4);

                evaluations += 4;

                // ====== RK4 Update ======

                // Simpson's rule weights: endpoints 1/6, midpoints 2/6
                let weighted_slope = k1 + k2 * 2.0 + k3 * 2.0 + k4;
                state = state + weighted_slope * (dt / 6.0);
            }

            trajectory.push(state.clone());
            time_points.push(t_end);

            validate_state(&state, t_end)?;
        }

        // ====== Step 4: Build Result ======

        let final_state = state;

        let mut result = SimulationResult::new(time_points, trajectory, final_state);

        result.add_metadata("solver", "Runge-Kutta 4");
        result.add_metadata("model", scenario.model_name());
        result.add_metadata("grid points", &grid.len().to_string());
        result.add_metadata("substeps per interval", &substeps.to_string());
        result.add_metadata("function evaluations", &evaluations.to_string());

        Ok(result)
    }

    fn name(&self) -> &str {
        "Runge-Kutta 4"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::{Compartment, EpidemicModel, StateVector};
    use crate::solver::TimeGrid;

    // ====== Mock Models for Testing ======

    /// Exponential decay dy/dt = -k·y on the S compartment
    struct ExponentialDecay {
        decay_rate: f64,
    }

    impl EpidemicModel for ExponentialDecay {
        fn derivatives(&self, _t: f64, state: &StateVector) -> StateVector {
            let mut d = StateVector::zeros();
            d[Compartment::Susceptible] = -self.decay_rate * state[Compartment::Susceptible];
            d
        }

        fn initial_state(&self) -> StateVector {
            let mut y0 = StateVector::zeros();
            y0[Compartment::Susceptible] = 1.0;
            y0
        }

        fn name(&self) -> &str {
            "Exponential Decay"
        }
    }

    /// Harmonic oscillator as a first-order system on (S, V):
    ///   dS/dt = V
    ///   dV/dt = -ω²·S
    ///
    /// Analytical solution from S(0)=1, V(0)=0: S(t) = cos(ωt)
    struct HarmonicOscillator {
        omega: f64,
    }

    impl EpidemicModel for HarmonicOscillator {
        fn derivatives(&self, _t: f64, state: &StateVector) -> StateVector {
            let mut d = StateVector::zeros();
            d[Compartment::Susceptible] = state[Compartment::Vaccinated];
            d[Compartment::Vaccinated] =
                -self.omega * self.omega * state[Compartment::Susceptible];
            d
        }

        fn initial_state(&self) -> StateVector {
            let mut y0 = StateVector::zeros();
            y0[Compartment::Susceptible] = 1.0;
            y0
        }

        fn name(&self) -> &str {
            "Harmonic Oscillator"
        }
    }

    fn solve_rk4(
        model: Box<dyn EpidemicModel>,
        grid: TimeGrid,
        substeps: usize,
    ) -> SimulationResult {
        let scenario = Scenario::new(model);
        let config = SolverConfiguration::fixed_step(grid, substeps);
        RK4Solver::new().solve(&scenario, &config).unwrap()
    }

    #[test]
    fn test_rk4_solver_creation() {
        assert_eq!(RK4Solver::new().name(), "Runge-Kutta 4");
        assert_eq!(RK4Solver::default().name(), "Runge-Kutta 4");
    }

    #[test]
    fn test_rk4_rejects_adaptive_config() {
        let scenario = Scenario::new(Box::new(ExponentialDecay { decay_rate: 0.1 }));
        let config = SolverConfiguration::adaptive(TimeGrid::uniform(0.0, 1.0, 2));

        let result = RK4Solver::new().solve(&scenario, &config);
        assert!(result.unwrap_err().contains("only supports FixedStep"));
    }

    #[test]
    fn test_rk4_exponential_decay() {
        let grid = TimeGrid::uniform(0.0, 10.0, 101);
        let result = solve_rk4(Box::new(ExponentialDecay { decay_rate: 0.1 }), grid, 1);

        // dt = 0.1, O(dt⁴) → error ~1e-4 or better
        let expected = (-0.1_f64 * 10.0).exp();
        let actual = result.final_state[Compartment::Susceptible];
        let error = (actual - expected).abs();
        assert!(error < 1e-4, "Error {} too large for RK4", error);
    }

    #[test]
    fn test_rk4_convergence_is_fourth_order() {
        let decay_rate = 0.1;
        let exact = (-decay_rate * 5.0_f64).exp();
        let grid = TimeGrid::uniform(0.0, 5.0, 2);

        // Refine by doubling substeps; error should drop ~16× each time
        let mut errors: Vec<f64> = Vec::new();
        for substeps in [10, 20, 40, 80] {
            let result = solve_rk4(
                Box::new(ExponentialDecay { decay_rate }),
                grid.clone(),
                substeps,
            );
            let y = result.final_state[Compartment::Susceptible];
            errors.push((y - exact).abs());
        }

        for i in 0..errors.len() - 1 {
            let ratio = errors[i] / errors[i + 1];
            assert!(
                ratio > 12.0 && ratio < 20.0,
                "Convergence ratio {} not fourth-order at refinement {}",
                ratio,
                i
            );
        }
    }

    #[test]
    fn test_rk4_harmonic_oscillator_full_period() {
        // One full period: S(2π) = cos(2π) = 1
        let period = 2.0 * std::f64::consts::PI;
        let grid = TimeGrid::uniform(0.0, period, 101);
        let result = solve_rk4(Box::new(HarmonicOscillator { omega: 1.0 }), grid, 1);

        let position = result.final_state[Compartment::Susceptible];
        assert!((position - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_rk4_first_row_is_initial_state() {
        let model = HarmonicOscillator { omega: 2.0 };
        let y0 = model.initial_state();

        let grid = TimeGrid::uniform(0.0, 1.0, 4);
        let result = solve_rk4(Box::new(model), grid, 5);

        assert_eq!(result.trajectory[0], y0);
    }

    #[test]
    fn test_rk4_time_points_match_grid() {
        let grid = TimeGrid::from_points(vec![0.0, 0.5, 2.0, 3.5]).unwrap();
        let result = solve_rk4(
            Box::new(ExponentialDecay { decay_rate: 0.2 }),
            grid.clone(),
            8,
        );

        assert_eq!(result.time_points, grid.points());
    }

    #[test]
    fn test_rk4_metadata() {
        let grid = TimeGrid::uniform(0.0, 1.0, 6);
        let result = solve_rk4(Box::new(ExponentialDecay { decay_rate: 0.1 }), grid, 10);

        assert_eq!(
            result.metadata.get("solver"),
            Some(&"Runge-Kutta 4".to_string())
        );
        // 5 intervals × 10 substeps × 4 stages = 200 evaluations
        assert_eq!(
            result.metadata.get("function evaluations"),
            Some(&"200".to_string())
        );
    }

    #[test]
    fn test_rk4_detects_divergence() {
        // dy/dt = y² from y0 = 1 blows up at t = 1; integrating past the
        // singularity overflows to infinity.
        struct Blowup;

        impl EpidemicModel for Blowup {
            fn derivatives(&self, _t: f64, state: &StateVector) -> StateVector {
                let y = state[Compartment::Susceptible];
                let mut d = StateVector::zeros();
                d[Compartment::Susceptible] = y * y;
                d
            }

            fn initial_state(&self) -> StateVector {
                let mut y0 = StateVector::zeros();
                y0[Compartment::Susceptible] = 1.0;
                y0
            }

            fn name(&self) -> &str {
                "Blowup"
            }
        }

        let scenario = Scenario::new(Box::new(Blowup));
        let config = SolverConfiguration::fixed_step(TimeGrid::uniform(0.0, 2.0, 3), 50);

        let result = RK4Solver::new().solve(&scenario, &config);
        let err = result.unwrap_err();
        assert!(err.contains("non-finite"), "unexpected error: {}", err);
        assert!(err.contains("S"));
    }
}
