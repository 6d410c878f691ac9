//! Dormand–Prince 4(5) adaptive solver
//!
//! # Mathematical Background
//!
//! Dormand–Prince is an embedded Runge-Kutta pair: seven stages yield both
//! a fifth-order solution (used to propagate) and a fourth-order solution
//! (used only to estimate the local error). The pair is FSAL ("first same
//! as last"): the seventh stage of an accepted step is the first stage of
//! the next, so each accepted step costs six new function evaluations.
//!
//! The local error is measured in a scaled RMS norm,
//!
//! ```text
//! sc_i = atol + rtol · max(|y_i|, |y_new_i|)
//! err  = sqrt( (1/n) · Σ (e_i / sc_i)² )
//! ```
//!
//! and the next step size follows the standard controller
//!
//! ```text
//! h_new = h · clamp(0.9 · err^(-1/5), 0.2, 5.0)
//! ```
//!
//! A step is accepted when `err <= 1`; otherwise it is retried with the
//! reduced h. Steps are clipped so the integration lands exactly on every
//! output time, which keeps the reported trajectory free of interpolation
//! error.
//!
//! # When to Use
//!
//! - Long horizons where a fixed step wastes work in quiet phases
//! - Tolerance-driven accuracy requirements
//!
//! # When NOT to Use
//!
//! - Very stiff problems (explicit pair, like all methods in this crate)

use crate::dynamics::StateVector;
use crate::solver::{
    validate_state, Scenario, SimulationResult, Solver, SolverConfiguration, SolverType,
};

// =================================================================================================
// Butcher Tableau (Dormand–Prince 4(5))
// =================================================================================================

const C2: f64 = 1.0 / 5.0;
const C3: f64 = 3.0 / 10.0;
const C4: f64 = 4.0 / 5.0;
const C5: f64 = 8.0 / 9.0;

const A21: f64 = 1.0 / 5.0;
const A31: f64 = 3.0 / 40.0;
const A32: f64 = 9.0 / 40.0;
const A41: f64 = 44.0 / 45.0;
const A42: f64 = -56.0 / 15.0;
const A43: f64 = 32.0 / 9.0;
const A51: f64 = 19372.0 / 6561.0;
const A52: f64 = -25360.0 / 2187.0;
const A53: f64 = 64448.0 / 6561.0;
const A54: f64 = -212.0 / 729.0;
const A61: f64 = 9017.0 / 3168.0;
const A62: f64 = -355.0 / 33.0;
const A63: f64 = 46732.0 / 5247.0;
const A64: f64 = 49.0 / 176.0;
const A65: f64 = -5103.0 / 18656.0;

// Fifth-order weights (propagated solution); B2 and B7 are zero.
const B1: f64 = 35.0 / 384.0;
const B3: f64 = 500.0 / 1113.0;
const B4: f64 = 125.0 / 192.0;
const B5: f64 = -2187.0 / 6784.0;
const B6: f64 = 11.0 / 84.0;

// Error weights: fifth-order minus embedded fourth-order weights.
const E1: f64 = 71.0 / 57600.0;
const E3: f64 = -71.0 / 16695.0;
const E4: f64 = 71.0 / 1920.0;
const E5: f64 = -17253.0 / 339200.0;
const E6: f64 = 22.0 / 525.0;
const E7: f64 = -1.0 / 40.0;

// Step-size controller
const SAFETY: f64 = 0.9;
const MIN_FACTOR: f64 = 0.2;
const MAX_FACTOR: f64 = 5.0;

// =================================================================================================
// Dormand–Prince Solver
// =================================================================================================

/// Adaptive Dormand–Prince 4(5) solver with error-controlled step sizes
///
/// Integrates each grid interval with internally chosen step sizes, clipped
/// to hit the interval end exactly. The `max_steps` budget counts accepted
/// and rejected steps across the whole run; exhausting it is an error, not
/// a truncated result.
///
/// # Example
///
/// ```rust,ignore
/// use vaxsim_rs::solver::{DormandPrince45Solver, Solver, SolverConfiguration, TimeGrid};
///
/// let grid = TimeGrid::uniform(0.0, 365.0, 365);
/// let config = SolverConfiguration::adaptive(grid);
/// let result = DormandPrince45Solver::new().solve(&scenario, &config)?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DormandPrince45Solver;

impl DormandPrince45Solver {
    /// Create a new Dormand–Prince solver
    pub fn new() -> Self {
        Self
    }
}

/// Scaled RMS error norm of the embedded estimate
fn error_norm(error: &StateVector, y: &StateVector, y_new: &StateVector, rtol: f64, atol: f64) -> f64 {
    let n = error.as_slice().len();
    let mut sum = 0.0;
    for i in 0..n {
        let sc = atol + rtol * y.as_slice()[i].abs().max(y_new.as_slice()[i].abs());
        let ratio = error.as_slice()[i] / sc;
        sum += ratio * ratio;
    }
    (sum / n as f64).sqrt()
}

impl Solver for DormandPrince45Solver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, String> {
        // ====== Step 1: Validation ======

        config.validate()?;
        scenario.validate()?;

        let (grid, rtol, atol, max_steps) = match &config.solver_type {
            SolverType::AdaptiveStep {
                grid,
                rtol,
                atol,
                max_steps,
            } => (grid, *rtol, *atol, *max_steps),
            other => {
                return Err(format!(
                    "DormandPrince45Solver only supports AdaptiveStep configuration, got {}",
                    other.name()
                ));
            }
        };

        // ====== Step 2: Setup ======

        let model = scenario.model.as_ref();

        let mut state = scenario.initial.clone();
        let mut t = grid.start();

        let mut time_points = Vec::with_capacity(grid.len());
        let mut trajectory = Vec::with_capacity(grid.len());

        time_points.push(t);
        trajectory.push(state.clone());

        // FSAL: k1 of the next step is k7 of the previous accepted one.
        let mut k1 = model.derivatives(t, &state);

        let mut evaluations: usize = 1;
        let mut accepted: usize = 0;
        let mut rejected: usize = 0;

        let span = grid.end() - grid.start();
        let mut h = span / 100.0;

        // ====== Step 3: Time Integration ======

        for (_t_start, t_end) in grid.intervals() {
            while t < t_end {
                if accepted + rejected >= max_steps {
                    return Err(format!(
                        "Adaptive solver exhausted max_steps = {} at t = {} \
                         (accepted {}, rejected {}); loosen tolerances or raise the budget",
                        max_steps, t, accepted, rejected
                    ));
                }

                // Land exactly on the output time.
                let h_step = h.min(t_end - t);

                // ====== Stages 2..6 ======

                let y2 = state.clone() + k1.clone() * (A21 * h_step);
                let k2 = model.derivatives(t + C2 * h_step, &y2);

                let y3 = state.clone() + k1.clone() * (A31 * h_step) + k2.clone() * (A32 * h_step);
                let k3 = model.derivatives(t + C3 * h_step, &y3);

                let y4 = state.clone()
                    + k1.clone() * (A41 * h_step)
                    + k2.clone() * (A42 * h_step)
                    + k3.clone() * (A43 * h_step);
                let k4 = model.derivatives(t + C4 * h_step, &y4);

                let y5 = state.clone()
                    + k1.clone() * (A51 * h_step)
                    + k2.clone() * (A52 * h_step)
                    + k3.clone() * (A53 * h_step)
                    + k4.clone() * (A54 * h_step);
                let k5 = model.derivatives(t + C5 * h_step, &y5);

                let y6 = state.clone()
                    + k1.clone() * (A61 * h_step)
                    + k2.clone() * (A62 * h_step)
                    + k3.clone() * (A63 * h_step)
                    + k4.clone() * (A64 * h_step)
                    + k5.clone() * (A65 * h_step);
                let k6 = model.derivatives(t + h_step, &y6);

                // ====== Fifth-order candidate ======

                let y_new = state.clone()
                    + k1.clone() * (B1 * h_step)
                    + k3.clone() * (B3 * h_step)
                    + k4.clone() * (B4 * h_step)
                    + k5.clone() * (B5 * h_step)
                    + k6.clone() * (B6 * h_step);

                // Seventh stage: slope at the candidate (FSAL)
                let k7 = model.derivatives(t + h_step, &y_new);

                evaluations += 6;

                // ====== Error estimate and step control ======

                let err_vec = k1.clone() * (E1 * h_step)
                    + k3 * (E3 * h_step)
                    + k4 * (E4 * h_step)
                    + k5 * (E5 * h_step)
                    + k6 * (E6 * h_step)
                    + k7.clone() * (E7 * h_step);

                let err = error_norm(&err_vec, &state, &y_new, rtol, atol);

                // New step size from the error estimate. err = 0 (exact
                // derivative) maps to the max growth factor.
                let factor = if err > 0.0 {
                    (SAFETY * err.powf(-0.2)).clamp(MIN_FACTOR, MAX_FACTOR)
                } else {
                    MAX_FACTOR
                };

                if err <= 1.0 {
                    // Accept
                    t += h_step;
                    state = y_new;
                    k1 = k7;
                    accepted += 1;

                    validate_state(&state, t)?;

                    // A step clipped to the output time carries no
                    // information about the controller's preferred size;
                    // keep the pre-clip h so the next interval does not
                    // restart from the clipped fragment.
                    if h_step >= h {
                        h = h_step * factor;
                    }
                } else {
                    rejected += 1;
                    h = h_step * factor;
                }
            }

            // `t` now equals t_end up to the clipping arithmetic; report the
            // grid value itself.
            t = t_end;
            time_points.push(t_end);
            trajectory.push(state.clone());
        }

        // ====== Step 4: Build Result ======

        let final_state = state;

        let mut result = SimulationResult::new(time_points, trajectory, final_state);

        result.add_metadata("solver", "Dormand-Prince 4(5)");
        result.add_metadata("model", scenario.model_name());
        result.add_metadata("grid points", &grid.len().to_string());
        result.add_metadata("rtol", &rtol.to_string());
        result.add_metadata("atol", &atol.to_string());
        result.add_metadata("accepted steps", &accepted.to_string());
        result.add_metadata("rejected steps", &rejected.to_string());
        result.add_metadata("function evaluations", &evaluations.to_string());

        Ok(result)
    }

    fn name(&self) -> &str {
        "Dormand-Prince 4(5)"
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

    /// Harmonic oscillator on (S, V): S(t) = cos(ωt) from S(0)=1, V(0)=0
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

    /// Constant inflow dy/dt = c on the S compartment. All stage slopes are
    /// equal, so the embedded error estimate vanishes and every step is
    /// accepted at the maximum growth factor.
    struct ConstantInflow {
        rate: f64,
    }

    impl EpidemicModel for ConstantInflow {
        fn derivatives(&self, _t: f64, _state: &StateVector) -> StateVector {
            let mut d = StateVector::zeros();
            d[Compartment::Susceptible] = self.rate;
            d
        }

        fn initial_state(&self) -> StateVector {
            StateVector::zeros()
        }

        fn name(&self) -> &str {
            "Constant Inflow"
        }
    }

    #[test]
    fn test_dp45_solver_creation() {
        assert_eq!(DormandPrince45Solver::new().name(), "Dormand-Prince 4(5)");
    }

    #[test]
    fn test_dp45_rejects_fixed_step_config() {
        let scenario = Scenario::new(Box::new(ExponentialDecay { decay_rate: 0.1 }));
        let config = SolverConfiguration::fixed_step(TimeGrid::uniform(0.0, 1.0, 2), 5);

        let result = DormandPrince45Solver::new().solve(&scenario, &config);
        assert!(result.unwrap_err().contains("only supports AdaptiveStep"));
    }

    #[test]
    fn test_dp45_exponential_decay_hits_tolerance() {
        let grid = TimeGrid::uniform(0.0, 10.0, 11);
        let scenario = Scenario::new(Box::new(ExponentialDecay { decay_rate: 0.5 }));
        let config = SolverConfiguration::adaptive_with_tolerances(grid, 1e-8, 1e-10, 100_000);

        let result = DormandPrince45Solver::new().solve(&scenario, &config).unwrap();

        // Check every output time against the analytical solution
        for (i, &t) in result.time_points.iter().enumerate() {
            let expected = (-0.5 * t).exp();
            let actual = result.trajectory[i][Compartment::Susceptible];
            assert!(
                (actual - expected).abs() < 1e-6,
                "t = {}: {} vs {}",
                t,
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_dp45_oscillator_many_periods() {
        // Ten full periods; a fixed-step method at this output resolution
        // would drift badly.
        let period = 2.0 * std::f64::consts::PI;
        let grid = TimeGrid::uniform(0.0, 10.0 * period, 21);
        let scenario = Scenario::new(Box::new(HarmonicOscillator { omega: 1.0 }));
        let config = SolverConfiguration::adaptive(grid);

        let result = DormandPrince45Solver::new().solve(&scenario, &config).unwrap();

        let position = result.final_state[Compartment::Susceptible];
        assert!((position - 1.0).abs() < 1e-3, "S(10T) = {}", position);
    }

    #[test]
    fn test_dp45_time_points_match_grid_exactly() {
        let grid = TimeGrid::from_points(vec![0.0, 1.0, 2.5, 7.0, 30.0]).unwrap();
        let scenario = Scenario::new(Box::new(ExponentialDecay { decay_rate: 0.3 }));
        let config = SolverConfiguration::adaptive(grid.clone());

        let result = DormandPrince45Solver::new().solve(&scenario, &config).unwrap();

        assert_eq!(result.time_points, grid.points());
        assert_eq!(result.trajectory.len(), grid.len());
    }

    #[test]
    fn test_dp45_first_row_is_initial_state() {
        let model = ExponentialDecay { decay_rate: 0.1 };
        let y0 = model.initial_state();

        let scenario = Scenario::new(Box::new(model));
        let config = SolverConfiguration::adaptive(TimeGrid::uniform(0.0, 1.0, 3));

        let result = DormandPrince45Solver::new().solve(&scenario, &config).unwrap();
        assert_eq!(result.trajectory[0], y0);
    }

    #[test]
    fn test_dp45_exhausts_step_budget() {
        let grid = TimeGrid::uniform(0.0, 10.0, 11);
        let scenario = Scenario::new(Box::new(HarmonicOscillator { omega: 50.0 }));
        // Tight tolerance + tiny budget: cannot reach the horizon
        let config = SolverConfiguration::adaptive_with_tolerances(grid, 1e-12, 1e-14, 10);

        let result = DormandPrince45Solver::new().solve(&scenario, &config);
        let err = result.unwrap_err();
        assert!(err.contains("max_steps"), "unexpected error: {}", err);
    }

    #[test]
    fn test_dp45_step_size_survives_grid_landings() {
        // Constant right-hand side: the step sequence is fully determined
        // by the controller. Starting from h = span/100 = 0.03 and growing
        // by the max factor 5, the first interval takes steps 0.03, 0.15,
        // 0.75 and a clipped 0.07; every later interval is shorter than the
        // accumulated h, so it costs exactly one clipped step. A controller
        // that rebuilt h from the clipped fragment would need extra
        // ramp-up steps in the later intervals.
        let grid = TimeGrid::from_points(vec![0.0, 1.0, 1.5, 3.0]).unwrap();
        let scenario = Scenario::new(Box::new(ConstantInflow { rate: 2.0 }));
        let config = SolverConfiguration::adaptive(grid);

        let result = DormandPrince45Solver::new().solve(&scenario, &config).unwrap();

        let accepted: usize = result
            .metadata
            .get("accepted steps")
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(accepted, 6, "step size collapsed after a grid landing");

        // The propagated solution is exact for a constant derivative
        let total = result.final_state[Compartment::Susceptible];
        assert!((total - 6.0).abs() < 1e-9, "S(3) = {}", total);
    }

    #[test]
    fn test_dp45_metadata_reports_step_counts() {
        let grid = TimeGrid::uniform(0.0, 5.0, 6);
        let scenario = Scenario::new(Box::new(ExponentialDecay { decay_rate: 0.2 }));
        let config = SolverConfiguration::adaptive(grid);

        let result = DormandPrince45Solver::new().solve(&scenario, &config).unwrap();

        assert_eq!(
            result.metadata.get("solver"),
            Some(&"Dormand-Prince 4(5)".to_string())
        );
        let accepted: usize = result.metadata.get("accepted steps").unwrap().parse().unwrap();
        assert!(accepted > 0);
        let evals: usize = result
            .metadata
            .get("function evaluations")
            .unwrap()
            .parse()
            .unwrap();
        assert!(evals > accepted);
    }

    #[test]
    fn test_dp45_deterministic() {
        let grid = TimeGrid::uniform(0.0, 20.0, 21);

        let run = || {
            let scenario = Scenario::new(Box::new(HarmonicOscillator { omega: 2.0 }));
            let config = SolverConfiguration::adaptive(grid.clone());
            DormandPrince45Solver::new().solve(&scenario, &config).unwrap()
        };

        let a = run();
        let b = run();
        assert_eq!(a.trajectory, b.trajectory);
    }
}
