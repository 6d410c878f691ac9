//! Mock epidemic models for testing
//!
//! These models have known analytical solutions, making them
//! ideal for validating numerical solver accuracy.

use vaxsim_rs::dynamics::{Compartment, EpidemicModel, StateVector};

// =================================================================================================
// Exponential Decay: dy/dt = -k*y
// =================================================================================================

/// Exponential decay model: dy/dt = -k*y
///
/// Analytical solution: y(t) = y₀ * exp(-k*t)
///
/// Useful for testing solver accuracy since we know the exact solution.
/// Only the S component evolves; all other compartments stay at zero.
pub struct ExponentialDecay {
    pub decay_rate: f64, // k in dy/dt = -k*y
    pub y0: f64,
}

impl ExponentialDecay {
    pub fn new(decay_rate: f64, y0: f64) -> Self {
        Self { decay_rate, y0 }
    }

    /// Compute analytical solution at time t
    pub fn analytical_solution(&self, t: f64) -> f64 {
        self.y0 * (-self.decay_rate * t).exp()
    }
}

impl EpidemicModel for ExponentialDecay {
    fn derivatives(&self, _t: f64, state: &StateVector) -> StateVector {
        let mut d = StateVector::zeros();
        d.set(
            Compartment::Susceptible,
            -self.decay_rate * state.get(Compartment::Susceptible),
        );
        d
    }

    fn initial_state(&self) -> StateVector {
        let mut y = StateVector::zeros();
        y.set(Compartment::Susceptible, self.y0);
        y
    }

    fn name(&self) -> &str {
        "Exponential Decay"
    }
}

// =================================================================================================
// Constant Growth: dy/dt = c
// =================================================================================================

/// Constant growth model: dy/dt = c
///
/// Analytical solution: y(t) = y₀ + c*t
///
/// Euler is exact for this problem, RK4 should also be exact.
pub struct ConstantGrowth {
    pub growth_rate: f64,
}

impl ConstantGrowth {
    pub fn new(growth_rate: f64) -> Self {
        Self { growth_rate }
    }

    /// Compute analytical solution at time t
    pub fn analytical_solution(&self, t: f64, y0: f64) -> f64 {
        y0 + self.growth_rate * t
    }
}

impl EpidemicModel for ConstantGrowth {
    fn derivatives(&self, _t: f64, _state: &StateVector) -> StateVector {
        let mut d = StateVector::zeros();
        d.set(Compartment::Susceptible, self.growth_rate);
        d
    }

    fn initial_state(&self) -> StateVector {
        StateVector::zeros()
    }

    fn name(&self) -> &str {
        "Constant Growth"
    }
}

// =================================================================================================
// Tests for Mock Models
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_decay_analytical() {
        let model = ExponentialDecay::new(0.5, 1.0);

        // y(0) = 1.0
        assert!((model.analytical_solution(0.0) - 1.0).abs() < 1e-10);

        // y(1) = exp(-0.5) ≈ 0.6065
        let y1 = model.analytical_solution(1.0);
        assert!((y1 - 0.6065306597).abs() < 1e-6);
    }

    #[test]
    fn test_constant_growth_analytical() {
        let model = ConstantGrowth::new(2.0);

        // y(0) = 0.0
        assert!((model.analytical_solution(0.0, 0.0) - 0.0).abs() < 1e-10);

        // y(5) = 0 + 2*5 = 10.0
        assert!((model.analytical_solution(5.0, 0.0) - 10.0).abs() < 1e-10);
    }
}
