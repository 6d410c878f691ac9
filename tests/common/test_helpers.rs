//! Helper functions for integration tests

use vaxsim_rs::dynamics::{Compartment, StateVector};

/// Assert that two state vectors are close (within tolerance)
pub fn assert_states_close(
    state1: &StateVector,
    state2: &StateVector,
    tolerance: f64,
    message: &str,
) {
    for compartment in Compartment::ALL {
        let v1 = state1.get(compartment);
        let v2 = state2.get(compartment);
        let diff = (v1 - v2).abs();
        assert!(
            diff < tolerance,
            "{}: {} differs by {} (tolerance {})",
            message,
            compartment.symbol(),
            diff,
            tolerance
        );
    }
}

/// Compute RMS error between two state vectors
pub fn compute_l2_error(state1: &StateVector, state2: &StateVector) -> f64 {
    let mut sum_squared_diff = 0.0;
    let mut count = 0;

    for compartment in Compartment::ALL {
        let v1 = state1.get(compartment);
        let v2 = state2.get(compartment);
        sum_squared_diff += (v1 - v2).powi(2);
        count += 1;
    }

    if count > 0 {
        (sum_squared_diff / count as f64).sqrt()
    } else {
        0.0
    }
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_l2_error_identical_states() {
        let state = StateVector::zeros();
        assert_eq!(compute_l2_error(&state, &state), 0.0);
    }
}
