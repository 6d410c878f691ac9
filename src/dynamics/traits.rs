//! Epidemic model trait
//!
//! This module defines the core API every model must implement:
//! - `EpidemicModel`: the right-hand side of an ODE system over a
//!   [`StateVector`]
//!
//! A model is a pure description of the dynamics. It holds parameters, never
//! mutable state, and is queried by the solvers for derivatives.

use super::state::{StateVector, COMPARTMENT_COUNT};

/// Trait for compartmental epidemic models
///
/// Implementors encapsulate the **equations** of a system; the solvers in
/// [`crate::solver`] supply the **method** to integrate them. This separation
/// lets the same model run under Euler, RK4 or the adaptive Dormand–Prince
/// solver, and lets the solvers be tested against simple analytical models.
///
/// # Contract
///
/// - `derivatives` must be pure: same `(t, state)` in, same vector out.
///   Deterministic re-runs of a scenario rely on this.
/// - Models must be `Send + Sync` so batches of scenarios can be solved in
///   parallel.
/// - `derivatives` must not clamp or correct the state it is given; any
///   divergence is detected and reported by the solver layer.
///
/// # Example
///
/// ```rust
/// use vaxsim_rs::dynamics::{Compartment, EpidemicModel, StateVector};
///
/// /// dS/dt = -k S, everything else constant
/// struct Decay { rate: f64 }
///
/// impl EpidemicModel for Decay {
///     fn derivatives(&self, _t: f64, state: &StateVector) -> StateVector {
///         let mut d = StateVector::zeros();
///         d[Compartment::Susceptible] = -self.rate * state[Compartment::Susceptible];
///         d
///     }
///
///     fn initial_state(&self) -> StateVector {
///         let mut y0 = StateVector::zeros();
///         y0[Compartment::Susceptible] = 1.0;
///         y0
///     }
///
///     fn name(&self) -> &str { "Decay" }
/// }
/// ```
pub trait EpidemicModel: Send + Sync {
    /// Number of state variables
    ///
    /// All models in this crate operate on the fixed nine-compartment
    /// vector, so the default is [`COMPARTMENT_COUNT`].
    fn dim(&self) -> usize {
        COMPARTMENT_COUNT
    }

    /// Evaluate the right-hand side dY/dt at `(t, state)`
    ///
    /// The vaccination model is autonomous (`t` unused), but the signature
    /// carries time so the solvers generalize.
    fn derivatives(&self, t: f64, state: &StateVector) -> StateVector;

    /// Construct the model's default initial state Y0
    fn initial_state(&self) -> StateVector;

    /// Model name (used in result metadata and plot titles)
    fn name(&self) -> &str;

    /// Optional longer description
    fn description(&self) -> Option<&str> {
        None
    }
}
