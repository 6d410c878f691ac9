//! Epidemic dynamics
//!
//! This module provides the traits and state types for compartmental
//! epidemic models. A model encapsulates the differential equations of a
//! system; the state types carry one snapshot of its variables.
//!
//! # Core Concepts
//!
//! - **Epidemic Model**: evaluates the right-hand side dY/dt at a state
//! - **State Vector**: fixed-order container for the nine state variables
//! - **Compartment**: type-safe identifier for each variable (S, V, C, I,
//!   R, M, γ, η, ξ)
//!
//! # Architecture
//!
//! Models are **separate from numerical solvers**:
//! - The model provides the **equations** (dynamics)
//! - The solver provides the **method** to integrate them (numerics)
//!
//! This separation allows:
//! - Same model with different solvers (Euler, RK4, adaptive RK45)
//! - Same solver with different models (full vaccination model, test models)
//!
//! # Example
//!
//! ```rust
//! use vaxsim_rs::dynamics::{Compartment, EpidemicModel};
//! use vaxsim_rs::models::VaccinationModel;
//!
//! let model = VaccinationModel::reference();
//! let y0 = model.initial_state();
//! let dy = model.derivatives(0.0, &y0);
//!
//! // The epidemic grows from the initial seed of carriers and infected
//! assert!(dy[Compartment::Infected].is_finite());
//! ```

pub mod state;
pub mod traits;

pub use state::{Compartment, StateVector, COMPARTMENT_COUNT};
pub use traits::EpidemicModel;
