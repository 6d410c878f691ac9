//! Concrete epidemic models
//!
//! All models implement the [`EpidemicModel`](crate::dynamics::EpidemicModel)
//! trait. The solver calls `derivatives` at each step — models are
//! responsible for the dynamics (transmission, vaccination feedback), the
//! solver for the time integration.
//!
//! # Available Models
//!
//! ## [`VaccinationModel`] — nine-compartment vaccination dynamics
//!
//! Extended SIR-type model: susceptible, vaccinated, carrier, infected and
//! recovered populations coupled to a misinformation index and three social
//! states (healthcare access γ, social influence η, misinformation
//! modulation ξ). The social layer modulates the effective vaccination rate
//! through a saturating feedback.
//!
//! Parameters live in [`ModelParameters`], run seeding in
//! [`InitialConditions`]; both default to the reference scenario.

pub mod parameters;
pub mod vaccination;

pub use parameters::{InitialConditions, ModelParameters};
pub use vaccination::VaccinationModel;
