//! vaxsim-rs: Vaccination-Dynamics Simulation Framework
//!
//! A flexible and extensible framework for simulating compartmental epidemic
//! models with vaccination, misinformation and social feedback. Built with
//! Rust for performance and safety.
//!
//! # Architecture
//!
//! vaxsim-rs is built on two core principles:
//!
//! 1. **Separation of Dynamics and Numerics**
//!    - Epidemic models define equations (what to solve)
//!    - Numerical solvers provide methods (how to solve)
//!
//! 2. **Extensibility and Type Safety**
//!    - Trait-based design for easy extension
//!    - Type-safe compartment access
//!    - Stable API (v0.1.0+)
//!
//! # Quick Start
//!
//! ```rust
//! use vaxsim_rs::dynamics::Compartment;
//! use vaxsim_rs::models::VaccinationModel;
//! use vaxsim_rs::solver::{RK4Solver, Scenario, Solver, SolverConfiguration, TimeGrid};
//!
//! # fn main() -> Result<(), String> {
//! // 1. Configure the model and scenario
//! let scenario = Scenario::new(Box::new(VaccinationModel::reference()));
//!
//! // 2. Configure the solver: one year, 365 output samples, 4 sub-steps each
//! let grid = TimeGrid::uniform(0.0, 365.0, 365);
//! let config = SolverConfiguration::fixed_step(grid, 4);
//!
//! // 3. Run the simulation
//! let solver = RK4Solver::new();
//! let result = solver.solve(&scenario, &config)?;
//!
//! // 4. Access results
//! let infected = result.series(Compartment::Infected);
//! println!("Final infected count: {:.0}", infected.last().unwrap());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`dynamics`]: State types and the model trait (equations)
//! - [`models`]: The vaccination-dynamics model and its parameters
//! - [`solver`]: Numerical solvers (methods)
//! - [`output`]: Result visualization and export

// Core modules
pub mod dynamics;

pub mod models;
pub mod output;
pub mod solver;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use vaxsim_rs::prelude::*;
    //! ```
    pub use crate::dynamics::{Compartment, EpidemicModel, StateVector};
    pub use crate::models::{InitialConditions, ModelParameters, VaccinationModel};
    pub use crate::solver::{
        DormandPrince45Solver, EulerSolver, RK4Solver, Scenario, SimulationResult, Solver,
        SolverConfiguration, SolverType, TimeGrid,
    };
}
