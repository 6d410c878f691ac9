//! Numerical methods for solving the model equations
//!
//! This module contains concrete implementations of the
//! [`Solver`](crate::solver::Solver) trait.
//!
//! # Architecture
//!
//! The separation between abstract solver interface (`solver::traits`) and
//! concrete implementations (`solver::methods`) follows the Open-Closed
//! Principle:
//! - **Open** for extension: Add new methods without modifying existing code
//! - **Closed** for modification: The `Solver` trait is stable
//!
//! # Available Methods
//!
//! ## Fixed-Step Methods
//!
//! Driven by [`SolverType::FixedStep`](crate::solver::SolverType): each
//! output interval is divided into equal internal sub-steps.
//!
//! - **[`EulerSolver`]**: Forward Euler
//!   - Order: first-order O(dt)
//!   - Cost: 1 function evaluation per sub-step
//!   - Use: prototyping, convergence baselines
//!
//! - **[`RK4Solver`]**: Classical fourth-order Runge-Kutta
//!   - Order: fourth-order O(dt⁴)
//!   - Cost: 4 function evaluations per sub-step
//!   - Use: production runs at fixed resolution
//!
//! ## Adaptive Methods
//!
//! Driven by [`SolverType::AdaptiveStep`](crate::solver::SolverType):
//! internal step size is chosen from an embedded error estimate.
//!
//! - **[`DormandPrince45Solver`]**: Dormand–Prince 4(5) with
//!   error-controlled step sizes
//!   - Order: fifth-order propagation, fourth-order error estimate
//!   - Cost: 6 new evaluations per step (FSAL reuses the last stage)
//!   - Use: long horizons, tolerance-driven accuracy
//!
//! # Design Philosophy
//!
//! Each solver is:
//! - **Self-contained**: no shared mutable state
//! - **Stateless**: reusable across simulations
//! - **Exact on the grid**: output times are reported exactly, never
//!   interpolated

mod euler;
mod rk4;
mod rk45;

// Re-exports for convenience
pub use euler::EulerSolver;
pub use rk4::RK4Solver;
pub use rk45::DormandPrince45Solver;
