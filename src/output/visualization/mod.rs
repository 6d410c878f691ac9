//! Visualization module for simulation results
//!
//! This module provides tools to visualize simulation results using the
//! `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **timeseries**: Compartment trajectories vs time
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vaxsim_rs::dynamics::Compartment;
//! use vaxsim_rs::output::visualization::{plot_populations, plot_series, PlotConfig};
//!
//! let result = solver.solve(&scenario, &config)?;
//!
//! // One compartment with default config
//! plot_series(&result, Compartment::Infected, "infected.png", None)?;
//!
//! // Or with custom config
//! let mut config = PlotConfig::time_series("Baseline scenario");
//! plot_series(&result, Compartment::Infected, "infected.svg", Some(&config))?;
//!
//! // The standard panels
//! plot_populations(&result, "populations.png", None)?;
//! ```
//!
//! # When to Use Which Function
//!
//! | Use Case | Function |
//! |----------|----------|
//! | One variable vs time | `plot_series` |
//! | Arbitrary overlay with legend | `plot_compartments` |
//! | S, V, C, I, R overlay | `plot_populations` |
//! | M, γ, η, ξ overlay | `plot_social_indices` |

pub mod config;
pub mod timeseries;

pub use config::{compartment_color, PlotConfig, NO_TITLE};
pub use timeseries::{plot_compartments, plot_populations, plot_series, plot_social_indices};
