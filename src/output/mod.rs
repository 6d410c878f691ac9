//! Output module for simulation results
//!
//! This module provides tools to output simulation results in various
//! formats:
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── timeseries.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use vaxsim_rs::output::visualization::plot_populations;
//!
//! // Generate PNG plot
//! plot_populations(&result, "populations.png", None)?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use vaxsim_rs::output::export::export_trajectory_csv;
//!
//! // Export to CSV
//! export_trajectory_csv(&result, "run.csv", None)?;
//! ```
//!
//! # Design Philosophy
//!
//! The output module separates concerns:
//! - **Visualization**: for human interpretation (plots, graphs)
//! - **Export**: for programmatic analysis (CSV, spreadsheet tools)
//!
//! Both sub-modules consume [`SimulationResult`](crate::solver::SimulationResult)
//! directly and validate it before writing anything.

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{
    plot_compartments, plot_populations, plot_series, plot_social_indices, PlotConfig,
};

pub use export::{export_series_csv, export_trajectory_csv, CsvConfig, CsvMetadata};
