//! Export module for simulation results.
//!
//! # Architecture
//!
//! Each export format lives in its own sub-module; adding a new format means
//! adding a file, without modifying existing code.
//!
//! # Available formats
//!
//! | Format  | Module          | Version |
//! |---------|-----------------|---------|
//! | CSV     | [`csv`]         | v0.1.0  |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use vaxsim_rs::dynamics::Compartment;
//! use vaxsim_rs::output::export::{export_series_csv, export_trajectory_csv};
//!
//! // Full trajectory (all nine columns)
//! export_trajectory_csv(&result, "run.csv", None)?;
//!
//! // One compartment only
//! export_series_csv(&result, Compartment::Infected, "infected.csv", None)?;
//! ```

pub mod csv;

// Re-export the most commonly used items at the module level so users can
// write `use vaxsim_rs::output::export::{export_trajectory_csv, CsvConfig}`
// instead of the full sub-module path.
pub use csv::{export_series_csv, export_trajectory_csv, CsvConfig, CsvMetadata};
