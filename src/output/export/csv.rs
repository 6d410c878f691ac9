//! CSV export for simulation results
//!
//! This module writes simulation trajectories to CSV (Comma-Separated
//! Values), compatible with Excel, Python pandas, R, and most analysis
//! tools.
//!
//! # Features
//!
//! - **Full trajectory export**: all nine compartments as columns
//! - **Single-series export**: one compartment against time
//! - **Metadata support**: optional `#`-prefixed header with run info
//! - **Customizable**: delimiter, decimal separator, precision
//! - **Validation**: rejects empty data, length mismatches, NaN/Inf
//!
//! # Quick Examples
//!
//! ## Full Trajectory
//!
//! ```rust,ignore
//! use vaxsim_rs::output::export::export_trajectory_csv;
//!
//! export_trajectory_csv(&result, "run.csv", None)?;
//! ```
//!
//! **Output** (`run.csv`):
//! ```csv
//! t,S,V,C,I,R,M,gamma,eta,xi
//! 0.000000,176115000.000000,10000000.000000,...
//! 1.000000,...
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use vaxsim_rs::output::export::{export_trajectory_csv, CsvConfig, CsvMetadata};
//!
//! let metadata = CsvMetadata::from_result(&result);
//! let config = CsvConfig::default().with_metadata(metadata);
//!
//! export_trajectory_csv(&result, "run.csv", Some(&config))?;
//! ```
//!
//! **Output** (`run.csv`):
//! ```csv
//! # Epidemic Simulation Data
//! # Generated: 2026-08-24T15:30:00Z
//! # solver: Runge-Kutta 4
//! # grid points: 365
//! #
//! t,S,V,C,I,R,M,gamma,eta,xi
//! ...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::dynamics::Compartment;
use crate::solver::SimulationResult;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',        // European CSV
///     precision: 10,         // High precision
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in the header
    pub metadata: Option<CsvMetadata>,

    /// Header for the time column (default: "t")
    pub time_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            time_header: "t".to_string(),
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon delimiter, comma for decimals)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// High-precision output (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional; only populated entries appear in the header.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Model name (e.g. "Vaccination dynamics with misinformation feedback")
    pub model_name: Option<String>,

    /// Solver name (e.g. "Runge-Kutta 4")
    pub solver_name: Option<String>,

    /// Number of output times
    pub grid_points: Option<usize>,

    /// Simulation horizon (days)
    pub horizon: Option<f64>,

    /// Additional key/value entries (parameter values, run labels)
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Build metadata from a simulation result's own metadata map
    pub fn from_result(result: &SimulationResult) -> Self {
        Self {
            model_name: result.metadata.get("model").cloned(),
            solver_name: result.metadata.get("solver").cloned(),
            grid_points: Some(result.len()),
            horizon: result.time_points.last().copied(),
            custom: Vec::new(),
        }
    }

    /// Add a custom entry
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments to the file
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# Epidemic Simulation Data")?;

    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(file, "# Model: {}", model)?;
    }
    if let Some(solver) = &metadata.solver_name {
        writeln!(file, "# Solver: {}", solver)?;
    }
    if let Some(points) = metadata.grid_points {
        writeln!(file, "# Grid Points: {}", points)?;
    }
    if let Some(horizon) = metadata.horizon {
        writeln!(file, "# Horizon: {} days", horizon)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    writeln!(file, "#")?;

    Ok(())
}

/// Format a number with the configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Shared validation: non-empty, finite trajectory
fn validate_result(result: &SimulationResult) -> Result<(), Box<dyn Error>> {
    if result.is_empty() {
        return Err("Empty result: nothing to export".into());
    }

    if result.time_points.iter().any(|t| !t.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in time points".into());
    }

    for (i, state) in result.trajectory.iter().enumerate() {
        if let Some(compartment) = state.first_non_finite() {
            return Err(format!(
                "Invalid data: NaN or Inf in compartment {} at row {}",
                compartment, i
            )
            .into());
        }
    }

    Ok(())
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a full trajectory to CSV (time plus all nine compartments)
///
/// Columns follow the fixed compartment order:
/// `t,S,V,C,I,R,M,gamma,eta,xi`.
///
/// # Arguments
///
/// * `result` - Simulation result to export
/// * `output_path` - Output file path
/// * `config` - Optional CSV configuration (default if `None`)
///
/// # Errors
///
/// - Empty result
/// - NaN or Inf values anywhere in the trajectory
/// - File creation errors
pub fn export_trajectory_csv(
    result: &SimulationResult,
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    validate_result(result)?;

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let config = config.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if config.include_metadata {
        if let Some(metadata) = &config.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    write!(file, "{}", config.time_header)?;
    for compartment in Compartment::ALL {
        write!(file, "{}{}", config.delimiter, compartment.symbol())?;
    }
    writeln!(file)?;

    // ============================= Write Data =============================

    for (time, state) in result.time_points.iter().zip(result.trajectory.iter()) {
        write!(file, "{}", format_number(*time, config))?;
        for &value in state.as_slice() {
            write!(file, "{}{}", config.delimiter, format_number(value, config))?;
        }
        writeln!(file)?;
    }

    Ok(())
}

/// Export one compartment's time series to CSV
///
/// Two columns: time and the chosen compartment.
///
/// # Example
///
/// ```rust,ignore
/// export_series_csv(&result, Compartment::Infected, "infected.csv", None)?;
/// ```
pub fn export_series_csv(
    result: &SimulationResult,
    compartment: Compartment,
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    validate_result(result)?;

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let config = config.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if config.include_metadata {
        if let Some(metadata) = &config.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    writeln!(
        file,
        "{}{}{}",
        config.time_header,
        config.delimiter,
        compartment.symbol()
    )?;

    // ============================= Write Data =============================

    for (time, state) in result.time_points.iter().zip(result.trajectory.iter()) {
        writeln!(
            file,
            "{}{}{}",
            format_number(*time, config),
            config.delimiter,
            format_number(state.get(compartment), config)
        )?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
