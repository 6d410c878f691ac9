//! Time-series plotting for simulation results
//!
//! This module renders compartment trajectories against time with the
//! `plotters` library. The output format follows the file extension:
//! `.svg` produces a vector image, anything else a PNG bitmap.
//!
//! # Available functions
//!
//! - [`plot_series`]         — single compartment vs time
//! - [`plot_compartments`]   — arbitrary overlay with legend
//! - [`plot_populations`]    — convenience overlay of S, V, C, I, R
//! - [`plot_social_indices`] — convenience overlay of M, γ, η, ξ
//!
//! # Usage
//!
//! ```rust,ignore
//! use vaxsim_rs::dynamics::Compartment;
//! use vaxsim_rs::output::visualization::{plot_populations, plot_series};
//!
//! let result = solver.solve(&scenario, &config)?;
//! plot_series(&result, Compartment::Infected, "infected.png", None)?;
//! plot_populations(&result, "populations.svg", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use crate::dynamics::Compartment;
use crate::solver::SimulationResult;

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Vertical range covering all the given series, with 10% headroom
///
/// The lower bound is clamped to zero unless a series goes negative (the
/// social indices can, under extreme parameters).
fn value_range(series: &[Vec<f64>]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for s in series {
        for &v in s {
            min = min.min(v);
            max = max.max(v);
        }
    }

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let low = if min < 0.0 { min * 1.1 } else { 0.0 };
    let high = if max > 0.0 { max * 1.1 } else { 1e-10 };
    (low, high)
}

/// Dispatch on file extension: `.svg` → vector backend, else bitmap
fn is_svg(output_path: &str) -> bool {
    std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

// =================================================================================================
// Public API
// =================================================================================================

/// Plot one compartment's time series
///
/// # Arguments
///
/// * `result`      — Simulation result containing the trajectory
/// * `compartment` — Which variable to plot
/// * `output_path` — Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      — Optional plot configuration; `None` uses defaults with
///                   the compartment's label as title
///
/// # Errors
///
/// Returns `Err` if the result is empty or the backend cannot write to
/// `output_path`.
pub fn plot_series(
    result: &SimulationResult,
    compartment: Compartment,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if result.is_empty() {
        return Err("Empty result: nothing to plot".into());
    }

    let mut default_config = PlotConfig::time_series(compartment.label());
    default_config.line_color = super::config::compartment_color(compartment);
    let config = config.unwrap_or(&default_config);

    let series = vec![result.series(compartment)];
    let labels = vec![compartment.label()];

    render(result, &series, &labels, &[Some(compartment)], output_path, config)
}

/// Plot several compartments overlaid on the same axes
///
/// One curve per compartment, legend from the compartment labels, colors
/// from `config.series_colors` or the fixed per-compartment palette.
///
/// # Errors
///
/// Returns `Err` if `compartments` is empty, the result is empty, or the
/// backend fails.
///
/// # Example
///
/// ```rust,ignore
/// use vaxsim_rs::dynamics::Compartment;
///
/// plot_compartments(
///     &result,
///     &[Compartment::Carrier, Compartment::Infected],
///     "infections.png",
///     None,
/// )?;
/// ```
pub fn plot_compartments(
    result: &SimulationResult,
    compartments: &[Compartment],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if compartments.is_empty() {
        return Err("No compartments selected".into());
    }
    if result.is_empty() {
        return Err("Empty result: nothing to plot".into());
    }

    let default_config = PlotConfig::time_series(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let series: Vec<Vec<f64>> = compartments.iter().map(|&c| result.series(c)).collect();
    let labels: Vec<&str> = compartments.iter().map(|&c| c.label()).collect();
    let tags: Vec<Option<Compartment>> = compartments.iter().map(|&c| Some(c)).collect();

    render(result, &series, &labels, &tags, output_path, config)
}

/// Plot the five population compartments S, V, C, I, R
pub fn plot_populations(
    result: &SimulationResult,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::time_series("Population Compartments");
    let config = config.unwrap_or(&default_config);

    plot_compartments(result, &Compartment::POPULATIONS, output_path, Some(config))
}

/// Plot the misinformation index and the three social states M, γ, η, ξ
///
/// These are dimensionless and orders of magnitude smaller than the
/// populations, so they get their own axes.
pub fn plot_social_indices(
    result: &SimulationResult,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let mut default_config = PlotConfig::time_series("Misinformation and Social States");
    default_config.ylabel = "Index value".to_string();
    let config = config.unwrap_or(&default_config);

    plot_compartments(result, &Compartment::SOCIAL, output_path, Some(config))
}

// =================================================================================================
// Private Plot Implementation
// =================================================================================================

/// Backend dispatch wrapper around [`draw_on_backend`]
fn render(
    result: &SimulationResult,
    series: &[Vec<f64>],
    labels: &[&str],
    compartments: &[Option<Compartment>],
    output_path: &str,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    if is_svg(output_path) {
        let backend = SVGBackend::new(output_path, (config.width, config.height));
        draw_on_backend(backend, result, series, labels, compartments, config)
    } else {
        let backend = BitMapBackend::new(output_path, (config.width, config.height));
        draw_on_backend(backend, result, series, labels, compartments, config)
    }
}

/// Render the overlay with the given drawing backend
fn draw_on_backend<DB: DrawingBackend>(
    backend: DB,
    result: &SimulationResult,
    series: &[Vec<f64>],
    labels: &[&str],
    compartments: &[Option<Compartment>],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let time_points = &result.time_points;
    let t_min = time_points.first().copied().unwrap_or(0.0);
    let t_max = time_points.last().copied().unwrap_or(1.0);
    let (y_min, y_max) = value_range(series);

    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(t_min..t_max, y_min..y_max)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.3e}", y))
            .draw()?;
    }

    for (idx, (values, label)) in series.iter().zip(labels.iter()).enumerate() {
        let color = if series.len() == 1 {
            config.line_color
        } else {
            config.get_series_color(idx, compartments.get(idx).copied().flatten())
        };

        chart
            .draw_series(LineSeries::new(
                time_points.iter().zip(values.iter()).map(|(t, v)| (*t, *v)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
