//! Plot configuration shared across visualization functions
//!
//! This module defines the common configuration structure used by the
//! time-series plotting functions.

use plotters::prelude::*;

use crate::dynamics::Compartment;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Line color for single-series plots
/// - `series_colors`: Optional colors for multi-series plots (one per curve)
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example: Single Series
///
/// ```rust,ignore
/// use vaxsim_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::time_series("Infected over one year");
/// config.line_color = RED;
/// config.width = 1920;  // Full HD
/// config.height = 1080;
/// ```
///
/// # Example: Overlay with Custom Colors
///
/// ```rust,ignore
/// let mut config = PlotConfig::default();
/// config.series_colors = Some(vec![RED, BLUE, GREEN]);
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: "Time (days)")
    pub xlabel: String,

    /// Y-axis label (default: "Population")
    pub ylabel: String,

    /// Line color for single-series plots (default: RED)
    pub line_color: RGBColor,

    /// Optional colors for multi-series plots (one per curve)
    ///
    /// If None, each compartment uses its fixed default color
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: "Time (days)".to_string(),
            ylabel: "Population".to_string(),
            line_color: RED,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust,ignore
/// let config = PlotConfig::time_series(NO_TITLE);
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for epidemic time-series plots with optional title
    ///
    /// Sets xlabel to "Time (days)" and title to the custom value or
    /// "Epidemic Trajectory".
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// // With custom title (no Some() needed!)
    /// let config = PlotConfig::time_series("Baseline scenario");
    /// let config = PlotConfig::time_series(format!("beta = {}", beta));
    ///
    /// // With default title
    /// let config = PlotConfig::time_series(None::<&str>);
    /// ```
    pub fn time_series(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Epidemic Trajectory".to_string());
        config
    }

    /// Create config for overlays with custom colors
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use plotters::prelude::*;
    ///
    /// let config = PlotConfig::series_colors(vec![RED, BLUE, GREEN]);
    /// ```
    pub fn series_colors(colors: Vec<RGBColor>) -> Self {
        let mut config = Self::default();
        config.series_colors = Some(colors);
        config
    }

    /// Color for the curve at index `i` in an overlay
    ///
    /// Uses custom colors if provided, otherwise the compartment's fixed
    /// color when one is given, otherwise a palette fallback.
    pub(crate) fn get_series_color(&self, index: usize, compartment: Option<Compartment>) -> RGBColor {
        if let Some(ref colors) = self.series_colors {
            if index < colors.len() {
                return colors[index];
            }
        }

        if let Some(compartment) = compartment {
            return compartment_color(compartment);
        }

        // Default palette
        let default_colors = [
            RED,
            BLUE,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0), // Orange
            RGBColor(128, 0, 128), // Purple
            RGBColor(165, 42, 42), // Brown
        ];

        default_colors[index % default_colors.len()]
    }
}

/// Fixed default color for each compartment
///
/// Stable across plots so the same variable always has the same color.
pub fn compartment_color(compartment: Compartment) -> RGBColor {
    match compartment {
        Compartment::Susceptible => BLUE,
        Compartment::Vaccinated => GREEN,
        Compartment::Carrier => RGBColor(255, 165, 0), // Orange
        Compartment::Infected => RED,
        Compartment::Recovered => RGBColor(128, 0, 128), // Purple
        Compartment::Misinformation => BLACK,
        Compartment::HealthcareAccess => CYAN,
        Compartment::SocialInfluence => MAGENTA,
        Compartment::MisinfoModulation => RGBColor(165, 42, 42), // Brown
    }
}

// =================================================================================================
// Tests
// =================================================================================================
