//! Output time grid
//!
//! Every solver in this crate reports the solution on a caller-supplied grid
//! of output times. Fixed-step methods take equal sub-steps inside each grid
//! interval; the adaptive method clips its internal step to land exactly on
//! each grid point. Either way, `SimulationResult::time_points` is exactly
//! the grid.

/// Strictly increasing sequence of output times
///
/// # Example
///
/// ```rust
/// use vaxsim_rs::solver::TimeGrid;
///
/// // 365 output samples over one year, starting at t = 0
/// let grid = TimeGrid::uniform(0.0, 365.0, 365);
/// assert_eq!(grid.len(), 365);
/// assert_eq!(grid.start(), 0.0);
/// assert_eq!(grid.end(), 365.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    points: Vec<f64>,
}

impl TimeGrid {
    /// Uniform grid of `n` points from `start` to `end` inclusive
    ///
    /// Points are computed directly from the index (never by accumulating
    /// dt) so the last point is exactly `end` and rounding errors do not
    /// build up along the grid.
    ///
    /// # Panics
    ///
    /// Panics when `n < 2`, when `end <= start`, or when either bound is
    /// non-finite.
    pub fn uniform(start: f64, end: f64, n: usize) -> Self {
        assert!(n >= 2, "Time grid needs at least 2 points, got {}", n);
        assert!(
            start.is_finite() && end.is_finite(),
            "Time grid bounds must be finite"
        );
        assert!(
            end > start,
            "Time grid end ({}) must exceed start ({})",
            end,
            start
        );

        let span = end - start;
        let last = (n - 1) as f64;
        let points = (0..n)
            .map(|i| {
                if i == n - 1 {
                    end
                } else {
                    start + span * (i as f64) / last
                }
            })
            .collect();

        Self { points }
    }

    /// Grid from explicit output times
    ///
    /// Returns an error when the sequence is empty, contains a non-finite
    /// value, or is not strictly increasing.
    pub fn from_points(points: Vec<f64>) -> Result<Self, String> {
        if points.is_empty() {
            return Err("Time grid cannot be empty".to_string());
        }

        for (i, &t) in points.iter().enumerate() {
            if !t.is_finite() {
                return Err(format!("Time grid point {} is not finite: {}", i, t));
            }
        }

        for i in 1..points.len() {
            if points[i] <= points[i - 1] {
                return Err(format!(
                    "Time grid must be strictly increasing: point {} ({}) <= point {} ({})",
                    i,
                    points[i],
                    i - 1,
                    points[i - 1]
                ));
            }
        }

        Ok(Self { points })
    }

    /// Number of output times
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the grid holds no points (never true for a constructed grid)
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First output time
    pub fn start(&self) -> f64 {
        self.points[0]
    }

    /// Last output time
    pub fn end(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// The output times as a slice
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Iterator over consecutive `(t_start, t_end)` intervals
    pub fn intervals(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
