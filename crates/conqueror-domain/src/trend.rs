//! Trend estimation module
//!
//! Fits an ordinary-least-squares line through a rating history and projects
//! the time at which the line reaches a target rating.

use crate::{Observation, TrendError, RATING_CEILING, RATING_FLOOR};
use serde::{Deserialize, Serialize};

/// A fitted trend line with the two anchor points used to draw it
///
/// `y1` and `y2` are always computed from the line itself, so
/// `y = slope * x + intercept` holds for both anchors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Rating change per time unit
    pub slope: f64,
    /// Line value at time zero
    pub intercept: f64,
    /// Timestamp of the first observation
    pub x1: f64,
    /// Line value at `x1`
    pub y1: f64,
    /// Time at which the line reaches the effective target
    pub x2: f64,
    /// Line value at `x2`
    pub y2: f64,
    /// Target rating used to compute `x2`, after clamping
    pub effective_target: f64,
}

impl FitResult {
    /// Value of the fitted line at time `t`
    pub fn rating_at(&self, t: f64) -> f64 {
        self.slope * t + self.intercept
    }

    /// Time at which the fitted line equals `rating`
    ///
    /// Non-finite when the slope is zero or the fit is degenerate.
    pub fn crossing_time(&self, rating: f64) -> f64 {
        (rating - self.intercept) / self.slope
    }

    /// Whether any component of the fit is NaN or infinite
    pub fn is_degenerate(&self) -> bool {
        ![self.slope, self.intercept, self.x1, self.y1, self.x2, self.y2]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Convert a degenerate fit into [`TrendError::DegenerateFit`]
    ///
    /// [`fit`] itself lets NaN and infinity propagate into the result; callers
    /// that need a drawable line go through this check.
    pub fn ensure_finite(self) -> Result<Self, TrendError> {
        if self.is_degenerate() {
            return Err(TrendError::DegenerateFit {
                slope: self.slope,
                intercept: self.intercept,
            });
        }
        Ok(self)
    }
}

/// Target rating actually projected to
///
/// The caller's target is kept when it is below both the best rating already
/// observed and [`RATING_CEILING`]; otherwise the larger of those two is used.
/// A declining trend always projects to [`RATING_FLOOR`].
///
/// # Examples
///
/// ```
/// use conqueror_domain::effective_target;
///
/// assert_eq!(effective_target(1400.0, 2000.0, 1.0), 1600.0);
/// assert_eq!(effective_target(1700.0, 2000.0, 1.0), 1700.0);
/// assert_eq!(effective_target(1400.0, 1200.0, 1.0), 1200.0);
/// assert_eq!(effective_target(1400.0, 1600.0, -1.0), 300.0);
/// ```
pub fn effective_target(max_observed_rating: f64, target: f64, slope: f64) -> f64 {
    if slope < 0.0 {
        return RATING_FLOOR;
    }

    let upper_bound = max_observed_rating.max(RATING_CEILING);
    if target < upper_bound {
        target
    } else {
        upper_bound
    }
}

/// Fit a least-squares line through `observations` and project it to `target`
///
/// Observations must be ordered by time; `x1` is the first element's timestamp
/// whether or not it is the earliest. No bounds are put on `x2`, so the
/// projection may land arbitrarily far in the future or the past.
///
/// Fewer than two distinct timestamps or a flat trend produce NaN or infinite
/// components rather than an error; see [`FitResult::ensure_finite`].
///
/// # Errors
///
/// [`TrendError::InvalidInput`] if the sequence is empty or any timestamp is
/// missing. Validation happens before any arithmetic.
///
/// # Examples
///
/// ```
/// use conqueror_domain::{fit, Observation};
///
/// let history = [Observation::new(0.0, 1000.0), Observation::new(10.0, 1100.0)];
/// let line = fit(&history, 1600.0).unwrap();
/// assert_eq!(line.slope, 10.0);
/// assert_eq!(line.x2, 60.0);
/// ```
pub fn fit(observations: &[Observation], target: f64) -> Result<FitResult, TrendError> {
    if observations.is_empty() {
        return Err(TrendError::InvalidInput(
            "observation sequence is empty".to_string(),
        ));
    }

    let timestamps = observations
        .iter()
        .enumerate()
        .map(|(i, obs)| {
            obs.timestamp.ok_or_else(|| {
                TrendError::InvalidInput(format!("observation {} has no timestamp", i))
            })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    let n = observations.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (x, obs) in timestamps.iter().zip(observations) {
        let y = obs.rating;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n;

    let max_rating = observations
        .iter()
        .map(|obs| obs.rating)
        .fold(f64::NEG_INFINITY, f64::max);
    let effective_target = effective_target(max_rating, target, slope);

    let x1 = timestamps[0];
    let x2 = (effective_target - intercept) / slope;

    let mut result = FitResult {
        slope,
        intercept,
        x1,
        y1: f64::NAN,
        x2,
        y2: f64::NAN,
        effective_target,
    };
    result.y1 = result.rating_at(x1);
    result.y2 = result.rating_at(x2);
    Ok(result)
}
