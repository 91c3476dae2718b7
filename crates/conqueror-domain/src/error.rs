//! Error types for trend estimation

use thiserror::Error;

/// Errors that can occur while fitting or interpreting a trend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrendError {
    /// Input rejected before any arithmetic (empty sequence, missing timestamp)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The fitted line has no usable slope or intercept
    #[error("Degenerate fit (slope: {slope}, intercept: {intercept}): insufficient data")]
    DegenerateFit {
        /// Fitted slope
        slope: f64,
        /// Fitted intercept
        intercept: f64,
    },

    /// Rating already exceeds the top of the ladder
    #[error("Rating {0} is already above the top of the rank ladder")]
    AboveCeiling(f64),
}
