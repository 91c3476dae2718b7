//! Conqueror Domain Layer
//!
//! This crate contains the predictive model for Conqueror: given a player's
//! rating history it fits a least-squares trend line and projects the date at
//! which a target rating will be reached.
//!
//! ## Key Concepts
//!
//! - **Observation**: One `(timestamp, rating)` sample from a rating history
//! - **Fit result**: Slope, intercept and the two anchor points of the trend
//! - **Effective target**: The rating actually projected to, after clamping
//! - **Rank ladder**: The single immutable table of rating thresholds
//! - **Game mode**: Solo or team ranked leaderboard
//!
//! ## Architecture
//!
//! - Pure computation only, no I/O and no global mutable state
//! - Decoding of wire formats lives in `conqueror-history`
//! - Presentation lives in `conqueror-cli`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod crossing;
pub mod error;
pub mod mode;
pub mod observation;
pub mod options;
pub mod rank;
pub mod trend;

// Re-exports for convenience
pub use crossing::{rank_crossings, RankCrossing};
pub use error::TrendError;
pub use mode::GameMode;
pub use observation::Observation;
pub use options::{prediction_options, PredictionOptions};
pub use rank::{current_rank, Rank, RANKS, RATING_CEILING, RATING_FLOOR};
pub use trend::{effective_target, fit, FitResult};
