//! Rank crossings - where the fitted line passes each rung of the ladder

use crate::{FitResult, Rank, RANKS};
use serde::Serialize;

/// The time a trend line reaches a rank
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankCrossing {
    /// Rank being crossed
    pub rank: &'static Rank,

    /// Time at which the line reaches `rank.points`
    pub timestamp: f64,
}

/// Ranks the drawn segment `[x1, x2]` passes through
///
/// A rank is considered when the chart is wider than its `max_width`, or when
/// it is the selected `target`. Crossings outside the segment, including
/// non-finite ones from a flat line, are left out. Results follow ladder order.
pub fn rank_crossings(fit: &FitResult, view_width: u32, target: f64) -> Vec<RankCrossing> {
    RANKS
        .iter()
        .filter(|rank| rank.max_width < view_width || rank.points == target)
        .filter_map(|rank| {
            let timestamp = fit.crossing_time(rank.points);
            (timestamp.is_finite() && timestamp >= fit.x1 && timestamp <= fit.x2)
                .then_some(RankCrossing { rank, timestamp })
        })
        .collect()
}
