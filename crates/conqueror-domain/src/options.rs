//! Prediction options - which target ranks are worth offering for a trend

use crate::rank::{next_rank, ranks_above};
use crate::{Rank, TrendError, RANKS, RATING_CEILING};
use serde::Serialize;

/// Rating above which only the top of the ladder is offered
const FINAL_STRETCH: f64 = 1500.0;

/// Target ranks offered for a given trend and current rating
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionOptions {
    /// Ranks offered, in ladder order
    pub ranks: Vec<&'static Rank>,

    /// Preselected target (the highest rank offered)
    pub default: &'static Rank,
}

impl PredictionOptions {
    fn from_ranks(ranks: Vec<&'static Rank>) -> Self {
        let default = ranks.last().copied().unwrap_or_else(Rank::highest);
        Self { ranks, default }
    }
}

/// Choose which target ranks to offer
///
/// A rising trend offers the ranks beyond the next one up (only the top of the
/// ladder once the rating passes Conqueror II); a falling trend only offers the
/// bottom rung; a flat or undefined trend offers the whole ladder.
///
/// # Errors
///
/// [`TrendError::AboveCeiling`] when the trend rises and the rating is already
/// above the top of the ladder, since there is nothing left to predict.
pub fn prediction_options(slope: f64, current_rating: f64) -> Result<PredictionOptions, TrendError> {
    if slope > 0.0 {
        if current_rating > RATING_CEILING {
            return Err(TrendError::AboveCeiling(current_rating));
        }
        if current_rating > FINAL_STRETCH {
            return Ok(PredictionOptions::from_ranks(ranks_above(FINAL_STRETCH).collect()));
        }

        let next = next_rank(current_rating).unwrap_or_else(Rank::highest);
        let mut ranks: Vec<_> = ranks_above(next.points).collect();
        if ranks.is_empty() {
            ranks.push(next);
        }
        return Ok(PredictionOptions::from_ranks(ranks));
    }

    if slope < 0.0 {
        return Ok(PredictionOptions::from_ranks(vec![Rank::lowest()]));
    }

    Ok(PredictionOptions::from_ranks(RANKS.iter().collect()))
}
