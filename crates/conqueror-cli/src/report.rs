//! Prediction reports assembled from a fitted trend.

use chrono::DateTime;
use conqueror_domain::{
    current_rank, prediction_options, rank_crossings, FitResult, GameMode, Observation,
    PredictionOptions, Rank, TrendError,
};
use conqueror_history::PlayerHistory;
use serde::Serialize;

/// Everything the CLI shows for one prediction.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    /// Player the history belongs to, when it came from game pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<PlayerSummary>,

    /// Number of observations fitted
    pub observations: usize,

    /// Rating of the last observation
    pub current_rating: f64,

    /// Highest rank the current rating has reached
    pub current_rank: Option<&'static Rank>,

    /// Target asked for, before clamping
    pub requested_target: f64,

    /// Fitted line and anchors
    pub fit: FitResult,

    /// Rank sitting exactly at the effective target, if any
    pub target_rank: Option<&'static Rank>,

    /// Date the effective target is reached
    pub target_date: Option<String>,

    /// Ranks crossed along the drawn segment
    pub crossings: Vec<CrossingView>,

    /// Target ranks worth offering next
    pub options: Option<PredictionOptions>,

    /// Caveats about the prediction
    pub notes: Vec<String>,
}

/// Identity of the player a prediction is for.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSummary {
    /// Profile ID
    pub id: u64,
    /// Display name
    pub name: String,
    /// Leaderboard
    pub mode: GameMode,
}

/// A rank crossing with its date rendered.
#[derive(Debug, Clone, Serialize)]
pub struct CrossingView {
    /// Rank name
    pub rank: &'static str,
    /// Rank threshold
    pub points: f64,
    /// Crossing time in milliseconds
    pub timestamp: f64,
    /// Crossing date (`%Y-%m-%d`)
    pub date: Option<String>,
}

impl Prediction {
    /// Assemble a report for `fit` over `observations`.
    pub fn build(
        observations: &[Observation],
        fit: FitResult,
        requested_target: f64,
        view_width: u32,
    ) -> Self {
        let current_rating = observations.last().map(|o| o.rating).unwrap_or(f64::NAN);
        let mut notes = Vec::new();

        if fit.is_degenerate() {
            notes.push("Fit is degenerate: insufficient data for a trend".to_string());
        } else if fit.slope < 0.0 {
            notes.push(format!(
                "Rating is trending down; projecting to {}",
                Rank::lowest().name
            ));
        } else if fit.effective_target != requested_target {
            notes.push(format!(
                "Target {} clamped to {}",
                requested_target, fit.effective_target
            ));
        }

        let options = match prediction_options(fit.slope, current_rating) {
            Ok(options) => Some(options),
            Err(TrendError::AboveCeiling(rating)) => {
                notes.push(format!(
                    "Rating {} is already above {}",
                    rating,
                    Rank::highest().name
                ));
                None
            }
            Err(e) => {
                notes.push(e.to_string());
                None
            }
        };

        let crossings = rank_crossings(&fit, view_width, fit.effective_target)
            .into_iter()
            .map(|c| CrossingView {
                rank: c.rank.name,
                points: c.rank.points,
                timestamp: c.timestamp,
                date: format_date(c.timestamp),
            })
            .collect();

        Self {
            player: None,
            observations: observations.len(),
            current_rating,
            current_rank: current_rank(current_rating),
            requested_target,
            fit,
            target_rank: Rank::by_points(fit.effective_target),
            target_date: format_date(fit.x2),
            crossings,
            options,
            notes,
        }
    }

    /// Attach the player a history was decoded for.
    pub fn with_player(mut self, history: &PlayerHistory) -> Self {
        self.player = Some(PlayerSummary {
            id: history.player_id,
            name: history.player_name.clone(),
            mode: history.mode,
        });
        self
    }
}

/// Render a millisecond timestamp as a calendar date.
///
/// Returns `None` for non-finite or out-of-range times.
pub fn format_date(millis: f64) -> Option<String> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64).map(|d| d.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use conqueror_domain::fit;

    const DAY_MS: f64 = 86_400_000.0;
    const SEASON_START_MS: f64 = 1_710_806_400_000.0;

    fn rising() -> Vec<Observation> {
        // 1010 at season start, +10 per day
        vec![
            Observation::new(SEASON_START_MS, 1010.0),
            Observation::new(SEASON_START_MS + 10.0 * DAY_MS, 1110.0),
        ]
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(SEASON_START_MS).as_deref(), Some("2024-03-19"));
        assert_eq!(format_date(f64::INFINITY), None);
        assert_eq!(format_date(f64::NAN), None);
    }

    #[test]
    fn test_rising_prediction() {
        let observations = rising();
        let line = fit(&observations, 1600.0).unwrap();
        let prediction = Prediction::build(&observations, line, 1600.0, 1920);

        assert_eq!(prediction.current_rating, 1110.0);
        assert_eq!(prediction.current_rank.map(|r| r.name), Some("Platinum III"));
        assert_eq!(prediction.target_rank.map(|r| r.name), Some("Conqueror III"));
        assert!(prediction.target_date.is_some());
        assert!(prediction.notes.is_empty());
        assert_eq!(prediction.crossings.first().map(|c| c.rank), Some("Platinum II"));
        assert_eq!(prediction.crossings.last().map(|c| c.rank), Some("Conqueror III"));

        let options = prediction.options.unwrap();
        assert_eq!(options.default.name, "Conqueror III");
    }

    #[test]
    fn test_clamped_target_noted() {
        let observations = rising();
        let line = fit(&observations, 2000.0).unwrap();
        let prediction = Prediction::build(&observations, line, 2000.0, 1920);
        assert_eq!(prediction.notes, vec!["Target 2000 clamped to 1600".to_string()]);
    }

    #[test]
    fn test_declining_prediction() {
        let observations = vec![
            Observation::new(SEASON_START_MS, 700.0),
            Observation::new(SEASON_START_MS + DAY_MS, 650.0),
        ];
        let line = fit(&observations, 1600.0).unwrap();
        let prediction = Prediction::build(&observations, line, 1600.0, 1920);

        assert_eq!(prediction.target_rank.map(|r| r.name), Some("Bronze I"));
        assert!(prediction.notes[0].contains("trending down"));
        assert_eq!(prediction.options.unwrap().ranks.len(), 1);
    }

    #[test]
    fn test_degenerate_prediction() {
        let observations = vec![Observation::new(SEASON_START_MS, 1000.0)];
        let line = fit(&observations, 1600.0).unwrap();
        let prediction = Prediction::build(&observations, line, 1600.0, 1920);

        assert!(prediction.target_date.is_none());
        assert!(prediction.crossings.is_empty());
        assert_eq!(prediction.current_rank.map(|r| r.name), Some("Platinum I"));
        assert!(prediction.notes[0].contains("degenerate"));
    }

    #[test]
    fn test_above_ceiling_noted() {
        let observations = vec![
            Observation::new(SEASON_START_MS, 1650.0),
            Observation::new(SEASON_START_MS + DAY_MS, 1700.0),
        ];
        let line = fit(&observations, 1600.0).unwrap();
        let prediction = Prediction::build(&observations, line, 1600.0, 1920);

        assert!(prediction.options.is_none());
        assert!(prediction
            .notes
            .iter()
            .any(|n| n == "Rating 1700 is already above Conqueror III"));
    }
}
