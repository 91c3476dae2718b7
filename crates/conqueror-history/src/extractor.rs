//! Extraction of one player's rating history from game pages

use crate::clean::clean_ratings;
use crate::config::HistoryConfig;
use crate::error::HistoryError;
use crate::types::GamesPage;
use chrono::{DateTime, Utc};
use conqueror_domain::{GameMode, Observation};
use serde::Serialize;
use tracing::{debug, info};

/// Milliseconds per second; histories are handed to the estimator in milliseconds
const MILLIS_PER_SECOND: f64 = 1000.0;

/// A player's cleaned rating history for one leaderboard
#[derive(Debug, Clone, Serialize)]
pub struct PlayerHistory {
    /// Player the history belongs to
    pub player_id: u64,

    /// Most recent display name seen in the pages (empty if never seen)
    pub player_name: String,

    /// Leaderboard the ratings come from
    pub mode: GameMode,

    /// Time-ordered samples, timestamps in milliseconds
    pub observations: Vec<Observation>,
}

/// Turns game pages into a [`PlayerHistory`]
#[derive(Debug, Clone, Default)]
pub struct HistoryExtractor {
    config: HistoryConfig,
}

impl HistoryExtractor {
    /// Create a new extractor
    pub fn new(config: HistoryConfig) -> Self {
        Self { config }
    }

    /// Extract `player_id`'s ratings for `mode` from `pages`
    ///
    /// Pages are read in order until an empty page, or until a short page has
    /// been read. `now` stamps the trailing sample when
    /// [`HistoryConfig::append_current`] is set.
    pub fn extract(
        &self,
        pages: &[GamesPage],
        player_id: u64,
        mode: GameMode,
        now: DateTime<Utc>,
    ) -> Result<PlayerHistory, HistoryError> {
        info!(
            "Extracting {} history for player {} (season start {})",
            mode, player_id, self.config.season_start
        );

        let mut player_name = String::new();
        let mut samples = Vec::new();

        for page in pages {
            if page.games.is_empty() {
                debug!("Page {} has no games, stopping", page.page);
                break;
            }

            for game in page.games.iter().filter(|g| mode.accepts_kind(&g.kind)) {
                let started_at = game.started_at.timestamp();
                for member in game.teams.iter().flatten().map(|slot| &slot.player) {
                    if member.profile_id != player_id {
                        continue;
                    }
                    // Games arrive newest first
                    if player_name.is_empty() {
                        player_name.clone_from(&member.name);
                    }

                    if started_at < self.config.season_start {
                        continue;
                    }
                    let rating = member.rating.unwrap_or(0) as f64;
                    samples.push(Observation::new(started_at as f64, rating));
                }
            }

            if page.is_last() {
                debug!(
                    "Page {} returned {} of {} games, stopping",
                    page.page, page.count, page.per_page
                );
                break;
            }
        }

        samples.sort_by(|a, b| {
            let (a, b) = (a.timestamp.unwrap_or_default(), b.timestamp.unwrap_or_default());
            a.total_cmp(&b)
        });

        let mut observations = clean_ratings(&samples, self.config.placement_games);
        let Some(last) = observations.last().copied() else {
            return Err(HistoryError::NoData { player_id });
        };

        if self.config.append_current {
            observations.push(Observation::new(now.timestamp() as f64, last.rating));
        }

        for obs in &mut observations {
            obs.timestamp = obs.timestamp.map(|t| t * MILLIS_PER_SECOND);
        }

        info!(
            "Extracted {} ratings for player '{}' ({})",
            observations.len(),
            player_name,
            player_id
        );

        Ok(PlayerHistory {
            player_id,
            player_name,
            mode,
            observations,
        })
    }
}
