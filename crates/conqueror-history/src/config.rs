//! Configuration for history decoding

use crate::HistoryError;
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`HistoryConfig::season_start`]
pub const SEASON_START_ENV: &str = "SEASON_START_TIMESTAMP";

/// Configuration for the history extractor
///
/// # Examples
///
/// ```
/// use conqueror_history::HistoryConfig;
///
/// let config = HistoryConfig::default();
/// assert_eq!(config.placement_games, 5);
/// assert!(config.append_current);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Games that started before this time (epoch seconds) are ignored
    /// Default: 2024-03-19T00:00:00Z
    pub season_start: i64,

    /// Number of leading zero ratings treated as placement games and dropped
    /// Default: 5
    pub placement_games: usize,

    /// Repeat the last rating at the current time so the trend spans to today
    /// Default: true
    pub append_current: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            season_start: 1_710_806_400,
            placement_games: 5,
            append_current: true,
        }
    }
}

impl HistoryConfig {
    /// Apply [`SEASON_START_ENV`] if it is set
    pub fn with_env_overrides(self) -> Result<Self, HistoryError> {
        self.with_season_start_override(std::env::var(SEASON_START_ENV).ok().as_deref())
    }

    /// Apply a season start given as an epoch-seconds string
    ///
    /// Fractional values are truncated to whole seconds.
    pub fn with_season_start_override(mut self, value: Option<&str>) -> Result<Self, HistoryError> {
        if let Some(raw) = value {
            let parsed: f64 = raw.trim().parse().map_err(|_| {
                HistoryError::Config(format!("{} is not a timestamp: '{}'", SEASON_START_ENV, raw))
            })?;
            if !parsed.is_finite() {
                return Err(HistoryError::Config(format!(
                    "{} is not a finite timestamp: '{}'",
                    SEASON_START_ENV, raw
                )));
            }
            self.season_start = parsed as i64;
        }
        Ok(self)
    }
}
