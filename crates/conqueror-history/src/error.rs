//! Error types for history decoding

use thiserror::Error;

/// Errors that can occur while decoding a rating history
#[derive(Error, Debug)]
pub enum HistoryError {
    /// Malformed page JSON
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// No rated games remained for the player
    #[error("No data available for player {player_id}")]
    NoData {
        /// Player the history was requested for
        player_id: u64,
    },
}

impl From<serde_json::Error> for HistoryError {
    fn from(e: serde_json::Error) -> Self {
        HistoryError::JsonParse(e.to_string())
    }
}
