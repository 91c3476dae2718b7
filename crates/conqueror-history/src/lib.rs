//! Conqueror History
//!
//! Decodes leaderboard game pages into a rating history the trend estimator
//! can fit.
//!
//! # Overview
//!
//! The data source returns a player's games page by page. Each game lists the
//! teams and, for every player slot, the rating that player held. This crate
//! picks out one player's ratings for one leaderboard, drops games from before
//! the current season, cleans up placement and missing ratings, and returns a
//! time-ordered observation sequence in milliseconds.
//!
//! # Architecture
//!
//! ```text
//! JSON pages → HistoryExtractor → PlayerHistory → conqueror_domain::fit
//! ```
//!
//! Fetching pages over the network is left to the caller.
//!
//! # Example Usage
//!
//! ```no_run
//! use conqueror_domain::GameMode;
//! use conqueror_history::{parse_pages, HistoryConfig, HistoryExtractor};
//!
//! # fn example(json: &str) -> Result<(), conqueror_history::HistoryError> {
//! let pages = parse_pages(json)?;
//! let extractor = HistoryExtractor::new(HistoryConfig::default());
//! let history = extractor.extract(&pages, 4_635_035, GameMode::Solo, chrono::Utc::now())?;
//!
//! println!("{}: {} ratings", history.player_name, history.observations.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod clean;
mod config;
mod error;
mod extractor;
mod types;

pub use clean::clean_ratings;
pub use config::{HistoryConfig, SEASON_START_ENV};
pub use error::HistoryError;
pub use extractor::{HistoryExtractor, PlayerHistory};
pub use types::{parse_pages, Game, GamesPage, PlayerSlot, TeamMember};
