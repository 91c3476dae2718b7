//! Wire types for leaderboard game pages

use crate::HistoryError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One page of a player's game list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GamesPage {
    /// Page number (1-based)
    pub page: u32,
    /// Requested page size
    pub per_page: u32,
    /// Number of games on this page
    pub count: u32,
    /// Offset of the first game on this page
    pub offset: u32,
    /// Games on this page, newest first
    pub games: Vec<Game>,
}

impl GamesPage {
    /// Whether no page follows this one
    ///
    /// A short page is still processed; an empty page is not.
    pub fn is_last(&self) -> bool {
        self.count < self.per_page
    }
}

/// A single played game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// When the game started
    pub started_at: DateTime<Utc>,

    /// Teams, each a list of player slots
    #[serde(default)]
    pub teams: Vec<Vec<PlayerSlot>>,

    /// Ranked season the game belongs to
    #[serde(default)]
    pub season: Option<u32>,

    /// Match kind (e.g. "rm_1v1", "rm_2v2")
    pub kind: String,
}

/// Wrapper around a player entry inside a team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSlot {
    /// Player taking part in the game
    pub player: TeamMember,
}

/// A player as listed in a game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    /// Stable player identifier
    pub profile_id: u64,

    /// Display name at the time of the game
    #[serde(default)]
    pub name: String,

    /// "win", "loss" or absent for unfinished games
    #[serde(default)]
    pub result: Option<String>,

    /// Civilization played
    #[serde(default)]
    pub civilization: Option<String>,

    /// Leaderboard rating; absent or null when the game went unrated
    #[serde(default)]
    pub rating: Option<i64>,

    /// Rating change caused by the game
    #[serde(default)]
    pub rating_diff: Option<i64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PageSet {
    Many(Vec<GamesPage>),
    One(GamesPage),
}

/// Parse a history file holding either one page or an array of pages
pub fn parse_pages(json: &str) -> Result<Vec<GamesPage>, HistoryError> {
    let pages = match serde_json::from_str::<PageSet>(json)? {
        PageSet::Many(pages) => pages,
        PageSet::One(page) => vec![page],
    };
    Ok(pages)
}
