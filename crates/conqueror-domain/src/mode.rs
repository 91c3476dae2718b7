//! Game mode module - which ranked leaderboard a history belongs to

use serde::{Deserialize, Serialize};

/// Ranked leaderboard a rating history is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Ranked 1v1
    #[default]
    #[serde(rename = "rm_solo")]
    Solo,

    /// Ranked team games (2v2, 3v3, 4v4)
    #[serde(rename = "rm_team")]
    Team,
}

impl GameMode {
    /// Leaderboard key used by the data source
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Solo => "rm_solo",
            GameMode::Team => "rm_team",
        }
    }

    /// Parse a game mode from a leaderboard key or a short name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rm_solo" | "solo" => Some(GameMode::Solo),
            "rm_team" | "team" => Some(GameMode::Team),
            _ => None,
        }
    }

    /// Match kinds that count toward this leaderboard
    pub fn game_kinds(&self) -> &'static [&'static str] {
        match self {
            GameMode::Solo => &["rm_1v1"],
            GameMode::Team => &["rm_2v2", "rm_3v3", "rm_4v4"],
        }
    }

    /// Whether a match of `kind` belongs to this leaderboard
    pub fn accepts_kind(&self, kind: &str) -> bool {
        self.game_kinds().contains(&kind)
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid game mode: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(GameMode::parse("rm_solo"), Some(GameMode::Solo));
        assert_eq!(GameMode::parse("Team"), Some(GameMode::Team));
        assert!("rm_ffa".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_game_kinds() {
        assert!(GameMode::Solo.accepts_kind("rm_1v1"));
        assert!(!GameMode::Solo.accepts_kind("rm_2v2"));
        assert!(GameMode::Team.accepts_kind("rm_4v4"));
        assert!(!GameMode::Team.accepts_kind("rm_1v1"));
        assert!(!GameMode::Team.accepts_kind("qm_2v2"));
    }

    #[test]
    fn test_serde_uses_leaderboard_key() {
        assert_eq!(serde_json::to_string(&GameMode::Team).unwrap(), "\"rm_team\"");
        let mode: GameMode = serde_json::from_str("\"rm_solo\"").unwrap();
        assert_eq!(mode, GameMode::Solo);
    }
}
