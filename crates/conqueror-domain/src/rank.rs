//! Rank module - the ladder of rating thresholds
//!
//! The ladder is defined once here; both the estimator's callers and the
//! renderer read this table.

use serde::Serialize;

/// A rung of the rank ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rank {
    /// Display name (e.g. "Gold II")
    pub name: &'static str,

    /// Rating needed to reach this rank
    pub points: f64,

    /// The rank is annotated on charts narrower than this only when it is
    /// the selected target
    pub max_width: u32,

    /// Display color family
    pub color: &'static str,

    /// Icon shown next to the annotation
    pub icon_url: &'static str,
}

/// Lowest rung of the ladder; declining trends project down to it
pub const RATING_FLOOR: f64 = 300.0;

/// Highest rung of the ladder; rising trends never project below it
pub const RATING_CEILING: f64 = 1600.0;

macro_rules! rank {
    ($name:literal, $points:literal, $width:literal, $color:literal, $icon:literal) => {
        Rank {
            name: $name,
            points: $points,
            max_width: $width,
            color: $color,
            icon_url: concat!("https://www.when-will-i-be-conqueror.com/images/", $icon, ".svg"),
        }
    };
}

/// The rank ladder, ordered by ascending points
pub static RANKS: [Rank; 18] = [
    rank!("Bronze I", 300.0, 1200, "Bronze", "bronze_1"),
    rank!("Bronze II", 400.0, 500, "Bronze", "bronze_2"),
    rank!("Bronze III", 500.0, 300, "Bronze", "bronze_3"),
    rank!("Silver I", 600.0, 1200, "Silver", "silver_1"),
    rank!("Silver II", 650.0, 500, "Silver", "silver_2"),
    rank!("Silver III", 700.0, 300, "Silver", "silver_3"),
    rank!("Gold I", 800.0, 1200, "Gold", "gold_1"),
    rank!("Gold II", 850.0, 500, "Gold", "gold_2"),
    rank!("Gold III", 900.0, 300, "Gold", "gold_3"),
    rank!("Platinum I", 1000.0, 1200, "Platinum", "platinum_1"),
    rank!("Platinum II", 1050.0, 500, "Platinum", "platinum_2"),
    rank!("Platinum III", 1100.0, 300, "Platinum", "platinum_3"),
    rank!("Diamond I", 1200.0, 1200, "Blue", "diamond_1"),
    rank!("Diamond II", 1250.0, 500, "Blue", "diamond_2"),
    rank!("Diamond III", 1300.0, 300, "Blue", "diamond_3"),
    rank!("Conqueror I", 1400.0, 1200, "Yellow", "conqueror_1"),
    rank!("Conqueror II", 1500.0, 500, "Yellow", "conqueror_2"),
    rank!("Conqueror III", 1600.0, 300, "Red", "conqueror_3"),
];

impl Rank {
    /// Look up a rank by display name (case-insensitive)
    pub fn by_name(name: &str) -> Option<&'static Rank> {
        let name = name.trim();
        RANKS.iter().find(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// Look up the rank that starts exactly at `points`
    pub fn by_points(points: f64) -> Option<&'static Rank> {
        RANKS.iter().find(|r| r.points == points)
    }

    /// Lowest rank of the ladder
    pub fn lowest() -> &'static Rank {
        &RANKS[0]
    }

    /// Highest rank of the ladder
    pub fn highest() -> &'static Rank {
        &RANKS[RANKS.len() - 1]
    }
}

/// The first rank strictly above `rating`, if any
pub fn next_rank(rating: f64) -> Option<&'static Rank> {
    RANKS.iter().find(|r| r.points > rating)
}

/// The highest rank already reached at `rating`, if any
pub fn current_rank(rating: f64) -> Option<&'static Rank> {
    RANKS.iter().rev().find(|r| r.points <= rating)
}

/// All ranks strictly above `points`, in ladder order
pub fn ranks_above(points: f64) -> impl Iterator<Item = &'static Rank> {
    RANKS.iter().filter(move |r| r.points > points)
}
