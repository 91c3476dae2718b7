//! Integration tests for conqueror-history
//!
//! These tests decode a full multi-page history and fit a trend through it.

use chrono::{TimeZone, Utc};
use conqueror_domain::{fit, rank_crossings, GameMode, Observation};
use conqueror_history::{parse_pages, HistoryConfig, HistoryError, HistoryExtractor};

const SEASON_START: i64 = 1_710_806_400;
const DAY_MS: f64 = 86_400_000.0;

fn slot(profile_id: u64, name: &str, rating: &str) -> String {
    format!(
        r#"[{{"player": {{"profile_id": {}, "name": "{}", "result": "win", "civilization": "english", "rating": {}}}}}]"#,
        profile_id, name, rating
    )
}

fn game(started_at: &str, kind: &str, rating: &str) -> String {
    format!(
        r#"{{"game_id": 1, "started_at": "{}", "season": 7, "kind": "{}", "teams": [{}, {}]}}"#,
        started_at,
        kind,
        slot(4635035, "Alice", rating),
        slot(99, "Opponent", "1111")
    )
}

fn page(number: u32, per_page: u32, games: &[String]) -> String {
    format!(
        r#"{{"page": {}, "per_page": {}, "count": {}, "offset": 0, "games": [{}]}}"#,
        number,
        per_page,
        games.len(),
        games.join(",")
    )
}

/// Three pages, newest game first: five solo games one day apart gaining
/// 10 points a day, one team game and one game from the previous season.
fn fixture() -> String {
    let first = page(
        1,
        3,
        &[
            game("2024-03-24T00:00:00Z", "rm_1v1", "1050"),
            game("2024-03-23T00:00:00Z", "rm_1v1", "1040"),
            game("2024-03-22T12:00:00Z", "rm_2v2", "1300"),
        ],
    );
    let second = page(
        2,
        3,
        &[
            game("2024-03-22T00:00:00Z", "rm_1v1", "1030"),
            game("2024-03-21T00:00:00Z", "rm_1v1", "1020"),
            game("2024-03-20T00:00:00Z", "rm_1v1", "1010"),
        ],
    );
    let third = page(3, 3, &[game("2024-03-10T00:00:00Z", "rm_1v1", "800")]);
    format!("[{}, {}, {}]", first, second, third)
}

fn extractor() -> HistoryExtractor {
    HistoryExtractor::new(HistoryConfig {
        append_current: false,
        ..HistoryConfig::default()
    })
}

#[test]
fn test_decode_solo_history() {
    let pages = parse_pages(&fixture()).unwrap();
    let history = extractor()
        .extract(&pages, 4635035, GameMode::Solo, Utc::now())
        .unwrap();

    assert_eq!(history.player_name, "Alice");
    assert_eq!(history.mode, GameMode::Solo);

    let expected: Vec<_> = (1..=5)
        .map(|d| {
            Observation::new(
                (SEASON_START + d * 86_400) as f64 * 1000.0,
                1000.0 + 10.0 * d as f64,
            )
        })
        .collect();
    assert_eq!(history.observations, expected);
}

#[test]
fn test_decode_team_history() {
    let pages = parse_pages(&fixture()).unwrap();
    let history = extractor()
        .extract(&pages, 4635035, GameMode::Team, Utc::now())
        .unwrap();

    assert_eq!(history.observations.len(), 1);
    assert_eq!(history.observations[0].rating, 1300.0);
}

#[test]
fn test_fit_decoded_history() {
    let pages = parse_pages(&fixture()).unwrap();
    let history = extractor()
        .extract(&pages, 4635035, GameMode::Solo, Utc::now())
        .unwrap();

    let line = fit(&history.observations, 1600.0).unwrap().ensure_finite().unwrap();

    // 10 points per day, so 1600 is reached 60 days into the season
    assert!((line.slope * DAY_MS - 10.0).abs() < 1e-6);
    assert_eq!(line.x1, history.observations[0].timestamp.unwrap());
    let expected_x2 = (SEASON_START + 60 * 86_400) as f64 * 1000.0;
    assert!((line.x2 - expected_x2).abs() < 1000.0, "x2 = {}", line.x2);

    let crossings = rank_crossings(&line, 1920, 1600.0);
    let last = crossings.last().unwrap();
    assert_eq!(last.rank.name, "Conqueror III");
}

#[test]
fn test_current_sample_appended() {
    let pages = parse_pages(&fixture()).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 3, 25, 0, 0, 0).unwrap();
    let history = HistoryExtractor::new(HistoryConfig::default())
        .extract(&pages, 4635035, GameMode::Solo, now)
        .unwrap();

    assert_eq!(history.observations.len(), 6);
    let last = history.observations.last().unwrap();
    assert_eq!(last.timestamp, Some(now.timestamp_millis() as f64));
    assert_eq!(last.rating, 1050.0);
}

#[test]
fn test_earlier_season_start_includes_old_games() {
    let pages = parse_pages(&fixture()).unwrap();
    let config = HistoryConfig {
        append_current: false,
        ..HistoryConfig::default()
    }
    .with_season_start_override(Some("1709251200"))
    .unwrap();

    let history = HistoryExtractor::new(config)
        .extract(&pages, 4635035, GameMode::Solo, Utc::now())
        .unwrap();
    assert_eq!(history.observations.len(), 6);
    assert_eq!(history.observations[0].rating, 800.0);
}

#[test]
fn test_missing_player() {
    let pages = parse_pages(&fixture()).unwrap();
    let result = extractor().extract(&pages, 1, GameMode::Solo, Utc::now());
    assert!(matches!(result, Err(HistoryError::NoData { player_id: 1 })));
}
