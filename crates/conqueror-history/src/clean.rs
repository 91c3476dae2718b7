//! Rating cleanup for decoded histories
//!
//! Zero ratings come from placement matches at the start of a season and from
//! games that ended before a rating was assigned (early exits, failed loads).

use conqueror_domain::Observation;

/// Drop placement zeros and patch the remaining zero ratings
///
/// The first `placement_games` zero ratings are removed. Every later zero is
/// replaced by the closest earlier non-zero rating, or failing that the closest
/// later one; a history with no non-zero rating at all keeps its zeros.
///
/// # Examples
///
/// ```
/// use conqueror_domain::Observation;
/// use conqueror_history::clean_ratings;
///
/// let raw = [
///     Observation::new(1.0, 0.0),
///     Observation::new(2.0, 1000.0),
///     Observation::new(3.0, 0.0),
/// ];
/// let cleaned = clean_ratings(&raw, 1);
/// assert_eq!(cleaned, vec![Observation::new(2.0, 1000.0), Observation::new(3.0, 1000.0)]);
/// ```
pub fn clean_ratings(observations: &[Observation], placement_games: usize) -> Vec<Observation> {
    let mut zeros_seen = 0;
    let mut kept: Vec<Observation> = observations
        .iter()
        .filter(|obs| {
            if obs.rating != 0.0 {
                return true;
            }
            zeros_seen += 1;
            zeros_seen > placement_games
        })
        .copied()
        .collect();

    for i in 0..kept.len() {
        if kept[i].rating != 0.0 {
            continue;
        }

        let previous = kept[..i].iter().rev().map(|o| o.rating).find(|&r| r != 0.0);
        let next = kept[i + 1..].iter().map(|o| o.rating).find(|&r| r != 0.0);
        if let Some(rating) = previous.or(next) {
            kept[i].rating = rating;
        }
    }

    kept
}
