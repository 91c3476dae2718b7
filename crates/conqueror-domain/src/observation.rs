//! Observation module - one sample of a rating history

use serde::{Deserialize, Serialize};

/// A single `(timestamp, rating)` sample
///
/// Timestamps are in the estimator's native unit (milliseconds since the Unix
/// epoch when produced by `conqueror-history`). A `None` timestamp models an
/// undefined date coming from an upstream decoder and is rejected by
/// [`crate::fit`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// When the rating was recorded
    #[serde(default)]
    pub timestamp: Option<f64>,

    /// Rating value at that time
    pub rating: f64,
}

impl Observation {
    /// Create a dated observation
    ///
    /// # Examples
    ///
    /// ```
    /// use conqueror_domain::Observation;
    ///
    /// let obs = Observation::new(0.0, 1000.0);
    /// assert_eq!(obs.timestamp, Some(0.0));
    /// ```
    pub fn new(timestamp: f64, rating: f64) -> Self {
        Self {
            timestamp: Some(timestamp),
            rating,
        }
    }

    /// Create an observation whose timestamp is unknown
    pub fn undated(rating: f64) -> Self {
        Self {
            timestamp: None,
            rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_timestamp_decodes_as_none() {
        let obs: Observation = serde_json::from_str(r#"{"rating": 1000}"#).unwrap();
        assert_eq!(obs, Observation::undated(1000.0));

        let obs: Observation =
            serde_json::from_str(r#"{"timestamp": null, "rating": 900}"#).unwrap();
        assert!(obs.timestamp.is_none());
    }

    #[test]
    fn test_dated_observation_decodes() {
        let obs: Observation =
            serde_json::from_str(r#"{"timestamp": 1710806400000, "rating": 1234.5}"#).unwrap();
        assert_eq!(obs, Observation::new(1_710_806_400_000.0, 1234.5));
    }
}
