//! Command implementations.

pub mod fit;
pub mod predict;
pub mod ranks;

pub use self::fit::execute_fit;
pub use self::predict::execute_predict;
pub use self::ranks::execute_ranks;

use crate::error::{CliError, Result};
use conqueror_domain::Rank;

/// Resolve the target rating from `--target`, `--rank` or the configured default.
pub fn resolve_target(target: Option<f64>, rank: Option<&str>, default: f64) -> Result<f64> {
    if let Some(target) = target {
        if !target.is_finite() {
            return Err(CliError::InvalidInput(format!("Target {} is not a rating", target)));
        }
        return Ok(target);
    }

    match rank {
        Some(name) => Rank::by_name(name)
            .map(|r| r.points)
            .ok_or_else(|| CliError::InvalidInput(format!("Unknown rank '{}'", name))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_target() {
        assert_eq!(resolve_target(Some(1450.0), None, 1600.0).unwrap(), 1450.0);
        assert_eq!(resolve_target(None, Some("gold i"), 1600.0).unwrap(), 800.0);
        assert_eq!(resolve_target(None, None, 1600.0).unwrap(), 1600.0);
        assert!(resolve_target(None, Some("Legend"), 1600.0).is_err());
        assert!(resolve_target(Some(f64::NAN), None, 1600.0).is_err());
    }
}
