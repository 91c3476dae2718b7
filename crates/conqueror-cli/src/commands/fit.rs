//! Fit command implementation.

use super::resolve_target;
use crate::cli::FitArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::report::Prediction;
use conqueror_domain::{fit, Observation};
use std::fs;
use tracing::{debug, warn};

/// Execute the fit command.
///
/// Degenerate fits are reported rather than rejected, so the raw numbers can
/// be inspected.
pub fn execute_fit(args: FitArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let target = resolve_target(args.target, args.rank.as_deref(), config.settings.default_target)?;

    let json = fs::read_to_string(&args.observations)?;
    let observations: Vec<Observation> = serde_json::from_str(&json)?;
    debug!("Read {} observations from {}", observations.len(), args.observations.display());

    let line = fit(&observations, target)?;
    debug!(?line, "Fitted trend");
    if line.is_degenerate() {
        warn!("Degenerate fit over {} observations", observations.len());
    }

    let prediction = Prediction::build(&observations, line, target, config.settings.view_width);
    println!("{}", formatter.format_prediction(&prediction)?);

    Ok(())
}
