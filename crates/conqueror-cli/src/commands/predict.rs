//! Predict command implementation.

use super::resolve_target;
use crate::cli::PredictArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::report::Prediction;
use chrono::Utc;
use conqueror_domain::fit;
use conqueror_history::{parse_pages, HistoryExtractor};
use std::fs;
use tracing::{debug, info};

/// Execute the predict command.
pub fn execute_predict(args: PredictArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let target = resolve_target(args.target, args.rank.as_deref(), config.settings.default_target)?;
    let view_width = args.width.unwrap_or(config.settings.view_width);

    let json = fs::read_to_string(&args.history)?;
    let pages = parse_pages(&json)?;
    debug!("Read {} pages from {}", pages.len(), args.history.display());

    let extractor = HistoryExtractor::new(config.history.clone());
    let history = extractor.extract(&pages, args.player, args.mode, Utc::now())?;

    let line = fit(&history.observations, target)?.ensure_finite()?;
    info!(
        "Fitted {} observations: slope {}, intercept {}, target {} at {}",
        history.observations.len(),
        line.slope,
        line.intercept,
        line.effective_target,
        line.x2
    );

    let prediction =
        Prediction::build(&history.observations, line, target, view_width).with_player(&history);
    println!("{}", formatter.format_prediction(&prediction)?);

    Ok(())
}
