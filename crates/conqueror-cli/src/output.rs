//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::report::Prediction;
use colored::*;
use conqueror_domain::Rank;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a prediction report.
    pub fn format_prediction(&self, prediction: &Prediction) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(prediction)?),
            OutputFormat::Table => Ok(self.format_prediction_table(prediction)),
            OutputFormat::Quiet => Ok(prediction
                .target_date
                .clone()
                .unwrap_or_else(|| "never".to_string())),
        }
    }

    /// Format the rank ladder.
    pub fn format_ranks(&self, ranks: &[Rank]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(ranks)?),
            OutputFormat::Quiet => Ok(ranks.iter().map(|r| r.name).collect::<Vec<_>>().join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Rank", "Points", "Color", "Min chart width"]);
                for rank in ranks {
                    builder.push_record([
                        rank.name.to_string(),
                        rank.points.to_string(),
                        rank.color.to_string(),
                        rank.max_width.to_string(),
                    ]);
                }
                Ok(self.render(builder))
            }
        }
    }

    fn format_prediction_table(&self, prediction: &Prediction) -> String {
        let fit = &prediction.fit;
        let mut sections = Vec::new();

        if let Some(player) = &prediction.player {
            sections.push(self.colorize(
                &format!("{} ({}, {})", player.name, player.id, player.mode),
                "cyan",
            ));
        }

        let target = match prediction.target_rank {
            Some(rank) => format!("{} ({})", rank.name, fit.effective_target),
            None => fit.effective_target.to_string(),
        };
        let mut summary = Builder::default();
        summary.push_record(["Observations".to_string(), prediction.observations.to_string()]);
        let current = match prediction.current_rank {
            Some(rank) => format!("{} ({})", prediction.current_rating, rank.name),
            None => prediction.current_rating.to_string(),
        };
        summary.push_record(["Current rating".to_string(), current]);
        summary.push_record([
            "Slope (per day)".to_string(),
            format!("{:.3}", fit.slope * MILLIS_PER_DAY),
        ]);
        summary.push_record(["Target".to_string(), target]);
        summary.push_record([
            "Reached on".to_string(),
            prediction.target_date.clone().unwrap_or_else(|| "never".to_string()),
        ]);
        sections.push(self.render(summary));

        if !prediction.crossings.is_empty() {
            let mut crossings = Builder::default();
            crossings.push_record(["Rank", "Points", "Date"]);
            for crossing in &prediction.crossings {
                crossings.push_record([
                    crossing.rank.to_string(),
                    crossing.points.to_string(),
                    crossing.date.clone().unwrap_or_else(|| "-".to_string()),
                ]);
            }
            sections.push(self.render(crossings));
        }

        if let Some(options) = &prediction.options {
            let names: Vec<_> = options.ranks.iter().map(|r| r.name).collect();
            sections.push(self.info(&format!("Next targets: {}", names.join(", "))));
        }

        for note in &prediction.notes {
            sections.push(self.warning(note));
        }

        sections.join("\n")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

const MILLIS_PER_DAY: f64 = 86_400_000.0;
