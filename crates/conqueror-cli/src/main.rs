//! Conqueror CLI - predict when a rating will reach a rank.

use clap::Parser;
use conqueror_cli::commands;
use conqueror_cli::{logging, Cli, Command, Config, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> conqueror_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let config = Config::load(cli.config.as_deref())?.with_env_overrides()?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Predict(args) => commands::execute_predict(args, &config, &formatter)?,
        Command::Fit(args) => commands::execute_fit(args, &config, &formatter)?,
        Command::Ranks => commands::execute_ranks(&formatter)?,
    }

    Ok(())
}
