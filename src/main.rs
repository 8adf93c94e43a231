//! `colorstr` command line entry point.

mod commands;

use anyhow::{Context, Result};
use clap::Parser;

use colorstr::cli::{Cli, Commands};
use colorstr::{ColorMode, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    configure_color(&cli)?;

    match cli.command {
        Commands::Demo => commands::demo::handle(),
        Commands::Paint { text, styles } => commands::paint::handle(&text, &styles),
        Commands::Strip { text } => commands::strip::handle(text.as_deref()),
        Commands::Styles => commands::styles::handle(),
    }
}

#[cfg(not(tarpaulin_include))]
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

/// Resolve color settings from the config file, `NO_COLOR` and flags, then
/// fix the process-wide switch before anything is rendered.
fn configure_color(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    let mut config = config.with_env();
    if cli.no_color {
        config.color = ColorMode::Never;
    }
    config.apply()?;
    Ok(())
}
