//! `graphex` command-line driver.

mod cli;
mod commands;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use graphex_core::{GraphexConfig, LogFormat, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Command};

fn load_config(cli: &Cli) -> Result<GraphexConfig> {
    match &cli.config {
        Some(path) => GraphexConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => GraphexConfig::load().context("failed to load configuration"),
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured level. Logs go to stderr so stdout carries only results.
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .context("invalid log filter")?;

    let registry = tracing_subscriber::registry().with(filter);
    match logging.format {
        LogFormat::Plain => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .try_init()?,
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .try_init()?,
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.logging)?;
    tracing::debug!(?config, "Configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Demo => commands::demo(&mut out)?,
        Command::Run(args) => commands::run(args, &config, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
