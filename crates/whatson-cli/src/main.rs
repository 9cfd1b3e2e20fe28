//! whatson CLI entry point.

mod cli;
mod config;
mod output;

use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use whatson_sources::{EventFeed, GoogleCalendarSource, SheetSource};

use crate::cli::Cli;
use crate::config::{ConfigError, SiteConfig};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not serialize events: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = if let Some(ref path) = cli.config {
        SiteConfig::load_from(path)?
    } else {
        SiteConfig::load().unwrap_or_default()
    };

    let mut feed =
        EventFeed::new().with_horizon_days(cli.horizon_days.unwrap_or(config.horizon_days));
    if let Some(google) = config.google {
        feed = feed.with_source(Box::new(GoogleCalendarSource::new(google)));
    }
    if let Some(sheet) = config.sheet {
        feed = feed.with_source(Box::new(SheetSource::new(sheet)));
    }

    let mut events = feed.upcoming_now();
    if let Some(limit) = cli.limit {
        events.truncate(limit);
    }

    if cli.json {
        println!("{}", output::render_json(&events)?);
    } else {
        println!("{}", output::render_text(&events));
    }

    Ok(())
}
