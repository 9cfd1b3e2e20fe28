//! whatson-poster CLI entry point.
//!
//! Two modes: `validate` checks every line of a post file against the
//! length constraint; `start` posts one line per interval, skipping lines
//! already recorded in the used-items log. Unlike the event feed, a bad
//! configuration here is fatal to the run: better no posts than wrong ones.

mod error;
mod lines;
mod post;
mod run;
mod used;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::lines::{MAX_POST_CHARS, invalid_messages, load_messages};
use crate::post::{DryRunPoster, HttpPoster, Poster};
use crate::run::{MIN_INTERVAL_HOURS, interval_is_allowed, run_loop};
use crate::used::UsedLog;

/// whatson-poster - scheduled posts from a text file
#[derive(Debug, Parser)]
#[command(name = "whatson-poster")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check every line of a post file against the length constraint
    Validate {
        /// Post file, one message per line
        file: PathBuf,

        /// Tag appended to every message before validation
        #[arg(long)]
        tag: Option<String>,
    },

    /// Post one line at a time at the given interval
    Start {
        /// Post file, one message per line
        file: PathBuf,

        /// Hours to wait between posts (minimum 12)
        interval_hours: f64,

        /// Tag appended to every message
        #[arg(long)]
        tag: Option<String>,

        /// Path to the used-items log
        #[arg(long, default_value = "used_posts")]
        used_log: PathBuf,

        /// Print what would be posted without posting or logging
        #[arg(long)]
        dry_run: bool,

        /// Posting endpoint URL
        #[arg(long, env = "WHATSON_POST_URL")]
        endpoint: Option<String>,

        /// Bearer token for the posting endpoint
        #[arg(long, env = "WHATSON_POST_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Command::Validate { file, tag } => validate(&file, tag.as_deref()),
        Command::Start {
            file,
            interval_hours,
            tag,
            used_log,
            dry_run,
            endpoint,
            token,
        } => start(
            &file,
            interval_hours,
            tag.as_deref(),
            used_log,
            dry_run,
            endpoint,
            token,
        ),
    }
}

fn validate(file: &PathBuf, tag: Option<&str>) -> ExitCode {
    let messages = match load_messages(file, tag) {
        Ok(messages) => messages,
        Err(e) => {
            error!(file = %file.display(), error = %e, "could not read post file");
            return ExitCode::FAILURE;
        }
    };

    info!(count = messages.len(), "validating posts");
    let invalid = invalid_messages(&messages);
    for &(position, message) in &invalid {
        warn!(
            position,
            length = message.chars().count(),
            max = MAX_POST_CHARS,
            "post too long: {}",
            message
        );
    }

    if invalid.is_empty() {
        info!("all posts are valid");
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[allow(clippy::too_many_arguments)]
fn start(
    file: &PathBuf,
    interval_hours: f64,
    tag: Option<&str>,
    used_log: PathBuf,
    dry_run: bool,
    endpoint: Option<String>,
    token: Option<String>,
) -> ExitCode {
    if !interval_is_allowed(interval_hours) {
        error!(
            interval_hours,
            min = MIN_INTERVAL_HOURS,
            "aborted: you probably don't want to post that often"
        );
        return ExitCode::FAILURE;
    }

    let messages = match load_messages(file, tag) {
        Ok(messages) => messages,
        Err(e) => {
            error!(file = %file.display(), error = %e, "could not read post file");
            return ExitCode::FAILURE;
        }
    };

    // Over-long messages are dropped up front, the way validate reports them.
    let invalid = invalid_messages(&messages);
    for &(position, message) in &invalid {
        warn!(position, "dropping over-long post: {}", message);
    }
    let messages: Vec<String> = messages.iter().filter(|m| lines::is_valid(m)).cloned().collect();

    let poster: Box<dyn Poster> = if dry_run {
        Box::new(DryRunPoster)
    } else {
        let Some(endpoint) = endpoint else {
            error!("no posting endpoint configured (--endpoint or WHATSON_POST_URL)");
            return ExitCode::FAILURE;
        };
        let token = token.unwrap_or_default();
        match HttpPoster::new(endpoint, token, Duration::from_secs(30)) {
            Ok(poster) => Box::new(poster),
            Err(e) => {
                error!(error = %e, "could not build posting client");
                return ExitCode::FAILURE;
            }
        }
    };

    info!(interval_hours, count = messages.len(), "starting post loop");
    // A huge finite interval overflows the panicking Duration constructor.
    let wait = || {
        let pause = Duration::try_from_secs_f64(interval_hours * 3600.0).unwrap_or(Duration::MAX);
        std::thread::sleep(pause);
    };
    match run_loop(&messages, &UsedLog::new(used_log), poster.as_ref(), !dry_run, wait) {
        Ok(()) => {
            info!("done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "post loop failed");
            ExitCode::FAILURE
        }
    }
}
