//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

use whatson_core::MAX_HORIZON_DAYS;

/// whatson - upcoming events for the homepage
#[derive(Debug, Parser)]
#[command(name = "whatson")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "WHATSON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Output the event list as JSON
    #[arg(long)]
    pub json: bool,

    /// Maximum number of events to display
    #[arg(long)]
    pub limit: Option<usize>,

    /// Days into the future to expand recurring events (overrides config)
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..=MAX_HORIZON_DAYS))]
    pub horizon_days: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizon_days_is_bounded() {
        assert!(Cli::try_parse_from(["whatson", "--horizon-days", "60"]).is_ok());
        assert!(Cli::try_parse_from(["whatson", "--horizon-days=-1"]).is_err());
        assert!(
            Cli::try_parse_from(["whatson", "--horizon-days", "9223372036854775807"]).is_err()
        );
    }
}
