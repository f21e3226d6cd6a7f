//! Command-line configuration

use crate::duration::{ConfiguredDuration, InputError, DEFAULT_MINUTES, DEFAULT_SECONDS};
use clap::Parser;
use std::path::PathBuf;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "A single-screen countdown timer for the terminal")]
#[command(version)]
pub struct Config {
    /// Minutes to count down from
    #[arg(short, long, default_value_t = DEFAULT_MINUTES, value_parser = clap::value_parser!(u8).range(0..=59))]
    pub minutes: u8,

    /// Seconds to count down from
    #[arg(short, long, default_value_t = DEFAULT_SECONDS, value_parser = clap::value_parser!(u8).range(0..=59))]
    pub seconds: u8,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// The duration the countdown starts from
    pub fn duration(&self) -> Result<ConfiguredDuration, InputError> {
        ConfiguredDuration::new(self.minutes, self.seconds)
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "countdown=debug"
        } else {
            "countdown=info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["countdown"]).unwrap();
        assert_eq!(config.duration().unwrap(), ConfiguredDuration::default());
        assert!(config.log_file.is_none());
        assert_eq!(config.log_filter(), "countdown=info");
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "countdown",
            "-m",
            "25",
            "--seconds",
            "0",
            "--log-file",
            "/tmp/countdown.log",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.duration().unwrap().total_seconds(), 1500);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/countdown.log")));
        assert_eq!(config.log_filter(), "countdown=debug");
    }

    #[test]
    fn test_out_of_range_flag_is_an_error() {
        assert!(Config::try_parse_from(["countdown", "--minutes", "60"]).is_err());
        assert!(Config::try_parse_from(["countdown", "--seconds", "x"]).is_err());
    }
}
