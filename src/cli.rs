//! Contains the Cli implementation of segmentcut.
use std::{fmt::Display, path::PathBuf};

use clap::{crate_name, Parser, Subcommand, ValueEnum};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, default_value_t = LogLevel::Error,  help = "",
        long_help = concat!(
        "*Note*: You can also set the log level through the `RUST_LOG` environment variable and filter the logs.\n",
        "See https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives\n",
        "\n",
        "Example: `RUST_LOG=[replay]=debug ", crate_name!(), " replay drag.txt` - This will enable logs only related to replaying in debug mode."
    ))]
    pub log_level: LogLevel,

    #[arg(long, default_value = crate::get_default_log_path().into_os_string())]
    pub log_path: PathBuf,

    /// Path to the config file. A missing file falls back to the defaults.
    #[arg(long, default_value = crate::get_default_config_path().into_os_string())]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the canonical rectangle spanned by two points.
    Normalize {
        #[arg(allow_negative_numbers = true)]
        x1: f64,
        #[arg(allow_negative_numbers = true)]
        y1: f64,
        #[arg(allow_negative_numbers = true)]
        x2: f64,
        #[arg(allow_negative_numbers = true)]
        y2: f64,
    },

    /// Replay a gesture script and print every selected rectangle.
    Replay {
        /// The script to replay, `-` reads from stdin.
        script: PathBuf,

        /// The image which got selected by the user. Overrides the default image of the config.
        #[arg(long)]
        image: Option<String>,

        #[arg(long, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Toml,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Toml => write!(f, "toml"),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl From<&LogLevel> for LevelFilter {
    fn from(level: &LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
            LogLevel::Off => Self::OFF,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", LevelFilter::from(self))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_normalize_accepts_negative_numbers() {
        let cli = Cli::try_parse_from([
            "segmentcut",
            "--log-path",
            "/tmp/segmentcut.log",
            "--config",
            "/tmp/segmentcut.toml",
            "normalize",
            "-5",
            "10",
            "3.5",
            "-2",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Command::Normalize { x1, y1, x2, y2 } if (x1, y1, x2, y2) == (-5.0, 10.0, 3.5, -2.0)
        ));
    }

    #[test]
    fn test_replay_defaults() {
        let cli = Cli::try_parse_from([
            "segmentcut",
            "--log-path",
            "/tmp/segmentcut.log",
            "--config",
            "/tmp/segmentcut.toml",
            "replay",
            "-",
        ])
        .unwrap();

        assert_eq!(cli.log_level, LogLevel::Error);
        assert!(matches!(
            cli.command,
            Command::Replay { ref script, image: None, format: OutputFormat::Text }
                if script == &PathBuf::from("-")
        ));
    }
}
