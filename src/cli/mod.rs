//! Command-line interface definitions.

pub mod check;
pub mod demo;
pub mod input;
pub mod output;
pub mod parse;
pub mod transform;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;

/// Surebet relay - parse surebet alerts and re-render them as notifications.
#[derive(Parser, Debug)]
#[command(name = "surebet-relay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transform an alert read from a file or stdin
    Transform(InputArgs),

    /// Print the parsed alert as JSON
    Parse(InputArgs),

    /// Transform the built-in example alert and print both versions
    Demo,

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `surebet-relay check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config,
}

/// Shared argument for commands that read an alert.
#[derive(Parser, Debug)]
pub struct InputArgs {
    /// File containing the alert; reads stdin when omitted or `-`
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Load the configured file (or defaults) and apply CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or is invalid.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
        if self.json_logs {
            config.logging.format = "json".to_string();
        }

        Ok(config)
    }
}
