//! Command-line interface for godic.
//!
//! The CLI is a thin front-end over the library: it loads a `godic.toml`
//! manifest, turns it into a [`Generator`](crate::generator::Generator) and
//! renders the container.
//!
//! # Available Commands
//!
//! - `init` - Write a starter `godic.toml`
//! - `generate` - Render the container described by `godic.toml`
//!
//! # Usage
//!
//! ```bash
//! # 1. Create a manifest
//! godic init
//!
//! # 2. Print the container to stdout
//! godic generate
//!
//! # 3. Or write it next to your code
//! godic generate --output container.go && gofmt -w container.go
//! ```
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug logging on stderr
//! - `--quiet` - Suppress everything except errors

mod generate;
mod init;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Runtime configuration derived from global CLI flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level for the tracing subscriber.
    ///
    /// `None` disables logging entirely (quiet mode). `RUST_LOG`, when set,
    /// takes precedence over this value.
    pub log_level: Option<String>,

    /// Suppress informational output on stdout.
    pub quiet: bool,
}

impl CliConfig {
    /// Create a configuration with logging disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a stderr tracing subscriber for the configured level.
    ///
    /// Does nothing in quiet mode or if a subscriber is already installed.
    pub fn init_logging(&self) {
        let Some(level) = &self.log_level else {
            return;
        };

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(level)
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// godic - generate lazily-initialised dependency injection containers for Go
#[derive(Parser)]
#[command(
    name = "godic",
    about = "Generate lazily-initialised dependency injection containers for Go",
    version,
    long_about = "godic renders a Go struct with one memoizing accessor per dependency from a godic.toml manifest."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors and generated code
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter godic.toml manifest.
    ///
    /// See [`init::InitCommand`] for options.
    Init(init::InitCommand),

    /// Render the container described by a manifest.
    ///
    /// See [`generate::GenerateCommand`] for options.
    Generate(generate::GenerateCommand),
}

impl Cli {
    /// Execute the CLI with a configuration built from the parsed flags.
    ///
    /// # Errors
    ///
    /// Returns the error of the executed subcommand.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config)
    }

    /// Build a [`CliConfig`] from the parsed CLI arguments.
    ///
    /// - `--verbose` sets the log level to `debug`
    /// - `--quiet` disables logging
    /// - otherwise only warnings are logged
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None // No logging when quiet
        } else {
            Some("warn".to_string())
        };

        CliConfig {
            log_level,
            quiet: self.quiet,
        }
    }

    /// Execute the CLI with an explicit configuration.
    ///
    /// Logging is not initialised here, which lets tests run commands without
    /// installing a global subscriber.
    ///
    /// # Errors
    ///
    /// Returns the error of the executed subcommand.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::Init(cmd) => cmd.execute(&config),
            Commands::Generate(cmd) => cmd.execute(&config),
        }
    }
}
