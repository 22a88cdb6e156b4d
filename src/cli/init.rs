//! Create a starter manifest.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::CliConfig;
use crate::core::GodicError;
use crate::manifest::{MANIFEST_FILE_NAME, STARTER_MANIFEST};
use crate::utils::fs::{ensure_dir, safe_write};

/// Command to write a starter `godic.toml` manifest.
///
/// The manifest is written to the given directory (or the current directory).
/// An existing manifest is only replaced with `--force`.
#[derive(Args)]
pub struct InitCommand {
    /// Directory to create the manifest in (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing manifest
    #[arg(short, long)]
    force: bool,
}

impl InitCommand {
    /// Write the starter manifest.
    ///
    /// # Errors
    ///
    /// - [`GodicError::FileExists`] if a manifest exists and `--force` was not given
    /// - the directory or file cannot be written
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let target_dir = self.path.unwrap_or_else(|| PathBuf::from("."));
        let manifest_path = target_dir.join(MANIFEST_FILE_NAME);

        if manifest_path.exists() && !self.force {
            return Err(GodicError::FileExists {
                path: manifest_path.display().to_string(),
            }
            .into());
        }

        ensure_dir(&target_dir)?;
        safe_write(&manifest_path, STARTER_MANIFEST)?;

        if !config.quiet {
            println!("{} Initialized {} at {}", "✓".green(), MANIFEST_FILE_NAME, manifest_path.display());
            println!("\n{}", "Next steps:".cyan());
            println!("  Describe your dependencies in {}", MANIFEST_FILE_NAME.bright_white());
            println!("  Then run {}", "godic generate --output container.go".bright_white());
        }

        Ok(())
    }
}
