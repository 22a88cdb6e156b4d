//! Render a container from a manifest.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::CliConfig;
use crate::manifest::{ContainerManifest, MANIFEST_FILE_NAME};
use crate::utils::fs::safe_write;

/// Command to render the container described by a `godic.toml` manifest.
///
/// Without `--output` the generated source goes to stdout, which makes the
/// command usable from `//go:generate` with shell redirection. With
/// `--output` the file is written atomically and parent directories are
/// created.
#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the manifest (default: ./godic.toml)
    #[arg(short, long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Write the generated source to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

impl GenerateCommand {
    /// Load the manifest and render the container.
    ///
    /// # Errors
    ///
    /// - the manifest is missing or invalid
    /// - rendering fails (for example an empty dependency name)
    /// - the output cannot be written
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let manifest_path = self.manifest.unwrap_or_else(|| PathBuf::from(MANIFEST_FILE_NAME));
        let manifest = ContainerManifest::load(&manifest_path)?;
        let generator = manifest.to_generator();

        match self.output {
            None => {
                generator.generate().context("Failed to generate container")?;
            }
            Some(output) => {
                // Render fully before touching the target so a failure leaves it intact
                let source =
                    generator.render_to_string().context("Failed to generate container")?;
                safe_write(&output, &source)?;

                if !config.quiet {
                    println!(
                        "{} Generated {} ({} dependencies) at {}",
                        "✓".green(),
                        manifest.type_name.as_str().bright_white(),
                        manifest.dependencies.len(),
                        output.display()
                    );
                }
            }
        }

        Ok(())
    }
}
