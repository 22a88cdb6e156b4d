//! Container manifest (`godic.toml`) parsing.
//!
//! The manifest is a declarative form of the [`Generator`] builder calls, so a
//! container can be regenerated from a checked-in file (for example from a
//! `//go:generate godic generate --output container.go` directive).
//!
//! # Format
//!
//! ```toml
//! package = "main"          # default "main"
//! imports = ["fmt", "os"]   # default []
//! receiver = "cnt"          # default "c"
//! type = "DIContainer"      # default "Container"
//!
//! [[dependencies]]
//! name = "a"
//! type = "*A"
//! body = """{
//! 	return &A{}
//! }"""
//!
//! [[dependencies]]
//! name = "b"
//! type = "*B"
//! body = "{ return &B{cnt.A()} }"
//! ```
//!
//! Every top-level key is optional. Dependencies are emitted in the order they
//! appear in the file. Unknown keys are rejected so that typos (`recevier`)
//! do not silently fall back to defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::core::GodicError;
use crate::generator::{DEFAULT_PACKAGE, DEFAULT_RECEIVER_NAME, DEFAULT_TYPE_NAME, Generator};

/// Default manifest file name looked up by the CLI.
pub const MANIFEST_FILE_NAME: &str = "godic.toml";

/// Starter manifest written by `godic init`.
pub const STARTER_MANIFEST: &str = r#"# godic container manifest
#
# Regenerate with: godic generate --output container.go

package = "main"
imports = ["fmt"]
receiver = "c"
type = "Container"

[[dependencies]]
name = "config"
type = "*Config"
body = """{
	return &Config{Greeting: "hello"}
}"""

[[dependencies]]
name = "greeter"
type = "*Greeter"
body = """{
	fmt.Println("creating greeter...")
	return &Greeter{config: c.Config()}
}"""
"#;

fn default_package() -> String {
    DEFAULT_PACKAGE.to_string()
}

fn default_receiver() -> String {
    DEFAULT_RECEIVER_NAME.to_string()
}

fn default_type_name() -> String {
    DEFAULT_TYPE_NAME.to_string()
}

/// Deserialized form of `godic.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainerManifest {
    /// Go package of the generated file
    #[serde(default = "default_package")]
    pub package: String,

    /// Import paths in emission order
    #[serde(default)]
    pub imports: Vec<String>,

    /// Receiver variable name
    #[serde(default = "default_receiver")]
    pub receiver: String,

    /// Container type name
    #[serde(default = "default_type_name", rename = "type")]
    pub type_name: String,

    /// Dependencies in emission order
    #[serde(default)]
    pub dependencies: Vec<DependencyEntry>,
}

/// A `[[dependencies]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyEntry {
    /// Base identifier
    pub name: String,

    /// Go type expression
    #[serde(rename = "type")]
    pub type_expr: String,

    /// Create method body including braces
    pub body: String,
}

impl Default for ContainerManifest {
    fn default() -> Self {
        Self {
            package: default_package(),
            imports: Vec::new(),
            receiver: default_receiver(),
            type_name: default_type_name(),
            dependencies: Vec::new(),
        }
    }
}

impl ContainerManifest {
    /// Load and parse a manifest file.
    ///
    /// # Errors
    ///
    /// - [`GodicError::ManifestNotFound`] if `path` does not exist
    /// - [`GodicError::ManifestParseError`] if the file is not a valid manifest
    /// - an I/O error if the file cannot be read
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GodicError::ManifestNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest file: {}", path.display()))?;

        let manifest = Self::parse(&content, &path.display().to_string())?;

        tracing::debug!(
            "Loaded manifest {} with {} dependencies",
            path.display(),
            manifest.dependencies.len()
        );

        Ok(manifest)
    }

    /// Parse manifest content.
    ///
    /// # Errors
    ///
    /// Returns [`GodicError::ManifestParseError`] (with file name `<string>`)
    /// if `content` is not a valid manifest.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(Self::parse(content, "<string>")?)
    }

    fn parse(content: &str, file: &str) -> Result<Self, GodicError> {
        toml::from_str(content).map_err(|e| GodicError::ManifestParseError {
            file: file.to_string(),
            reason: e.to_string(),
        })
    }

    /// Build a [`Generator`] from this manifest.
    #[must_use]
    pub fn to_generator(&self) -> Generator {
        let mut generator = Generator::new();
        generator
            .set_package(&self.package)
            .add_imports(&self.imports)
            .set_receiver_name(&self.receiver)
            .set_type_name(&self.type_name);

        for dep in &self.dependencies {
            generator.add_dependency(&dep.name, &dep.type_expr, &dep.body);
        }

        generator
    }
}
