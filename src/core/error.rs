//! Error handling for godic
//!
//! This module provides the error types and user-friendly error reporting used by
//! the generator library and the `godic` CLI.
//!
//! # Architecture
//!
//! - [`GodicError`] - Enumerated error types for every failure the crate can report
//! - [`ErrorContext`] - Wrapper that adds a suggestion and details for CLI display
//!
//! # Error Categories
//!
//! - **Rendering**: [`GodicError::TemplateSyntax`], [`GodicError::RenderFailed`],
//!   [`GodicError::EmptyIdentifier`]
//! - **Manifest**: [`GodicError::ManifestNotFound`], [`GodicError::ManifestParseError`]
//! - **File System**: [`GodicError::IoError`], [`GodicError::FileExists`]
//!
//! Template syntax errors only come from the fixed templates shipped with the crate,
//! so they indicate a defect in godic itself rather than bad input. Everything a
//! caller passes in (type expressions, constructor bodies, import paths) is opaque
//! text and never causes a render failure. The one exception is an empty dependency
//! name, which cannot be case-folded and is rejected with
//! [`GodicError::EmptyIdentifier`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use godic_gen::core::{GodicError, user_friendly_error};
//!
//! let err = GodicError::ManifestNotFound {
//!     path: "godic.toml".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(err));
//! ctx.display(); // Shows colored error with suggestion
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for godic operations
#[derive(Error, Debug)]
pub enum GodicError {
    /// A built-in template failed to parse.
    ///
    /// The templates are compiled into the binary, so this is always a bug in godic.
    #[error("Internal template '{template}' is malformed: {message}")]
    TemplateSyntax {
        /// Name of the built-in template
        template: String,
        /// Parser message from Tera
        message: String,
    },

    /// Rendering a stage of the container failed
    #[error("Failed to render {stage} stage: {message}")]
    RenderFailed {
        /// The render stage ("package", "imports", "type" or "deps")
        stage: String,
        /// Flattened Tera error chain
        message: String,
    },

    /// A dependency name was empty, so no method names can be derived from it
    #[error("Dependency name must not be empty (dependency #{index})")]
    EmptyIdentifier {
        /// Zero-based position of the offending dependency
        index: usize,
    },

    /// Container manifest file was not found
    #[error("Container manifest not found: {path}")]
    ManifestNotFound {
        /// The path that was searched
        path: String,
    },

    /// Container manifest could not be parsed
    #[error("Invalid container manifest {file}: {reason}")]
    ManifestParseError {
        /// Manifest file path
        file: String,
        /// Parser message
        reason: String,
    },

    /// Refused to overwrite an existing file
    #[error("File already exists: {path}")]
    FileExists {
        /// Path of the existing file
        path: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl Clone for GodicError {
    fn clone(&self) -> Self {
        match self {
            Self::TemplateSyntax {
                template,
                message,
            } => Self::TemplateSyntax {
                template: template.clone(),
                message: message.clone(),
            },
            Self::RenderFailed {
                stage,
                message,
            } => Self::RenderFailed {
                stage: stage.clone(),
                message: message.clone(),
            },
            Self::EmptyIdentifier {
                index,
            } => Self::EmptyIdentifier {
                index: *index,
            },
            Self::ManifestNotFound {
                path,
            } => Self::ManifestNotFound {
                path: path.clone(),
            },
            Self::ManifestParseError {
                file,
                reason,
            } => Self::ManifestParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::FileExists {
                path,
            } => Self::FileExists {
                path: path.clone(),
            },
            // For errors that don't implement Clone, convert to Other
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// `ErrorContext` wraps a [`GodicError`] and adds an optional suggestion and
/// details. The CLI prints it to stderr with [`ErrorContext::display`].
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying godic error
    pub error: GodicError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: GodicError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: Red and bold
    /// - Details: Yellow
    /// - Suggestion: Green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for CLI display.
///
/// [`GodicError`]s found anywhere in the `anyhow` chain get a tailored
/// suggestion. Standard I/O errors are mapped to the closest variant. Anything
/// else is wrapped in [`GodicError::Other`] with the full context chain as its
/// message.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(godic_error) = cause.downcast_ref::<GodicError>() {
            return create_error_context(godic_error);
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(GodicError::Other {
                    message: format!("Permission denied: {io_error}"),
                })
                .with_suggestion("Check the permissions of the output file and its directory");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(GodicError::Other {
                    message: format!("File not found: {io_error}"),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    ErrorContext::new(GodicError::Other {
        message: format!("{error:#}"),
    })
}

fn create_error_context(error: &GodicError) -> ErrorContext {
    match error {
        GodicError::TemplateSyntax {
            ..
        } => ErrorContext::new(error.clone())
            .with_details("The built-in container templates failed to compile")
            .with_suggestion("This is a bug in godic; please report it together with the godic version"),

        GodicError::RenderFailed {
            stage, ..
        } => {
            let details = format!("Rendering stopped in the {stage} stage; no output should be trusted");
            ErrorContext::new(error.clone())
                .with_details(details)
                .with_suggestion("Re-run with --verbose for the full rendering log")
        }

        GodicError::EmptyIdentifier {
            ..
        } => ErrorContext::new(error.clone())
            .with_details("Method names are derived from the dependency name by changing the case of its first letter")
            .with_suggestion("Give every [[dependencies]] entry a non-empty name"),

        GodicError::ManifestNotFound {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Run 'godic init' to create a godic.toml, or pass --manifest <path>"),

        GodicError::ManifestParseError {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Check the TOML syntax. Verify quotes, brackets, and that every dependency has name, type and body")
            .with_details("Only package, imports, receiver, type and [[dependencies]] are recognised"),

        GodicError::FileExists {
            ..
        } => ErrorContext::new(error.clone()).with_suggestion("Use --force to overwrite the existing file"),

        _ => ErrorContext::new(error.clone()),
    }
}
