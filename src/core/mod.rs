//! Core types shared by the generator, the manifest loader and the CLI.
//!
//! At the moment this is the error hierarchy: [`GodicError`] for typed failures
//! and [`ErrorContext`] / [`user_friendly_error`] for presenting them on the
//! command line.

pub mod error;

pub use error::{ErrorContext, GodicError, user_friendly_error};
