//! Utility modules.
//!
//! - [`fs`] - directory creation and atomic file writes for generated output

pub mod fs;
