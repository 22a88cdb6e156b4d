//! Tera-based rendering of dependency injection containers.
//!
//! A render runs four fixed templates in order, each fed from the same
//! [`Generator`](crate::generator::Generator) configuration:
//!
//! 1. **package** - `package <name>`, always emitted
//! 2. **imports** - skipped when there are no imports; one import renders
//!    inline, two or more render as a parenthesised block
//! 3. **type** - the container struct with one field per dependency
//!    (`struct{}` when there are none)
//! 4. **deps** - skipped when there are no dependencies; otherwise a create
//!    method and a memoizing accessor per dependency
//!
//! # Example output
//!
//! For a single dependency `value` of type `int` with body `{ return 10 }`:
//!
//! ```text
//! package main
//!
//! type Box struct{
//!     value int
//! }
//!
//! func (c *Box) NewValue() int { return 10 }
//!
//!
//! func (c *Box) Value() int {
//!     if c.value == nil {
//!         c.value = c.NewValue()
//!     }
//!     return c.value
//! }
//! ```
//!
//! (Indentation in the real output is a tab.)
//!
//! # Custom Filters
//!
//! - `ucfirst`: upper-case the first character (`value` -> `Value`)
//! - `lcfirst`: lower-case the first character (`Value` -> `value`)
//!
//! Type expressions, constructor bodies and import paths are inserted verbatim.
//! Autoescaping is disabled and none of them is parsed.

pub mod filters;
pub mod renderer;
pub mod templates;

pub use renderer::{ContainerRenderer, RenderStage};

/// Format a Tera error with every message in its source chain.
///
/// Tera nests the useful message (for example a filter failure) a few levels
/// below a generic "Failed to render 'deps'" error. This walks the chain and
/// joins the non-empty messages with ` -> `.
pub fn format_tera_error(error: &tera::Error) -> String {
    use std::error::Error;

    let mut messages = vec![error.to_string()];
    let mut current_error: Option<&dyn Error> = error.source();
    while let Some(err) = current_error {
        messages.push(err.to_string());
        current_error = err.source();
    }

    messages.retain(|msg| !msg.trim().is_empty());
    messages.dedup();

    if messages.is_empty() {
        "unknown template error".to_string()
    } else {
        messages.join(" -> ")
    }
}
