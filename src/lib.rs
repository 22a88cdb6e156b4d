//! godic - dependency injection containers for Go, generated from Rust
//!
//! godic emits the source of a Go struct that owns one field per dependency,
//! plus a `New<Name>` create method and a memoizing `<Name>` accessor for each.
//! The accessor constructs its dependency on first use and returns the same
//! instance afterwards, giving a lazy singleton per container instance.
//! Construction logic is supplied as literal Go code and is emitted verbatim.
//!
//! # Architecture Overview
//!
//! - [`generator`] - the configuration model ([`Generator`](generator::Generator))
//!   with chained setters and the render entry points
//! - [`templating`] - Tera templates for the four render stages and the
//!   `ucfirst` / `lcfirst` casing filters
//! - [`manifest`] - the `godic.toml` format consumed by the CLI
//! - [`core`] - error types and user-facing error reporting
//! - [`cli`] - the `godic` command line
//! - [`utils`] - atomic file writes for generated output
//!
//! # Example
//!
//! ```rust
//! use godic_gen::generator::Generator;
//!
//! # fn example() -> Result<(), godic_gen::core::GodicError> {
//! let mut generator = Generator::new();
//! generator.add_dependency("configOption", "*Config", "{ return &Config{} }");
//!
//! let source = generator.render_to_string()?;
//! assert!(source.contains("func (c *Container) ConfigOption() *Config {"));
//! # Ok(())
//! # }
//! ```
//!
//! No validation is performed on the dependency graph: ordering, cycles and
//! the correctness of embedded Go code are the caller's responsibility, and
//! the Go compiler reports any mistakes in the generated file.

pub mod cli;
pub mod core;
pub mod generator;
pub mod manifest;
pub mod templating;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
