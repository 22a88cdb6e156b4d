//! Integration tests for godic.
//!
//! - `generator` - end-to-end rendering through the public library API
//! - `cli` - the `godic` binary driven with `assert_cmd`

mod cli;
mod generator;
