//! godic CLI entry point
//!
//! Parses command-line arguments, runs the selected command and turns any
//! error into a user-friendly message on stderr.

use anyhow::Result;
use clap::Parser;
use godic_gen::cli;
use godic_gen::core::user_friendly_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
