//! # cpploc
//!
//! Print the total number of lines in the `.cpp` and `.h` files that sit
//! directly in the current working directory.
//!
//! ## Usage
//!
//! ```bash
//! cd path/to/sources
//! cpploc
//! # Total lines of code: 1234
//! ```
//!
//! The command takes no arguments. Subdirectories are not scanned, and bytes
//! that are not valid UTF-8 are ignored while counting. If the directory or
//! any qualifying file cannot be read, nothing is printed on stdout and the
//! error goes to stderr with a non-zero exit status.
//!
//! Diagnostics are logged to stderr through `tracing`; set `RUST_LOG=debug`
//! to see each file as it is counted.

mod render;

use std::process::ExitCode;

use clap::Command;
use cpploclib::{count_current_dir, CountOptions};
use tracing_subscriber::EnvFilter;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("cpploc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count the lines of the .cpp and .h files in the current directory")
        .long_about(
            "Count the lines of the .cpp and .h files directly in the current \
             directory and print the total. Subdirectories are not scanned.",
        )
}

/// Send diagnostics to stderr so stdout carries only the report line
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> anyhow::Result<String> {
    let result = count_current_dir(&CountOptions::new())?;
    tracing::debug!(files = result.file_count, total = result.total, "tally done");
    Ok(render::render_total(&result))
}

fn main() -> ExitCode {
    let _ = build_command().get_matches();
    init_logging();

    match run() {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
