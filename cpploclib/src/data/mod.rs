//! Data collection: read files and tally their lines.
//!
//! This module handles the second stage of the pipeline. It provides:
//!
//! - **Line counting**: decode-tolerant, universal-newline line counts
//! - **Statistics**: the running total and per-file counts (`CountResult`)
//! - **Counting**: high-level API (`count_directory`, `count_current_dir`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use cpploclib::data::{count_current_dir, CountOptions};
//!
//! let result = count_current_dir(&CountOptions::new())?;
//! println!("Total lines of code: {}", result.total);
//! ```

pub mod counter;
pub mod lines;
pub mod stats;

pub use counter::{count_current_dir, count_directory, count_file, CountOptions};
pub use lines::{count_file_lines, count_lines, count_lines_in_reader};
pub use stats::{CountResult, FileStats};
