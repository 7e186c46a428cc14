//! # cpploclib
//!
//! Tally the lines of the C++ sources and headers that sit directly in one
//! directory.
//!
//! ## Overview
//!
//! The tally is a two-stage pipeline:
//!
//! - **Source discovery** ([`source`]): list the immediate entries of a
//!   directory and keep the regular files whose names end with an accepted
//!   suffix (`.cpp` and `.h` by default). Subdirectories are never entered.
//! - **Data collection** ([`data`]): read each qualifying file, count its
//!   lines and add them to a running total.
//!
//! Reading is decode-tolerant: bytes that are not valid UTF-8 are dropped
//! rather than aborting the count. Lines end at `\n`, `\r\n` or a lone `\r`,
//! and a last line without a terminator still counts.
//!
//! ## Example
//!
//! ```rust
//! use cpploclib::{count_directory, count_file, CountOptions, SuffixFilter, UnreadablePolicy};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("main.cpp"), "int main() {\n    return 0;\n}\n").unwrap();
//! fs::write(dir.path().join("main.h"), "#pragma once").unwrap();
//! fs::create_dir(dir.path().join("sub")).unwrap();
//! fs::write(dir.path().join("sub/skipped.cpp"), "int x;\n").unwrap();
//!
//! // Count a single file
//! assert_eq!(count_file(dir.path().join("main.cpp")).unwrap(), 3);
//!
//! // Count the directory
//! let result = count_directory(dir.path(), &CountOptions::new()).unwrap();
//! assert_eq!(result.total, 4);
//!
//! // Count other suffixes, skipping files that cannot be read
//! let filter = SuffixFilter::new().suffixes(&[".cc", ".hh"]).unwrap();
//! let options = CountOptions::new()
//!     .filter(filter)
//!     .on_unreadable(UnreadablePolicy::Skip);
//! let result = count_directory(dir.path(), &options).unwrap();
//! assert_eq!(result.total, 0);
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod source;

pub use data::{
    count_current_dir, count_directory, count_file, count_lines, count_lines_in_reader,
    CountOptions, CountResult, FileStats,
};
pub use error::CpplocError;
pub use options::UnreadablePolicy;
pub use source::{discover_files, SuffixFilter, DEFAULT_SUFFIXES};

/// Result type for cpploclib operations
pub type Result<T> = std::result::Result<T, CpplocError>;
