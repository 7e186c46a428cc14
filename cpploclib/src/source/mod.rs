//! Source discovery: find the files to tally.
//!
//! This module handles the first stage of the pipeline. It lists the
//! immediate entries of one directory and keeps the regular files whose
//! names end with an accepted suffix.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cpploclib::source::{discover_files, SuffixFilter};
//!
//! let files = discover_files(".", &SuffixFilter::default())?;
//! ```

pub mod filter;

pub use filter::{discover_files, SuffixFilter, DEFAULT_SUFFIXES};
