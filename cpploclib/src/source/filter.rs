//! Qualifying-file discovery.
//!
//! A file qualifies when it sits directly in the scanned directory, is a
//! regular file once symlinks are followed, and its name ends with one of
//! the configured suffixes. Subdirectories are never entered.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::CpplocError;
use crate::Result;

/// Suffixes counted when no other configuration is given: C++ sources and headers.
pub const DEFAULT_SUFFIXES: &[&str] = &[".cpp", ".h"];

/// Configuration for file-name filtering.
///
/// Holds an ordered, duplicate-free list of accepted suffixes. Matching is
/// textual and case-sensitive on the raw file name, so `.h` accepts `api.h`
/// but neither `api.hpp` nor `API.H`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixFilter {
    suffixes: Vec<String>,
}

impl Default for SuffixFilter {
    fn default() -> Self {
        Self::cpp()
    }
}

impl SuffixFilter {
    /// Create an empty filter. It matches nothing until suffixes are added.
    pub fn new() -> Self {
        Self {
            suffixes: Vec::new(),
        }
    }

    /// The C++ source/header filter (`.cpp`, `.h`).
    pub fn cpp() -> Self {
        Self {
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add an accepted suffix. Adding one already present is a no-op.
    pub fn suffix(mut self, suffix: &str) -> Result<Self> {
        if suffix.is_empty() {
            return Err(CpplocError::InvalidSuffix(suffix.to_string()));
        }
        if !self.suffixes.iter().any(|s| s == suffix) {
            self.suffixes.push(suffix.to_string());
        }
        Ok(self)
    }

    /// Add multiple accepted suffixes.
    pub fn suffixes(mut self, suffixes: &[&str]) -> Result<Self> {
        for suffix in suffixes {
            self = self.suffix(suffix)?;
        }
        Ok(self)
    }

    /// The accepted suffixes, in insertion order.
    pub fn accepted(&self) -> &[String] {
        &self.suffixes
    }

    /// Check whether a file name ends with one of the accepted suffixes.
    pub fn matches(&self, name: &OsStr) -> bool {
        let name = name.as_encoded_bytes();
        self.suffixes
            .iter()
            .any(|suffix| name.ends_with(suffix.as_bytes()))
    }
}

/// Whether a walk error means the listing of the root itself broke.
///
/// Failures on the root carry depth 0. A read failure partway through the
/// listing has no entry to blame and carries no path. Anything else is a
/// single entry whose type could not be determined.
fn is_listing_failure(depth: usize, path: Option<&Path>) -> bool {
    depth == 0 || path.is_none()
}

/// Discover qualifying files directly inside `root`.
///
/// Only the immediate entries of `root` are examined. Entries whose type
/// cannot be determined (dangling symlinks, entries removed mid-scan) are
/// skipped. Failing to list `root`, at the start or partway through, is an
/// error and yields no partial list.
pub fn discover_files(root: impl AsRef<Path>, filter: &SuffixFilter) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(CpplocError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(CpplocError::DirectoryRead {
            path: root.to_path_buf(),
            source: io::Error::other("not a directory"),
        });
    }

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    let mut files = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) if is_listing_failure(err.depth(), err.path()) => {
                return Err(CpplocError::DirectoryRead {
                    path: root.to_path_buf(),
                    source: err.into(),
                });
            }
            Err(err) => {
                debug!(error = %err, "skipping entry of unknown type");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            debug!(path = %entry.path().display(), "skipping non-regular entry");
            continue;
        }

        if filter.matches(entry.file_name()) {
            files.push(entry.into_path());
        }
    }

    // Sort for deterministic output
    files.sort();

    Ok(files)
}
