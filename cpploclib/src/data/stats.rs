//! Result types for a directory tally.

use std::ops::AddAssign;
use std::path::PathBuf;

/// Line count of a single qualifying file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStats {
    /// File path
    pub path: PathBuf,
    /// Number of lines in the file
    pub lines: u64,
}

impl FileStats {
    pub fn new(path: PathBuf, lines: u64) -> Self {
        Self { path, lines }
    }
}

/// Result of tallying a directory.
///
/// `total` is the running total: it starts at zero and only grows as files
/// are added, so the final value does not depend on the order files were
/// visited in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountResult {
    /// Sum of the line counts of every counted file
    pub total: u64,
    /// Number of files counted
    pub file_count: usize,
    /// Per-file line counts, in scan order
    pub files: Vec<FileStats>,
    /// Qualifying files that could not be read and were left out
    pub skipped: Vec<PathBuf>,
}

impl CountResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a counted file to the tally.
    pub fn add_file(&mut self, file: FileStats) {
        self.total += file.lines;
        self.file_count += 1;
        self.files.push(file);
    }

    /// Record a qualifying file that was left out.
    pub fn add_skipped(&mut self, path: PathBuf) {
        self.skipped.push(path);
    }
}

impl AddAssign<FileStats> for CountResult {
    fn add_assign(&mut self, file: FileStats) {
        self.add_file(file);
    }
}
