//! High-level tally API.
//!
//! This module provides the entry points for summing the lines of the
//! qualifying files in one directory.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::options::UnreadablePolicy;
use crate::source::filter::{discover_files, SuffixFilter};
use crate::Result;

use super::lines::count_file_lines;
use super::stats::{CountResult, FileStats};

/// Options for a tally.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// Which file names qualify
    pub filter: SuffixFilter,
    /// Reaction to a qualifying file that cannot be read
    pub on_unreadable: UnreadablePolicy,
}

impl CountOptions {
    /// Create new default options: `.cpp`/`.h` files, abort on unreadable files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the suffix filter.
    pub fn filter(mut self, filter: SuffixFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the unreadable-file policy.
    pub fn on_unreadable(mut self, policy: UnreadablePolicy) -> Self {
        self.on_unreadable = policy;
        self
    }
}

/// Tally the qualifying files directly inside `path`.
///
/// Enumerates the directory, then opens, counts and closes each qualifying
/// file in turn, adding its line count to the running total. Subdirectories
/// are not entered.
///
/// # Example
///
/// ```rust
/// use cpploclib::{count_directory, CountOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("a.cpp"), "int a;\nint b;\nint c;\n").unwrap();
/// fs::write(dir.path().join("b.h"), "#pragma once\nint d;").unwrap();
/// fs::write(dir.path().join("readme.txt"), "not counted\n").unwrap();
///
/// let result = count_directory(dir.path(), &CountOptions::new()).unwrap();
/// assert_eq!(result.total, 5);
/// assert_eq!(result.file_count, 2);
/// ```
pub fn count_directory(path: impl AsRef<Path>, options: &CountOptions) -> Result<CountResult> {
    let files = discover_files(path, &options.filter)?;
    tally_files(files, options.on_unreadable)
}

/// Count each file in turn and accumulate the running total.
fn tally_files(files: Vec<PathBuf>, on_unreadable: UnreadablePolicy) -> Result<CountResult> {
    let mut result = CountResult::new();

    for file_path in files {
        match count_file_lines(&file_path) {
            Ok(lines) => {
                debug!(path = %file_path.display(), lines, "counted");
                result.add_file(FileStats::new(file_path, lines));
            }
            Err(err) if on_unreadable.is_fatal() => return Err(err),
            Err(err) => {
                warn!("skipping {}: {err}", file_path.display());
                result.add_skipped(file_path);
            }
        }
    }

    Ok(result)
}

/// Tally the qualifying files in the process's current working directory.
///
/// The scan lists `.` itself and never resolves the working directory's
/// path, so a working directory that was removed while still in use lists
/// as empty and tallies to zero.
pub fn count_current_dir(options: &CountOptions) -> Result<CountResult> {
    count_directory(Path::new("."), options)
}

/// Count the lines of a single file.
pub fn count_file(path: impl AsRef<Path>) -> Result<u64> {
    count_file_lines(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CpplocError;
    use std::fs;
    use tempfile::tempdir;

    fn create_file(path: &Path, content: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn create_mixed_dir(root: &Path) {
        create_file(&root.join("a.cpp"), b"int a;\nint b;\nint c;\n");
        create_file(&root.join("b.h"), b"#pragma once\nint d;");
        create_file(&root.join("readme.txt"), "line\n".repeat(100).as_bytes());
        create_file(&root.join("sub/inner.cpp"), "x\n".repeat(50).as_bytes());
    }

    #[test]
    fn test_count_mixed_directory() {
        let temp = tempdir().unwrap();
        create_mixed_dir(temp.path());

        let result = count_directory(temp.path(), &CountOptions::new()).unwrap();

        assert_eq!(result.total, 5);
        assert_eq!(result.file_count, 2);
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_count_empty_directory() {
        let temp = tempdir().unwrap();

        let result = count_directory(temp.path(), &CountOptions::new()).unwrap();

        assert_eq!(result.total, 0);
        assert_eq!(result.file_count, 0);
    }

    #[test]
    fn test_count_only_unqualified_files() {
        let temp = tempdir().unwrap();
        create_file(&temp.path().join("notes.md"), b"a\nb\nc\n");
        create_file(&temp.path().join("lib.hpp"), b"a\nb\n");

        let result = count_directory(temp.path(), &CountOptions::new()).unwrap();

        assert_eq!(result.total, 0);
    }

    #[test]
    fn test_count_sums_many_files() {
        let temp = tempdir().unwrap();
        let counts = [1u64, 4, 9, 16, 25];
        for (i, n) in counts.iter().enumerate() {
            let content = "line\n".repeat(*n as usize);
            create_file(&temp.path().join(format!("f{i}.cpp")), content.as_bytes());
        }

        let result = count_directory(temp.path(), &CountOptions::new()).unwrap();

        assert_eq!(result.total, counts.iter().sum::<u64>());
        assert_eq!(result.file_count, counts.len());
    }

    #[test]
    fn test_count_directory_named_like_source() {
        let temp = tempdir().unwrap();
        create_file(&temp.path().join("module.cpp/main.cpp"), b"a\nb\n");

        let result = count_directory(temp.path(), &CountOptions::new()).unwrap();

        assert_eq!(result.total, 0);
    }

    #[test]
    fn test_count_tolerates_invalid_utf8() {
        let temp = tempdir().unwrap();
        create_file(&temp.path().join("latin1.cpp"), b"// caf\xe9\nint x;\n\xff\xfe\n");

        let result = count_directory(temp.path(), &CountOptions::new()).unwrap();

        assert_eq!(result.total, 3);
    }

    #[test]
    fn test_count_with_custom_filter() {
        let temp = tempdir().unwrap();
        create_mixed_dir(temp.path());

        let filter = SuffixFilter::new().suffix(".txt").unwrap();
        let result = count_directory(temp.path(), &CountOptions::new().filter(filter)).unwrap();

        assert_eq!(result.total, 100);
    }

    #[test]
    fn test_count_nonexistent_directory() {
        let result = count_directory("/nonexistent/path", &CountOptions::new());

        assert!(matches!(result, Err(CpplocError::PathNotFound(_))));
    }

    #[test]
    fn test_count_current_dir_reports_relative_paths() {
        // Tests run from the crate root, which holds no C++ files.
        let result = count_current_dir(&CountOptions::new()).unwrap();
        assert_eq!(result.total, 0);

        let filter = SuffixFilter::new().suffix("Cargo.toml").unwrap();
        let result = count_current_dir(&CountOptions::new().filter(filter)).unwrap();
        assert_eq!(result.file_count, 1);
        assert_eq!(result.files[0].path, Path::new(".").join("Cargo.toml"));
    }

    #[test]
    fn test_count_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.h");
        create_file(&file, b"one\ntwo");

        assert_eq!(count_file(&file).unwrap(), 2);
    }

    #[test]
    fn test_unreadable_file_aborts_by_default() {
        let temp = tempdir().unwrap();
        let good = temp.path().join("good.cpp");
        let gone = temp.path().join("gone.cpp");
        create_file(&good, b"a\nb\n");

        let result = tally_files(vec![gone.clone(), good], UnreadablePolicy::Abort);

        match result {
            Err(CpplocError::FileRead { path, .. }) => assert_eq!(path, gone),
            other => panic!("Expected FileRead error, got {other:?}"),
        }
    }

    #[test]
    fn test_unreadable_file_skipped_when_asked() {
        let temp = tempdir().unwrap();
        let good = temp.path().join("good.cpp");
        let gone = temp.path().join("gone.cpp");
        create_file(&good, b"a\nb\n");

        let result = tally_files(vec![gone.clone(), good], UnreadablePolicy::Skip).unwrap();

        assert_eq!(result.total, 2);
        assert_eq!(result.file_count, 1);
        assert_eq!(result.skipped, vec![gone]);
    }
}
