//! Configuration for a duplicate-detection scan.
//!
//! A scan either runs against an explicit file list (pre-commit passes the
//! changed files as arguments) or self-discovers DAG files under a base
//! directory. Resource limits are kept here so the scan stays bounded on
//! pathological repositories.

use std::path::PathBuf;

/// Default base directory for self-discovery when no explicit files are given.
pub const DEFAULT_BASE_DIR: &str = "dags";

/// Configuration for [`scan`](crate::scan).
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ScanConfig {
    /// Explicit candidate files. When non-empty this is the working set
    /// (filtered to DAG files); when empty, files are discovered under
    /// `base_dir`.
    pub files: Vec<PathBuf>,
    /// Base directory for self-discovery. A nonexistent directory is a benign
    /// precondition failure, not an error.
    pub base_dir: PathBuf,
    /// Maximum file size in bytes (default: 10 MB).
    pub max_file_size: u64,
    /// Whether to follow symbolic links during discovery.
    ///
    /// **Defaults to `false`** — following symlinks allows escaping the
    /// repository root and traversing system directories in CI environments.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    /// Prevents infinite recursion via deeply nested symlinks or directories.
    pub max_depth: usize,
    /// Maximum total number of files to scan (default: `100_000`).
    pub max_files: usize,
    /// Maximum total bytes to read across all files (default: 512 MB).
    pub max_total_bytes: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            max_file_size: 10_485_760,
            follow_links: false,
            max_depth: 64,
            max_files: 100_000,
            max_total_bytes: 536_870_912,
        }
    }
}
