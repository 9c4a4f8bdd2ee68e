//! Filesystem discovery and bounded file reading.
//!
//! Discovers candidate DAG files on disk and reads them safely for the
//! duplicate-detection scan. Properties enforced here:
//! - Symlinks are not followed by default (`follow_links: false`)
//! - Device files, pipes, and sockets are skipped
//! - Maximum directory depth is enforced to prevent infinite recursion
//! - Bounded streaming reads prevent TOCTOU and memory `DoS`

use std::io::Read;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::error::{ScanError, ScanErrorKind};

/// Directories to skip during discovery.
pub const SKIP_DIRS: &[&str] = &["__pycache__", ".git", ".venv", "venv", ".tox"];

/// Path substring a discovered file must contain. Keeps the scan on DAG
/// definition files even when the base directory holds other Python trees.
pub const DAG_PATH_FILTER: &str = "dags";

/// Result of attempting to read a file for scanning.
pub enum ReadOutcome {
    /// File was read successfully; contains the UTF-8 content.
    Ok(String),
    /// File could not be read; contains the scan error.
    Err(ScanError),
}

/// Check if a directory entry is a skip directory (for `WalkDir::filter_entry`).
/// Returns `true` if the entry should be **included** (i.e., is NOT a skip dir).
fn is_not_skip_dir(entry: &walkdir::DirEntry) -> bool {
    if entry.file_type().is_dir()
        && let Some(name) = entry.file_name().to_str()
    {
        return !SKIP_DIRS.contains(&name);
    }
    true
}

/// Check if a path has the DAG file extension.
#[must_use]
pub fn is_dag_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("py"))
}

/// Check if a path passes the directory-name filter.
fn matches_path_filter(path: &Path) -> bool {
    path.to_string_lossy().contains(DAG_PATH_FILTER)
}

/// Find all DAG files under the base directory.
///
/// Returns `(files, scan_errors)`:
/// - `files`: `.py` files whose path contains [`DAG_PATH_FILTER`], sorted and
///   deduplicated.
/// - `scan_errors`: walk errors (permission denied, loop, etc.). These are
///   reported but non-fatal.
///
/// A nonexistent base directory returns an empty working set with no errors:
/// the caller treats it as a benign precondition failure.
pub fn discover_files(config: &ScanConfig) -> (Vec<PathBuf>, Vec<ScanError>) {
    let mut files = Vec::new();
    let mut scan_errors = Vec::new();

    if !config.base_dir.is_dir() {
        return (files, scan_errors);
    }

    for entry_result in WalkDir::new(&config.base_dir)
        .follow_links(config.follow_links)
        .max_depth(config.max_depth)
        .into_iter()
        .filter_entry(is_not_skip_dir)
    {
        let entry = match entry_result {
            Ok(e) => e,
            Err(walk_err) => {
                let path = walk_err
                    .path()
                    .map_or_else(|| config.base_dir.clone(), Path::to_path_buf);
                scan_errors.push(ScanError {
                    file: path,
                    kind: ScanErrorKind::WalkError,
                    message: format!("Directory traversal error: {walk_err}"),
                });
                continue;
            }
        };

        let file_path = entry.path();

        if !file_path.is_file() {
            continue;
        }

        // Skip devices, pipes, sockets — only regular files
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            if let Ok(ft) = entry.metadata().map(|m| m.file_type())
                && (ft.is_block_device() || ft.is_char_device() || ft.is_fifo() || ft.is_socket())
            {
                continue;
            }
        }

        if !is_dag_file(file_path) {
            continue;
        }

        if !matches_path_filter(file_path) {
            continue;
        }

        files.push(file_path.to_path_buf());
    }

    files.sort();
    files.dedup();
    (files, scan_errors)
}

/// Read a file using a bounded streaming read, enforcing `max_file_size`.
///
/// Uses `Read::take` so the size check and the actual read are the same
/// operation; never calls `read_to_string` on an unbounded handle.
///
/// Returns `ReadOutcome::Err` if:
/// - The file exceeds `max_file_size`
/// - An I/O error occurs
/// - The content is not valid UTF-8
pub fn read_file_bounded(path: &Path, max_file_size: u64) -> ReadOutcome {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            return ReadOutcome::Err(ScanError {
                file: path.to_owned(),
                kind: ScanErrorKind::IoError,
                message: format!("Failed to open file: {e}"),
            });
        }
    };

    // Read at most max_file_size + 1 bytes to detect oversized files
    let mut buffer = Vec::new();
    match file.take(max_file_size + 1).read_to_end(&mut buffer) {
        Ok(_) => {}
        Err(e) => {
            return ReadOutcome::Err(ScanError {
                file: path.to_owned(),
                kind: ScanErrorKind::IoError,
                message: format!("Failed to read file: {e}"),
            });
        }
    }

    if buffer.len() as u64 > max_file_size {
        return ReadOutcome::Err(ScanError {
            file: path.to_owned(),
            kind: ScanErrorKind::FileTooLarge,
            message: format!("File exceeds maximum size of {max_file_size} bytes"),
        });
    }

    match String::from_utf8(buffer) {
        Ok(content) => ReadOutcome::Ok(content),
        Err(_) => ReadOutcome::Err(ScanError {
            file: path.to_owned(),
            kind: ScanErrorKind::InvalidEncoding,
            message: "File is not valid UTF-8".to_owned(),
        }),
    }
}
