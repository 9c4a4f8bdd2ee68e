//! Error types for the duplicate-detection scan.

use std::path::PathBuf;

use serde::Serialize;

/// The kind of scan-level failure that prevented a file from contributing
/// identifiers.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanErrorKind {
    /// An I/O error occurred while reading the file.
    IoError,
    /// The file exceeded the configured maximum size limit.
    FileTooLarge,
    /// The file content is not valid UTF-8.
    InvalidEncoding,
    /// A resource limit (`max_files` or `max_total_bytes`) was reached,
    /// truncating the scan.
    LimitExceeded,
    /// A directory traversal error (permission denied, loop detected, etc.).
    WalkError,
}

/// A scan-level error: a file that could not be read for scanning.
///
/// These are distinct from [`DuplicateId`](crate::DuplicateId) entries (which
/// represent a data-integrity violation across the scanned set). A `ScanError`
/// is non-fatal: the affected file contributes no identifiers, the scan of the
/// remaining files continues, and the exit status is unaffected.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScanError {
    /// The file path that could not be scanned.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: ScanErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ScanError {
    /// Format the error for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [scan error] {}", self.file.display(), self.message)
    }
}
