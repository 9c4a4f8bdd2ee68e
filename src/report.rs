//! Scan report types.

use std::fmt::Write as _;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::ScanError;

/// A single duplicate identifier: the same `dag_id` declared by two or more
/// distinct files.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct DuplicateId {
    /// The duplicated identifier value.
    pub dag_id: String,
    /// Every file that declared it, in encounter order. Always ≥ 2 entries.
    pub files: Vec<PathBuf>,
}

impl DuplicateId {
    /// Format the duplicate as a human-readable diagnostic block.
    ///
    /// The identifier on the first line, then one indented line per
    /// contributing file.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        let mut out = format!("Duplicate dag_id '{}' declared in:", self.dag_id);
        for file in &self.files {
            // Writing to a String is infallible.
            let _ = write!(out, "\n    {}", file.display());
        }
        out
    }
}

/// Result of a duplicate-detection run.
///
/// `ok` reflects identifier uniqueness only: per-file read failures land in
/// `scan_errors` and are reported, but a run with unreadable files and no
/// duplicates still succeeds.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ScanReport {
    /// Number of files successfully read and scanned.
    pub scanned_files: usize,
    /// Number of files that could not be read.
    pub failed_files: usize,
    /// Whether no duplicate `dag_id` was found across the scanned set.
    pub ok: bool,
    /// Identifiers declared by more than one file, sorted by identifier.
    pub duplicates: Vec<DuplicateId>,
    /// Per-file read failures. Reported but never fatal.
    pub scan_errors: Vec<ScanError>,
}

impl ScanReport {
    /// Total number of files attempted (scanned + failed).
    #[must_use]
    pub fn files_attempted(&self) -> usize {
        self.scanned_files + self.failed_files
    }

    /// Number of duplicate identifiers found.
    #[must_use]
    pub fn duplicates_count(&self) -> usize {
        self.duplicates.len()
    }
}
