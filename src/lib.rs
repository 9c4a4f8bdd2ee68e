//! # dag-validator
//!
//! Duplicate `dag_id` validator for Airflow DAG definition files.
//!
//! Scans a set of Python files for `dag_id = "<string>"` assignments and
//! reports every identifier declared by more than one file. Intended as a
//! pre-commit hook: pass the changed files explicitly, or let the tool
//! discover every DAG file under the `dags` directory.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dag_validator::{ScanConfig, scan};
//!
//! let config = ScanConfig::default();
//! let report = scan(&config);
//! println!("Files scanned: {}", report.scanned_files);
//! println!("Duplicates: {}", report.duplicates_count());
//! println!("OK: {}", report.ok);
//! ```

mod config;
mod error;
mod extract;
mod fs;
pub mod output;
mod registry;
mod report;

pub use config::{DEFAULT_BASE_DIR, ScanConfig};
pub use error::{ScanError, ScanErrorKind};
pub use extract::extract_dag_ids;
pub use report::{DuplicateId, ScanReport};

use std::collections::HashSet;
use std::path::PathBuf;

use fs::{ReadOutcome, discover_files, is_dag_file, read_file_bounded};
use registry::IdRegistry;

/// Scan for duplicate `dag_id` declarations.
///
/// This is the primary public API.
///
/// The working set is `config.files` filtered to DAG files when non-empty,
/// otherwise every DAG file discovered under `config.base_dir`. An empty
/// working set (including a nonexistent base directory) yields an `ok` report
/// with zero files attempted.
///
/// Per-file read failures are recorded in `report.scan_errors` and never stop
/// the scan of the remaining files; `report.ok` reflects identifier
/// uniqueness only.
#[must_use]
pub fn scan(config: &ScanConfig) -> ScanReport {
    let (files, mut scan_errors) = working_set(config);

    let mut registry = IdRegistry::default();
    let mut scanned_files: usize = 0;
    // Discovery-stage failures (walk errors) are already in scan_errors from
    // discover_files. Count them as failed files upfront.
    let mut failed_files: usize = scan_errors.len();
    let mut total_bytes: u64 = 0;

    for file_path in &files {
        if scanned_files + failed_files >= config.max_files {
            scan_errors.push(ScanError {
                file: file_path.clone(),
                kind: ScanErrorKind::LimitExceeded,
                message: format!(
                    "Scan aborted: max_files limit ({}) reached; remaining files not scanned",
                    config.max_files
                ),
            });
            failed_files += 1;
            break;
        }

        let content = match read_file_bounded(file_path, config.max_file_size) {
            ReadOutcome::Ok(c) => c,
            ReadOutcome::Err(e) => {
                scan_errors.push(e);
                failed_files += 1;
                continue;
            }
        };

        let file_bytes = content.len() as u64;
        if total_bytes.saturating_add(file_bytes) > config.max_total_bytes {
            scan_errors.push(ScanError {
                file: file_path.clone(),
                kind: ScanErrorKind::LimitExceeded,
                message: format!(
                    "Scan aborted: max_total_bytes limit ({}) reached; remaining files not scanned",
                    config.max_total_bytes
                ),
            });
            failed_files += 1;
            break;
        }
        total_bytes = total_bytes.saturating_add(file_bytes);

        for dag_id in extract_dag_ids(&content) {
            registry.record(dag_id, file_path);
        }
        scanned_files += 1;
    }

    let duplicates = registry.into_duplicates();
    let ok = duplicates.is_empty();
    ScanReport {
        scanned_files,
        failed_files,
        ok,
        duplicates,
        scan_errors,
    }
}

/// Resolve the working set for a scan.
///
/// Explicit files are filtered to DAG files (non-matching paths are silently
/// dropped, per the pre-commit contract) and deduplicated in encounter order.
fn working_set(config: &ScanConfig) -> (Vec<PathBuf>, Vec<ScanError>) {
    if config.files.is_empty() {
        return discover_files(config);
    }

    let mut seen: HashSet<PathBuf> = HashSet::new();
    let files = config
        .files
        .iter()
        .filter(|path| is_dag_file(path))
        .filter(|path| seen.insert((*path).clone()))
        .cloned()
        .collect();
    (files, Vec::new())
}
