//! Shared output formatting for scan reports.
//!
//! Provides JSON and plain-text formatters for `ScanReport`. Color/terminal
//! formatting is intentionally excluded from this core module — that concern
//! belongs to the CLI layer.

use std::io::Write;

use crate::report::ScanReport;

/// Format a `ScanReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ScanReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ScanReport` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ScanReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  DAG ID VALIDATOR")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Files scanned:     {}", report.scanned_files)?;
    writeln!(writer, "  Files failed:      {}", report.failed_files)?;
    writeln!(writer, "  Duplicates found:  {}", report.duplicates_count())?;
    writeln!(writer)?;

    if !report.scan_errors.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  SCAN ERRORS (files that could not be read)")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for scan_err in &report.scan_errors {
            writeln!(writer, "{}", scan_err.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    if !report.duplicates.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  DUPLICATE DAG IDS")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for duplicate in &report.duplicates {
            writeln!(writer, "{}", duplicate.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.ok {
        writeln!(
            writer,
            "\u{2713} No duplicate dag_ids across {} scanned file(s)",
            report.scanned_files
        )?;
    } else {
        writeln!(
            writer,
            "\u{2717} {} duplicate dag_id(s) found",
            report.duplicates_count()
        )?;
        writeln!(writer)?;
        writeln!(writer, "  To fix:")?;
        writeln!(
            writer,
            "    - Every DAG file must declare a dag_id unique across the repository"
        )?;
        writeln!(
            writer,
            "    - Rename the dag_id in all but one of the listed files"
        )?;
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}
