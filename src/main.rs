// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dag_validator::{DEFAULT_BASE_DIR, ScanConfig, output, scan};

/// Detect duplicate dag_ids across Airflow DAG definition files.
#[derive(Parser)]
#[command(name = "dag-validator")]
#[command(about = "Detect duplicate dag_ids across DAG definition files", long_about = None)]
struct Cli {
    /// Candidate DAG files (e.g. the changed files from pre-commit).
    /// Non-.py paths are silently dropped. When omitted, every DAG file
    /// under the base directory is scanned.
    files: Vec<PathBuf>,

    /// Base directory for self-discovery when no files are given
    #[arg(long, default_value = DEFAULT_BASE_DIR)]
    base_dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Human,
    /// JSON report for tooling
    Json,
}

fn main() {
    let cli = Cli::parse();

    let mut config = ScanConfig::default();
    config.files = cli.files;
    config.base_dir = cli.base_dir;

    if config.files.is_empty() && !config.base_dir.is_dir() {
        eprintln!(
            "Warning: base directory '{}' not found; nothing to scan",
            config.base_dir.display()
        );
    }

    let report = scan(&config);

    if report.files_attempted() == 0 {
        eprintln!("Warning: no DAG files to scan");
    }

    let mut stdout = std::io::stdout().lock();
    let written = match cli.format {
        OutputFormat::Human => output::write_human(&report, &mut stdout),
        OutputFormat::Json => output::write_json(&report, &mut stdout),
    };
    if let Err(e) = written {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    std::process::exit(i32::from(!report.ok));
}
