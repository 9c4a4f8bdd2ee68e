//! Integration tests for `dag_validator::scan`.

use std::fs;
use std::path::{Path, PathBuf};

use dag_validator::{ScanConfig, scan};
use tempfile::TempDir;

fn config_with_base_dir(base_dir: &Path) -> ScanConfig {
    let mut cfg = ScanConfig::default();
    cfg.base_dir = base_dir.to_path_buf();
    cfg
}

fn config_with_files(files: Vec<PathBuf>) -> ScanConfig {
    let mut cfg = ScanConfig::default();
    cfg.files = files;
    cfg
}

/// Create `<root>/dags/<name>` with the given content, returning its path.
fn write_dag_file(root: &Path, name: &str, content: &str) -> PathBuf {
    let dags = root.join("dags");
    fs::create_dir_all(&dags).unwrap();
    let path = dags.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_scan_missing_base_dir_is_benign() {
    let tmp = TempDir::new().unwrap();
    let nonexistent = tmp.path().join("does_not_exist");

    let report = scan(&config_with_base_dir(&nonexistent));

    assert!(report.ok, "missing base dir must not fail the run");
    assert_eq!(report.files_attempted(), 0);
    assert!(report.scan_errors.is_empty());
}

#[test]
fn test_scan_no_matching_files_returns_ok() {
    let tmp = TempDir::new().unwrap();
    let txt = tmp.path().join("dags").join("README.md");
    fs::create_dir_all(txt.parent().unwrap()).unwrap();
    fs::write(&txt, "not a DAG file").unwrap();

    let report = scan(&config_with_base_dir(tmp.path()));

    assert_eq!(report.scanned_files, 0);
    assert!(report.ok, "empty scan should be ok, not an error");
}

#[test]
fn test_scan_unique_ids_pass() {
    let tmp = TempDir::new().unwrap();
    write_dag_file(tmp.path(), "a.py", "dag_id = \"ingest_a\"\n");
    write_dag_file(tmp.path(), "b.py", "dag_id = \"ingest_b\"\n");

    let report = scan(&config_with_base_dir(tmp.path()));

    assert_eq!(report.scanned_files, 2);
    assert!(report.ok, "got duplicates: {:?}", report.duplicates);
    assert_eq!(report.duplicates_count(), 0);
}

#[test]
fn test_scan_cross_file_duplicate_fails() {
    let tmp = TempDir::new().unwrap();
    let a = write_dag_file(tmp.path(), "a.py", "dag_id = \"x\"\n");
    let b = write_dag_file(tmp.path(), "b.py", "dag_id = \"x\"\n");

    let report = scan(&config_with_base_dir(tmp.path()));

    assert!(!report.ok);
    assert_eq!(report.duplicates_count(), 1);
    let duplicate = &report.duplicates[0];
    assert_eq!(duplicate.dag_id, "x");
    assert!(duplicate.files.contains(&a), "missing {}", a.display());
    assert!(duplicate.files.contains(&b), "missing {}", b.display());
}

#[test]
fn test_scan_same_file_repetition_is_not_a_duplicate() {
    let tmp = TempDir::new().unwrap();
    write_dag_file(tmp.path(), "a.py", "dag_id = \"x\"\ndag_id = \"x\"\n");

    let report = scan(&config_with_base_dir(tmp.path()));

    assert_eq!(report.scanned_files, 1);
    assert!(
        report.ok,
        "same-file repetition must not be reported: {:?}",
        report.duplicates
    );
}

#[test]
fn test_scan_distinct_ids_in_one_file_pass() {
    let tmp = TempDir::new().unwrap();
    write_dag_file(tmp.path(), "a.py", "dag_id = \"x\"\ndag_id = \"y\"\n");

    let report = scan(&config_with_base_dir(tmp.path()));

    assert_eq!(report.scanned_files, 1);
    assert!(report.ok);
    assert_eq!(report.duplicates_count(), 0);
}

#[test]
fn test_scan_explicit_files_drop_non_dag_paths() {
    let tmp = TempDir::new().unwrap();
    let py = write_dag_file(tmp.path(), "a.py", "dag_id = \"x\"\n");
    let md = tmp.path().join("dags").join("notes.md");
    fs::write(&md, "dag_id = \"x\"\n").unwrap();

    let report = scan(&config_with_files(vec![py, md]));

    assert_eq!(
        report.scanned_files, 1,
        "non-.py argument must be excluded entirely"
    );
    assert!(report.ok, "the .md declaration must not count");
}

#[test]
fn test_scan_explicit_files_skip_discovery_filter() {
    // Explicit arguments are filtered by extension only, not by the
    // directory-name filter used during discovery.
    let tmp = TempDir::new().unwrap();
    let outside = tmp.path().join("helper.py");
    fs::write(&outside, "dag_id = \"standalone\"\n").unwrap();

    let report = scan(&config_with_files(vec![outside]));

    assert_eq!(report.scanned_files, 1);
    assert!(report.ok);
}

#[test]
fn test_scan_explicit_duplicate_arguments_deduplicated() {
    let tmp = TempDir::new().unwrap();
    let py = write_dag_file(tmp.path(), "a.py", "dag_id = \"x\"\n");

    let report = scan(&config_with_files(vec![py.clone(), py]));

    assert_eq!(report.scanned_files, 1);
    assert!(
        report.ok,
        "the same file listed twice must not produce a false duplicate"
    );
}

#[test]
fn test_discovery_requires_dags_path_component() {
    let tmp = TempDir::new().unwrap();
    write_dag_file(tmp.path(), "a.py", "dag_id = \"x\"\n");
    let scripts = tmp.path().join("scripts");
    fs::create_dir_all(&scripts).unwrap();
    fs::write(scripts.join("b.py"), "dag_id = \"x\"\n").unwrap();

    let report = scan(&config_with_base_dir(tmp.path()));

    assert_eq!(
        report.scanned_files, 1,
        "scripts/b.py is outside the dags filter and must not be scanned"
    );
    assert!(report.ok);
}

#[test]
fn test_discovery_skips_pycache() {
    let tmp = TempDir::new().unwrap();
    write_dag_file(tmp.path(), "a.py", "dag_id = \"x\"\n");
    let pycache = tmp.path().join("dags").join("__pycache__");
    fs::create_dir_all(&pycache).unwrap();
    fs::write(pycache.join("a.py"), "dag_id = \"x\"\n").unwrap();

    let report = scan(&config_with_base_dir(tmp.path()));

    assert_eq!(report.scanned_files, 1);
    assert!(report.ok, "__pycache__ copies must not create duplicates");
}

#[test]
fn test_scan_non_utf8_file_is_nonfatal() {
    let tmp = TempDir::new().unwrap();
    write_dag_file(tmp.path(), "clean.py", "dag_id = \"unique\"\n");
    let bad = tmp.path().join("dags").join("binary.py");
    fs::write(&bad, [0xFF, 0xFE, 0x00, 0x01, 0x80, 0x81]).unwrap();

    let report = scan(&config_with_base_dir(tmp.path()));

    assert_eq!(report.scanned_files, 1);
    assert_eq!(report.failed_files, 1);
    assert!(!report.scan_errors.is_empty(), "read failure must be reported");
    assert!(
        report.ok,
        "an unreadable file must not affect the exit status"
    );
}

#[test]
fn test_scan_oversized_file_is_nonfatal() {
    let tmp = TempDir::new().unwrap();
    write_dag_file(tmp.path(), "big.py", "dag_id = \"big_dag\"\n");

    let mut cfg = config_with_base_dir(tmp.path());
    cfg.max_file_size = 10;
    let report = scan(&cfg);

    assert_eq!(report.scanned_files, 0);
    assert_eq!(report.failed_files, 1);
    assert!(report.ok, "a size-limited file must not fail the run");
}

#[test]
fn test_scan_json_output_contract() {
    let tmp = TempDir::new().unwrap();
    write_dag_file(tmp.path(), "a.py", "dag_id = \"x\"\n");

    let report = scan(&config_with_base_dir(tmp.path()));

    let mut buf = Vec::new();
    dag_validator::output::write_json(&report, &mut buf).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    assert!(json.get("scanned_files").is_some());
    assert!(json.get("failed_files").is_some());
    assert!(json.get("ok").is_some());
    assert!(json.get("duplicates").is_some());
    assert!(json.get("scan_errors").is_some());
    assert!(json["ok"].as_bool().unwrap());
}

#[test]
fn test_write_human_success_output() {
    let tmp = TempDir::new().unwrap();
    write_dag_file(tmp.path(), "a.py", "dag_id = \"x\"\n");

    let report = scan(&config_with_base_dir(tmp.path()));

    let mut buf = Vec::new();
    dag_validator::output::write_human(&report, &mut buf).unwrap();
    let output = String::from_utf8(buf).unwrap();

    assert!(
        output.contains("DAG ID VALIDATOR"),
        "missing header, got: {output}"
    );
    assert!(
        output.contains("Files scanned:     1"),
        "missing file count"
    );
    assert!(
        output.contains("No duplicate dag_ids"),
        "missing success message"
    );
    assert!(
        !output.contains("DUPLICATE DAG IDS"),
        "should not contain DUPLICATE DAG IDS section"
    );
}

#[test]
fn test_write_human_failure_output() {
    let tmp = TempDir::new().unwrap();
    let a = write_dag_file(tmp.path(), "a.py", "dag_id = \"x\"\n");
    let b = write_dag_file(tmp.path(), "b.py", "dag_id = \"x\"\n");

    let report = scan(&config_with_base_dir(tmp.path()));

    let mut buf = Vec::new();
    dag_validator::output::write_human(&report, &mut buf).unwrap();
    let output = String::from_utf8(buf).unwrap();

    assert!(
        output.contains("DUPLICATE DAG IDS"),
        "missing DUPLICATE DAG IDS section"
    );
    assert!(
        output.contains("Duplicate dag_id 'x'"),
        "diagnostic must name the identifier"
    );
    assert!(
        output.contains(&a.display().to_string()),
        "diagnostic must list {}",
        a.display()
    );
    assert!(
        output.contains(&b.display().to_string()),
        "diagnostic must list {}",
        b.display()
    );
    assert!(
        output.contains("duplicate dag_id(s) found"),
        "missing failure summary"
    );
}
