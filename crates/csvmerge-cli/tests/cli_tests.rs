// Rust guideline compliant 2026-10-19

//! End-to-end tests for the `csvmerge` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn csvmerge(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_csvmerge"))
        .current_dir(dir)
        .env_remove("CSVMERGE_BUFFER_SIZE")
        .env_remove("CSVMERGE_HAS_HEADER")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run csvmerge")
}

fn write_inputs(dir: &TempDir) {
    fs::write(dir.path().join("a.csv"), "id,name\n1,alpha\n2,beta\n").expect("write a.csv");
    fs::write(
        dir.path().join("b.csv"),
        "id,name\n3,gamma\n4,delta\n5,epsilon\n",
    )
    .expect("write b.csv");
}

#[test]
fn csvmerge_merges_files_in_order() {
    let temp_dir = TempDir::new().expect("temp dir");
    write_inputs(&temp_dir);

    let output = csvmerge(temp_dir.path(), &["-o", "all.csv", "a.csv", "b.csv"]);

    assert!(
        output.status.success(),
        "expected success, got status: {:?}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Merged 2 files") && stdout.contains("(5 rows)"),
        "unexpected output:\n{}",
        stdout
    );
    let merged = fs::read_to_string(temp_dir.path().join("all.csv")).expect("read all.csv");
    assert_eq!(merged, "id,name\n1,alpha\n2,beta\n3,gamma\n4,delta\n5,epsilon\n");
}

#[test]
fn csvmerge_json_flag_outputs_json() {
    let temp_dir = TempDir::new().expect("temp dir");
    write_inputs(&temp_dir);

    let output = csvmerge(
        temp_dir.path(),
        &["--json", "-o", "all.csv", "a.csv", "b.csv"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["succeeded"], true);
    assert_eq!(value["rows_written"], 5);
    assert_eq!(value["files_merged"], 2);
}

#[test]
fn csvmerge_missing_input_fails() {
    let temp_dir = TempDir::new().expect("temp dir");
    write_inputs(&temp_dir);

    let output = csvmerge(temp_dir.path(), &["-o", "all.csv", "a.csv", "missing.csv"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("missing.csv"),
        "error should name the missing file:\n{}",
        stderr
    );
    assert!(!temp_dir.path().join("all.csv").exists());
}

#[test]
fn csvmerge_json_error_is_reported_on_stdout() {
    let temp_dir = TempDir::new().expect("temp dir");
    write_inputs(&temp_dir);

    let output = csvmerge(
        temp_dir.path(),
        &["--json", "-o", "all.csv", "missing.csv"],
    );

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["succeeded"], false);
}

#[test]
fn csvmerge_requires_inputs() {
    let temp_dir = TempDir::new().expect("temp dir");

    let output = csvmerge(temp_dir.path(), &["-o", "all.csv"]);

    assert!(!output.status.success());
    assert!(!temp_dir.path().join("all.csv").exists());
}

#[test]
fn csvmerge_no_header_and_delimiter() {
    let temp_dir = TempDir::new().expect("temp dir");
    fs::write(temp_dir.path().join("a.csv"), "1;alpha\n").expect("write a.csv");
    fs::write(temp_dir.path().join("b.csv"), "2;beta\n").expect("write b.csv");

    let output = csvmerge(
        temp_dir.path(),
        &[
            "--no-header",
            "--delimiter",
            ";",
            "-o",
            "all.csv",
            "a.csv",
            "b.csv",
        ],
    );

    assert!(output.status.success());
    let merged = fs::read_to_string(temp_dir.path().join("all.csv")).expect("read all.csv");
    assert_eq!(merged, "1;alpha\n2;beta\n");
}

#[test]
fn csvmerge_header_policy_flag() {
    let temp_dir = TempDir::new().expect("temp dir");
    fs::write(temp_dir.path().join("a.csv"), "id,name\n1,alpha\n").expect("write a.csv");
    fs::write(temp_dir.path().join("b.csv"), "id,title\n2,beta\n").expect("write b.csv");

    let strict = csvmerge(temp_dir.path(), &["-o", "all.csv", "a.csv", "b.csv"]);
    assert!(!strict.status.success());

    let lenient = csvmerge(
        temp_dir.path(),
        &["--header-policy", "lenient", "-o", "all.csv", "a.csv", "b.csv"],
    );
    assert!(lenient.status.success());
    let merged = fs::read_to_string(temp_dir.path().join("all.csv")).expect("read all.csv");
    assert_eq!(merged, "id,name\n1,alpha\n2,beta\n");
}

#[test]
fn csvmerge_reads_config_file() {
    let temp_dir = TempDir::new().expect("temp dir");
    fs::write(temp_dir.path().join("a.csv"), "1,alpha\n").expect("write a.csv");
    fs::write(temp_dir.path().join("csvmerge.toml"), "has_header = false\n")
        .expect("write config");

    let output = csvmerge(
        temp_dir.path(),
        &["--config", "csvmerge.toml", "--json", "-o", "all.csv", "a.csv"],
    );

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["rows_written"], 1);
}

#[test]
fn csvmerge_rejects_zero_buffer() {
    let temp_dir = TempDir::new().expect("temp dir");
    write_inputs(&temp_dir);

    let output = csvmerge(
        temp_dir.path(),
        &["--buffer-size", "0", "-o", "all.csv", "a.csv"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("buffer_size"), "unexpected stderr:\n{}", stderr);
}

#[test]
fn csvmerge_header_flag_overrides_config() {
    let temp_dir = TempDir::new().expect("temp dir");
    write_inputs(&temp_dir);
    fs::write(temp_dir.path().join("csvmerge.toml"), "has_header = false\n")
        .expect("write config");

    let output = csvmerge(
        temp_dir.path(),
        &[
            "--config",
            "csvmerge.toml",
            "--header",
            "--json",
            "-o",
            "all.csv",
            "a.csv",
            "b.csv",
        ],
    );

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["rows_written"], 5);
    let merged = fs::read_to_string(temp_dir.path().join("all.csv")).expect("read all.csv");
    assert!(merged.starts_with("id,name\n1,alpha\n"));
}

#[test]
fn csvmerge_header_flags_conflict() {
    let temp_dir = TempDir::new().expect("temp dir");
    write_inputs(&temp_dir);

    let output = csvmerge(
        temp_dir.path(),
        &["--header", "--no-header", "-o", "all.csv", "a.csv"],
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(!temp_dir.path().join("all.csv").exists());
}
