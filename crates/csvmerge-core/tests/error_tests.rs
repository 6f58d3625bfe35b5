// Rust guideline compliant 2026-10-19

//! Unit tests for error types and messages.

use csvmerge_core::{Error, MergeError, MergeStatus};
use std::error::Error as _;
use std::path::{Path, PathBuf};

#[test]
fn test_invalid_argument_formatting() {
    let error = Error::InvalidArgument("at least one input path is required".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid argument: at least one input path is required"
    );
}

#[test]
fn test_invalid_config_formatting() {
    let error = Error::InvalidConfig("buffer_size must be greater than 0".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid config: buffer_size must be greater than 0"
    );
}

#[test]
fn test_merge_io_error_names_path() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = Error::from(MergeError::io("data/b.csv", io_err));
    let msg = error.to_string();
    assert!(msg.starts_with("Merge failed: IO error on data/b.csv"), "{}", msg);
    assert!(msg.contains("file not found"));
}

#[test]
fn test_merge_error_preserves_source() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = MergeError::io("out.csv", io_err);
    let source = error.source().expect("IO cause should be kept");
    assert_eq!(source.to_string(), "denied");
}

#[test]
fn test_header_mismatch_formatting() {
    let error = MergeError::HeaderMismatch {
        path: PathBuf::from("b.csv"),
        expected: "id,name".to_string(),
        found: "id,title".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Header mismatch in b.csv: expected [id,name], found [id,title]"
    );
    assert_eq!(error.path(), Some(Path::new("b.csv")));
}

#[test]
fn test_missing_header_formatting() {
    let error = MergeError::MissingHeader {
        path: PathBuf::from("empty.csv"),
    };
    assert_eq!(error.to_string(), "Missing header row in empty.csv");
}

#[test]
fn test_engine_error_has_no_path() {
    let error = MergeError::Engine("out of disk".to_string());
    assert_eq!(error.to_string(), "Engine error: out of disk");
    assert!(error.path().is_none());
}

#[test]
fn test_csv_error_classification() {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader("a,b\n1\n".as_bytes());
    let parse_err = reader
        .records()
        .next()
        .expect("one record")
        .expect_err("unequal lengths");

    let error = MergeError::csv("a.csv", parse_err);
    assert!(matches!(error, MergeError::Csv { .. }));
    assert!(error.to_string().starts_with("Malformed CSV in a.csv"));

    let io_backed = csv::Error::from(std::io::Error::new(
        std::io::ErrorKind::UnexpectedEof,
        "truncated",
    ));
    let error = MergeError::csv("a.csv", io_backed);
    assert!(matches!(error, MergeError::Io { .. }));
}

#[test]
fn test_status_json_shape() {
    let status = MergeStatus::success("merged.csv", 5, 2).with_message("done");
    let value = serde_json::to_value(&status).unwrap();
    assert_eq!(value["succeeded"], true);
    assert_eq!(value["output_path"], "merged.csv");
    assert_eq!(value["rows_written"], 5);
    assert_eq!(value["files_merged"], 2);
    assert_eq!(value["message"], "done");

    let parsed: MergeStatus = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, status);
}
