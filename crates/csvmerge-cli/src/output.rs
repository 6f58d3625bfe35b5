// Rust guideline compliant 2026-10-19

//! Output formatting module for the csvmerge CLI.
//!
//! Merge results are printed either as human-readable text or as JSON for
//! machine consumption.

use csvmerge_core::MergeStatus;
use serde_json::json;

/// Output formatter trait.
pub trait OutputFormatter {
    /// Formats a merge status for display.
    fn format_status(&self, status: &MergeStatus) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_status(&self, status: &MergeStatus) -> String {
        serde_json::to_string_pretty(status)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize merge status" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "succeeded": false, "error": error }).to_string()
    }
}

/// Plain text output formatter.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_status(&self, status: &MergeStatus) -> String {
        let files = if status.files_merged == 1 {
            "1 file".to_string()
        } else {
            format!("{} files", status.files_merged)
        };
        let mut out = format!("Merged {} into {}", files, status.output_path.display());
        if let Some(rows) = status.rows_written {
            out.push_str(&format!(" ({} rows)", rows));
        }
        if let Some(message) = &status.message {
            out.push_str(&format!(": {}", message));
        }
        out
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Creates a formatter for the requested output mode.
pub fn create_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(PlainFormatter)
    }
}
