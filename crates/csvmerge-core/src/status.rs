// Rust guideline compliant 2026-10-19

//! Result value returned by a completed merge.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Summary of a merge operation.
///
/// The shape is owned by the merge engine; the facade hands it back untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStatus {
    /// Whether the merge completed.
    pub succeeded: bool,
    /// Path the merged CSV was written to.
    pub output_path: PathBuf,
    /// Number of data rows written (header excluded), if the engine counts them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows_written: Option<u64>,
    /// Number of input files consumed.
    #[serde(default)]
    pub files_merged: usize,
    /// Free-form engine message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MergeStatus {
    /// Creates a successful status.
    ///
    /// # Arguments
    ///
    /// * `output_path` - Path the merged file was written to
    /// * `rows_written` - Number of data rows written
    /// * `files_merged` - Number of inputs consumed
    pub fn success(
        output_path: impl Into<PathBuf>,
        rows_written: u64,
        files_merged: usize,
    ) -> Self {
        Self {
            succeeded: true,
            output_path: output_path.into(),
            rows_written: Some(rows_written),
            files_merged,
            message: None,
        }
    }

    /// Attaches a message to the status.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the output path.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
