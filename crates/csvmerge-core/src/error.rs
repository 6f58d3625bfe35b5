// Rust guideline compliant 2026-10-19

//! Error types for the csvmerge core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for csvmerge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for csvmerge operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A merge argument was rejected before reaching the engine.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration values are missing, malformed or out of range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// IO error outside of a merge (e.g. reading a config file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The merge engine could not complete the merge.
    #[error("Merge failed: {0}")]
    Merge(#[from] MergeError),
}

/// Cause reported by a merge engine.
///
/// Callers of the facade only ever see this wrapped in [`Error::Merge`].
#[derive(Debug, Error)]
pub enum MergeError {
    /// Reading an input or writing the output failed.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// An input file is not well-formed CSV.
    #[error("Malformed CSV in {}: {source}", path.display())]
    Csv {
        /// File being parsed or written.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// Headers were expected but the input has no rows at all.
    #[error("Missing header row in {}", path.display())]
    MissingHeader {
        /// Offending input file.
        path: PathBuf,
    },

    /// An input header differs from the canonical (first) header.
    #[error("Header mismatch in {}: expected [{expected}], found [{found}]", path.display())]
    HeaderMismatch {
        /// Offending input file.
        path: PathBuf,
        /// Canonical header, comma-joined.
        expected: String,
        /// Header found in `path`, comma-joined.
        found: String,
    },

    /// Any other engine-internal failure.
    #[error("Engine error: {0}")]
    Engine(String),
}

impl MergeError {
    /// Builds an IO error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Builds a CSV error for `path`.
    ///
    /// CSV errors that only wrap an IO failure are reported as [`MergeError::Io`].
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        let path = path.into();
        if !source.is_io_error() {
            return Self::Csv { path, source };
        }
        let csv::ErrorKind::Io(io) = source.into_kind() else {
            unreachable!("is_io_error implies ErrorKind::Io");
        };
        Self::Io { path, source: io }
    }

    /// Returns the file the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Io { path, .. }
            | Self::Csv { path, .. }
            | Self::MissingHeader { path }
            | Self::HeaderMismatch { path, .. } => Some(path),
            Self::Engine(_) => None,
        }
    }
}
