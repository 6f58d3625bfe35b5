// Rust guideline compliant 2026-10-19

//! Configuration-binding facade over a merge engine.

use crate::engine::{CsvEngine, MergeEngine};
use csvmerge_core::{Error, MergeConfig, MergeStatus, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Merges CSV files using a fixed configuration.
///
/// The configuration is bound at construction and never changes. Each call to
/// [`CsvMerger::merge`] is independent of the previous ones. Callers must not
/// target the same output path from concurrent calls.
#[derive(Debug, Clone)]
pub struct CsvMerger<E = CsvEngine> {
    config: MergeConfig,
    engine: E,
}

impl CsvMerger<CsvEngine> {
    /// Creates a merger backed by the default [`CsvEngine`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the buffer size is zero.
    pub fn new(config: MergeConfig) -> Result<Self> {
        Self::with_engine(config, CsvEngine::default())
    }
}

impl Default for CsvMerger<CsvEngine> {
    fn default() -> Self {
        Self {
            config: MergeConfig::default(),
            engine: CsvEngine::default(),
        }
    }
}

impl<E: MergeEngine> CsvMerger<E> {
    /// Creates a merger backed by `engine`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the buffer size is zero.
    pub fn with_engine(config: MergeConfig, engine: E) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, engine })
    }

    /// Returns the bound configuration.
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Returns the configured buffer size.
    pub fn buffer_size(&self) -> usize {
        self.config.buffer_size
    }

    /// Returns whether inputs are expected to carry a header row.
    pub fn has_header(&self) -> bool {
        self.config.has_header
    }

    /// Returns the underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Merges `inputs`, in order, into `output`.
    ///
    /// # Arguments
    ///
    /// * `inputs` - Non-empty list of input files; the first file's header is canonical
    /// * `output` - Destination file, created or overwritten
    ///
    /// # Returns
    ///
    /// The engine's status, unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `inputs` is empty or `output` is an empty path ([`Error::InvalidArgument`])
    /// - The engine fails for any reason ([`Error::Merge`])
    pub fn merge<P: AsRef<Path>>(
        &self,
        inputs: &[P],
        output: impl AsRef<Path>,
    ) -> Result<MergeStatus> {
        let output = output.as_ref();
        if inputs.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one input path is required".to_string(),
            ));
        }
        if output.as_os_str().is_empty() {
            return Err(Error::InvalidArgument(
                "output path cannot be empty".to_string(),
            ));
        }

        let inputs: Vec<PathBuf> = inputs.iter().map(|p| p.as_ref().to_path_buf()).collect();
        debug!(
            inputs = inputs.len(),
            output = %output.display(),
            buffer_size = self.config.buffer_size,
            has_header = self.config.has_header,
            "delegating merge to engine"
        );

        let status = self.engine.merge(
            &inputs,
            output,
            self.config.buffer_size,
            self.config.has_header,
        )?;
        Ok(status)
    }
}

/// Merges `inputs` into `output` with the default engine.
///
/// # Errors
///
/// Returns the same errors as [`CsvMerger::new`] and [`CsvMerger::merge`].
pub fn merge_files<P: AsRef<Path>>(
    inputs: &[P],
    output: impl AsRef<Path>,
    config: MergeConfig,
) -> Result<MergeStatus> {
    CsvMerger::new(config)?.merge(inputs, output)
}
