// Rust guideline compliant 2026-10-19

//! Streaming CSV merge engine.

use csv::{ByteRecord, ReaderBuilder, Terminator, WriterBuilder};
use csvmerge_core::{HeaderPolicy, MergeError, MergeStatus};
use std::fs::File;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info, warn};

/// A component that merges CSV files.
///
/// This is the single capability the facade consumes.
pub trait MergeEngine {
    /// Merges `inputs`, in order, into `output`.
    ///
    /// # Arguments
    ///
    /// * `inputs` - Input files in merge order
    /// * `output` - Destination file, created or overwritten
    /// * `buffer_size` - I/O buffer capacity in bytes
    /// * `has_header` - Whether each input starts with a header row
    ///
    /// # Errors
    ///
    /// Returns a [`MergeError`] on I/O failure, malformed CSV or an
    /// engine-internal error.
    fn merge(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        buffer_size: usize,
        has_header: bool,
    ) -> Result<MergeStatus, MergeError>;
}

impl<E: MergeEngine + ?Sized> MergeEngine for &E {
    fn merge(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        buffer_size: usize,
        has_header: bool,
    ) -> Result<MergeStatus, MergeError> {
        (**self).merge(inputs, output, buffer_size, has_header)
    }
}

impl<E: MergeEngine + ?Sized> MergeEngine for Box<E> {
    fn merge(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        buffer_size: usize,
        has_header: bool,
    ) -> Result<MergeStatus, MergeError> {
        (**self).merge(inputs, output, buffer_size, has_header)
    }
}

/// Merge engine backed by the `csv` crate.
///
/// Records are copied as raw bytes, so input encoding is preserved. The merged
/// file is assembled in a temporary file beside `output` and renamed into place
/// only once every input has been copied: a failed merge never leaves a partial
/// output behind, and an existing output is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvEngine {
    delimiter: u8,
    header_policy: HeaderPolicy,
}

impl Default for CsvEngine {
    fn default() -> Self {
        Self {
            delimiter: b',',
            header_policy: HeaderPolicy::default(),
        }
    }
}

impl CsvEngine {
    /// Creates an engine with a comma delimiter and strict headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter used for reading and writing.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets how differing headers are reconciled.
    pub fn with_header_policy(mut self, header_policy: HeaderPolicy) -> Self {
        self.header_policy = header_policy;
        self
    }

    /// Returns the field delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Returns the header policy.
    pub fn header_policy(&self) -> HeaderPolicy {
        self.header_policy
    }

    fn flexible(&self) -> bool {
        self.header_policy == HeaderPolicy::Lenient
    }

    /// Checks a non-canonical header against the canonical one.
    fn reconcile(
        &self,
        path: &Path,
        expected: &ByteRecord,
        found: &ByteRecord,
    ) -> Result<(), MergeError> {
        if expected == found {
            return Ok(());
        }

        match self.header_policy {
            HeaderPolicy::Strict => Err(MergeError::HeaderMismatch {
                path: path.to_path_buf(),
                expected: join_fields(expected),
                found: join_fields(found),
            }),
            HeaderPolicy::Lenient => {
                warn!(
                    path = %path.display(),
                    expected = %join_fields(expected),
                    found = %join_fields(found),
                    "header differs from canonical header, keeping canonical"
                );
                Ok(())
            }
        }
    }
}

impl MergeEngine for CsvEngine {
    fn merge(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        buffer_size: usize,
        has_header: bool,
    ) -> Result<MergeStatus, MergeError> {
        if buffer_size == 0 {
            return Err(MergeError::Engine(
                "buffer size must be greater than 0".to_string(),
            ));
        }

        let temp = staging_file(output).map_err(|e| MergeError::io(output, e))?;
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .buffer_capacity(buffer_size)
            .flexible(self.flexible())
            .terminator(Terminator::Any(b'\n'))
            .from_writer(temp);

        let mut canonical: Option<ByteRecord> = None;
        let mut record = ByteRecord::new();
        let mut rows_written: u64 = 0;

        for input in inputs {
            let file = File::open(input).map_err(|e| MergeError::io(input, e))?;
            let mut reader = ReaderBuilder::new()
                .has_headers(has_header)
                .delimiter(self.delimiter)
                .buffer_capacity(buffer_size)
                .flexible(self.flexible())
                .from_reader(file);

            if has_header {
                let header = reader
                    .byte_headers()
                    .map_err(|e| MergeError::csv(input, e))?
                    .clone();
                if header.is_empty() {
                    return Err(MergeError::MissingHeader {
                        path: input.clone(),
                    });
                }

                match &canonical {
                    Some(expected) => self.reconcile(input, expected, &header)?,
                    None => {
                        writer
                            .write_byte_record(&header)
                            .map_err(|e| write_error(input, output, e))?;
                        canonical = Some(header);
                    }
                }
            }

            let mut file_rows: u64 = 0;
            while reader
                .read_byte_record(&mut record)
                .map_err(|e| MergeError::csv(input, e))?
            {
                writer
                    .write_byte_record(&record)
                    .map_err(|e| write_error(input, output, e))?;
                file_rows += 1;
            }

            debug!(path = %input.display(), rows = file_rows, "copied input");
            rows_written += file_rows;
        }

        writer.flush().map_err(|e| MergeError::io(output, e))?;
        let temp = writer.into_inner().map_err(|e| {
            MergeError::io(
                output,
                std::io::Error::new(e.error().kind(), e.error().to_string()),
            )
        })?;
        if let Ok(existing) = std::fs::metadata(output) {
            temp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| MergeError::io(output, e))?;
        }
        temp.as_file()
            .sync_all()
            .map_err(|e| MergeError::io(output, e))?;
        temp.persist(output)
            .map_err(|e| MergeError::io(output, e.error))?;

        info!(
            output = %output.display(),
            files = inputs.len(),
            rows = rows_written,
            "merge complete"
        );

        Ok(MergeStatus::success(output, rows_written, inputs.len()))
    }
}

/// Creates the file the merged output is assembled in.
///
/// The file sits beside `output` so the final rename stays on one filesystem.
/// On Unix it is created with mode 0666 minus the umask, matching a plain
/// `File::create`; an existing output's permissions are copied over before the
/// rename.
fn staging_file(output: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".csvmerge-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(parent_dir(output))
}

/// Directory the temporary output is staged in.
fn parent_dir(output: &Path) -> &Path {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Attributes a writer failure: IO goes to the output, record shape to the input.
fn write_error(input: &Path, output: &Path, err: csv::Error) -> MergeError {
    if err.is_io_error() {
        MergeError::csv(output, err)
    } else {
        MergeError::csv(input, err)
    }
}

fn join_fields(record: &ByteRecord) -> String {
    record
        .iter()
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join(",")
}
