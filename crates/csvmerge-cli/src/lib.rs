// Rust guideline compliant 2026-10-19

//! csvmerge CLI support library.
//!
//! Output formatting and logging setup shared by the `csvmerge` binary.

pub mod logging;
pub mod output;

pub use output::{create_formatter, OutputFormatter};
