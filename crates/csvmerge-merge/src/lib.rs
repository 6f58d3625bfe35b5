// Rust guideline compliant 2026-10-19

//! CSV merge engine and facade.
//!
//! [`CsvMerger`] binds a [`MergeConfig`](csvmerge_core::MergeConfig) to a
//! [`MergeEngine`] and forwards each merge call to it. [`CsvEngine`] is the
//! streaming engine shipped with this crate.

pub mod engine;
pub mod facade;

pub use engine::{CsvEngine, MergeEngine};
pub use facade::{merge_files, CsvMerger};
