// Rust guideline compliant 2026-10-19

//! csvmerge Core Library
//!
//! This crate provides the shared building blocks for the csvmerge tools:
//! - Merge configuration (defaults, builder, TOML file and environment overrides)
//! - Header reconciliation policy
//! - The `MergeStatus` result value
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod status;

pub use config::{HeaderPolicy, MergeConfig, MergeConfigBuilder};
pub use error::{Error, MergeError, Result};
pub use status::MergeStatus;
