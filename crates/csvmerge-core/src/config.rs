// Rust guideline compliant 2026-10-19

//! Configuration management for csvmerge.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default reader/writer buffer capacity in bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 256;

/// Environment variable overriding [`MergeConfig::buffer_size`].
pub const ENV_BUFFER_SIZE: &str = "CSVMERGE_BUFFER_SIZE";

/// Environment variable overriding [`MergeConfig::has_header`].
pub const ENV_HAS_HEADER: &str = "CSVMERGE_HAS_HEADER";

/// How an engine reconciles headers and row widths across input files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HeaderPolicy {
    /// Every header must equal the first file's header, and every row must
    /// have as many fields as the first record written. The width rule also
    /// applies when `has_header` is false.
    #[default]
    Strict,
    /// Rows are concatenated under the first file's header; other headers are
    /// dropped and rows of any width are accepted.
    Lenient,
}

impl std::fmt::Display for HeaderPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

impl std::str::FromStr for HeaderPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(Error::InvalidConfig(format!(
                "header policy must be strict or lenient, got '{}'",
                other
            ))),
        }
    }
}

/// Configuration bound to a merge facade.
///
/// Each field defaults independently: `buffer_size` to 256 bytes and
/// `has_header` to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Reader/writer buffer capacity in bytes.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,

    /// Whether each input's first row is a column header.
    #[serde(default = "default_has_header")]
    pub has_header: bool,
}

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

fn default_has_header() -> bool {
    true
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
            has_header: default_has_header(),
        }
    }
}

impl MergeConfig {
    /// Creates a configuration with both values set explicitly.
    pub fn new(buffer_size: usize, has_header: bool) -> Self {
        Self {
            buffer_size,
            has_header,
        }
    }

    /// Creates a configuration with the given buffer size and the default header flag.
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self {
            buffer_size,
            ..Self::default()
        }
    }

    /// Creates a configuration with the given header flag and the default buffer size.
    pub fn with_header(has_header: bool) -> Self {
        Self {
            has_header,
            ..Self::default()
        }
    }

    /// Returns a builder starting from the defaults.
    pub fn builder() -> MergeConfigBuilder {
        MergeConfigBuilder::default()
    }

    /// Loads configuration from an optional file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, when given
    /// 3. Environment variables with `CSVMERGE_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Optional path to a TOML configuration file
    ///
    /// # Returns
    ///
    /// A validated MergeConfig.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file cannot be read
    /// - The configuration file contains invalid TOML
    /// - An environment override cannot be parsed
    /// - Configuration values fail validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = path {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content).map_err(|e| {
                Error::InvalidConfig(format!("Invalid config file {}: {}", path.display(), e))
            })?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `CSVMERGE_BUFFER_SIZE` - Buffer capacity in bytes
    /// - `CSVMERGE_HAS_HEADER` - Whether inputs carry a header row (true/false)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var(ENV_BUFFER_SIZE) {
            self.buffer_size = val.parse().map_err(|_| {
                Error::InvalidConfig(format!("{} must be a positive number", ENV_BUFFER_SIZE))
            })?;
        }

        if let Ok(val) = std::env::var(ENV_HAS_HEADER) {
            self.has_header = val.parse().map_err(|_| {
                Error::InvalidConfig(format!("{} must be true or false", ENV_HAS_HEADER))
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `buffer_size` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(Error::InvalidConfig(
                "buffer_size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Builder for [`MergeConfig`].
#[derive(Debug, Clone, Default)]
pub struct MergeConfigBuilder {
    buffer_size: Option<usize>,
    has_header: Option<bool>,
}

impl MergeConfigBuilder {
    /// Sets the buffer size in bytes.
    pub fn buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = Some(buffer_size);
        self
    }

    /// Sets whether inputs carry a header row.
    pub fn has_header(mut self, has_header: bool) -> Self {
        self.has_header = Some(has_header);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the buffer size is zero.
    pub fn build(self) -> Result<MergeConfig> {
        let config = MergeConfig {
            buffer_size: self.buffer_size.unwrap_or_else(default_buffer_size),
            has_header: self.has_header.unwrap_or_else(default_has_header),
        };
        config.validate()?;
        Ok(config)
    }
}
