//! Pager configuration loaded from TOML.
//!
//! ```toml
//! default_page_size = 25
//! max_page_size = 200
//! forward_only = false
//! ```

use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read pager config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse pager config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid pager config: {0}")]
    Invalid(String),
}

///
/// PagerConfig
///
/// Process-wide paging defaults. Every field is optional in the file.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagerConfig {
    /// Page size used when a request does not choose one. `None` = unbounded.
    pub default_page_size: Option<u32>,

    /// Upper bound applied to every requested page size.
    pub max_page_size: Option<u32>,

    /// Suppress `prev` tokens for forward-only clients.
    pub forward_only: bool,
}

impl PagerConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;

        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == Some(0) {
            return Err(ConfigError::Invalid(
                "default_page_size must be positive".to_string(),
            ));
        }
        if self.max_page_size == Some(0) {
            return Err(ConfigError::Invalid(
                "max_page_size must be positive".to_string(),
            ));
        }
        if let (Some(default), Some(max)) = (self.default_page_size, self.max_page_size)
            && default > max
        {
            return Err(ConfigError::Invalid(format!(
                "default_page_size {default} exceeds max_page_size {max}"
            )));
        }

        Ok(())
    }
}
