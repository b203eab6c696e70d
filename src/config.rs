//! Catalog Configuration
//!
//! Endpoint configuration for the remote artwork catalog.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default public catalog endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Remote catalog endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Collection endpoint URL (paginated read-only GET)
    pub base_url: String,
    /// Rows fetched per page
    pub page_size: u32,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: 30,
        }
    }
}

impl CatalogConfig {
    /// Parse a configuration from a TOML document
    pub fn from_toml(value: &str) -> Result<Self> {
        let config: Self = toml::from_str(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, falling back to defaults when missing
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let value = std::fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_toml(&value)
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Invalid {
                message: "base_url must not be empty".to_string(),
            });
        }
        if self.page_size == 0 {
            return Err(Error::Invalid {
                message: "page_size must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
