//! Configuration for the inbox reader

use crate::error::{InboxError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the inbox path
pub const INBOX_PATH_ENV: &str = "LEAD_INBOX_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InboxConfig {
    /// File the forwarded emails are appended to
    pub inbox_path: PathBuf,

    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for InboxConfig {
    fn default() -> Self {
        Self {
            inbox_path: PathBuf::from("filtered-emails.txt"),
            log_filter: "info".to_string(),
        }
    }
}

impl InboxConfig {
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| InboxError::Config(format!("Failed to parse TOML: {e}")))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| InboxError::Config(format!("Failed to serialize to TOML: {e}")))
    }

    /// Load from a TOML file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| InboxError::io(path, e))?;
        let mut config = Self::from_toml(&contents)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Replace the inbox path with `LEAD_INBOX_PATH` when set
    pub fn apply_env(&mut self) {
        if let Some(path) = std::env::var_os(INBOX_PATH_ENV).filter(|p| !p.is_empty()) {
            self.inbox_path = PathBuf::from(path);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.inbox_path.as_os_str().is_empty() {
            return Err(InboxError::Config("inbox_path must not be empty".to_string()));
        }
        if self.log_filter.trim().is_empty() {
            return Err(InboxError::Config("log_filter must not be empty".to_string()));
        }
        Ok(())
    }
}
