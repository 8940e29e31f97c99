//! Document registration configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Settings used when registering documents and their versions
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentsConfig {
    /// Time allowed for an assets resolver to list a document's assets
    #[serde(default = "default_assets_timeout")]
    pub assets_timeout_secs: u64,
}

impl DocumentsConfig {
    pub fn assets_timeout(&self) -> Duration {
        Duration::from_secs(self.assets_timeout_secs)
    }

    /// Validate documents configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.assets_timeout_secs == 0 || self.assets_timeout_secs > 300 {
            return Err(ValidationError::InvalidAssetsTimeout);
        }
        Ok(())
    }
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            assets_timeout_secs: default_assets_timeout(),
        }
    }
}

fn default_assets_timeout() -> u64 {
    2
}
