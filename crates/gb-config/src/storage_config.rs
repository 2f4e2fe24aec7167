use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_STORAGE_FILE, config::is_contained_relative_path,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Session file, relative to the config directory
    pub file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file: String::from(DEFAULT_STORAGE_FILE),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.file.is_empty() || !is_contained_relative_path(&self.file) {
            return Err(ConfigError::storage(
                "storage.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
