use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL,
    LogLevel, config::is_contained_relative_path,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub dir: String,
    /// Log file name inside `dir`. None = stderr
    pub file: Option<String>,
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
            colored: DEFAULT_LOG_COLORED,
        }
    }
}

impl LoggingConfig {
    /// Where log lines go: the file name, or `stderr` (stdout carries command output).
    pub fn destination(&self) -> &str {
        self.file.as_deref().unwrap_or("stderr")
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_contained_relative_path(&self.dir) {
            return Err(ConfigError::logging(
                "logging.dir must be relative and cannot contain '..'",
            ));
        }

        if let Some(ref file) = self.file
            && (file.is_empty() || !is_contained_relative_path(file))
        {
            return Err(ConfigError::logging(
                "logging.file must be a non-empty relative file name",
            ));
        }

        Ok(())
    }
}
