//! File and environment backed console configuration

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::scratch::DEFAULT_CAPACITY;
use crate::sink::OutputTarget;

/// Environment variable toggling the batch flag
pub const ENV_BATCH_LOG: &str = "PRINTLINE_BATCH_LOG";

/// Environment variable selecting the output stream
pub const ENV_TARGET: &str = "PRINTLINE_TARGET";

/// Settings read when a console is built
///
/// ```
/// use printline_core::config::ConsoleConfig;
/// use printline_core::sink::OutputTarget;
///
/// let config = ConsoleConfig::from_yaml_str("target: stderr\n").unwrap();
/// assert_eq!(config.target, OutputTarget::Stderr);
/// assert!(!config.batch_log);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Intent to batch output. Stored and reported, never acted upon.
    pub batch_log: bool,

    /// Stream used for system log lines and the default logger
    pub target: OutputTarget,

    /// Initial capacity of the console's scratch buffers
    pub scratch_capacity: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            batch_log: false,
            target: OutputTarget::Stdout,
            scratch_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl ConsoleConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Default config file location (`~/.config/printline/config.yaml` on Linux)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("printline").join("config.yaml"))
    }

    /// Defaults, then the default config file if it exists, then the environment
    pub fn load() -> ConfigResult<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(path),
            None => {
                let mut config = Self::default();
                config.apply_env()?;
                Ok(config)
            }
        }
    }

    /// Defaults, then `path` if it exists, then the environment
    pub fn load_from(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let config = Self::from_file(path)?;
            log::debug!("printline config loaded from {}", path.display());
            config
        } else {
            Self::default()
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> ConfigResult<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_BATCH_LOG) {
            self.batch_log = parse_flag(&value).ok_or_else(|| rejected(ENV_BATCH_LOG, &value))?;
        }

        if let Some(value) = lookup(ENV_TARGET) {
            self.target = OutputTarget::parse(&value).ok_or_else(|| rejected(ENV_TARGET, &value))?;
        }

        Ok(())
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

fn rejected(key: &str, value: &str) -> ConfigError {
    log::warn!("printline rejected {}={:?}", key, value);
    ConfigError::invalid_value(key, value)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
