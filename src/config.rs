use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::TagPattern;
use crate::error::{Result, VersionGateError};
use crate::git::Backend;
use crate::release::TagSettings;
use crate::version_file::DEFAULT_VERSION_FILE;

/// Configuration file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "versiongate.toml";

/// Represents the complete configuration for version-gate.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_version_file")]
    pub version_file: String,

    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub git: GitConfig,
}

fn default_version_file() -> String {
    DEFAULT_VERSION_FILE.to_string()
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_true() -> bool {
    true
}

fn default_program() -> String {
    "git".to_string()
}

/// Release tag naming and lookup.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    #[serde(default = "default_tag_pattern")]
    pub pattern: String,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_true")]
    pub check_remote: bool,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            pattern: default_tag_pattern(),
            remote: default_remote(),
            check_remote: true,
        }
    }
}

/// Which git backend answers repository queries.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default)]
    pub backend: Backend,

    /// Executable used by the `cli` backend
    #[serde(default = "default_program")]
    pub program: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            backend: Backend::default(),
            program: default_program(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version_file: default_version_file(),
            tags: TagsConfig::default(),
            git: GitConfig::default(),
        }
    }
}

impl Config {
    /// Rejects values that would make every check meaningless.
    pub fn validate(&self) -> Result<()> {
        TagPattern::parse(self.tags.pattern.as_str())?;

        if self.tags.remote.trim().is_empty() {
            return Err(VersionGateError::config("tags.remote must not be empty"));
        }
        if self.version_file.trim().is_empty() {
            return Err(VersionGateError::config("version_file must not be empty"));
        }
        Ok(())
    }

    /// Tag settings for [crate::release::tag_exists]
    pub fn tag_settings(&self) -> Result<TagSettings> {
        Ok(TagSettings {
            pattern: TagPattern::parse(self.tags.pattern.as_str())?,
            remote: self.tags.remote.clone(),
            check_remote: self.tags.check_remote,
        })
    }
}

/// Per-user configuration path, `<config_dir>/.versiongate.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(format!(".{}", CONFIG_FILE_NAME)))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versiongate.toml` in current directory
/// 3. `.versiongate.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded (and validated) or default configuration
/// * `Err` - If a file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else {
        match user_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        }
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        VersionGateError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| VersionGateError::config(format!("Cannot parse {}: {}", path.display(), e)))?;
    config.validate()?;
    Ok(config)
}
