// Configuration management module
// TOML-backed settings for dataset locations and recommendation defaults

#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// Locations of the three tabular sources, relative to the base directory
/// unless absolute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DataConfig {
    pub students_path: PathBuf,
    pub courses_path: PathBuf,
    pub ratings_path: PathBuf,
}

impl Default for DataConfig {
    #[inline]
    fn default() -> Self {
        Self {
            students_path: PathBuf::from("students.csv"),
            courses_path: PathBuf::from("courses.csv"),
            ratings_path: PathBuf::from("ratings.csv"),
        }
    }
}

/// Defaults used when a command does not override them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RecommendConfig {
    pub top_n: usize,
    pub neighborhood_size: usize,
}

impl Default for RecommendConfig {
    #[inline]
    fn default() -> Self {
        Self {
            top_n: 3,
            neighborhood_size: 10,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found or could not be created")]
    DirectoryError,
    #[error("Invalid top-n: {0} (must be between 1 and 100)")]
    InvalidTopN(usize),
    #[error("Invalid neighborhood size: {0} (must be between 1 and 1000)")]
    InvalidNeighborhoodSize(usize),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Config {
    #[inline]
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join("config.toml");

        if !config_path.exists() {
            return Ok(Self {
                data: DataConfig::default(),
                recommend: RecommendConfig::default(),
                base_dir: config_dir.as_ref().to_path_buf(),
            });
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
        config.base_dir = config_dir.as_ref().to_path_buf();

        config
            .validate()
            .with_context(|| "Configuration validation failed")?;

        Ok(config)
    }

    #[inline]
    pub fn save(&self) -> Result<()> {
        self.validate()
            .context("Configuration validation failed before saving")?;

        let config_dir = self.get_base_dir();

        fs::create_dir_all(config_dir).with_context(|| {
            format!(
                "Failed to create config directory: {}",
                config_dir.display()
            )
        })?;

        let config_path = self.config_file_path();
        let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Get the base directory for the application
    #[inline]
    pub fn get_base_dir(&self) -> &Path {
        &self.base_dir
    }

    #[inline]
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.recommend.validate()
    }

    #[inline]
    pub fn config_file_path(&self) -> PathBuf {
        self.get_base_dir().join("config.toml")
    }

    /// Students table path, resolved against the base directory.
    #[inline]
    pub fn students_path(&self) -> PathBuf {
        self.resolve(&self.data.students_path)
    }

    /// Courses table path, resolved against the base directory.
    #[inline]
    pub fn courses_path(&self) -> PathBuf {
        self.resolve(&self.data.courses_path)
    }

    /// Ratings table path, resolved against the base directory.
    #[inline]
    pub fn ratings_path(&self) -> PathBuf {
        self.resolve(&self.data.ratings_path)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

impl RecommendConfig {
    #[inline]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.top_n) {
            return Err(ConfigError::InvalidTopN(self.top_n));
        }

        if !(1..=1000).contains(&self.neighborhood_size) {
            return Err(ConfigError::InvalidNeighborhoodSize(self.neighborhood_size));
        }

        Ok(())
    }
}

/// Get the configuration directory path
#[inline]
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("coursematch"))
        .ok_or(ConfigError::DirectoryError)
}
