// ABOUTME: Configuration file loading, validation, and hierarchical merging for termpix
// ABOUTME: Supports TOML config files with XDG Base Directory specification compliance

use crate::constants::{defaults, env, files};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use termpix_core::TerminalSize;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    /// Default output height in rows, replaced by --height
    #[serde(default, deserialize_with = "positive")]
    pub height: Option<u32>,
    /// Rows left free below the image
    #[serde(default)]
    pub reserve_rows: Option<u16>,
    #[serde(default, deserialize_with = "positive")]
    pub fallback_columns: Option<u16>,
    #[serde(default, deserialize_with = "positive")]
    pub fallback_rows: Option<u16>,
    /// Colored diagnostics
    #[serde(default)]
    pub color: Option<bool>,
}

impl Config {
    /// Load configuration from the standard locations, or from
    /// `$TERMPIX_CONFIG` when it is set
    pub fn load() -> Result<Self> {
        if let Some(explicit) = std::env::var_os(env::CONFIG_PATH) {
            log::debug!("Loading config from ${}", env::CONFIG_PATH);
            return Self::load_from_file(PathBuf::from(explicit));
        }

        Self::load_from_paths(&Self::get_config_paths())
    }

    /// Load configuration from file paths in order of increasing precedence.
    /// Missing files are skipped; unreadable or invalid ones are errors.
    pub fn load_from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut config = Config::default();

        for path in paths {
            let path = path.as_ref();
            if !path.is_file() {
                continue;
            }
            log::debug!("Loading config from {}", path.display());
            config = config.merge(Self::load_from_file(path)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config file: {}",
                path.as_ref().display()
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Standard config file paths, lowest precedence first
    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(
                home_dir
                    .join(".config")
                    .join(files::APP_DIR)
                    .join(files::CONFIG_FILE),
            );
        }

        if let Some(config_home) = std::env::var_os(env::XDG_CONFIG_HOME) {
            paths.push(
                PathBuf::from(config_home)
                    .join(files::APP_DIR)
                    .join(files::CONFIG_FILE),
            );
        }

        // Project-specific config wins
        if let Ok(current_dir) = std::env::current_dir() {
            paths.push(current_dir.join(files::PROJECT_CONFIG_FILE));
        }

        paths.dedup();
        paths
    }

    /// Merge this config with another, giving precedence to the other config
    pub fn merge(self, other: Config) -> Config {
        Config {
            height: other.height.or(self.height),
            reserve_rows: other.reserve_rows.or(self.reserve_rows),
            fallback_columns: other.fallback_columns.or(self.fallback_columns),
            fallback_rows: other.fallback_rows.or(self.fallback_rows),
            color: other.color.or(self.color),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let (Some(reserve), Some(rows)) = (self.reserve_rows, self.fallback_rows) {
            if reserve >= rows {
                return Err(anyhow!(
                    "reserve_rows ({}) must be smaller than fallback_rows ({})",
                    reserve,
                    rows
                ));
            }
        }

        Ok(())
    }

    pub fn reserve_rows(&self) -> u16 {
        self.reserve_rows.unwrap_or(defaults::RESERVE_ROWS)
    }

    /// Geometry to assume when the terminal cannot be queried
    pub fn fallback_size(&self) -> TerminalSize {
        TerminalSize::new(
            self.fallback_columns.unwrap_or(defaults::FALLBACK_COLUMNS),
            self.fallback_rows.unwrap_or(defaults::FALLBACK_ROWS),
        )
    }

    pub fn color_enabled(&self) -> bool {
        self.color.unwrap_or(true)
    }
}

// Rejects zero for size-like settings
fn positive<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default + PartialEq + Display,
{
    use serde::de::Error;

    let value: Option<T> = Option::deserialize(deserializer)?;
    match value {
        Some(v) if v == T::default() => Err(D::Error::custom(format!(
            "Invalid value '{}'. Must be at least 1",
            v
        ))),
        other => Ok(other),
    }
}
