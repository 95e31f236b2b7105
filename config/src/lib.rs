//! Configuration loading for Rhapsody.
//!
//! Reads `~/.rhapsody/config.toml` (or the file named by `RHAPSODY_CONFIG`)
//! and resolves it into the validated settings types from `rhapsody-types`.
//! Every section is optional; absent values fall back to the defaults.
//!
//! ```toml
//! [trial]
//! last_day = "2025-12-31"
//!
//! [daily]
//! leading_pages = 2
//! pages_per_article = 2
//! ```

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rhapsody_types::{DailyArticleLayout, SettingsError, TrialWindow};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "RHAPSODY_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid [trial] last_day '{value}' in {}: {source}", path.display())]
    TrialDay {
        path: PathBuf,
        value: String,
        source: chrono::ParseError,
    },
    #[error("invalid [daily] section in {}: {source}", path.display())]
    Daily {
        path: PathBuf,
        source: SettingsError,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::TrialDay { path, .. }
            | ConfigError::Daily { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    trial: Option<RawTrialConfig>,
    daily: Option<RawDailyConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct RawTrialConfig {
    /// ISO date string. TOML bare dates are not accepted.
    last_day: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawDailyConfig {
    leading_pages: Option<u32>,
    pages_per_article: Option<u32>,
}

/// Resolved configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RhapsodyConfig {
    trial: TrialWindow,
    daily: DailyArticleLayout,
}

impl RhapsodyConfig {
    #[must_use]
    pub fn new(trial: TrialWindow, daily: DailyArticleLayout) -> Self {
        Self { trial, daily }
    }

    /// Load from the default location. `Ok(None)` when no config file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    /// Load from the default location, falling back to defaults on any failure.
    #[must_use]
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(err) => {
                tracing::warn!(path = %err.path().display(), "Using default config: {err}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        let raw: RawConfig = match toml::from_str(&content) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                return Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        let config = Self::resolve(raw, path)?;
        tracing::debug!(
            trial_last_day = %config.trial.last_day(),
            leading_pages = config.daily.leading_pages(),
            pages_per_article = config.daily.pages_per_article(),
            "Loaded config from {:?}",
            path
        );
        Ok(config)
    }

    fn resolve(raw: RawConfig, path: &Path) -> Result<Self, ConfigError> {
        let trial = match raw.trial.and_then(|trial| trial.last_day) {
            Some(value) => {
                let day = value.trim().parse::<NaiveDate>().map_err(|source| {
                    ConfigError::TrialDay {
                        path: path.to_path_buf(),
                        value: value.clone(),
                        source,
                    }
                })?;
                TrialWindow::new(day)
            }
            None => TrialWindow::default(),
        };

        let daily = match raw.daily {
            Some(daily) => {
                let defaults = DailyArticleLayout::default();
                DailyArticleLayout::new(
                    daily.leading_pages.unwrap_or(defaults.leading_pages()),
                    daily
                        .pages_per_article
                        .unwrap_or(defaults.pages_per_article()),
                )
                .map_err(|source| ConfigError::Daily {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            None => DailyArticleLayout::default(),
        };

        Ok(Self { trial, daily })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub const fn trial(&self) -> TrialWindow {
        self.trial
    }

    #[must_use]
    pub const fn daily(&self) -> DailyArticleLayout {
        self.daily
    }
}

/// Config file location: `$RHAPSODY_CONFIG` if set and non-empty, else `~/.rhapsody/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    match env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => dirs::home_dir().map(|home| home.join(".rhapsody").join("config.toml")),
    }
}
