//! Dashboard configuration, read from `~/.coverdeck/config.toml`.
//!
//! Loading never fails: a missing, malformed, or invalid file logs a
//! warning and yields defaults, so the dashboard always starts.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{CoreError, Result};

/// Top-level config file shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub general: GeneralConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Name shown in the header greeting.
    pub user_name: Option<String>,
    /// JSON fixture file to load instead of the built-in dataset.
    pub fixtures: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll interval in milliseconds.
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_ms: 100 }
    }
}

impl UiConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// `~/.coverdeck/config.toml`, or `None` when no home directory is
/// resolvable.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".coverdeck").join("config.toml"))
}

impl DashboardConfig {
    /// Load from the default location.
    pub fn load() -> Self {
        match default_config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("no home directory; using default config");
                Self::default()
            }
        }
    }

    /// Load from an explicit path, falling back to defaults on any
    /// problem.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file; using defaults");
            return Self::default();
        }

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read config; using defaults");
                return Self::default();
            }
        };

        let config: DashboardConfig = match toml::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to parse config; using defaults");
                return Self::default();
            }
        };

        if let Err(e) = config.validate() {
            warn!(path = %path.display(), error = %e, "invalid config; using defaults");
            return Self::default();
        }

        debug!(path = %path.display(), "loaded config");
        config
    }

    /// Semantic checks a well-formed file can still fail. A zero tick
    /// would spin the event poll without waiting.
    pub fn validate(&self) -> Result<()> {
        if self.ui.tick_ms == 0 {
            return Err(CoreError::config("tick_ms must be non-zero"));
        }
        Ok(())
    }
}
