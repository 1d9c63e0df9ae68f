//! Configuration management for folio.

use crate::catalog::Catalog;
use crate::pager::DEFAULT_PAGE_SIZE;
use crate::theme::ThemePreference;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Main configuration structure for folio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Books rendered per page / per "show more".
    pub page_size: usize,

    /// Catalog JSON file. The bundled sample is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,

    /// Appearance settings.
    pub appearance: AppearanceConfig,
}

/// Appearance-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Startup theme (`system`, `day` or `night`).
    pub theme: ThemePreference,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            data_path: None,
            appearance: AppearanceConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;

        config.expand_tilde_in_paths();
        config.validate()?;

        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load a configuration the user named, or the default one.
    ///
    /// An explicit `path` must exist. Only the default location falls back to
    /// built-in defaults when the file is absent.
    pub fn open(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load_or_default(&crate::paths::config_path()),
        }
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the catalog view cannot work with.
    pub fn validate(&self) -> crate::Result<()> {
        if self.page_size == 0 {
            return Err(crate::Error::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load the configured catalog, or the bundled sample.
    pub fn load_catalog(&self) -> crate::Result<Catalog> {
        match &self.data_path {
            Some(path) => Catalog::load(path),
            None => Catalog::sample(),
        }
    }

    /// Expand tilde (~) in all path fields.
    fn expand_tilde_in_paths(&mut self) {
        if let Some(path) = &self.data_path {
            self.data_path = Some(Self::expand_tilde(path));
        }
    }

    fn expand_tilde(path: &Path) -> PathBuf {
        let raw = path.to_string_lossy();
        PathBuf::from(shellexpand::tilde(&raw).into_owned())
    }
}
