//! Global configuration management
//!
//! Provides persistent storage for user preferences.
//! Config is stored at `~/.segduty/config.toml` (or under `$SEGDUTY_CONFIG_DIR`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::builtin::BuiltinCatalog;
use crate::core::models::{SymmetryPolicy, TaskCatalog};
use crate::core::ports::CatalogSource;
use crate::paths;

/// Global segduty configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Display preferences
    #[serde(default)]
    pub display: DisplayConfig,
    /// Where the task catalog comes from
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Display preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Colorize human output
    #[serde(default = "default_color")]
    pub color: bool,
}

const fn default_color() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

/// Catalog selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// TOML catalog file; the built-in catalog is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Reject catalogs whose conflicts are declared on one side only
    #[serde(default)]
    pub strict_symmetry: bool,
}

impl CatalogConfig {
    /// The symmetry policy this config asks for
    #[must_use]
    pub const fn policy(&self) -> SymmetryPolicy {
        if self.strict_symmetry {
            SymmetryPolicy::Strict
        } else {
            SymmetryPolicy::Close
        }
    }

    /// Load the configured catalog, preferring `override_path` when given
    pub fn load(&self, override_path: Option<&Path>) -> anyhow::Result<TaskCatalog> {
        match override_path.or(self.path.as_deref()) {
            Some(path) => crate::adapters::toml::TomlCatalog::new(path.to_path_buf())
                .load_catalog(self.policy()),
            None => BuiltinCatalog.load_catalog(self.policy()),
        }
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or default if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific file, or default if missing or unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path).map(|content| toml::from_str(&content)) {
            Ok(Ok(config)) => config,
            Ok(Err(e)) => {
                log::warn!("ignoring invalid config {}: {e}", path.display());
                Self::default()
            },
            Err(e) => {
                log::warn!("cannot read config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
