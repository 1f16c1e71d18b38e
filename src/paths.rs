//! Centralized path definitions for segduty
//!
//! ## Storage Layout
//!
//! ### Per-Workspace (current directory)
//!
//! ```text
//! ./
//! ├── .segduty.toml                          # Roles and scenarios
//! └── segduty-risk-analysis-<millis>.json    # Exports (on demand)
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.segduty/            # or $SEGDUTY_CONFIG_DIR
//! └── config.toml        # Display and catalog preferences
//! ```

use std::path::PathBuf;

/// Workspace filename
pub const WORKSPACE_FILE: &str = ".segduty.toml";

/// Global config directory name (under home)
const GLOBAL_DIR: &str = ".segduty";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the global config directory
pub const CONFIG_DIR_ENV: &str = "SEGDUTY_CONFIG_DIR";

/// Get path to the workspace file in the current directory
#[must_use]
pub fn workspace_file() -> PathBuf {
    PathBuf::from(WORKSPACE_FILE)
}

/// Get the global config directory.
///
/// Uses `$SEGDUTY_CONFIG_DIR` when set, otherwise `~/.segduty`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Default export filename, stamped with the current time in milliseconds
#[must_use]
pub fn default_export_file() -> PathBuf {
    PathBuf::from(format!(
        "segduty-risk-analysis-{}.json",
        chrono::Utc::now().timestamp_millis()
    ))
}
