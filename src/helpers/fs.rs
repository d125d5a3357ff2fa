//! File System Utilities
//!
//! Locating the configuration file.

use crate::constants::{CONFIG_ENV_VAR, CONFIG_FILE_NAME};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Get or create the library's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/vivid-ui/` or `$XDG_CONFIG_HOME/vivid-ui/`
/// - **macOS**: `~/Library/Application Support/dev.vivid.vivid-ui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\vivid\vivid-ui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("dev", "vivid", "vivid-ui") else {
        return Err(Error::ConfigDir);
    };

    let config_dir = project_dirs.config_dir();
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Resolve the config file path: `$VIVID_UI_CONFIG` wins, then the
/// platform config directory.
pub fn config_file_path() -> Result<PathBuf> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME)),
    }
}
