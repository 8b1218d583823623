//! File System Utilities
//!
//! Configuration and data directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("space", "cloud", "cloud-space").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/cloud-space/` or `$XDG_CONFIG_HOME/cloud-space/`
/// - **macOS**: `~/Library/Application Support/space.cloud.cloud-space/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cloud\cloud-space\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get or create the data directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/cloud-space/`
/// - **macOS**: `~/Library/Application Support/space.cloud.cloud-space/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cloud\cloud-space\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}

/// Get or create the directory holding rolling log files
pub fn get_or_create_log_dir() -> Result<PathBuf> {
    ensure_dir(&get_or_create_data_dir()?.join("logs"))
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
