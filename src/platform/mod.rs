// Tab Session Lite platform abstraction
// Resolves where settings and the session database live on each OS.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
const APP_DIR_NAME: &str = "tab-session-lite";

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `~/.config/tab-session-lite` (or `$XDG_CONFIG_HOME/tab-session-lite`)
/// - **macOS**: `~/Library/Application Support/TabSessionLite`
/// - **Windows**: `%APPDATA%/TabSessionLite`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory, where the session database lives.
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}
