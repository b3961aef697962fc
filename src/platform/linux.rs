// Tab Session Lite platform paths for Linux
// Config: ~/.config/tab-session-lite
// Data:   ~/.local/share/tab-session-lite

use std::env;
use std::path::PathBuf;

use super::APP_DIR_NAME;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Uses `$XDG_CONFIG_HOME/tab-session-lite` if set, otherwise `~/.config/tab-session-lite`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR_NAME),
        _ => home_dir().join(".config").join(APP_DIR_NAME),
    }
}

/// Uses `$XDG_DATA_HOME/tab-session-lite` if set, otherwise `~/.local/share/tab-session-lite`.
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR_NAME),
        _ => home_dir().join(".local").join("share").join(APP_DIR_NAME),
    }
}
