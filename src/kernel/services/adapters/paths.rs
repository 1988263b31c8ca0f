//! Per-platform application directories:
//! - macOS: ~/Library/Application Support/quizdeck
//! - Linux: $XDG_DATA_HOME/quizdeck or ~/.local/share/quizdeck
//! - Windows: %APPDATA%\quizdeck

use std::io;
use std::path::PathBuf;

const APP_NAME: &str = "quizdeck";
const LOG_DIR: &str = "logs";

#[cfg(any(target_os = "macos", target_os = "linux"))]
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(target_os = "macos")]
fn app_data_dir() -> Option<PathBuf> {
    Some(
        home_dir()?
            .join("Library/Application Support")
            .join(APP_NAME),
    )
}

#[cfg(target_os = "linux")]
fn app_data_dir() -> Option<PathBuf> {
    match std::env::var("XDG_DATA_HOME") {
        Ok(xdg) => Some(PathBuf::from(xdg).join(APP_NAME)),
        Err(_) => Some(home_dir()?.join(".local/share").join(APP_NAME)),
    }
}

#[cfg(target_os = "windows")]
fn app_data_dir() -> Option<PathBuf> {
    let appdata = std::env::var("APPDATA").ok()?;
    Some(PathBuf::from(appdata).join(APP_NAME))
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn app_data_dir() -> Option<PathBuf> {
    None
}

pub fn get_log_dir() -> Option<PathBuf> {
    Some(app_data_dir()?.join(LOG_DIR))
}

pub fn ensure_log_dir() -> io::Result<PathBuf> {
    let dir = get_log_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Cannot determine log directory"))?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
