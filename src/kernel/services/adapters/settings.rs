//! Settings file management.

use std::io;
use std::path::PathBuf;

use crate::kernel::services::ports::settings::Settings;

const SETTINGS_DIR: &str = ".quizdeck";
const SETTINGS_FILE: &str = "settings.json";

/// `~/.quizdeck/settings.json`, or the `%APPDATA%` equivalent on Windows.
pub fn get_settings_path() -> Option<PathBuf> {
    let base = config_base_dir()?;
    Some(base.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

/// Writes a default settings file on first run so the knobs are
/// discoverable. An existing file is left alone.
pub fn ensure_settings_file() -> io::Result<PathBuf> {
    let Some(path) = get_settings_path() else {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        ));
    };

    if path.exists() {
        return Ok(path);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let defaults =
        serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| "{}".to_string());
    std::fs::write(&path, defaults)?;
    Ok(path)
}

/// Best effort: any read or parse failure falls back to defaults.
pub fn load_settings() -> Option<Settings> {
    let data = std::fs::read_to_string(get_settings_path()?).ok()?;
    serde_json::from_str(&data).ok()
}

fn config_base_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("APPDATA").ok().map(PathBuf::from)
    }

    #[cfg(not(windows))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}
