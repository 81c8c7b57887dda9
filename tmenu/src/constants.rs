use std::path::PathBuf;

use dirs::preference_dir;

pub const APP_NAME: &str = "tmenu";

pub fn base_path() -> PathBuf {
    preference_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

pub fn settings_path() -> PathBuf {
    base_path().join("settings.ron")
}
