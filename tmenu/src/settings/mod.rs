use cmenu::{
    render::{DEFAULT_BORDER, DEFAULT_WIDTH},
    BoxStyle,
};
use ron::{self, extensions::Extensions, ser::PrettyConfig};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::constants;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

/// Narrower boxes can't fit a key and a single letter of a name.
pub const MIN_WIDTH: usize = 8;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read/write settings file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub width: Option<usize>,
    #[serde(default)]
    pub border: Option<char>,
    #[serde(default)]
    pub clear_screen: Option<bool>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
    #[serde(default)]
    pub show_logs: Option<bool>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn populate(mut self) -> Self {
        self.width = Some(self.get_width());
        self.border = Some(self.get_border());
        self.clear_screen = Some(self.get_clear_screen());
        self.log_level = Some(self.get_log_level());
        self.show_logs = Some(self.get_show_logs());

        self
    }

    pub fn set_width(mut self, value: usize) -> Self {
        self.width = Some(value);
        self
    }

    pub fn get_width(&self) -> usize {
        self.width.unwrap_or(DEFAULT_WIDTH).max(MIN_WIDTH)
    }

    pub fn set_border(mut self, value: char) -> Self {
        self.border = Some(value);
        self
    }

    pub fn get_border(&self) -> char {
        self.border.unwrap_or(DEFAULT_BORDER)
    }

    pub fn set_clear_screen(mut self, value: bool) -> Self {
        self.clear_screen = Some(value);
        self
    }

    pub fn get_clear_screen(&self) -> bool {
        self.clear_screen.unwrap_or(true)
    }

    pub fn set_log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn set_show_logs(mut self, value: bool) -> Self {
        self.show_logs = Some(value);
        self
    }

    pub fn get_show_logs(&self) -> bool {
        self.show_logs.unwrap_or(true)
    }

    pub fn box_style(&self) -> BoxStyle {
        BoxStyle::new(self.get_width(), self.get_border())
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        constants::settings_path()
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn parse(text: &str) -> Result<Self, SettingsError> {
        Ok(Self::options().from_str(text)?)
    }

    pub fn to_ron(&self) -> Result<String, SettingsError> {
        Ok(Self::options().to_string_pretty(self, PrettyConfig::default())?)
    }

    /// Loads settings from `path`, a missing file gets created with the
    /// default settings first.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {:?}, writing defaults", path);
                Self::reset_config(path)?;
                Self::parse(DEFAULT_SETTINGS)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use super::{LogLevel, Settings, MIN_WIDTH};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("tmenu-test-{}", std::process::id()))
            .join(name)
            .join("settings.ron")
    }

    #[test]
    fn bundled_defaults_match_code_defaults() {
        let bundled = Settings::parse(super::DEFAULT_SETTINGS).unwrap();
        assert_eq!(bundled, Settings::new().populate());
    }

    #[test]
    fn partial_file() {
        let settings = Settings::parse("(width: 40, log_level: Debug)").unwrap();

        assert_eq!(settings.get_width(), 40);
        assert_eq!(settings.get_border(), '*');
        assert_eq!(settings.get_log_level(), LogLevel::Debug);
        assert!(settings.get_clear_screen());
        assert_eq!(settings.box_style().width, 40);
    }

    #[test]
    fn width_is_clamped() {
        let settings = Settings::new().set_width(2);
        assert_eq!(settings.get_width(), MIN_WIDTH);
    }

    #[test]
    fn broken_file_is_an_error() {
        assert!(Settings::parse("(width: \"wide\")").is_err());
    }

    #[test]
    fn load_creates_missing_file() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);

        let settings = Settings::load(&path).unwrap();
        assert!(path.exists());
        assert_eq!(settings.get_width(), 80);

        fs::write(&path, Settings::new().set_border('#').to_ron().unwrap()).unwrap();
        assert_eq!(Settings::load(&path).unwrap().get_border(), '#');
    }
}
