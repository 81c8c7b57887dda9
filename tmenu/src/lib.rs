pub mod constants;
pub mod demo;
pub mod logging;
pub mod settings;
pub mod term;

use std::{io, path::Path};

use cmenu::MenuError;
use thiserror::Error;

use settings::{Settings, SettingsError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Menu error: {0}")]
    Menu(#[from] MenuError),
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("Console error: {0}")]
    Io(#[from] io::Error),
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Installs the logger, then loads the settings and applies their log level.
/// Messages logged while loading are kept.
pub fn start(settings_path: &Path) -> Result<Settings, AppError> {
    logging::init(log::Level::Info)?;

    let settings = Settings::load(settings_path)?;
    logging::get_logger().set_min_level(settings.get_log_level().into());
    log::info!("Settings loaded from {:?}", settings_path);

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::{error::Error, fs};

    use super::{logging, start, AppError};

    #[test]
    fn start_keeps_load_messages() {
        let dir = std::env::temp_dir().join(format!("tmenu-start-{}", std::process::id()));
        let path = dir.join("settings.ron");
        let _ = fs::remove_file(&path);

        let settings = start(&path).unwrap();

        assert_eq!(
            logging::get_logger().min_level(),
            log::Level::from(settings.get_log_level())
        );
        assert!(logging::get_logger()
            .get_logs()
            .iter()
            .any(|msg| msg.message.contains("writing defaults")));

        // the global logger can only be installed once
        let err = start(&path).unwrap_err();
        assert!(matches!(err, AppError::Logger(_)));
        assert!(err.source().is_some());

        let _ = fs::remove_dir_all(&dir);
    }
}
