use std::path::{Path, PathBuf};

use tracing_subscriber::filter::LevelFilter;

use crate::error::ConfigError;
use crate::game::COLS;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column the cursor starts on (0-based).
    pub initial_column: usize,
    /// How long to wait for input before redrawing, in milliseconds.
    pub tick_rate_ms: u64,
    pub highlight_last_move: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            initial_column: 3,
            tick_rate_ms: 100,
            highlight_last_move: true,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level filter; `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Log file. Nothing is logged when unset since the terminal belongs to
    /// the UI.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.initial_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "ui.initial_column must be in [0, {}]",
                COLS - 1
            )));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.tick_rate_ms must be > 0".into(),
            ));
        }
        if self.logging.level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not a valid level",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
