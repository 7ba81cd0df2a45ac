use std::path::PathBuf;

/// Reasons a drop is rejected. The `Display` text is what the player sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid column")]
    InvalidColumn,

    #[error("Column is full")]
    ColumnFull,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::InvalidColumn.to_string(), "Invalid column");
        assert_eq!(MoveError::ColumnFull.to_string(), "Column is full");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ui.tick_rate_ms must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ui.tick_rate_ms must be > 0"
        );
    }

    #[test]
    fn test_file_read_error_names_path() {
        let err = ConfigError::FileRead {
            path: PathBuf::from("missing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("failed to read config file missing.toml"));
    }
}
