use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NosyError {
    #[error("Duplicate channel id: {id}")]
    DuplicateChannelId { id: String },

    #[error("Profile audience must not be empty")]
    EmptyAudience,

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Home directory not found")]
    HomeNotFound,

    #[error("GUI error: {0}")]
    Gui(String),
}

pub type Result<T> = std::result::Result<T, NosyError>;

impl NosyError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigParse { .. } | Self::TomlDe(_) => 2,
            Self::ConfigKeyNotFound { .. } => 3,
            Self::DuplicateChannelId { .. } => 4,
            Self::EmptyAudience => 5,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(
            NosyError::DuplicateChannelId {
                id: "1".to_string()
            }
            .exit_code(),
            4
        );
        assert_eq!(NosyError::EmptyAudience.exit_code(), 5);
        assert_eq!(NosyError::HomeNotFound.exit_code(), 1);
    }

    #[test]
    fn display_messages() {
        let err = NosyError::ConfigKeyNotFound {
            key: "log.colour".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown config key: log.colour");
    }
}
