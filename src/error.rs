use std::path::PathBuf;
use thiserror::Error;

/// Main error type for configuration resolution
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid configuration: {}", reasons.join("; "))]
    Validation { reasons: Vec<String> },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to determine the home directory")]
    HomeDirUnavailable,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ConfigError {
    pub fn parse<P: Into<PathBuf>>(path: P, source: serde_yaml::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn validation(reasons: Vec<String>) -> Self {
        Self::Validation { reasons }
    }

    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        Self::Serialization(msg.into())
    }

    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Individual rule failures when this is a validation error
    pub fn reasons(&self) -> &[String] {
        match self {
            Self::Validation { reasons } => reasons,
            _ => &[],
        }
    }
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_joins_reasons() {
        let err = ConfigError::validation(vec![
            "must specify an account".to_string(),
            "must specify an appliance URL".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid configuration: must specify an account; must specify an appliance URL"
        );
        assert_eq!(err.reasons().len(), 2);
    }

    #[test]
    fn test_parse_error_names_path() {
        let source = serde_yaml::from_str::<serde_yaml::Value>("a: \"\\p\"").unwrap_err();
        let err = ConfigError::parse("/tmp/.conjurrc", source);
        assert!(err.to_string().starts_with("failed to parse /tmp/.conjurrc"));
        assert!(err.reasons().is_empty());
    }
}
