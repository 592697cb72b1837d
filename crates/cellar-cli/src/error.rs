//! Error types for cellar-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from cellar-brew
    #[error(transparent)]
    Brew(#[from] cellar_brew::Error),

    /// Error from cellar-manifest
    #[error(transparent)]
    Manifest(#[from] cellar_manifest::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Config file deserialization error
    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
