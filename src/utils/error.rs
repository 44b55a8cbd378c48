use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpmError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Settings parsing error: {0}")]
    SettingsParseError(#[from] toml::de::Error),

    #[error("Settings serialization error: {0}")]
    SettingsWriteError(#[from] toml::ser::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Git command failed: git {arguments}")]
    GitCommandError {
        arguments: String,
        code: Option<i32>,
    },

    #[error("Failed to launch git: {reason}. Is git installed and on PATH?")]
    GitLaunchError { reason: String },

    #[error("Package folder is not inside the git repository: {path}")]
    OutsideRepositoryError { path: String },
}

pub type Result<T> = std::result::Result<T, UpmError>;
