use thiserror::Error;

/// Unified error type for version-gate operations
#[derive(Error, Debug)]
pub enum VersionGateError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Git command failed: {0}")]
    GitCommand(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("{path} file not found")]
    VersionFileNotFound { path: String },

    #[error("Invalid semantic version format in {path}: {content}")]
    InvalidVersionFile { path: String, content: String },

    #[error("Error reading {path}: {source}")]
    ReadVersionFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Tag error: {0}")]
    Tag(String),
}

/// Convenience type alias for Results in version-gate
pub type Result<T> = std::result::Result<T, VersionGateError>;

impl VersionGateError {
    /// Create a git command error with context
    pub fn git_command(msg: impl Into<String>) -> Self {
        VersionGateError::GitCommand(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionGateError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        VersionGateError::InvalidVersion(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        VersionGateError::Tag(msg.into())
    }
}
