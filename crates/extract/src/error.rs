use thiserror::Error;

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while scraping source files
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Failed to read the underlying input
    #[error("Error reading {file}: {source}")]
    ReadError {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A scan pattern failed to compile
    #[error("Pattern error: {0}")]
    PatternError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl ExtractError {
    /// Create a read error for the given file
    pub fn read(file: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            file: file.into(),
            source,
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a pattern error
    pub fn pattern(msg: impl Into<String>) -> Self {
        Self::PatternError(msg.into())
    }
}
