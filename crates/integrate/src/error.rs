use thiserror::Error;

/// Result type for integration operations
pub type Result<T> = std::result::Result<T, IntegrateError>;

/// Errors that can occur while joining model and schedule data
#[derive(Error, Debug)]
pub enum IntegrateError {
    /// An extraction step failed
    #[error("Extraction failed: {0}")]
    Extract(#[from] bimxer_extract::ExtractError),

    /// Generic error
    #[error("Error integrating IFC and XER data: {0}")]
    Other(String),
}

impl IntegrateError {
    /// Create a generic integration error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
