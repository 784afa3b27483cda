use thiserror::Error;

/// Classifies rule-list loading errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListErrorKind {
    /// A required ICANN/PRIVATE section marker is missing from the list text
    MissingMarker,
    /// Download failure (network error or non-200 response)
    DownloadFailed,
    /// Snapshot file is missing or cannot be decoded
    InvalidSnapshot,
    /// Required path not configured
    NotConfigured,
}

/// TLD engine error types
#[derive(Error, Debug)]
pub enum TldError {
    #[error("Rule list error: {message}")]
    ListError {
        kind: ListErrorKind,
        message: String,
    },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TldError>;
