//! Error types for event sources.
//!
//! Every variant degrades the same way at the feed boundary: the source
//! contributes no events and the render continues. The distinctions exist
//! for logging.

use thiserror::Error;

/// An error while fetching raw events from a source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Missing or invalid source configuration (absent token file, bad path).
    #[error("configuration: {0}")]
    Configuration(String),

    /// Credentials were rejected or have expired.
    #[error("authentication: {0}")]
    Authentication(String),

    /// The transport failed: connection, timeout, DNS.
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    /// The remote answered with something we could not use.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Reading a local source file failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_category() {
        let err = SourceError::Configuration("no token file".to_string());
        assert_eq!(err.to_string(), "configuration: no token file");

        let err = SourceError::Authentication("token expired".to_string());
        assert!(err.to_string().starts_with("authentication:"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SourceError = io.into();
        assert!(matches!(err, SourceError::Io(_)));
    }
}
