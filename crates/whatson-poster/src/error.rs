//! Error types for the poster.

use thiserror::Error;

/// An error while loading, validating or sending posts.
#[derive(Debug, Error)]
pub enum PostError {
    /// Reading the post file or the used-items log failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// The posting endpoint could not be reached.
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    /// The posting endpoint refused the message.
    #[error("endpoint returned {status}")]
    Rejected { status: u16 },
}
