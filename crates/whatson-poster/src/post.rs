//! Posting backends.

use std::time::Duration;

use tracing::info;

use crate::error::PostError;

/// Something that can publish one message.
///
/// The remote service's semantics are out of scope; implementations only
/// promise "accepted" or an error.
pub trait Poster {
    /// Publishes one message.
    fn post(&self, message: &str) -> Result<(), PostError>;
}

/// Posts messages to an HTTP status endpoint with a bearer token.
#[derive(Debug)]
pub struct HttpPoster {
    http: reqwest::blocking::Client,
    endpoint: String,
    token: String,
}

impl HttpPoster {
    /// Creates a poster for the given endpoint.
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, PostError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }
}

impl Poster for HttpPoster {
    fn post(&self, message: &str) -> Result<(), PostError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "status": message }))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(PostError::Rejected {
                status: status.as_u16(),
            });
        }

        info!(status = status.as_u16(), "posted message");
        Ok(())
    }
}

/// Prints what would be posted instead of posting. Used by `--dry-run`.
#[derive(Debug, Default)]
pub struct DryRunPoster;

impl Poster for DryRunPoster {
    fn post(&self, message: &str) -> Result<(), PostError> {
        info!(message, "dry run, not posting");
        Ok(())
    }
}
