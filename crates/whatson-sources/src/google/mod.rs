//! Google Calendar event source.
//!
//! Fetches raw events from the Calendar API v3 `events.list` endpoint,
//! following `nextPageToken` pagination until the token disappears.
//!
//! OAuth consent and token refresh are out of scope here: the source reads a
//! ready-to-use access token from the configured token file. A missing file
//! or a rejected token surfaces as a [`SourceError`](crate::SourceError),
//! which the feed downgrades to "no events available".

mod client;
mod config;

pub use client::CalendarApiClient;
pub use config::GoogleConfig;

use tracing::debug;
use whatson_core::RawEvent;

use crate::error::SourceResult;
use crate::source::EventSource;

/// Event source backed by a Google calendar.
pub struct GoogleCalendarSource {
    config: GoogleConfig,
}

impl GoogleCalendarSource {
    /// Creates a source for the configured calendar.
    pub fn new(config: GoogleConfig) -> Self {
        Self { config }
    }
}

impl EventSource for GoogleCalendarSource {
    fn name(&self) -> &str {
        "google"
    }

    fn fetch_all(&self) -> SourceResult<Vec<RawEvent>> {
        let access_token = self.config.load_access_token()?;
        let client = CalendarApiClient::new(access_token, self.config.timeout())?;
        let events = client.list_events(&self.config.calendar_id)?;
        debug!(calendar = %self.config.calendar_id, count = events.len(), "calendar fetch complete");
        Ok(events)
    }
}
