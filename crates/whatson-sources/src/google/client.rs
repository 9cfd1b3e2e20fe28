//! Low-level Calendar API client: request building, pagination, conversion.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use whatson_core::RawEvent;

use crate::error::{SourceError, SourceResult};

/// Base URL for the Calendar API v3.
const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// One page of an `events.list` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiEventPage {
    #[serde(default)]
    items: Vec<ApiEvent>,
    next_page_token: Option<String>,
}

/// An event item as the API returns it; only the consumed fields are typed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEvent {
    summary: Option<String>,
    description: Option<String>,
    location: Option<String>,
    html_link: Option<String>,
    status: Option<String>,
    start: Option<ApiEventTime>,
    recurrence: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEventTime {
    date_time: Option<String>,
    date: Option<String>,
}

impl ApiEvent {
    /// Converts to the pipeline's raw record.
    ///
    /// The conversion never rejects: records with missing pieces still flow
    /// through, and the normalizer decides what to drop.
    fn into_raw(self) -> RawEvent {
        let mut raw = RawEvent::new();

        if let Some(start) = self.start {
            if let Some(text) = start.date_time.or(start.date) {
                raw = raw.with_start(text);
            }
        }
        if let Some(rules) = self.recurrence {
            raw = raw.with_recurrence(rules);
        }

        for (name, value) in [
            ("summary", self.summary),
            ("description", self.description),
            ("location", self.location),
            ("link", self.html_link),
            ("status", self.status),
        ] {
            if let Some(value) = value {
                raw = raw.with_field(name, value);
            }
        }

        raw
    }
}

/// Walks the pagination chain, converting each page's items.
///
/// `fetch` is called with the continuation token (`None` for the first
/// page); the chain ends when a page carries no token.
fn collect_pages<F>(mut fetch: F) -> SourceResult<Vec<RawEvent>>
where
    F: FnMut(Option<&str>) -> SourceResult<ApiEventPage>,
{
    let mut events = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = fetch(page_token.as_deref())?;
        events.extend(page.items.into_iter().map(ApiEvent::into_raw));

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    Ok(events)
}

/// Blocking HTTP client for the Calendar API.
#[derive(Debug)]
pub struct CalendarApiClient {
    http: reqwest::blocking::Client,
    access_token: String,
}

impl CalendarApiClient {
    /// Creates a client with the given access token and per-request timeout.
    pub fn new(access_token: impl Into<String>, timeout: Duration) -> SourceResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            access_token: access_token.into(),
        })
    }

    /// Lists every event in a calendar, following pagination to the end.
    pub fn list_events(&self, calendar_id: &str) -> SourceResult<Vec<RawEvent>> {
        collect_pages(|page_token| self.fetch_page(calendar_id, page_token))
    }

    fn fetch_page(
        &self,
        calendar_id: &str,
        page_token: Option<&str>,
    ) -> SourceResult<ApiEventPage> {
        let url = format!("{}/calendars/{}/events", CALENDAR_API_BASE, calendar_id);

        let mut request = self.http.get(&url).bearer_auth(&self.access_token);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        debug!(calendar = calendar_id, page_token, "requesting events page");
        let response = request.send()?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(SourceError::Authentication(format!(
                "calendar API rejected the token ({})",
                status
            )));
        }
        if !status.is_success() {
            return Err(SourceError::InvalidResponse(format!(
                "calendar API returned {}",
                status
            )));
        }

        response
            .json::<ApiEventPage>()
            .map_err(|e| SourceError::InvalidResponse(format!("bad events page: {}", e)))
    }
}
