//! The merged event feed consumed by the presentation layer.

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use whatson_core::{DEFAULT_HORIZON_DAYS, NormalizedEvent, now_local, pipeline};

use crate::source::EventSource;

/// Produces the ordered, filtered, recurrence-expanded event list.
///
/// The feed is constructed with an explicit set of sources; which sources
/// exist is a configuration decision made by the caller, not ambient state.
/// An empty set is valid and yields an empty feed.
pub struct EventFeed {
    sources: Vec<Box<dyn EventSource>>,
    horizon_days: i64,
}

impl EventFeed {
    /// Creates a feed with no sources and the default 30-day horizon.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }

    /// Builder method to add a source.
    pub fn with_source(mut self, source: Box<dyn EventSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Builder method to set the recurrence-expansion horizon.
    pub fn with_horizon_days(mut self, days: i64) -> Self {
        self.horizon_days = days;
        self
    }

    /// Returns the display-ready event list for the given `now`.
    ///
    /// Unavailable sources are logged at warn and skipped; no error from a
    /// source ever reaches the caller. All stages share the one `now`.
    pub fn upcoming(&self, now: NaiveDateTime) -> Vec<NormalizedEvent> {
        let mut raws = Vec::new();
        for source in &self.sources {
            match source.fetch_all() {
                Ok(batch) => {
                    debug!(source = source.name(), count = batch.len(), "fetched raw events");
                    raws.extend(batch);
                }
                Err(err) => {
                    warn!(source = source.name(), error = %err, "source unavailable, showing fewer events");
                }
            }
        }
        pipeline::run(&raws, now, self.horizon_days)
    }

    /// [`EventFeed::upcoming`] evaluated at the current wall-clock time.
    pub fn upcoming_now(&self) -> Vec<NormalizedEvent> {
        self.upcoming(now_local())
    }
}

impl Default for EventFeed {
    fn default() -> Self {
        Self::new()
    }
}
