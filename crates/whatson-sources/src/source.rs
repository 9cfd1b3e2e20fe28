//! The EventSource trait.

use whatson_core::RawEvent;

use crate::error::SourceResult;

/// A producer of raw event records.
///
/// Sources are deliberately synchronous: one homepage render triggers one
/// blocking fetch per source with no shared state between requests. A host
/// with its own concurrency should wrap calls in its own timeout, since a
/// slow remote otherwise stalls the render.
///
/// Implementations resolve their own field naming into [`RawEvent`]'s
/// contract: raw start-time text in `start`, everything else in `fields`.
pub trait EventSource {
    /// A short name for logs (e.g. "google", "sheet").
    fn name(&self) -> &str;

    /// Fetches every available raw record.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::SourceError`] when the source is unavailable;
    /// the feed treats that as "no events from this source".
    fn fetch_all(&self) -> SourceResult<Vec<RawEvent>>;
}
