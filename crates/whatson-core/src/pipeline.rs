//! The full normalize → expand → select pipeline over one raw batch.

use chrono::NaiveDateTime;

use crate::event::{NormalizedEvent, RawEvent};
use crate::expand::expand_all;
use crate::normalize::normalize_all;
use crate::select::select;

/// Runs one batch of raw records through every stage.
///
/// This is the single consolidated pipeline; stages are never reordered or
/// applied piecemeal elsewhere. `now` is threaded through so the stale
/// cutoff is consistent across expansion and selection.
pub fn run(raws: &[RawEvent], now: NaiveDateTime, horizon_days: i64) -> Vec<NormalizedEvent> {
    let normalized = normalize_all(raws);
    let expanded = expand_all(&normalized, now, horizon_days);
    select(&expanded, now)
}
