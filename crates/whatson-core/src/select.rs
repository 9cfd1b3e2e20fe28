//! Final filter and ordering stage.

use chrono::NaiveDateTime;

use crate::event::NormalizedEvent;
use crate::time::stale_cutoff;

/// Keeps events strictly newer than `now - 12h`, ordered by start ascending.
///
/// The sort is stable, so events sharing a start keep their original
/// relative order. Pure: the input is not mutated.
pub fn select(events: &[NormalizedEvent], now: NaiveDateTime) -> Vec<NormalizedEvent> {
    let cutoff = stale_cutoff(now);
    let mut kept: Vec<NormalizedEvent> = events
        .iter()
        .filter(|event| event.start > cutoff)
        .cloned()
        .collect();
    kept.sort_by_key(|event| event.start);
    kept
}
