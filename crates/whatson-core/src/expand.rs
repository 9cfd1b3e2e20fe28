//! Weekly recurrence expansion.
//!
//! A weekly-recurring event arrives from its source once; this stage
//! synthesizes the copies that fall within the display horizon, each shifted
//! by whole weeks and independently re-dated.

use chrono::{Duration, NaiveDateTime};

use crate::event::NormalizedEvent;
use crate::time::{expansion_horizon, stale_cutoff};

/// Default number of days into the future to expand recurring events.
pub const DEFAULT_HORIZON_DAYS: i64 = 30;

/// Largest accepted expansion horizon, in days (ten years).
pub const MAX_HORIZON_DAYS: i64 = 3650;

/// Expands a weekly-recurring event into copies up to `now + horizon_days`.
///
/// Non-recurring events come back as a single-element list, unchanged.
/// Copies are deep and independent, each with `pretty_date` recomputed for
/// its shifted start. Copies older than the stale cutoff are skipped here
/// only to bound the loop; the select stage owns the authoritative staleness
/// decision, including for the original event itself. The result is
/// deliberately unsorted — ordering is the next stage's job.
pub fn expand(
    event: &NormalizedEvent,
    now: NaiveDateTime,
    horizon_days: i64,
) -> Vec<NormalizedEvent> {
    if !event.is_weekly_recurring() {
        return vec![event.clone()];
    }

    let min_cutoff = stale_cutoff(now);
    let max_cutoff = expansion_horizon(now, horizon_days);

    let mut expanded = vec![event.clone()];
    let mut offset_days = 7i64;
    // Checked advance: a horizon at the edge of the representable range
    // ends the series instead of overflowing the timestamp.
    while let Some(start) = event.start.checked_add_signed(Duration::days(offset_days)) {
        if start > max_cutoff {
            break;
        }
        if start >= min_cutoff {
            expanded.push(event.advanced_by_days(offset_days));
        }
        offset_days += 7;
    }

    expanded
}

/// Expands every event in a batch, flattening the copies into one list.
pub fn expand_all(
    events: &[NormalizedEvent],
    now: NaiveDateTime,
    horizon_days: i64,
) -> Vec<NormalizedEvent> {
    events
        .iter()
        .flat_map(|event| expand(event, now, horizon_days))
        .collect()
}
