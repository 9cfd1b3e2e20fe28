//! Rolling time bounds for the feed.
//!
//! The feed never shows an event that started more than twelve hours ago,
//! and never synthesizes recurring copies past a fixed horizon. Both bounds
//! are derived from a `now` the caller passes in; callers that need one
//! consistent cutoff across several stages must compute it once and thread
//! it through rather than recomputing.

use chrono::{Duration, Local, NaiveDateTime};

/// How long an event stays visible after it has started, in hours.
pub const STALE_GRACE_HOURS: i64 = 12;

/// The lower bound below which events are considered stale: `now - 12h`.
pub fn stale_cutoff(now: NaiveDateTime) -> NaiveDateTime {
    now - Duration::hours(STALE_GRACE_HOURS)
}

/// The upper bound for recurrence expansion: `now + days`, saturating at
/// the edge of the representable range instead of overflowing.
pub fn expansion_horizon(now: NaiveDateTime, days: i64) -> NaiveDateTime {
    let fallback = if days >= 0 {
        NaiveDateTime::MAX
    } else {
        NaiveDateTime::MIN
    };
    Duration::try_days(days)
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(fallback)
}

/// The current wall-clock time, timezone-naive.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// [`stale_cutoff`] evaluated at the current wall-clock time.
///
/// Computed at call time, never cached: two calls made at different moments
/// differ by the elapsed gap.
pub fn current_stale_cutoff() -> NaiveDateTime {
    stale_cutoff(now_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn cutoff_is_twelve_hours_back() {
        let now = NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let cutoff = stale_cutoff(now);
        assert_eq!(now - cutoff, Duration::hours(12));
        assert_eq!(cutoff.time().hour(), 6);
    }

    #[test]
    fn horizon_is_days_forward() {
        let now = NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(expansion_horizon(now, 30) - now, Duration::days(30));
    }

    #[test]
    fn extreme_horizons_saturate_instead_of_overflowing() {
        let now = NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(expansion_horizon(now, i64::MAX), NaiveDateTime::MAX);
        assert_eq!(expansion_horizon(now, i64::MIN), NaiveDateTime::MIN);
    }

    #[test]
    fn current_cutoff_tracks_the_clock() {
        let before = stale_cutoff(now_local());
        let cutoff = current_stale_cutoff();
        let after = stale_cutoff(now_local());
        assert!(before <= cutoff && cutoff <= after);
    }
}
