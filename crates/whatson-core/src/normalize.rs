//! RawEvent to NormalizedEvent conversion.
//!
//! Normalization parses the raw start-time text into a timezone-naive
//! timestamp, derives the display date, and percent-encodes the location.
//! A record missing any required piece is dropped whole; the rest of the
//! batch continues. Rejections are logged at debug, never raised.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::event::{NormalizedEvent, RawEvent};
use crate::format::pretty_date;

/// Converts a [`RawEvent`] to a [`NormalizedEvent`].
///
/// Returns `None` when the record is rejected: no start-time text, start
/// text that does not parse, or no location field.
pub fn normalize(raw: &RawEvent) -> Option<NormalizedEvent> {
    let Some(start_text) = raw.start.as_deref() else {
        debug!("dropping event without a start time: {:?}", raw.fields);
        return None;
    };

    let Some(start) = parse_start(start_text) else {
        debug!(start = start_text, "dropping event with unparseable start");
        return None;
    };

    let Some(location) = raw.location() else {
        debug!(start = start_text, "dropping event without a location");
        return None;
    };

    Some(NormalizedEvent {
        start,
        pretty_date: pretty_date(start),
        url_safe_location: urlencoding::encode(location).into_owned(),
        recurrence: raw.recurrence.clone(),
        fields: raw.fields.clone(),
    })
}

/// Normalizes a batch of raw events, silently dropping rejected records.
pub fn normalize_all(raws: &[RawEvent]) -> Vec<NormalizedEvent> {
    raws.iter().filter_map(normalize).collect()
}

/// Parses ISO-8601-like start-time text into a naive timestamp.
///
/// An explicit UTC offset is stripped, keeping the wall-clock time: the
/// pipeline compares everything in the one implicit site timezone. Date-only
/// forms (the sheet file's `YYYY/MM/DD` column among them) resolve to
/// midnight.
fn parse_start(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y/%m/%d", "%Y-%m-%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn sample_raw() -> RawEvent {
        RawEvent::new()
            .with_start("2025-06-02T09:30:00")
            .with_field("location", "123 Main St, Apt #4")
            .with_field("summary", "Open mic")
    }

    mod start_parsing {
        use super::*;

        #[test]
        fn bare_datetime() {
            assert_eq!(
                parse_start("2025-06-02T09:30:00"),
                Some(naive(2025, 6, 2, 9, 30))
            );
            assert_eq!(
                parse_start("2025-06-02T09:30"),
                Some(naive(2025, 6, 2, 9, 30))
            );
        }

        #[test]
        fn offset_is_stripped_keeping_wall_clock() {
            assert_eq!(
                parse_start("2025-06-02T09:30:00-07:00"),
                Some(naive(2025, 6, 2, 9, 30))
            );
            assert_eq!(
                parse_start("2025-06-02T09:30:00Z"),
                Some(naive(2025, 6, 2, 9, 30))
            );
        }

        #[test]
        fn date_only_forms_resolve_to_midnight() {
            assert_eq!(parse_start("2025/06/02"), Some(naive(2025, 6, 2, 0, 0)));
            assert_eq!(parse_start("2025-06-02"), Some(naive(2025, 6, 2, 0, 0)));
        }

        #[test]
        fn garbage_is_rejected() {
            assert_eq!(parse_start("next tuesday"), None);
            assert_eq!(parse_start(""), None);
            assert_eq!(parse_start("2025/13/40"), None);
        }
    }

    mod rejection {
        use super::*;

        #[test]
        fn missing_start() {
            let raw = RawEvent::new().with_field("location", "Town Hall");
            assert!(normalize(&raw).is_none());
        }

        #[test]
        fn unparseable_start() {
            let raw = sample_raw().with_start("whenever");
            assert!(normalize(&raw).is_none());
        }

        #[test]
        fn missing_location() {
            let raw = RawEvent::new().with_start("2025-06-02T09:30:00");
            assert!(normalize(&raw).is_none());
        }

        #[test]
        fn batch_continues_past_rejects() {
            let raws = vec![
                RawEvent::new().with_field("location", "no start"),
                sample_raw(),
                sample_raw().with_start("garbage"),
            ];
            let normalized = normalize_all(&raws);
            assert_eq!(normalized.len(), 1);
            assert_eq!(normalized[0].start, naive(2025, 6, 2, 9, 30));
        }
    }

    mod derived_fields {
        use super::*;

        #[test]
        fn populates_all_three_invariant_fields() {
            let event = normalize(&sample_raw()).unwrap();
            assert_eq!(event.start, naive(2025, 6, 2, 9, 30));
            assert_eq!(event.pretty_date, "Monday, June 02 2025, 09:30am");
            assert!(!event.url_safe_location.is_empty());
        }

        #[test]
        fn location_is_percent_encoded() {
            let event = normalize(&sample_raw()).unwrap();
            assert!(!event.url_safe_location.contains(' '));
            assert!(!event.url_safe_location.contains('#'));
            assert_eq!(event.url_safe_location, "123%20Main%20St%2C%20Apt%20%234");
        }

        #[test]
        fn other_fields_carry_through() {
            let event = normalize(&sample_raw()).unwrap();
            assert_eq!(event.fields.get("summary").unwrap(), "Open mic");
            assert_eq!(event.location(), "123 Main St, Apt #4");
        }

        #[test]
        fn recurrence_carries_through() {
            let raw = sample_raw().with_recurrence(vec!["RRULE:FREQ=WEEKLY".to_string()]);
            let event = normalize(&raw).unwrap();
            assert!(event.is_weekly_recurring());
        }
    }
}
