//! Event types for the homepage feed.
//!
//! This module provides the two record types the pipeline moves between:
//! - [`RawEvent`]: an unvalidated record as a source produced it
//! - [`NormalizedEvent`]: the canonical, display-ready event

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::format::pretty_date;

/// The substring in a recurrence rule that marks a weekly repeat.
///
/// Weekly repetition is the only recurrence the pipeline understands;
/// `COUNT`, `UNTIL`, `BYDAY` and other frequencies are ignored.
pub const WEEKLY_MARKER: &str = "FREQ=WEEKLY";

/// An unvalidated event record from an external source.
///
/// The shape of the record is not controlled by this system: sources emit an
/// opaque field map plus the two attributes the pipeline actually consumes,
/// which each source resolves from its own key names (`start.dateTime` for
/// the calendar API, the configured date column for the sheet file).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Source fields carried through unchanged to the normalized event.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,

    /// Raw start-time text, ISO-8601-like. `None` when the source record had
    /// no usable start field; the normalizer drops such records.
    pub start: Option<String>,

    /// Recurrence rule strings attached by the source, in source order.
    #[serde(default)]
    pub recurrence: Vec<String>,
}

impl RawEvent {
    /// Creates an empty raw event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the raw start-time text.
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Builder method to add a carried-through field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Builder method to set the recurrence rule strings.
    pub fn with_recurrence(mut self, rules: Vec<String>) -> Self {
        self.recurrence = rules;
        self
    }

    /// Returns the raw location field, if the source provided one.
    pub fn location(&self) -> Option<&str> {
        self.fields.get("location").map(String::as_str)
    }
}

/// The canonical event record produced by the normalizer.
///
/// Invariant: `start`, `pretty_date` and `url_safe_location` are always
/// populated. A raw record that cannot satisfy that is rejected whole rather
/// than producing a partial event.
///
/// All timestamps are timezone-naive: source offsets are stripped during
/// normalization and every comparison assumes the one implicit site timezone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEvent {
    /// Absolute start time, timezone-naive.
    pub start: NaiveDateTime,

    /// Display string derived from `start`,
    /// e.g. `"Monday, June 02 2025, 09:30am"`.
    pub pretty_date: String,

    /// Percent-encoded form of the raw location.
    pub url_safe_location: String,

    /// Recurrence rule strings carried from the raw record.
    #[serde(default)]
    pub recurrence: Vec<String>,

    /// All other source fields, carried through unchanged.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl NormalizedEvent {
    /// Returns the raw (unencoded) location.
    pub fn location(&self) -> &str {
        self.fields.get("location").map(String::as_str).unwrap_or_default()
    }

    /// Returns true if this event carries the weekly-recurrence marker:
    /// a non-empty rule list whose first entry contains [`WEEKLY_MARKER`].
    pub fn is_weekly_recurring(&self) -> bool {
        self.recurrence
            .first()
            .is_some_and(|rule| rule.contains(WEEKLY_MARKER))
    }

    /// Returns an independent copy advanced by the given number of days,
    /// with `pretty_date` recomputed for the shifted start.
    pub fn advanced_by_days(&self, days: i64) -> Self {
        let start = self.start + chrono::Duration::days(days);
        Self {
            start,
            pretty_date: pretty_date(start),
            ..self.clone()
        }
    }
}
