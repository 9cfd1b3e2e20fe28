//! Display formatting for event start times.

use chrono::NaiveDateTime;

/// Formats a start time for homepage display.
///
/// The format is full weekday name, full month name, zero-padded day,
/// four-digit year, then 12-hour time with a lowercase meridiem:
/// `"Monday, June 02 2025, 09:30am"`.
pub fn pretty_date(start: NaiveDateTime) -> String {
    let formatted = start.format("%A, %B %d %Y, %I:%M%p").to_string();
    // chrono renders the meridiem uppercase; the site wants "09:30am".
    let split = formatted.len() - 2;
    format!(
        "{}{}",
        &formatted[..split],
        formatted[split..].to_ascii_lowercase()
    )
}
