//! Rendering of the event list for the terminal.

use whatson_core::NormalizedEvent;

/// Renders events as one text line each.
///
/// Each line carries the pretty date, the summary when the source provided
/// one, and the location.
pub fn render_text(events: &[NormalizedEvent]) -> String {
    if events.is_empty() {
        return "No upcoming events.".to_string();
    }

    events
        .iter()
        .map(|event| match event.fields.get("summary") {
            Some(summary) => {
                format!("{} - {} @ {}", event.pretty_date, summary, event.location())
            }
            None => format!("{} @ {}", event.pretty_date, event.location()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders events as pretty-printed JSON.
pub fn render_json(events: &[NormalizedEvent]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(events)
}
