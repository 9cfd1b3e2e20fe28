//! Post file loading and length validation.

use std::path::Path;

use crate::error::PostError;

/// Maximum allowed length of one post, in characters.
pub const MAX_POST_CHARS: usize = 140;

/// Reads the post file: one message per non-blank line, with the optional
/// tag suffix appended to each.
pub fn load_messages(path: &Path, tag: Option<&str>) -> Result<Vec<String>, PostError> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match tag {
            Some(tag) => format!("{} {}", line.trim_end(), tag),
            None => line.trim_end().to_string(),
        })
        .collect())
}

/// Returns true when the message fits the length constraint.
pub fn is_valid(message: &str) -> bool {
    message.chars().count() <= MAX_POST_CHARS
}

/// Returns the messages that fail validation, with their 1-based positions.
pub fn invalid_messages(messages: &[String]) -> Vec<(usize, &str)> {
    messages
        .iter()
        .enumerate()
        .filter(|(_, m)| !is_valid(m))
        .map(|(i, m)| (i + 1, m.as_str()))
        .collect()
}
