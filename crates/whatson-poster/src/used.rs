//! The append-only used-items log.
//!
//! A flat newline-separated file of messages that have already been sent.
//! An absent file means nothing has been sent yet. The log is appended in
//! front of every send, so a crash mid-post errs on the side of skipping
//! rather than double-posting.

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::PostError;

/// Handle on the used-items log file.
#[derive(Debug)]
pub struct UsedLog {
    path: PathBuf,
}

impl UsedLog {
    /// Creates a handle for the given log path; the file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the set of already-sent messages.
    pub fn load(&self) -> Result<HashSet<String>, PostError> {
        if !self.path.is_file() {
            return Ok(HashSet::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(content
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Appends one message to the log.
    pub fn append(&self, message: &str) -> Result<(), PostError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_is_an_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let log = UsedLog::new(dir.path().join("used_posts"));
        assert!(log.load().unwrap().is_empty());
    }

    #[test]
    fn append_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let log = UsedLog::new(dir.path().join("used_posts"));

        log.append("first post").unwrap();
        log.append("second post").unwrap();

        let used = log.load().unwrap();
        assert_eq!(used.len(), 2);
        assert!(used.contains("first post"));
        assert!(used.contains("second post"));
    }

    #[test]
    fn appends_do_not_clobber_existing_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("used_posts");
        std::fs::write(&path, "already sent\n").unwrap();

        let log = UsedLog::new(&path);
        log.append("new one").unwrap();

        let used = log.load().unwrap();
        assert!(used.contains("already sent"));
        assert!(used.contains("new one"));
    }
}
