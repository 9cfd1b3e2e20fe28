//! The posting loop.

use tracing::{debug, info, warn};

use crate::error::PostError;
use crate::post::Poster;
use crate::used::UsedLog;

/// Minimum allowed posting interval, enforced before the loop starts.
pub const MIN_INTERVAL_HOURS: f64 = 12.0;

/// Returns true when the interval is long enough to start the loop.
///
/// Non-finite input fails the check; a plain `< MIN` comparison would wave
/// `NaN` through.
pub fn interval_is_allowed(hours: f64) -> bool {
    hours.is_finite() && hours >= MIN_INTERVAL_HOURS
}

/// Posts each not-yet-used message in order, waiting between sends.
///
/// The used log is appended *before* the send, so an interrupted run skips
/// the message next time instead of posting it twice. With `record_used`
/// off (dry runs) the log is still consulted for skipping but never written.
///
/// `wait` is called after every send; the binary passes a real sleep, tests
/// pass a no-op.
pub fn run_loop(
    messages: &[String],
    used_log: &UsedLog,
    poster: &dyn Poster,
    record_used: bool,
    mut wait: impl FnMut(),
) -> Result<(), PostError> {
    let mut used = used_log.load()?;
    let mut sent = 0usize;

    for message in messages {
        if used.contains(message) {
            debug!(message = %message, "already sent, skipping");
            continue;
        }

        if record_used {
            used_log.append(message)?;
            used.insert(message.clone());
        }
        poster.post(message)?;
        sent += 1;

        info!("waiting until the next post");
        wait();
    }

    warn!(sent, "ran out of new messages");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingPoster {
        posted: RefCell<Vec<String>>,
        fail: bool,
    }

    impl RecordingPoster {
        fn new() -> Self {
            Self {
                posted: RefCell::new(Vec::new()),
                fail: false,
            }
        }
    }

    impl Poster for RecordingPoster {
        fn post(&self, message: &str) -> Result<(), PostError> {
            if self.fail {
                return Err(PostError::Rejected { status: 500 });
            }
            self.posted.borrow_mut().push(message.to_string());
            Ok(())
        }
    }

    fn messages(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    mod interval {
        use super::*;

        #[test]
        fn twelve_hours_is_the_floor() {
            assert!(!interval_is_allowed(11.9));
            assert!(interval_is_allowed(12.0));
            assert!(interval_is_allowed(24.0));
        }

        #[test]
        fn non_finite_intervals_are_rejected() {
            assert!(!interval_is_allowed(f64::NAN));
            assert!(!interval_is_allowed(f64::INFINITY));
            assert!(!interval_is_allowed(f64::NEG_INFINITY));
        }
    }

    #[test]
    fn posts_unused_messages_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = UsedLog::new(dir.path().join("used"));
        let poster = RecordingPoster::new();
        let mut waits = 0;

        run_loop(&messages(&["a", "b"]), &log, &poster, true, || waits += 1).unwrap();

        assert_eq!(*poster.posted.borrow(), vec!["a", "b"]);
        assert_eq!(waits, 2);
    }

    #[test]
    fn skips_messages_already_in_the_log() {
        let dir = tempfile::tempdir().unwrap();
        let log = UsedLog::new(dir.path().join("used"));
        log.append("a").unwrap();

        let poster = RecordingPoster::new();
        run_loop(&messages(&["a", "b"]), &log, &poster, true, || {}).unwrap();

        assert_eq!(*poster.posted.borrow(), vec!["b"]);
    }

    #[test]
    fn records_before_posting() {
        let dir = tempfile::tempdir().unwrap();
        let log = UsedLog::new(dir.path().join("used"));
        let poster = RecordingPoster {
            posted: RefCell::new(Vec::new()),
            fail: true,
        };

        let result = run_loop(&messages(&["a"]), &log, &poster, true, || {});
        assert!(result.is_err());
        // The failed message is logged as used: skip, don't double-post.
        assert!(log.load().unwrap().contains("a"));
    }

    #[test]
    fn dry_run_never_touches_the_log() {
        let dir = tempfile::tempdir().unwrap();
        let log = UsedLog::new(dir.path().join("used"));
        let poster = RecordingPoster::new();

        run_loop(&messages(&["a", "b"]), &log, &poster, false, || {}).unwrap();

        assert_eq!(poster.posted.borrow().len(), 2);
        assert!(log.load().unwrap().is_empty());
    }

    #[test]
    fn repeated_message_in_the_file_is_sent_once() {
        let dir = tempfile::tempdir().unwrap();
        let log = UsedLog::new(dir.path().join("used"));
        let poster = RecordingPoster::new();

        run_loop(&messages(&["a", "a"]), &log, &poster, true, || {}).unwrap();

        assert_eq!(*poster.posted.borrow(), vec!["a"]);
    }
}
