//! Core event pipeline: raw records in, display-ready events out.
//!
//! The pipeline runs in four stages, each a pure function over the previous
//! stage's output:
//!
//! ```text
//! RawEvent ──normalize──▶ NormalizedEvent ──expand──▶ (weekly copies)
//!                                                         │
//!                                          select ◀───────┘
//!                                            │
//!                                            ▼
//!                               ordered, time-filtered events
//! ```
//!
//! Sources (calendar API, sheet file) live in `whatson-sources`; this crate
//! performs no I/O and takes `now` as an explicit argument everywhere so the
//! stages stay deterministic under test.

pub mod event;
pub mod expand;
pub mod format;
pub mod normalize;
pub mod pipeline;
pub mod select;
pub mod time;

pub use event::{NormalizedEvent, RawEvent};
pub use expand::{DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS, expand, expand_all};
pub use format::pretty_date;
pub use normalize::{normalize, normalize_all};
pub use select::select;
pub use time::{STALE_GRACE_HOURS, current_stale_cutoff, expansion_horizon, now_local, stale_cutoff};
