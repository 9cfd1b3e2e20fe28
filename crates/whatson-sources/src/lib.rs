//! Event sources and the feed that merges them.
//!
//! This crate provides the abstraction over where raw events come from:
//!
//! - [`EventSource`] - the trait every backend implements
//! - [`GoogleCalendarSource`] - paginated fetch from the Calendar API
//! - [`SheetSource`] - tab-separated static event file
//! - [`EventFeed`] - the single entry point the presentation layer consumes
//!
//! A failing source is never fatal: the feed logs the failure and renders
//! whatever the remaining sources produced, down to an empty list.

pub mod error;
pub mod feed;
pub mod google;
pub mod sheet;
pub mod source;

pub use error::{SourceError, SourceResult};
pub use feed::EventFeed;
pub use google::{GoogleCalendarSource, GoogleConfig};
pub use sheet::{SheetConfig, SheetSource};
pub use source::EventSource;
