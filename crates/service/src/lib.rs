//! Business logic for launchwatch.
//!
//! Fetch → diff against the record store → render → notify, in one pass.

pub mod detector;
pub mod digest;
mod error;
mod watch_service;

pub use detector::{ChangeDetector, ChangeSet};
pub use digest::render_digest;
pub use error::ServiceError;
pub use watch_service::{RunReport, WatchService};
