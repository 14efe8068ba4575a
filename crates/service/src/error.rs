//! Typed error enum for the service layer.
//!
//! Everything here is fatal for a run. Notification failures never reach this
//! type; the notifier logs and swallows them.

use launchwatch_schedule::FetchError;
use launchwatch_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and fetch failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Record store operation failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Schedule API call failed or returned a malformed body.
    #[error("fetch: {0}")]
    Fetch(#[from] FetchError),
}

impl ServiceError {
    /// Whether this error is likely transient (worth re-running later).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            Self::Fetch(e) => e.is_transient(),
        }
    }
}
