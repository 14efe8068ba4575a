//! Record store abstraction consulted by the change detector.

use launchwatch_core::{LaunchSummary, StoredRecord};

use crate::error::StorageError;

/// Existence and equality queries over previously seen launches.
///
/// Rows are only ever appended; nothing here updates or deletes.
pub trait LaunchStore {
    /// Number of rows stored under `name`, whatever their date.
    fn count_by_name(&self, name: &str) -> Result<u64, StorageError>;

    /// Number of rows stored under `launch.name` whose date differs from `launch.date`.
    fn count_with_other_date(&self, launch: &LaunchSummary) -> Result<u64, StorageError>;

    /// Whether the exact (name, date) pair is stored.
    fn contains(&self, launch: &LaunchSummary) -> Result<bool, StorageError>;

    /// Append a row and return its id.
    fn insert(&self, launch: &LaunchSummary) -> Result<i64, StorageError>;

    /// Stored rows in insertion order, optionally restricted to one name.
    fn records(&self, name: Option<&str>) -> Result<Vec<StoredRecord>, StorageError>;
}
