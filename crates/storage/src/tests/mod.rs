//! Test utilities and module declarations for storage tests.

use crate::Storage;
use chrono::{DateTime, TimeZone, Utc};
use launchwatch_core::LaunchSummary;
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

pub fn launch(name: &str, date: DateTime<Utc>) -> LaunchSummary {
    LaunchSummary::new(name, date)
}
