use launchwatch_core::{LaunchSummary, StoredRecord, from_storage, to_storage};
use rusqlite::params;

use super::{Storage, get_conn};
use crate::error::StorageError;
use crate::traits::LaunchStore;

impl LaunchStore for Storage {
    fn count_by_name(&self, name: &str) -> Result<u64, StorageError> {
        let conn = get_conn(&self.pool)?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM RocketLaunches WHERE Name = ?1",
            params![name],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    fn count_with_other_date(&self, launch: &LaunchSummary) -> Result<u64, StorageError> {
        let conn = get_conn(&self.pool)?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM RocketLaunches WHERE Name = ?1 AND Date != ?2",
            params![launch.name, to_storage(&launch.date)],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    fn contains(&self, launch: &LaunchSummary) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM RocketLaunches WHERE Name = ?1 AND Date = ?2)",
            params![launch.name, to_storage(&launch.date)],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    fn insert(&self, launch: &LaunchSummary) -> Result<i64, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO RocketLaunches (Name, Date) VALUES (?1, ?2)",
            params![launch.name, to_storage(&launch.date)],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn records(&self, name: Option<&str>) -> Result<Vec<StoredRecord>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT Id, Name, Date FROM RocketLaunches
             WHERE ?1 IS NULL OR Name = ?1
             ORDER BY Id",
        )?;
        let rows = stmt.query_map(params![name], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (id, name, date) = row?;
            records.push(StoredRecord { id, name, date: from_storage(&date)? });
        }
        Ok(records)
    }
}
