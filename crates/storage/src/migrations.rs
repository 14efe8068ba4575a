//! Database schema

use rusqlite::Connection;

pub const SCHEMA_VERSION: i32 = 1;

/// Create the `RocketLaunches` table if it does not exist yet.
///
/// The table deliberately has no uniqueness constraint on (`Name`, `Date`):
/// a launch accumulates one row per distinct date it was seen with.
pub fn run_migrations(conn: &Connection) -> Result<(), rusqlite::Error> {
    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::debug!(current_version, target = SCHEMA_VERSION, "database schema version");

    if current_version < 1 {
        tracing::info!("Creating RocketLaunches table");
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS RocketLaunches (
                Id INTEGER PRIMARY KEY,
                Name TEXT NOT NULL,
                Date TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_rocket_launches_name ON RocketLaunches(Name);",
        )?;
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }

    Ok(())
}
