use anyhow::Result;
use launchwatch_storage::{LaunchStore, Storage};
use std::path::Path;

use crate::ensure_db_dir;

pub(crate) fn run(db_path: &Path, name: Option<&str>) -> Result<()> {
    ensure_db_dir(db_path)?;
    let storage = Storage::new(db_path)?;
    let records = storage.records(name)?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
