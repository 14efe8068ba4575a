//! Change detection against the launch record store.
//!
//! Classification uses two existence queries: rows with the same name (none
//! means New) and rows with the same name but another date (any means Updated).
//! A name holding both the fetched date and an older one still counts as
//! Updated: the question answered is "has this launch's date ever changed".

use launchwatch_core::{ChangeKind, LaunchDetail, LaunchSummary};
use launchwatch_storage::{LaunchStore, StorageError};

/// Launches sorted into digest sections, in fetch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub new: Vec<LaunchDetail>,
    pub updated: Vec<LaunchDetail>,
    pub unchanged: usize,
}

impl ChangeSet {
    /// Number of launches that belong in the digest.
    #[must_use]
    pub fn change_count(&self) -> usize {
        self.new.len() + self.updated.len()
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.change_count() > 0
    }

    /// Number of launches classified.
    #[must_use]
    pub fn total(&self) -> usize {
        self.change_count() + self.unchanged
    }
}

/// Classifies fetched launches and records first sightings.
pub struct ChangeDetector<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: LaunchStore + ?Sized> ChangeDetector<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Classify one launch.
    ///
    /// A New launch is inserted immediately, so later launches in the same run
    /// see it. An Updated launch appends its new date unless that exact pair is
    /// already stored; old rows are never touched.
    ///
    /// # Errors
    /// Returns an error if any store query or insert fails.
    pub fn classify(&self, launch: &LaunchSummary) -> Result<ChangeKind, StorageError> {
        if self.store.count_by_name(&launch.name)? == 0 {
            self.store.insert(launch)?;
            return Ok(ChangeKind::New);
        }

        if self.store.count_with_other_date(launch)? > 0 {
            if !self.store.contains(launch)? {
                self.store.insert(launch)?;
            }
            return Ok(ChangeKind::Updated);
        }

        Ok(ChangeKind::Unchanged)
    }

    /// Classify every fetched launch in order.
    ///
    /// # Errors
    /// Stops at the first store failure; rows inserted before it stay.
    pub fn detect(&self, launches: Vec<LaunchDetail>) -> Result<ChangeSet, StorageError> {
        let mut changes = ChangeSet::default();
        for launch in launches {
            let kind = self.classify(&launch.summary())?;
            if kind.is_reportable() {
                tracing::info!(
                    name = %launch.name,
                    start = %launch.start,
                    kind = %kind,
                    "launch change detected"
                );
            } else {
                tracing::debug!(name = %launch.name, "launch unchanged");
            }
            match kind {
                ChangeKind::New => changes.new.push(launch),
                ChangeKind::Updated => changes.updated.push(launch),
                ChangeKind::Unchanged => changes.unchanged += 1,
            }
        }
        Ok(changes)
    }
}
