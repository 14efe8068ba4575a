use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A launch reduced to what the record store compares: its name and start date.
///
/// `name` is the identity key; `date` is the payload compared against stored rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchSummary {
    pub name: String,
    pub date: DateTime<Utc>,
}

impl LaunchSummary {
    pub fn new(name: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self { name: name.into(), date }
    }
}

/// Everything the digest shows about one launch. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchDetail {
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub description: String,
    pub image_url: String,
}

impl LaunchDetail {
    /// The store-facing view of this launch, keyed by name and dated by window start.
    #[must_use]
    pub fn summary(&self) -> LaunchSummary {
        LaunchSummary { name: self.name.clone(), date: self.start }
    }
}

/// A row of the `RocketLaunches` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: i64,
    pub name: String,
    pub date: DateTime<Utc>,
}

/// How a fetched launch relates to what the store has seen before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// No row with this name exists.
    New,
    /// Some row with this name carries a different date.
    Updated,
    /// Only rows with this exact (name, date) exist.
    Unchanged,
}

impl ChangeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
        }
    }

    /// Whether this launch belongs in the digest.
    #[must_use]
    pub const fn is_reportable(self) -> bool {
        matches!(self, Self::New | Self::Updated)
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
