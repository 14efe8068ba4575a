use std::path::Path;

/// Read the recipient list, a JSON array of address strings.
///
/// Never fails: an unreadable or malformed file is logged and yields an empty
/// list, which suppresses the notification. Blank entries are dropped.
#[must_use]
pub fn load_recipients(path: &Path) -> Vec<String> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "cannot read recipients file");
            return Vec::new();
        },
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(list) => list
            .into_iter()
            .map(|address| address.trim().to_owned())
            .filter(|address| !address.is_empty())
            .collect(),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "cannot parse recipients file");
            Vec::new()
        },
    }
}
