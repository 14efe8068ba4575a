//! Wire types for the `launch/upcoming` response.
//!
//! Every field is optional at the serde level so a missing one can be reported
//! by its path instead of as a generic decode failure.

use launchwatch_core::{LaunchDetail, parse_api_timestamp};
use serde::Deserialize;

use crate::error::FetchError;

#[derive(Debug, Deserialize)]
pub(crate) struct UpcomingResponse {
    pub results: Option<Vec<ApiLaunch>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiLaunch {
    pub name: Option<String>,
    pub window_start: Option<String>,
    pub window_end: Option<String>,
    pub mission: Option<ApiMission>,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiMission {
    pub description: Option<String>,
}

impl UpcomingResponse {
    pub fn into_details(self) -> Result<Vec<LaunchDetail>, FetchError> {
        let results = self.results.ok_or_else(|| FetchError::missing("results"))?;
        results.into_iter().enumerate().map(|(i, launch)| launch.into_detail(i)).collect()
    }
}

impl ApiLaunch {
    fn into_detail(self, index: usize) -> Result<LaunchDetail, FetchError> {
        let field = |name: &str| format!("results[{index}].{name}");
        let require = |value: Option<String>, name: &str| {
            value.ok_or_else(|| FetchError::missing(field(name)))
        };
        let timestamp = |value: String, name: &str| {
            parse_api_timestamp(&value)
                .map_err(|source| FetchError::InvalidTimestamp { field: field(name), source })
        };

        let name = require(self.name, "name")?;
        let start = timestamp(require(self.window_start, "window_start")?, "window_start")?;
        let end = timestamp(require(self.window_end, "window_end")?, "window_end")?;
        let mission = self.mission.ok_or_else(|| FetchError::missing(field("mission")))?;
        let description = require(mission.description, "mission.description")?;
        let image_url = require(self.image, "image")?;

        Ok(LaunchDetail { name, start, end, description, image_url })
    }
}
