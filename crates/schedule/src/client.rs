use std::time::Duration;

use launchwatch_core::LaunchDetail;
use launchwatch_core::constants::DEFAULT_HTTP_TIMEOUT_SECS;

use crate::api_types::UpcomingResponse;
use crate::error::FetchError;
use crate::window::FetchWindow;

/// Maximum number of body bytes echoed back in error messages.
const ERROR_BODY_LIMIT: usize = 500;

/// Client for the upcoming-launch schedule.
#[derive(Debug, Clone)]
pub struct ScheduleClient {
    client: reqwest::Client,
    base_url: String,
}

impl ScheduleClient {
    /// Creates a client rooted at `base_url` (e.g. `https://ll.thespacedevs.com/2.2.0`).
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
    }

    /// Same as [`ScheduleClient::new`] with an explicit request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("launchwatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every launch whose window starts inside `window`.
    ///
    /// Single request, no pagination, no retry.
    ///
    /// # Errors
    /// Returns an error if the request fails, the API answers with a non-success
    /// status, or any record lacks a required field.
    pub async fn fetch_upcoming(
        &self,
        window: &FetchWindow,
    ) -> Result<Vec<LaunchDetail>, FetchError> {
        let url = format!("{}/launch/upcoming/", self.base_url);
        tracing::info!(url = %url, window = %window, "fetching upcoming launches");

        let response = self.client.get(&url).query(&window.query_params()[..]).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                code: status.as_u16(),
                body: truncate(&body, ERROR_BODY_LIMIT).to_owned(),
            });
        }

        let decoded: UpcomingResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::JsonParse {
                context: format!("upcoming launches (body: {})", truncate(&body, 200)),
                source: e,
            })?;

        let launches = decoded.into_details()?;
        tracing::info!(count = launches.len(), "fetched upcoming launches");
        Ok(launches)
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
