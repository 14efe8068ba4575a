//! Typed error enum for the schedule fetcher.

use thiserror::Error;

/// Errors from the schedule API. Every variant aborts the run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed response: missing field `{field}`")]
    MalformedResponse { field: String },
    #[error("malformed response: invalid timestamp in `{field}`: {source}")]
    InvalidTimestamp {
        field: String,
        #[source]
        source: launchwatch_core::CoreError,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl FetchError {
    /// Whether this error is transient. Nothing retries today; callers may log it.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::HttpRequest(e) => e.is_timeout() || e.is_connect(),
            Self::HttpStatus { code, .. } => matches!(code, 429 | 500 | 502 | 503 | 504),
            _ => false,
        }
    }

    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::MalformedResponse { field: field.into() }
    }
}
