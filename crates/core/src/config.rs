//! Run configuration.
//!
//! Built once by the binary from the JSON config file plus environment overrides,
//! then handed to each component at construction.

use std::path::Path;

use serde::Deserialize;

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT,
    DEFAULT_SUBJECT, DEFAULT_WINDOW_DAYS, ENV_API_URL, ENV_HTTP_TIMEOUT_SECS, ENV_SMTP_HOST,
    ENV_SMTP_PORT, ENV_WINDOW_DAYS,
};
use crate::env_config::{env_parse_with_default, env_string};
use crate::error::{CoreError, Result};

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub sender_email: String,
    pub sender_password: String,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
    #[serde(default = "default_window_days")]
    pub window_days: u64,
}

fn default_smtp_host() -> String {
    DEFAULT_SMTP_HOST.to_owned()
}

const fn default_smtp_port() -> u16 {
    DEFAULT_SMTP_PORT
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_owned()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_owned()
}

const fn default_http_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

const fn default_window_days() -> u64 {
    DEFAULT_WINDOW_DAYS
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("sender_email", &self.sender_email)
            .field("sender_password", &"***")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("subject", &self.subject)
            .field("api_base_url", &self.api_base_url)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("window_days", &self.window_days)
            .finish()
    }
}

impl AppConfig {
    /// Read the config file and apply `LAUNCHWATCH_*` environment overrides.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid JSON, or lacks
    /// the sender credentials.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let mut config = Self::from_json_str(&raw)?;
        config.apply_env_overrides();
        tracing::debug!(config = ?config, "configuration loaded");
        Ok(config)
    }

    /// Parse and validate a config document without consulting the environment.
    ///
    /// # Errors
    /// Returns an error on malformed JSON or blank credentials.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_owned();
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.sender_email.trim().is_empty() {
            return Err(CoreError::Config("senderEmail must not be empty".to_owned()));
        }
        if self.sender_password.is_empty() {
            return Err(CoreError::Config("senderPassword must not be empty".to_owned()));
        }
        if self.window_days == 0 {
            return Err(CoreError::Config("windowDays must be at least 1".to_owned()));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Some(url) = env_string(ENV_API_URL) {
            self.api_base_url = url.trim_end_matches('/').to_owned();
        }
        if let Some(host) = env_string(ENV_SMTP_HOST) {
            self.smtp_host = host;
        }
        self.smtp_port = env_parse_with_default(ENV_SMTP_PORT, self.smtp_port);
        self.http_timeout_secs =
            env_parse_with_default(ENV_HTTP_TIMEOUT_SECS, self.http_timeout_secs);
        let window_days = env_parse_with_default(ENV_WINDOW_DAYS, self.window_days);
        if window_days == 0 {
            tracing::warn!(
                var = ENV_WINDOW_DAYS,
                "window must be at least one day, ignoring override"
            );
        } else {
            self.window_days = window_days;
        }
    }
}
