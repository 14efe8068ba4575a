//! Shared constants for launchwatch.

/// Launch Library 2 endpoint root; `/launch/upcoming/` is appended.
pub const DEFAULT_API_BASE_URL: &str = "https://ll.thespacedevs.com/2.2.0";

/// Default length of the forward-looking fetch window, in days.
pub const DEFAULT_WINDOW_DAYS: u64 = 7;

/// Default timeout for the schedule API request, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default outbound SMTP relay.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Submission port; the connection is upgraded with STARTTLS.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Timeout for the whole SMTP exchange, in seconds.
pub const SMTP_TIMEOUT_SECS: u64 = 60;

/// Default subject line of the digest mail.
pub const DEFAULT_SUBJECT: &str = "Upcoming Rocket Launches";

/// File names looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const DEFAULT_RECIPIENTS_FILE: &str = "recipients.json";

/// Name of the SQLite file holding the launch records.
pub const DEFAULT_DB_FILE: &str = "rocket_launches.db";

/// Environment overrides applied on top of the config file.
pub const ENV_API_URL: &str = "LAUNCHWATCH_API_URL";
pub const ENV_SMTP_HOST: &str = "LAUNCHWATCH_SMTP_HOST";
pub const ENV_SMTP_PORT: &str = "LAUNCHWATCH_SMTP_PORT";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "LAUNCHWATCH_HTTP_TIMEOUT_SECS";
pub const ENV_WINDOW_DAYS: &str = "LAUNCHWATCH_WINDOW_DAYS";
