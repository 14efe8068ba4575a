use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use launchwatch_core::AppConfig;
use launchwatch_core::constants::{DEFAULT_CONFIG_FILE, DEFAULT_RECIPIENTS_FILE, SMTP_TIMEOUT_SECS};
use launchwatch_notify::{Notifier, SmtpMailer, SmtpSettings, load_recipients};
use launchwatch_schedule::ScheduleClient;
use launchwatch_service::WatchService;
use launchwatch_storage::Storage;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ensure_db_dir;

#[derive(Args, Debug, Default)]
pub(crate) struct RunArgs {
    /// JSON file with senderEmail and senderPassword
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// JSON array of recipient addresses
    #[arg(short, long)]
    recipients: Option<PathBuf>,
    /// Print the digest to stdout instead of mailing it (launches are still recorded)
    #[arg(long)]
    dry_run: bool,
}

pub(crate) async fn run(args: RunArgs, db_path: &Path) -> Result<()> {
    let config_path = args.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = AppConfig::load(&config_path)?;

    ensure_db_dir(db_path)?;
    let storage = Storage::new(db_path)
        .with_context(|| format!("opening launch store {}", db_path.display()))?;
    let schedule = ScheduleClient::with_timeout(
        &config.api_base_url,
        Duration::from_secs(config.http_timeout_secs),
    )?;

    let notifier = if args.dry_run {
        None
    } else {
        let recipients_path =
            args.recipients.unwrap_or_else(|| PathBuf::from(DEFAULT_RECIPIENTS_FILE));
        build_notifier(&config, load_recipients(&recipients_path))
    };

    tracing::info!(
        db = %db_path.display(),
        api = schedule.base_url(),
        window_days = config.window_days,
        dry_run = args.dry_run,
        "starting launch check"
    );
    let service = WatchService::new(storage, schedule, notifier, config.window_days);
    let report = service.run(Utc::now()).await?;

    if args.dry_run {
        if !report.has_changes() {
            tracing::info!(window = %report.window, "nothing new this week");
        }
        println!("{}", report.digest);
    }
    Ok(())
}

/// Mail problems never abort a run: a transport that cannot be set up is
/// logged and the run continues without mailing.
fn build_notifier(config: &AppConfig, recipients: Vec<String>) -> Option<Notifier<SmtpMailer>> {
    let settings = SmtpSettings {
        host: config.smtp_host.clone(),
        port: config.smtp_port,
        username: config.sender_email.clone(),
        password: config.sender_password.clone(),
        timeout: Duration::from_secs(SMTP_TIMEOUT_SECS),
    };
    match SmtpMailer::new(&settings) {
        Ok(mailer) => Some(Notifier::new(
            mailer,
            config.sender_email.clone(),
            config.subject.clone(),
            recipients,
        )),
        Err(e) => {
            tracing::error!(host = %settings.host, error = %e, "cannot set up SMTP transport");
            None
        },
    }
}
