use chrono::{DateTime, Utc};
use launchwatch_notify::{Mailer, Notifier, NotifyOutcome};
use launchwatch_schedule::{FetchWindow, ScheduleClient};
use launchwatch_storage::LaunchStore;

use crate::detector::ChangeDetector;
use crate::digest::render_digest;
use crate::error::ServiceError;

/// Summary of one run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub window: FetchWindow,
    pub fetched: usize,
    pub new: usize,
    pub updated: usize,
    pub unchanged: usize,
    /// Rendered digest, also when nothing was sent.
    pub digest: String,
    /// `None` when the run had no notifier (dry run).
    pub notification: Option<NotifyOutcome>,
}

impl RunReport {
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.new + self.updated > 0
    }
}

/// The weekly pipeline: fetch, classify against the store, render, notify.
pub struct WatchService<S, M> {
    store: S,
    schedule: ScheduleClient,
    notifier: Option<Notifier<M>>,
    window_days: u64,
}

impl<S: LaunchStore, M: Mailer> WatchService<S, M> {
    /// Without a notifier the digest is rendered but never mailed.
    pub fn new(
        store: S,
        schedule: ScheduleClient,
        notifier: Option<Notifier<M>>,
        window_days: u64,
    ) -> Self {
        Self { store, schedule, notifier, window_days }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Execute one run for the window starting on the day of `now`.
    ///
    /// # Errors
    /// Fetch and store failures abort the run. Mail failures do not; they show
    /// up in [`RunReport::notification`].
    pub async fn run(&self, now: DateTime<Utc>) -> Result<RunReport, ServiceError> {
        let window = FetchWindow::starting_at(now, self.window_days);
        let launches = self.schedule.fetch_upcoming(&window).await?;
        let fetched = launches.len();

        let changes = ChangeDetector::new(&self.store).detect(launches)?;
        if !changes.has_changes() {
            tracing::debug!(classified = changes.total(), "digest has no sections");
        }
        let digest = render_digest(&changes.new, &changes.updated);

        let notification = match &self.notifier {
            Some(notifier) => Some(notifier.notify(changes.change_count(), &digest).await),
            None => {
                tracing::info!("no notifier configured, digest not mailed");
                None
            },
        };

        let report = RunReport {
            window,
            fetched,
            new: changes.new.len(),
            updated: changes.updated.len(),
            unchanged: changes.unchanged,
            digest,
            notification,
        };
        let outcome = report
            .notification
            .as_ref()
            .map_or_else(|| "not mailed".to_owned(), ToString::to_string);
        tracing::info!(
            fetched = report.fetched,
            classified = changes.total(),
            new = report.new,
            updated = report.updated,
            unchanged = report.unchanged,
            notification = %outcome,
            "run complete"
        );
        Ok(report)
    }
}
