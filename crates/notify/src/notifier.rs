use crate::mailer::{Mailer, OutgoingMail};

/// What happened to this run's digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// Nothing new or updated, no send attempted.
    Skipped,
    /// Changes existed but the recipient list was empty.
    NoRecipients,
    Sent { recipients: usize },
    /// Delivery failed; the error was logged and swallowed.
    Failed { error: String },
}

impl std::fmt::Display for NotifyOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skipped => f.write_str("skipped (no changes)"),
            Self::NoRecipients => f.write_str("skipped (no recipients)"),
            Self::Sent { recipients } => write!(f, "sent to {recipients} recipients"),
            Self::Failed { error } => write!(f, "failed: {error}"),
        }
    }
}

/// Sends the digest to a fixed recipient list.
#[derive(Debug)]
pub struct Notifier<M> {
    mailer: M,
    sender: String,
    subject: String,
    recipients: Vec<String>,
}

impl<M: Mailer> Notifier<M> {
    pub fn new(mailer: M, sender: String, subject: String, recipients: Vec<String>) -> Self {
        Self { mailer, sender, subject, recipients }
    }

    #[must_use]
    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    #[must_use]
    pub fn mailer(&self) -> &M {
        &self.mailer
    }

    /// Mail `html` unless `changes` is zero or nobody is listed.
    ///
    /// Delivery errors are logged and reported in the outcome, never returned.
    pub async fn notify(&self, changes: usize, html: &str) -> NotifyOutcome {
        if changes == 0 {
            tracing::info!("no new or updated launches, not sending");
            return NotifyOutcome::Skipped;
        }
        if self.recipients.is_empty() {
            tracing::warn!(changes, "recipient list is empty, not sending");
            return NotifyOutcome::NoRecipients;
        }

        let mail = OutgoingMail {
            from: self.sender.clone(),
            to: self.recipients.clone(),
            subject: self.subject.clone(),
            html: html.to_owned(),
        };

        match self.mailer.send(&mail).await {
            Ok(()) => {
                tracing::info!(recipients = mail.to.len(), "digest sent");
                NotifyOutcome::Sent { recipients: mail.to.len() }
            },
            Err(e) => {
                tracing::error!(error = %e, "failed to send digest");
                NotifyOutcome::Failed { error: e.to_string() }
            },
        }
    }
}
