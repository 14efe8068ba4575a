use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::error::NotifyError;

/// One HTML message with every recipient in a single envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Delivers a composed digest.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), NotifyError>;
}

/// Relay settings for [`SmtpMailer`].
#[derive(Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Authenticated SMTP submission upgraded with STARTTLS.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer").field("host", &self.host).finish_non_exhaustive()
    }
}

impl SmtpMailer {
    /// Build the transport. No connection is made until the first send.
    ///
    /// # Errors
    /// Returns an error if the relay host is not usable for TLS.
    pub fn new(settings: &SmtpSettings) -> Result<Self, NotifyError> {
        let credentials = Credentials::new(settings.username.clone(), settings.password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
            .map_err(|e| NotifyError::Transport(e.to_string()))?
            .port(settings.port)
            .credentials(credentials)
            .timeout(Some(settings.timeout))
            .build();
        Ok(Self { transport, host: settings.host.clone() })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), NotifyError> {
        let message = build_message(mail)?;
        tracing::debug!(host = %self.host, recipients = mail.to.len(), "submitting digest");
        self.transport.send(message).await.map_err(|e| NotifyError::Transport(e.to_string()))?;
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address.parse().map_err(|e: lettre::address::AddressError| NotifyError::InvalidAddress {
        address: address.to_owned(),
        reason: e.to_string(),
    })
}

/// Assemble the MIME message for `mail`.
///
/// # Errors
/// Returns an error if any address is invalid or the list of recipients is empty.
pub fn build_message(mail: &OutgoingMail) -> Result<Message, NotifyError> {
    let mut builder = Message::builder()
        .from(parse_mailbox(&mail.from)?)
        .subject(mail.subject.clone())
        .header(ContentType::TEXT_HTML);
    for address in &mail.to {
        builder = builder.to(parse_mailbox(address)?);
    }
    builder.body(mail.html.clone()).map_err(|e| NotifyError::Build(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mail(to: &[&str]) -> OutgoingMail {
        OutgoingMail {
            from: "watch@example.com".to_owned(),
            to: to.iter().map(|s| (*s).to_owned()).collect(),
            subject: "Upcoming Rocket Launches".to_owned(),
            html: "<html><body><h2>Upcoming</h2></body></html>".to_owned(),
        }
    }

    #[test]
    fn all_recipients_share_one_envelope() {
        let message = build_message(&mail(&["a@example.com", "b@example.com"])).unwrap();
        let to: Vec<String> = message.envelope().to().iter().map(ToString::to_string).collect();
        assert_eq!(to, vec!["a@example.com", "b@example.com"]);
        assert_eq!(
            message.envelope().from().map(ToString::to_string).as_deref(),
            Some("watch@example.com")
        );
    }

    #[test]
    fn body_is_html() {
        let message = build_message(&mail(&["a@example.com"])).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Content-Type: text/html"));
        assert!(raw.contains("Subject: Upcoming Rocket Launches"));
    }

    #[test]
    fn invalid_recipient_is_reported() {
        let err = build_message(&mail(&["a@example.com", "not an address"])).unwrap_err();
        assert!(matches!(
            err,
            NotifyError::InvalidAddress { ref address, .. } if address == "not an address"
        ));
    }

    #[test]
    fn settings_debug_redacts_password() {
        let settings = SmtpSettings {
            host: "smtp.example.com".to_owned(),
            port: 587,
            username: "watch@example.com".to_owned(),
            password: "hunter2".to_owned(),
            timeout: Duration::from_secs(60),
        };
        assert!(!format!("{settings:?}").contains("hunter2"));
    }
}
