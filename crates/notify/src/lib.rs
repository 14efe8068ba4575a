//! Digest delivery.
//!
//! Loads the recipient list, builds one HTML message addressed to every
//! recipient and hands it to a [`Mailer`]. Failures are logged, never raised.

pub mod error;
mod mailer;
mod notifier;
mod recipients;

pub use error::NotifyError;
pub use mailer::{Mailer, OutgoingMail, SmtpMailer, SmtpSettings, build_message};
pub use notifier::{Notifier, NotifyOutcome};
pub use recipients::load_recipients;
