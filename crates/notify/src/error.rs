//! Typed error enum for mail delivery.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    /// A sender or recipient is not a valid mailbox.
    #[error("invalid address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    /// The message could not be assembled.
    #[error("message build failed: {0}")]
    Build(String),

    /// Connecting, authenticating or submitting to the relay failed.
    #[error("smtp transport: {0}")]
    Transport(String),
}
