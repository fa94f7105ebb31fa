//! Outbound notification email
//!
//! `Mailer` abstracts the delivery transport so the contact handler can be
//! exercised without a live relay. `SmtpMailer` is the production
//! implementation; tests substitute their own.

pub mod templates;

mod smtp;
mod types;

pub use smtp::SmtpMailer;
pub use types::{OutgoingEmail, Recipient, SubmissionContext};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("missing required config: {0}")]
    MissingConfig(String),

    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

/// Sends a single email.
///
/// Implementations resolve `Recipient::Owner` to their own configured
/// account address.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}
