//! SMTP delivery via lettre

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;

use super::types::{OutgoingEmail, Recipient};
use super::{MailError, Mailer};

/// Relay-backed mailer.
///
/// Holds only the account settings; a fresh transport is built for every
/// send, so no connection state survives across requests. Credentials are
/// absent when the environment never provided them, in which case every
/// send fails without any network activity.
pub struct SmtpMailer {
    config: Option<SmtpConfig>,
}

impl SmtpMailer {
    pub fn new(config: Option<SmtpConfig>) -> Self {
        Self { config }
    }

    fn transport(config: &SmtpConfig) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailError> {
        let builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        Ok(builder
            .credentials(Credentials::new(config.user.clone(), config.password.clone()))
            .build())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| MailError::MissingConfig("EMAIL_USER and EMAIL_PASS".to_string()))?;

        // The authenticated account is both the sender and the owner inbox
        let owner: Mailbox = config
            .user
            .parse()
            .map_err(|_| MailError::InvalidAddress(config.user.clone()))?;

        let to = match &email.to {
            Recipient::Owner => owner.clone(),
            Recipient::Address(address) => address
                .parse()
                .map_err(|_| MailError::InvalidAddress(address.clone()))?,
        };

        let message = Message::builder()
            .from(owner)
            .to(to)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(|e| MailError::Build(e.to_string()))?;

        Self::transport(config)?
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailer::templates;
    use crate::mailer::SubmissionContext;

    fn smtp_config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.gmail.com".to_string(),
            user: "owner@example.com".to_string(),
            password: "app-password".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_without_credentials_fails_fast() {
        let mailer = SmtpMailer::new(None);
        let submission = SubmissionContext {
            name: "Jane",
            email: "jane@example.com",
            message: "Hi",
        };

        let err = mailer
            .send(&templates::owner_notification(&submission))
            .await
            .unwrap_err();
        assert!(matches!(err, MailError::MissingConfig(_)));
    }

    #[tokio::test]
    async fn test_send_rejects_unparseable_recipient() {
        let mailer = SmtpMailer::new(Some(smtp_config()));
        let email = OutgoingEmail {
            to: Recipient::Address("not an address".to_string()),
            subject: "subject".to_string(),
            body: "body".to_string(),
        };

        // Fails at address parsing, before any connection is attempted
        let err = mailer.send(&email).await.unwrap_err();
        assert!(matches!(err, MailError::InvalidAddress(_)));
    }

    #[tokio::test]
    async fn test_send_rejects_unparseable_owner_account() {
        let mut config = smtp_config();
        config.user = "not an address".to_string();
        let mailer = SmtpMailer::new(Some(config));

        let email = OutgoingEmail {
            to: Recipient::Owner,
            subject: "subject".to_string(),
            body: "body".to_string(),
        };

        let err = mailer.send(&email).await.unwrap_err();
        assert!(matches!(err, MailError::InvalidAddress(_)));
    }
}
