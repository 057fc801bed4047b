//! Outbound mail: the delivery contract and its SMTP implementation.

use crate::config::EmailConfig;
use crate::errors::{ServiceError, ServiceResult};
use async_trait::async_trait;
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::str::FromStr;
use std::sync::Arc;

/// Contract for delivering a one-time code to an email address.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_otp(&self, to_email: &str, otp: &str) -> ServiceResult<()>;
}

pub type DynMailer = Arc<dyn Mailer>;

/// SMTP-backed mail sender.
pub struct SmtpMailer {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    config: EmailConfig,
}

impl SmtpMailer {
    /// Creates a new SmtpMailer instance
    pub fn new(config: &EmailConfig) -> ServiceResult<Self> {
        let creds = Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| ServiceError::delivery(format!("Invalid SMTP host: {e}")))?
            .port(config.smtp_port)
            .credentials(creds)
            .build();

        Ok(Self {
            mailer,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    /// Sends the one-time code. Dispatch is synchronous in the request
    /// path; there is no retry.
    async fn send_otp(&self, to_email: &str, otp: &str) -> ServiceResult<()> {
        let from_mailbox = Mailbox::from_str(&format!(
            "{} <{}>",
            self.config.from_name, self.config.from_email
        ))
        .map_err(|e| ServiceError::delivery(format!("Invalid from email: {e}")))?;

        let to_mailbox = Mailbox::from_str(to_email)
            .map_err(|e| ServiceError::validation(format!("Invalid recipient email: {e}")))?;

        let email = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(self.config.from_name.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(format!("Your OTP is {otp}"))
            .map_err(|e| ServiceError::delivery(format!("Failed to build email: {e}")))?;

        self.mailer
            .send(email)
            .await
            .map_err(|e| ServiceError::delivery(format!("Failed to send email: {e}")))?;

        Ok(())
    }
}
