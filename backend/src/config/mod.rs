//! Central module for application-wide configuration settings.
//!
//! Configuration is loaded from the environment exactly once at process
//! start; components that need a setting receive it as a constructor
//! parameter instead of reading the environment themselves.

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub jwt_secret: String,
    pub jwt_expires_in_seconds: u64,
    pub server_port: u16,
    /// Suffix a doctor account's email must carry, e.g. "@ku.th".
    pub org_email_domain: String,
    pub email: EmailConfig,
}

/// SMTP settings for the outbound mail transport.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from_name: String,
    pub from_email: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL not set")?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a valid number")?;

        let acquire_timeout_seconds = env::var("DB_ACQUIRE_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "3".to_string())
            .parse::<u64>()
            .context("DB_ACQUIRE_TIMEOUT_SECONDS must be a valid number")?;

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET not set")?;

        let jwt_expires_in_seconds = env::var("JWT_EXPIRES_IN_SECONDS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse::<u64>()
            .context("JWT_EXPIRES_IN_SECONDS must be a valid number")?;

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid number")?;

        let org_email_domain =
            env::var("ORG_EMAIL_DOMAIN").unwrap_or_else(|_| "@ku.th".to_string());

        let email = EmailConfig::from_env()?;

        Ok(Config {
            database_url,
            max_connections,
            acquire_timeout_seconds,
            jwt_secret,
            jwt_expires_in_seconds,
            server_port,
            org_email_domain,
            email,
        })
    }
}

impl EmailConfig {
    fn from_env() -> Result<Self> {
        let smtp_host = env::var("SMTP_HOST").context("SMTP_HOST not set")?;

        let smtp_port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse::<u16>()
            .context("SMTP_PORT must be a valid number")?;

        let smtp_username = env::var("EMAIL_USER").context("EMAIL_USER not set")?;
        let smtp_password = env::var("EMAIL_PASS").context("EMAIL_PASS not set")?;

        let from_name = env::var("EMAIL_FROM_NAME").unwrap_or_else(|_| "Dental Clinic".to_string());
        let from_email = env::var("EMAIL_FROM").unwrap_or_else(|_| smtp_username.clone());

        Ok(EmailConfig {
            smtp_host,
            smtp_port,
            smtp_username,
            smtp_password,
            from_name,
            from_email,
        })
    }
}
