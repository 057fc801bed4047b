//! Registration business logic service.
//!
//! Drives a registration from its first submission through OTP confirmation:
//! unregistered -> pending -> pending with an armed code -> confirmed user.

use crate::api::registration::models::{RegisterRequest, SendOtpRequest, VerifyOtpRequest};
use crate::database::models::{CreatePendingUser, CreateUser, UserRole};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::pending_user_repository::PendingUserRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::email_service::DynMailer;
use crate::utils::otp::generate_otp;
use crate::utils::password::hash_password;
use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

/// Seconds a one-time code stays valid after being issued.
pub const OTP_TTL_SECONDS: i64 = 180;

pub struct RegistrationService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
    /// Mail sender used to dispatch one-time codes
    mailer: DynMailer,
}

impl<'a> RegistrationService<'a> {
    /// Creates a new RegistrationService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    /// * `mailer` - Mail sender for OTP dispatch
    pub fn new(pool: &'a SqlitePool, mailer: DynMailer) -> Self {
        Self { pool, mailer }
    }

    /// Accepts a registration and stores it as pending.
    ///
    /// Any existing pending registration for the same email is replaced;
    /// an email already owned by a confirmed user is a conflict. No mail
    /// is sent at this stage.
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<()> {
        if let Err(validation_errors) = request.validate() {
            let error_messages: Vec<String> = validation_errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |error| {
                        format!(
                            "{}: {}",
                            field,
                            error.message.as_ref().unwrap_or(&"Invalid value".into())
                        )
                    })
                })
                .collect();
            return Err(ServiceError::validation(error_messages.join(", ")));
        }

        let user_repo = UserRepository::new(self.pool);
        if user_repo.email_exists(&request.email).await? {
            return Err(ServiceError::conflict("User", &request.email));
        }

        let password_hash = hash_password(&request.password)?;

        let pending_repo = PendingUserRepository::new(self.pool);
        pending_repo
            .replace(&CreatePendingUser {
                email: request.email,
                firstname: request.firstname,
                lastname: request.lastname,
                password_hash,
                phone: request.phone,
            })
            .await?;

        Ok(())
    }

    /// Issues a fresh one-time code for a pending registration and mails it.
    ///
    /// The code is persisted before dispatch, so a delivery failure leaves
    /// a code that can still be confirmed.
    pub async fn request_otp(&self, request: SendOtpRequest) -> ServiceResult<()> {
        if let Err(validation_errors) = request.validate() {
            let error_messages: Vec<String> = validation_errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |error| {
                        format!(
                            "{}: {}",
                            field,
                            error.message.as_ref().unwrap_or(&"Invalid value".into())
                        )
                    })
                })
                .collect();
            return Err(ServiceError::validation(error_messages.join(", ")));
        }

        let otp = generate_otp();
        let expires_at = Utc::now() + Duration::seconds(OTP_TTL_SECONDS);

        let pending_repo = PendingUserRepository::new(self.pool);
        if !pending_repo.arm_otp(&request.email, &otp, expires_at).await? {
            return Err(ServiceError::not_found("Pending registration", &request.email));
        }

        self.mailer.send_otp(&request.email, &otp).await?;

        Ok(())
    }

    /// Confirms a pending registration with its one-time code.
    ///
    /// A wrong code and an expired code are deliberately indistinguishable
    /// to the caller. On success the confirmed user is created and the
    /// pending row removed within a single transaction.
    pub async fn verify_otp(&self, request: VerifyOtpRequest) -> ServiceResult<()> {
        if let Err(validation_errors) = request.validate() {
            let error_messages: Vec<String> = validation_errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |error| {
                        format!(
                            "{}: {}",
                            field,
                            error.message.as_ref().unwrap_or(&"Invalid value".into())
                        )
                    })
                })
                .collect();
            return Err(ServiceError::validation(error_messages.join(", ")));
        }

        let pending_repo = PendingUserRepository::new(self.pool);
        let pending = pending_repo
            .find_by_email_and_otp(&request.email, &request.otp)
            .await?
            .filter(|pending| {
                pending
                    .otp_expires_at
                    .map(|expires_at| Utc::now() < expires_at)
                    .unwrap_or(false)
            })
            .ok_or_else(|| ServiceError::invalid_or_expired("OTP is incorrect or has expired"))?;

        let user = CreateUser {
            id: Uuid::now_v7().to_string(),
            firstname: pending.firstname,
            lastname: pending.lastname,
            email: pending.email,
            password_hash: pending.password_hash,
            phone: pending.phone,
            role: UserRole::User,
            is_verified: true,
        };

        let mut tx = self.pool.begin().await.map_err(anyhow::Error::from)?;
        UserRepository::insert(&mut *tx, &user, Utc::now()).await?;
        PendingUserRepository::delete(&mut *tx, &request.email).await?;
        tx.commit().await.map_err(anyhow::Error::from)?;

        tracing::info!("Registration confirmed for {}", request.email);

        Ok(())
    }
}
