//! Doctor provisioning business logic service.
//!
//! Creates a doctor user together with its professional profile. Only
//! reachable through the admin-gated route.

use crate::api::doctor::models::CreateDoctorRequest;
use crate::config::Config;
use crate::database::models::{CreateUser, Doctor, UserRole};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::doctor_repository::DoctorRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::password::hash_password;
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

/// Temporary password handed to every newly provisioned doctor.
pub const TEMP_DOCTOR_PASSWORD: &str = "Doctor@123";

pub struct DoctorService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
    /// Required suffix for doctor email addresses
    org_email_domain: String,
}

impl<'a> DoctorService<'a> {
    /// Creates a new DoctorService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    /// * `config` - Application configuration
    pub fn new(pool: &'a SqlitePool, config: &Config) -> Self {
        Self {
            pool,
            org_email_domain: config.org_email_domain.clone(),
        }
    }

    /// Provisions a doctor account and its linked profile.
    ///
    /// The email must belong to the organization domain; this is checked
    /// before anything is written. The user and profile rows are inserted
    /// by two separate statements.
    ///
    /// # Returns
    /// The plaintext temporary password for the new account.
    pub async fn create_doctor(&self, request: CreateDoctorRequest) -> ServiceResult<String> {
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

        if !request.email.ends_with(&self.org_email_domain) {
            return Err(ServiceError::validation(
                "An organization email address is required",
            ));
        }

        let password_hash = hash_password(TEMP_DOCTOR_PASSWORD)?;

        let user_repo = UserRepository::new(self.pool);
        let user = user_repo
            .create_user(CreateUser {
                id: Uuid::now_v7().to_string(),
                firstname: request.firstname,
                lastname: request.lastname,
                email: request.email.clone(),
                password_hash,
                phone: request.phone.clone(),
                role: UserRole::Doctor,
                is_verified: true,
            })
            .await?;

        let doctor_repo = DoctorRepository::new(self.pool);
        doctor_repo
            .create_doctor(&Doctor {
                user_id: user.id.clone(),
                license_number: request.license_number,
                specialization: request.specialization,
                phone: request.phone,
                email: request.email,
            })
            .await?;

        tracing::info!("Doctor account {} provisioned", user.id);

        Ok(TEMP_DOCTOR_PASSWORD.to_string())
    }
}
