//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. Note that these may differ from API-specific models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role held by a confirmed user account.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::Type, PartialEq)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Doctor,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Doctor => "doctor",
            UserRole::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(UserRole::User),
            "doctor" => Ok(UserRole::Doctor),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

/// A confirmed account. Rows are only ever inserted; the registration and
/// provisioning flows never update or delete them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub role: UserRole,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub role: UserRole,
    pub is_verified: bool,
}

/// An unconfirmed registration awaiting OTP confirmation. At most one row
/// exists per email; `otp` is null until a code has been requested.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PendingUser {
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub password_hash: String,
    pub phone: String,
    pub otp: Option<String>,
    pub otp_expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct CreatePendingUser {
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub password_hash: String,
    pub phone: String,
}

/// Professional profile linked 1:1 to a doctor user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Doctor {
    pub user_id: String,
    pub license_number: String,
    pub specialization: String,
    pub phone: String,
    pub email: String,
}
