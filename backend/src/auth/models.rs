//! Data structures for authentication-related entities.

use crate::database::models::UserRole;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request payload
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login response containing the access token and user info
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub access_token: String,
    pub user: UserInfo,
}

/// User information returned in login response
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub firstname: String,
    pub email: String,
    pub role: UserRole,
}
