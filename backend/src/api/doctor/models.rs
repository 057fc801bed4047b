//! Request and response payloads for doctor provisioning.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDoctorRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Firstname is required"))]
    pub firstname: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Lastname is required"))]
    pub lastname: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "License number is required"))]
    pub license_number: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Specialization is required"))]
    pub specialization: String,
}

#[derive(Debug, Serialize)]
pub struct CreateDoctorResponse {
    pub success: bool,
    pub message: String,
    /// Plaintext temporary password for the new account, handed to the
    /// provisioning admin.
    #[serde(rename = "tempPassword")]
    pub temp_password: String,
}
