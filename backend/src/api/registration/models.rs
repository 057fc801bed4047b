//! Request and response payloads for the registration endpoints.
//!
//! Absent JSON fields default to empty strings so missing input surfaces
//! as a validation failure rather than a body-rejection error.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
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
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    /// The step the client should call next.
    pub next: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SendOtpRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "OTP is required"))]
    pub otp: String,
}
