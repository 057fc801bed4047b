//! Handler functions for registration endpoints.
//!
//! These functions process requests for the self-registration flow and
//! delegate to the registration service.

use crate::api::common::service_error_to_http;
use crate::api::registration::models::{
    RegisterRequest, RegisterResponse, SendOtpRequest, VerifyOtpRequest,
};
use crate::services::email_service::DynMailer;
use crate::services::registration_service::RegistrationService;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;

/// Handle a new registration submission
#[axum::debug_handler]
pub async fn register(
    Extension(pool): Extension<SqlitePool>,
    Extension(mailer): Extension<DynMailer>,
    Json(payload): Json<RegisterRequest>,
) -> Result<ResponseJson<RegisterResponse>, (StatusCode, String)> {
    let service = RegistrationService::new(&pool, mailer);

    match service.register(payload).await {
        Ok(()) => Ok(ResponseJson(RegisterResponse {
            success: true,
            message: "Registration received, please confirm the OTP sent to your email"
                .to_string(),
            next: "send-otp".to_string(),
        })),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle a one-time code request for a pending registration
#[axum::debug_handler]
pub async fn send_otp(
    Extension(pool): Extension<SqlitePool>,
    Extension(mailer): Extension<DynMailer>,
    Json(payload): Json<SendOtpRequest>,
) -> Result<&'static str, (StatusCode, String)> {
    let service = RegistrationService::new(&pool, mailer);

    match service.request_otp(payload).await {
        Ok(()) => Ok("OTP sent"),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle a one-time code confirmation
#[axum::debug_handler]
pub async fn verify_otp(
    Extension(pool): Extension<SqlitePool>,
    Extension(mailer): Extension<DynMailer>,
    Json(payload): Json<VerifyOtpRequest>,
) -> Result<&'static str, (StatusCode, String)> {
    let service = RegistrationService::new(&pool, mailer);

    match service.verify_otp(payload).await {
        Ok(()) => Ok("Registration complete"),
        Err(error) => Err(service_error_to_http(error)),
    }
}
