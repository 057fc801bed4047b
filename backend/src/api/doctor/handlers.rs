//! Handler functions for doctor provisioning endpoints.

use crate::api::common::service_error_to_http;
use crate::api::doctor::models::{CreateDoctorRequest, CreateDoctorResponse};
use crate::config::Config;
use crate::services::doctor_service::DoctorService;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;

/// Handle doctor account provisioning. Authentication and the admin role
/// are enforced by the route's middleware layers.
#[axum::debug_handler]
pub async fn create_doctor(
    Extension(pool): Extension<SqlitePool>,
    Extension(config): Extension<Config>,
    Json(payload): Json<CreateDoctorRequest>,
) -> Result<ResponseJson<CreateDoctorResponse>, (StatusCode, String)> {
    let service = DoctorService::new(&pool, &config);

    match service.create_doctor(payload).await {
        Ok(temp_password) => Ok(ResponseJson(CreateDoctorResponse {
            success: true,
            message: "Doctor account created".to_string(),
            temp_password,
        })),
        Err(error) => Err(service_error_to_http(error)),
    }
}
