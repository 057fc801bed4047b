//! Error handling utilities for API responses.
//!
//! Converts service-layer errors into HTTP responses. User-visible error
//! bodies are plain strings; infrastructure failures are logged with their
//! detail and reported with a generic message.
//!
//! # Error Handling Flow
//! 1. Service layer returns a domain-specific `ServiceError`
//! 2. `service_error_to_http` converts it to the appropriate status code
//! 3. All errors are terminal per request; there are no retries

use crate::errors::ServiceError;
use axum::http::StatusCode;

/// Converts ServiceError to the appropriate HTTP status and message
pub fn service_error_to_http(error: ServiceError) -> (StatusCode, String) {
    match error {
        ServiceError::Validation { message } => (StatusCode::BAD_REQUEST, message),
        ServiceError::Conflict { entity, identifier } => (
            StatusCode::BAD_REQUEST,
            format!("{} '{}' already exists", entity, identifier),
        ),
        ServiceError::NotFound { entity, identifier } => (
            StatusCode::NOT_FOUND,
            format!("{} '{}' not found", entity, identifier),
        ),
        ServiceError::InvalidOrExpired { message } => (StatusCode::BAD_REQUEST, message),
        ServiceError::Unauthenticated { message } => (StatusCode::UNAUTHORIZED, message),
        ServiceError::Forbidden { message } => (StatusCode::FORBIDDEN, message),
        ServiceError::Delivery { message } => {
            tracing::error!("Mail delivery failed: {}", message);
            (StatusCode::INTERNAL_SERVER_ERROR, "Email failed".to_string())
        }
        ServiceError::Database { source } => {
            tracing::error!("Database error: {}", source);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
        ServiceError::Internal { message } => {
            tracing::error!("Internal error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        let cases = [
            (
                service_error_to_http(ServiceError::validation("missing field")),
                StatusCode::BAD_REQUEST,
            ),
            (
                service_error_to_http(ServiceError::conflict("User", "a@b.c")),
                StatusCode::BAD_REQUEST,
            ),
            (
                service_error_to_http(ServiceError::not_found("Pending registration", "a@b.c")),
                StatusCode::NOT_FOUND,
            ),
            (
                service_error_to_http(ServiceError::invalid_or_expired("bad code")),
                StatusCode::BAD_REQUEST,
            ),
            (
                service_error_to_http(ServiceError::unauthenticated("no token")),
                StatusCode::UNAUTHORIZED,
            ),
            (
                service_error_to_http(ServiceError::forbidden("no permission")),
                StatusCode::FORBIDDEN,
            ),
            (
                service_error_to_http(ServiceError::delivery("smtp down")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for ((status, _), expected) in cases {
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn test_infrastructure_detail_is_not_leaked() {
        let (_, message) = service_error_to_http(ServiceError::Database {
            source: anyhow::anyhow!("UNIQUE constraint failed: users.email"),
        });
        assert_eq!(message, "Internal server error");
    }
}
