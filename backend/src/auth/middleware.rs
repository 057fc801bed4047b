//! Middleware for protecting authenticated routes and handling authorization.
//!
//! This module contains logic for validating bearer tokens and enforcing
//! role requirements across the API endpoints.

use crate::config::Config;
use crate::database::models::UserRole;
use crate::errors::{ServiceError, ServiceResult};
use crate::utils::jwt::{Claims, JwtUtils};
use axum::{
    extract::{Extension, Request},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

/// JWT authentication middleware
pub async fn jwt_auth(
    Extension(config): Extension<Config>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    // Check if it's a Bearer token
    if !auth_header.starts_with("Bearer ") {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let token = &auth_header[7..]; // Remove "Bearer " prefix

    let jwt_utils = JwtUtils::new(&config);

    match jwt_utils.validate_token(token) {
        Ok(claims) => {
            // Add claims to request extensions for use in handlers
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(_) => Err(StatusCode::UNAUTHORIZED),
    }
}

/// Role gate: the caller must hold exactly the required role.
pub fn authorize(claims: &Claims, required_role: &str) -> ServiceResult<()> {
    if !claims.has_role(required_role) {
        return Err(ServiceError::forbidden("No permission"));
    }
    Ok(())
}

/// Admin role authorization middleware
pub async fn admin_auth(request: Request, next: Next) -> Result<Response, StatusCode> {
    // Get claims from request extensions (set by jwt_auth middleware)
    let claims = request
        .extensions()
        .get::<Claims>()
        .ok_or(StatusCode::UNAUTHORIZED)?;

    if authorize(claims, UserRole::Admin.as_str()).is_err() {
        return Err(StatusCode::FORBIDDEN);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmailConfig;
    use axum::{Router, body::Body, middleware, routing::get};
    use tower::ServiceExt;

    fn test_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout_seconds: 3,
            jwt_secret: "middleware-secret".to_string(),
            jwt_expires_in_seconds: 3600,
            server_port: 3000,
            org_email_domain: "@ku.th".to_string(),
            email: EmailConfig {
                smtp_host: "localhost".to_string(),
                smtp_port: 587,
                smtp_username: "clinic".to_string(),
                smtp_password: "secret".to_string(),
                from_name: "Dental Clinic".to_string(),
                from_email: "clinic@ku.th".to_string(),
            },
        }
    }

    fn admin_router(config: Config) -> Router {
        Router::new()
            .route(
                "/admin/ping",
                get(|| async { "pong" })
                    .layer(middleware::from_fn(admin_auth))
                    .layer(middleware::from_fn(jwt_auth)),
            )
            .layer(Extension(config))
    }

    fn bearer_request(token: &str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .uri("/admin/ping")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let app = admin_router(test_config());

        let request = axum::http::Request::builder()
            .uri("/admin/ping")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_garbage_token_is_unauthorized() {
        let app = admin_router(test_config());

        let response = app.oneshot(bearer_request("not-a-token")).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_admin_role_is_forbidden() {
        let config = test_config();
        let token = JwtUtils::new(&config)
            .generate_token("user-1".to_string(), "user".to_string())
            .unwrap();
        let app = admin_router(config);

        let response = app.oneshot(bearer_request(&token)).await.unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_admin_role_passes() {
        let config = test_config();
        let token = JwtUtils::new(&config)
            .generate_token("admin-1".to_string(), "admin".to_string())
            .unwrap();
        let app = admin_router(config);

        let response = app.oneshot(bearer_request(&token)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_authorize_rejects_role_mismatch() {
        let claims = Claims {
            sub: "user-1".to_string(),
            role: "doctor".to_string(),
            exp: 0,
            iat: 0,
        };
        assert!(authorize(&claims, "doctor").is_ok());
        assert!(matches!(
            authorize(&claims, "admin").unwrap_err(),
            ServiceError::Forbidden { .. }
        ));
    }
}
