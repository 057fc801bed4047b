//! Defines the HTTP routes for doctor provisioning.
//!
//! The route is protected by the JWT middleware followed by the admin role
//! gate; requests without a valid token never reach the role check.

use super::handlers::create_doctor;
use crate::auth::middleware::{admin_auth, jwt_auth};
use axum::{Router, middleware, routing::post};

pub fn doctor_router() -> Router {
    Router::new().route(
        "/admin/create-doctor",
        post(create_doctor)
            .layer(middleware::from_fn(admin_auth))
            .layer(middleware::from_fn(jwt_auth)),
    )
}
