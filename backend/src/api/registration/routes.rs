//! Defines the HTTP routes for the self-registration flow.

use super::handlers::{register, send_otp, verify_otp};
use axum::{Router, routing::post};

pub fn registration_router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/send-otp", post(send_otp))
        .route("/verify-otp", post(verify_otp))
}
