//! Main entry point for the clinic backend.
//!
//! This file initializes the Axum web server, sets up the database
//! connection and mail transport, and registers all API routes and
//! middleware. It orchestrates the application's startup and defines its
//! overall structure.

mod api;
mod auth;
mod config;
mod database;
mod errors;
mod repositories;
mod services;
mod utils;

use crate::services::email_service::{DynMailer, SmtpMailer};
use axum::{Extension, Router, routing::get};
use config::Config;
use database::Database;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let db = Database::new(&config).await.unwrap();
    let pool = db.pool().clone();

    let mailer: DynMailer = Arc::new(SmtpMailer::new(&config.email).unwrap());

    let app = Router::new()
        .route("/", get(root_handler))
        .merge(api::registration::routes::registration_router())
        .merge(auth::routes::auth_router())
        .merge(api::doctor::routes::doctor_router())
        .layer(Extension(pool))
        .layer(Extension(config.clone()))
        .layer(Extension(mailer));

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting clinic server on port {}", config.server_port);
    axum::serve(listener, app).await.unwrap();
}

async fn root_handler() -> &'static str {
    "Server is running"
}
