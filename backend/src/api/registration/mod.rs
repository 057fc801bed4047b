//! Module for registration API endpoints.
//!
//! Covers the public self-registration flow: submitting a registration,
//! requesting a one-time code, and confirming it.

pub mod handlers;
pub mod models;
pub mod routes;
