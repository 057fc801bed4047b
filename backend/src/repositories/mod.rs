//! Database repositories for the application's entities.

pub mod doctor_repository;
pub mod pending_user_repository;
pub mod user_repository;
