//! Module for core business logic services.
//!
//! This module encapsulates services that perform specific business
//! operations and orchestrate interactions between repositories and the
//! outbound mail transport.

pub mod doctor_service;
pub mod email_service;
pub mod registration_service;
