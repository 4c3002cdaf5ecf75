//! Infrastructure layer for external integrations.
//!
//! This layer implements the gateway traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - REST client for the registration backend

pub mod http;
