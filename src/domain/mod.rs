//! Domain layer: records, local validation rules and gateway contracts.
//!
//! Nothing in this layer performs I/O. Gateways are traits implemented by the
//! infrastructure layer; everything else is plain data and pure functions.
//!
//! # Architecture
//!
//! - [`entities`] - Records exchanged with the backend
//! - [`gateways`] - Backend access trait definitions
//! - [`tld`] - The accepted TLD set
//! - [`payment`] - Card form checks and pricing
//! - [`calendar`] - Clock abstraction and year arithmetic

pub mod calendar;
pub mod entities;
pub mod gateways;
pub mod payment;
pub mod tld;
