//! Application layer: the page flows and the vocabulary they answer with.
//!
//! Flows consume gateway traits and return [`outcome::FlowOutcome`] values;
//! they never print or prompt. The terminal front end in [`crate::ui`] decides
//! how a notice is shown and which page to open next.
//!
//! # Available Services
//!
//! - [`services::AvailabilityService`] - Availability check and owner lookup
//! - [`services::RegistrationService`] - New domain purchase
//! - [`services::AuthService`] - Sign-up and email login
//! - [`services::RenewalService`] - Renewal of an owned domain
//! - [`services::DashboardService`] - Domain and order listings

pub mod messages;
pub mod outcome;
pub mod services;
