//! # Registrar Client
//!
//! Terminal client for a domain registration REST backend: availability
//! checks, domain purchase and renewal, and email-based accounts.
//!
//! ## Architecture
//!
//! The crate keeps the layers apart:
//!
//! - **Domain Layer** ([`domain`]) - Entities, TLD and payment rules, gateway traits
//! - **Application Layer** ([`application`]) - Page flows and their messages
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` implementation of the gateways
//! - **Terminal Layer** ([`ui`], [`app`]) - Rendering, prompts, and the page loop
//!
//! Flows talk to the backend only through the gateway traits, so their tests
//! run against `mockall` doubles and the HTTP client is tested on its own
//! against a stub server.
//!
//! ## Quick Start
//!
//! ```bash
//! export API_URI="http://localhost:8080"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod telemetry;
pub mod ui;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types.
pub mod prelude {
    pub use crate::application::outcome::{FlowOutcome, Notice, NoticeLevel, Page, RenewalContext};
    pub use crate::application::services::{DomainPurchase, RenewalRequest};
    pub use crate::config::Config;
    pub use crate::domain::calendar::{Clock, FixedClock, SystemClock};
    pub use crate::domain::payment::PaymentCard;
    pub use crate::domain::tld::TldSet;
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::ApiClient;
    pub use crate::state::AppState;
}
