//! HTTP access to the registration backend.
//!
//! [`ApiClient`] implements every gateway trait with `reqwest`. It keeps a
//! cookie jar for the session and decodes JSON bodies with `serde_json`.

pub mod api_client;

pub use api_client::{ApiClient, ordered_records};
