//! Client configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the first
//! request is made. A `.env` file in the working directory is read first
//! when present.
//!
//! ```bash
//! export API_URI="http://localhost:8080"
//! export VALID_TLDS=".com,.net,.org,.it"
//! ```
//!
//! ## Optional Variables
//!
//! - `API_URI` - Backend base URI (default: `http://localhost:8080`)
//! - `VALID_TLDS` - Comma separated TLDs offered for registration
//!   (default: `.com,.net,.org,.it`)
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use crate::domain::tld::TldSet;
use anyhow::Result;
use std::env;

pub const DEFAULT_API_URI: &str = "http://localhost:8080";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_uri: String,
    /// Raw `VALID_TLDS` value; see [`Config::tlds`].
    pub valid_tlds: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let api_uri = env::var("API_URI").unwrap_or_else(|_| DEFAULT_API_URI.to_string());
        let valid_tlds = env::var("VALID_TLDS").unwrap_or_else(|_| TldSet::DEFAULT.join(","));
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            api_uri,
            valid_tlds,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_uri` is not an `http://` or `https://` URI
    /// - `valid_tlds` contains no usable entry
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.api_uri.starts_with("http://") && !self.api_uri.starts_with("https://") {
            anyhow::bail!(
                "API_URI must start with 'http://' or 'https://', got '{}'",
                self.api_uri
            );
        }

        if self.tlds().is_empty() {
            anyhow::bail!("VALID_TLDS must list at least one TLD");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// The TLD set shared by every flow.
    pub fn tlds(&self) -> TldSet {
        TldSet::from_csv(&self.valid_tlds)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  API URI: {}", self.api_uri);
        tracing::info!(
            "  Valid TLDs: {}",
            self.tlds().iter().collect::<Vec<_>>().join(", ")
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads configuration from environment variables, applies an optional
/// backend URI override from the command line, then validates it.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env(api_uri: Option<String>) -> Result<Config> {
    let mut config = Config::from_env();
    if let Some(api_uri) = api_uri {
        config.api_uri = api_uri;
    }
    config.validate()?;
    Ok(config)
}
