use serde_json::{Value, json};
use thiserror::Error;

/// Failures that stop a backend call before a status code can be interpreted.
///
/// HTTP status codes are never errors here: gateways hand them back inside a
/// [`crate::domain::gateways::Reply`] and the flows map them to messages.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("{message}")]
    Decode { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn decode(message: impl Into<String>, details: Value) -> Self {
        Self::Decode {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Short machine-readable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Transport(_) => "transport_error",
            AppError::Endpoint(_) => "endpoint_error",
            AppError::Decode { .. } => "decode_error",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn details(&self) -> Value {
        match self {
            AppError::Transport(e) => json!({ "url": e.url().map(|u| u.to_string()) }),
            AppError::Endpoint(_) => json!({}),
            AppError::Decode { details, .. } | AppError::Internal { details, .. } => {
                details.clone()
            }
        }
    }
}

pub fn map_json_error(e: serde_json::Error, endpoint: &str) -> AppError {
    AppError::decode(
        "Malformed response body",
        json!({ "endpoint": endpoint, "line": e.line(), "column": e.column() }),
    )
}
