//! Status-bearing responses returned by the gateways.

use reqwest::StatusCode;

/// A backend answer: its status code and, when the status carries one, the decoded body.
///
/// Gateways decode a body only for the status the endpoint documents as
/// carrying one (usually `200 OK`). Every other status comes back with
/// `body: None` and is left to the caller to interpret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply<T> {
    pub status: StatusCode,
    pub body: Option<T>,
}

impl<T> Reply<T> {
    pub fn empty(status: StatusCode) -> Self {
        Self { status, body: None }
    }

    pub fn with_body(status: StatusCode, body: T) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    pub fn ok(body: T) -> Self {
        Self::with_body(StatusCode::OK, body)
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The body when the status is exactly `expected`.
    pub fn body_if(self, expected: StatusCode) -> Option<T> {
        if self.status == expected {
            self.body
        } else {
            None
        }
    }
}
