//! Gateway trait for the `/domains` endpoints.

use crate::domain::entities::{DomainRecord, NewDomain};
use crate::domain::gateways::Reply;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Access to domain records on the backend.
///
/// Status codes are returned, not interpreted: a `409` is a successful call
/// as far as this trait is concerned.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ApiClient`] - HTTP implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainGateway: Send + Sync {
    /// `GET /domains/isAvailable?domain=`.
    ///
    /// `204` means available. `200` carries the current registration
    /// (`owner`, `expireDate`).
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the request cannot be sent or a `200` body
    /// does not decode.
    async fn check_availability(&self, domain: &str) -> Result<Reply<DomainRecord>, AppError>;

    /// `GET /domains/{name}`. `200` carries the record, `404` means unknown.
    async fn get_domain(&self, domain: &str) -> Result<Reply<DomainRecord>, AppError>;

    /// `POST /domains/`. `201` on creation, `409` when another registration
    /// for the same name is in flight.
    async fn create_domain(&self, new_domain: NewDomain) -> Result<Reply<()>, AppError>;

    /// `GET /domains/renewDomain/{name}?date=` with the new expiry date.
    async fn renew_domain(&self, domain: &str, expire_date: NaiveDate)
    -> Result<Reply<()>, AppError>;

    /// `GET /domains/userDomains`: the session user's domains, in record order.
    async fn list_user_domains(&self) -> Result<Reply<Vec<DomainRecord>>, AppError>;
}
