//! Gateway trait definitions for the domain layer.
//!
//! Each trait abstracts one group of backend endpoints. They play the part
//! repositories play in a server: flows depend on the traits, the HTTP client
//! in `crate::infrastructure::http` implements them, and `mockall` generates
//! mocks for unit tests.
//!
//! # Available Gateways
//!
//! - [`DomainGateway`] - Availability, lookup, creation, renewal, listing
//! - [`UserGateway`] - Session user, owner lookup, sign-up, login
//! - [`OrderGateway`] - Order listing and creation

pub mod domain_gateway;
pub mod order_gateway;
pub mod reply;
pub mod user_gateway;

pub use domain_gateway::DomainGateway;
pub use order_gateway::OrderGateway;
pub use reply::Reply;
pub use user_gateway::UserGateway;

#[cfg(test)]
pub use domain_gateway::MockDomainGateway;
#[cfg(test)]
pub use order_gateway::MockOrderGateway;
#[cfg(test)]
pub use user_gateway::MockUserGateway;
