//! Gateway trait for the `/users` endpoints.

use crate::domain::entities::{NewUser, User};
use crate::domain::gateways::Reply;
use crate::error::AppError;
use async_trait::async_trait;

/// Account operations. Sessions are cookie based; the implementation keeps
/// whatever cookie the backend sets on login or registration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// `GET /users/user`: the user owning the current session.
    async fn current_user(&self) -> Result<Reply<User>, AppError>;

    /// `GET /users?email=`: name and surname of any registered user.
    async fn find_by_email(&self, email: &str) -> Result<Reply<User>, AppError>;

    /// `POST /users/register/`.
    async fn register(&self, new_user: NewUser) -> Result<Reply<()>, AppError>;

    /// `GET /users/login?email=`. No password is sent; the backend only
    /// checks that the email belongs to an account.
    async fn login(&self, email: &str) -> Result<Reply<()>, AppError>;
}
